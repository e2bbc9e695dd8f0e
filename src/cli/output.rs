use crate::prettify_with_trace;
use anyhow::{Context, Result};
use std::io::Write;

/// Print the sentence for each test name on its own line.
pub fn write_sentences<W: Write>(
    out: &mut W,
    names: &[impl AsRef<str>],
    trace: &mut dyn Write,
) -> Result<()> {
    for name in names {
        let sentence = prettify_with_trace(name.as_ref(), trace);
        writeln!(out, "{}", sentence).context("Failed to write output")?;
    }
    out.flush().context("Failed to write output")?;
    Ok(())
}
