pub mod input;
pub mod output;

use crate::Config;
use anyhow::{Context, Result};
use std::fs::File;
use std::io::{self, BufWriter, Write};

/// Open the stream trace output goes to for this run. When tracing is off
/// everything written to it is discarded.
pub fn trace_sink(config: &Config) -> Result<Box<dyn Write>> {
    if !config.debug {
        return Ok(Box::new(io::sink()));
    }

    match &config.trace_file {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("Failed to create trace file: {}", path.display()))?;
            Ok(Box::new(BufWriter::new(file)))
        }
        None => Ok(Box::new(io::stderr())),
    }
}
