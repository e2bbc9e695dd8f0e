use anyhow::{Context, Result};
use clap::{CommandFactory, Parser};
use clap_complete::{generate, Shell};
use gotestdox::{cli, Config};
use std::io::{self, Write};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "gotestdox")]
#[command(version, about = "Turn Go test names into readable sentences", long_about = None)]
struct Cli {
    /// Test names to prettify (read from stdin, one per line, when omitted)
    #[arg(value_name = "NAMES")]
    names: Vec<String>,

    /// Trace every scanner decision (same as setting GOTESTDOX_DEBUG)
    #[arg(short, long)]
    debug: bool,

    /// Write trace output to this file instead of stderr
    #[arg(long, value_name = "PATH")]
    trace_file: Option<PathBuf>,

    /// Generate shell completion script
    #[arg(long, value_name = "SHELL")]
    completion: Option<Shell>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Handle shell completion generation
    if let Some(shell) = cli.completion {
        let mut cmd = Cli::command();
        generate(shell, &mut cmd, "gotestdox", &mut io::stdout());
        return Ok(());
    }

    let config = Config::load(cli.debug, cli.trace_file)?;

    let names = if cli.names.is_empty() {
        cli::input::read_names(io::stdin().lock())?
    } else {
        cli.names
    };

    let mut trace = cli::trace_sink(&config)?;
    let mut stdout = io::stdout().lock();
    cli::output::write_sentences(&mut stdout, &names, &mut *trace)?;
    trace.flush().context("Failed to write trace output")?;

    Ok(())
}
