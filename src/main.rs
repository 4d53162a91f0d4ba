//! Main entry point for the tarwalk CLI application.
//!
//! Parses the command line into a [`Config`](tarwalk::Config), opens the
//! archive and hands both to the walker. Every failure ends up here, where it
//! is printed once and mapped to exit status 2.

use std::io;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use clap::error::{ContextKind, ContextValue, ErrorKind};
use log::debug;

use tarwalk::{ArchiveWalker, Cli, EXIT_TAR_FAILURE, LocalFileReader, PROGRAM_NAME, TarError};

fn main() -> ExitCode {
    env_logger::init();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => return usage_error(err),
    };

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            report(&err);
            ExitCode::from(EXIT_TAR_FAILURE)
        }
    }
}

/// Open the archive and walk it.
///
/// The walker owns the archive, the output files and the locked standard
/// streams, so all of them are closed by the time this returns.
fn run(cli: Cli) -> Result<()> {
    let config = cli.into_config()?;
    debug!("config: {config:?}");

    let path = config
        .archive
        .as_deref()
        .ok_or(TarError::NoArchiveSource)?;
    let reader = LocalFileReader::new(path)
        .with_context(|| format!("Archive could not be opened: {}", path.display()))?;

    let stdout = io::stdout();
    let stderr = io::stderr();
    let summary = ArchiveWalker::new(reader, &config, stdout.lock(), stderr.lock()).run()?;

    debug!(
        "{} member(s), {} selected, {} byte(s) extracted",
        summary.members, summary.selected, summary.extracted_bytes
    );
    Ok(())
}

/// Print a fatal error.
///
/// Errors the walker already warned about only get their closing line.
fn report(err: &anyhow::Error) {
    match err.downcast_ref::<TarError>().and_then(TarError::epilogue) {
        Some(epilogue) => eprintln!("{PROGRAM_NAME}: {epilogue}"),
        None => eprintln!("{PROGRAM_NAME}: {err:#}"),
    }
}

/// Handle a command line clap could not parse.
///
/// Unknown flags, `-h` and `-V` included, get tar's wording. Other usage
/// errors are left to clap, which exits with 2.
fn usage_error(err: clap::Error) -> ExitCode {
    if err.kind() != ErrorKind::UnknownArgument {
        err.exit();
    }

    let arg = match err.get(ContextKind::InvalidArg) {
        Some(ContextValue::String(arg)) => arg.as_str(),
        _ => "",
    };
    eprintln!("{PROGRAM_NAME}: Unknown option: {arg}");
    ExitCode::from(EXIT_TAR_FAILURE)
}
