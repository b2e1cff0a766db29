//! Argument handling and exit-code mapping shared by both binaries.

use std::process::ExitCode;

use clap::Parser;
use clap::error::ErrorKind;

use crate::error::Error;

/// Usage text printed after any argument error.
pub struct Usage {
    /// Invocation example with realistic arguments.
    pub example: &'static str,
    /// Synopsis line, e.g. `ctags-tree <tags_file> <target_file>`.
    pub synopsis: &'static str,
}

/// Map a command result to the process exit code.
///
/// Not-found outcomes go to stdout as plain messages; everything else is an
/// `error:` line on stderr. Both exit 1.
pub fn finish(result: Result<(), Error>) -> ExitCode {
    return match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) if e.is_not_found() => {
            println!("{e}");
            ExitCode::FAILURE
        },
        Err(e) => {
            tracing::debug!(error = ?e, "command failed");
            eprintln!("error: {e}");
            ExitCode::FAILURE
        },
    };
}

/// Parse the command line. On `--help`/`--version` the text is printed and
/// `Err(SUCCESS)` returned; any other failure prints clap's message plus the
/// usage block and returns `Err(FAILURE)`.
///
/// # Errors
///
/// Returns the exit code the binary should terminate with when parsing
/// did not produce arguments.
pub fn parse_or_usage<T: Parser>(usage: &Usage) -> Result<T, ExitCode> {
    let err = match T::try_parse() {
        Ok(args) => return Ok(args),
        Err(err) => err,
    };

    if matches!(err.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) {
        let _ = err.print();
        return Err(ExitCode::SUCCESS);
    }

    let _ = err.print();
    eprintln!();
    eprintln!("Usage: {}", usage.synopsis);
    eprintln!("Example: {}", usage.example);
    return Err(ExitCode::FAILURE);
}
