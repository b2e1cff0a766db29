//! `ctags-section`: print the line range a markdown section owns.

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{Parser, ValueEnum};

use tagnav::cli::{self, Usage};
use tagnav::report::{self, SectionReport};
use tagnav::{Error, TagIndex, logging, resolve_bounds};

/// Printed after argument errors.
const USAGE: Usage = Usage {
    example: "ctags-section tags docs/planning/refactoring.md \"Task 4\"",
    synopsis: "ctags-section <tags_file> <target_file> <section_query>",
};

#[derive(Parser)]
#[command(
    name = "ctags-section",
    version,
    about = "Find the line range of a markdown section in a ctags index"
)]
struct Cli {
    /// Output format
    #[arg(long, value_enum, default_value_t = Format::Text)]
    format: Format,
    /// Also print the section's lines, read from the target file
    #[arg(long)]
    print: bool,
    /// Case-insensitive substring of the heading to find
    #[arg(index = 3)]
    section_query: String,
    /// Path to the ctags index
    #[arg(index = 1)]
    tags_file: PathBuf,
    /// File name exactly as it appears in the index
    #[arg(index = 2)]
    target_file: String,
    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

/// How the resolved section is written to stdout.
#[derive(Clone, Copy, ValueEnum)]
enum Format {
    /// Pretty-printed `SectionReport`.
    Json,
    /// Name, range, and an offset/limit read hint.
    Text,
}

fn main() -> ExitCode {
    let cli = match cli::parse_or_usage::<Cli>(&USAGE) {
        Ok(cli) => cli,
        Err(code) => return code,
    };
    logging::init(cli.verbose);
    return cli::finish(run(&cli));
}

/// Resolve the section and print it in the requested format.
///
/// # Errors
///
/// Returns errors from reading the index or the target file, a
/// `SectionNotFound` when nothing matches, or JSON serialization errors.
fn run(cli: &Cli) -> Result<(), Error> {
    let index = TagIndex::read(&cli.tags_file, &cli.target_file)?;
    let bounds = resolve_bounds(&index.positioned(), &cli.section_query)?;

    let excerpt = if cli.print {
        Some(report::read_excerpt(Path::new(&cli.target_file), &bounds)?)
    } else {
        None
    };

    match cli.format {
        Format::Text => {
            println!("{}", report::render_text(&bounds, &cli.target_file));
            if let Some(text) = excerpt {
                println!();
                print!("{text}");
            }
        },
        Format::Json => {
            let report = SectionReport {
                content: excerpt,
                ..SectionReport::from(&bounds)
            };
            println!("{}", serde_json::to_string_pretty(&report)?);
        },
    }

    return Ok(());
}
