//! `ctags-tree`: print the heading outline of a markdown file.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, ValueEnum};

use tagnav::cli::{self, Usage};
use tagnav::listing::SectionList;
use tagnav::{Error, TagIndex, filter, logging, tree};

/// Printed after argument errors.
const USAGE: Usage = Usage {
    example: "ctags-tree tags docs/planning/refactoring.md",
    synopsis: "ctags-tree <tags_file> <target_file>",
};

#[derive(Parser)]
#[command(
    name = "ctags-tree",
    version,
    about = "Render the heading tree of a markdown file from a ctags index"
)]
struct Cli {
    /// Output format
    #[arg(long, value_enum, default_value_t = Format::Ascii)]
    format: Format,
    /// Print a flat list of sections with their line ranges instead of a tree
    #[arg(long)]
    list: bool,
    /// Deepest heading level to show (1-4, 0 = all)
    #[arg(long, default_value_t = 0, value_parser = clap::value_parser!(u8).range(0..=4))]
    max_depth: u8,
    /// Only show headings matching this regex (case-insensitive); the tree
    /// also keeps their parents
    #[arg(long)]
    pattern: Option<String>,
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

/// How the outline is written to stdout.
#[derive(Clone, Copy, ValueEnum)]
enum Format {
    /// Indented text tree with a file-name header, or one row per section
    /// with `--list`.
    Ascii,
    /// Nested `TreeNode` JSON rooted at the file, or a `SectionList` with
    /// `--list`.
    Json,
}

fn main() -> ExitCode {
    let cli = match cli::parse_or_usage::<Cli>(&USAGE) {
        Ok(cli) => cli,
        Err(code) => return code,
    };
    logging::init(cli.verbose);
    return cli::finish(run(&cli));
}

/// Read the index, apply filters, and print the outline or section list.
///
/// # Errors
///
/// Returns errors from reading the index, an invalid pattern, `NoEntries`
/// when nothing is left to show, or JSON serialization errors.
fn run(cli: &Cli) -> Result<(), Error> {
    let index = TagIndex::read(&cli.tags_file, &cli.target_file)?;
    let pattern = cli
        .pattern
        .as_deref()
        .filter(|p| return !p.is_empty())
        .map(filter::compile_pattern)
        .transpose()?;

    let no_entries = || {
        return Error::NoEntries {
            file: cli.target_file.clone(),
        };
    };

    if cli.list {
        let mut records = filter::by_max_depth(index.records(), cli.max_depth);
        if let Some(regex) = &pattern {
            records = filter::by_pattern(&records, regex);
        }
        tracing::debug!(total = index.len(), shown = records.len(), "filtered section list");

        let list = SectionList::from_records(&records).ok_or_else(no_entries)?;
        match cli.format {
            Format::Ascii => println!("{}", list.render_text()),
            Format::Json => println!("{}", serde_json::to_string_pretty(&list)?),
        }
        return Ok(());
    }

    // Pattern before depth, so a deep match still keeps its shallow ancestors.
    let mut records = index.records().to_vec();
    if let Some(regex) = &pattern {
        records = filter::by_pattern_with_parents(&records, regex);
    }
    records = filter::by_max_depth(&records, cli.max_depth);
    tracing::debug!(total = index.len(), shown = records.len(), "filtered outline");

    match cli.format {
        Format::Ascii => {
            let rendered = tree::render_ascii(&records, index.base_name()).ok_or_else(no_entries)?;
            println!("{rendered}");
        },
        Format::Json => {
            let root = tree::build_json(&records, index.base_name()).ok_or_else(no_entries)?;
            println!("{}", serde_json::to_string_pretty(&root)?);
        },
    }

    return Ok(());
}
