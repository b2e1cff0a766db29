//! Output for a resolved section: the text block, the JSON report, and the
//! raw excerpt read from the document by line number.

use std::fmt::Write as _;
use std::path::Path;

use serde::Serialize;

use crate::bounds::SectionBounds;
use crate::error::Error;

/// Machine-readable form of a resolved section. `null` ends mean end of file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SectionReport {
    /// Section text, present only when the excerpt was requested.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    /// Last line, inclusive; `None` when the section runs to end of file.
    pub end_line: Option<u32>,
    /// Level tag of the heading, e.g. `H2`.
    pub heading_level: String,
    /// Heading text of the matched entry.
    pub section_name: String,
    /// First line of the section.
    pub start_line: u32,
    /// Line count; `None` when the section runs to end of file.
    pub total_lines: Option<u32>,
}

impl From<&SectionBounds> for SectionReport {
    fn from(bounds: &SectionBounds) -> Self {
        return Self {
            content: None,
            end_line: bounds.end,
            heading_level: bounds.kind.level_tag(),
            section_name: bounds.name.clone(),
            start_line: bounds.start,
            total_lines: bounds.line_count(),
        };
    }
}

/// Read the lines a section owns from the document on disk.
/// An open-ended section reads through end of file. The result keeps the
/// document's line breaks and ends with a newline when non-empty.
///
/// # Errors
///
/// Returns `Error::TargetNotFound` if the document doesn't exist,
/// or `Error::Io` for other read failures.
pub fn read_excerpt(path: &Path, bounds: &SectionBounds) -> Result<String, Error> {
    let content = match std::fs::read_to_string(path) {
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            return Err(Error::TargetNotFound { path: path.to_path_buf() });
        },
        Err(e) => return Err(Error::Io(e)),
        Ok(c) => c,
    };

    let skip = usize::try_from(bounds.offset()).unwrap_or(usize::MAX);
    let take = bounds
        .line_count()
        .map_or(usize::MAX, |count| return usize::try_from(count).unwrap_or(usize::MAX));

    let mut excerpt = String::new();
    for line in content.lines().skip(skip).take(take) {
        excerpt.push_str(line);
        excerpt.push('\n');
    }
    return Ok(excerpt);
}

/// The human-readable block printed by `ctags-section`, including the
/// offset/limit hint for bounded-excerpt readers.
pub fn render_text(bounds: &SectionBounds, target: &str) -> String {
    let end = bounds
        .end
        .map_or_else(|| return "EOF".to_string(), |end| return end.to_string());
    let limit = bounds
        .line_count()
        .map_or_else(|| return "None".to_string(), |count| return count.to_string());

    let mut out = String::new();
    // Writing to a String cannot fail.
    let _ = writeln!(out, "Section: {}", bounds.name);
    let _ = writeln!(out, "Lines: {}-{end}", bounds.start);
    let _ = writeln!(out);
    let _ = writeln!(out, "To read this section:");
    let _ = write!(
        out,
        "Read(file_path='{target}', offset={}, limit={limit})",
        bounds.offset()
    );
    return out;
}
