//! Tags index parsing: pseudo-tag skipping, per-file filtering, line ordering.

use std::path::Path;

use crate::bounds;
use crate::error::Error;
use crate::types::{HeadingKind, TagRecord};

/// Prefix of ctags pseudo-tag lines (`!_TAG_FILE_FORMAT` and friends).
const PSEUDO_TAG_PREFIX: &str = "!_TAG";

/// Prefix of the vi-compatibility marker that precedes extension fields.
const EXTENSION_MARKER: &str = ";\"";

/// Prefix of the line-number extension field.
const LINE_FIELD: &str = "line:";

/// Scope field prefixes the markdown parser writes for a heading's parents.
const SCOPE_FIELDS: [&str; 3] = ["chapter:", "section:", "subsection:"];

/// Minimum number of tab-separated fields for a usable entry.
const MIN_FIELDS: usize = 4;

/// Every heading entry for one target file, sorted by line.
/// Constructed only via `TagIndex::parse()` or `TagIndex::read()`, both of
/// which enforce the ordering.
#[derive(Debug, Clone)]
pub struct TagIndex {
    /// Records in ascending line order; entries without a line come first.
    records: Vec<TagRecord>,
    /// The file name the records were filtered by.
    target: String,
}

/// Why a data line was dropped before it could become a record.
#[derive(Debug, PartialEq, Eq)]
enum Skip {
    /// A `line:` field did not hold an unsigned integer.
    BadLineNumber,
    /// No recognised heading kind was present.
    NoKind,
    /// The second field names some other file.
    OtherFile,
    /// Fewer than four tab-separated fields.
    TooFewFields,
}

impl TagIndex {
    /// Last `/`-separated segment of the target, used as the tree header.
    pub fn base_name(&self) -> &str {
        return self.target.rsplit('/').next().unwrap_or(&self.target);
    }

    /// True when the target has no heading entries at all.
    pub const fn is_empty(&self) -> bool {
        return self.records.is_empty();
    }

    /// Number of heading entries for the target.
    pub const fn len(&self) -> usize {
        return self.records.len();
    }

    /// Parse tags file content, keeping heading entries for `target` only.
    /// Malformed lines are skipped; an unknown target yields an empty index.
    pub fn parse(content: &str, target: &str) -> Self {
        let mut records = Vec::new();
        let mut scanned = 0usize;
        let mut malformed = 0usize;

        for raw in content.lines() {
            let line = raw.strip_suffix('\r').unwrap_or(raw);
            if line.starts_with(PSEUDO_TAG_PREFIX) {
                continue;
            }
            scanned = scanned.saturating_add(1);

            match parse_tag_line(line, target) {
                Ok(record) => records.push(record),
                Err(Skip::OtherFile | Skip::NoKind) => {},
                Err(reason) => {
                    malformed = malformed.saturating_add(1);
                    tracing::trace!(?reason, line, "skipping malformed tag line");
                },
            }
        }

        // Stable: equal lines keep file order.
        records.sort_by_key(|r| return r.line.unwrap_or(0));
        bounds::assign_section_ends(&mut records);

        tracing::debug!(
            target_file = target,
            scanned,
            malformed,
            kept = records.len(),
            "parsed tags index"
        );

        return Self {
            records,
            target: target.to_string(),
        };
    }

    /// Records that carry a line number, in ascending line order.
    /// Section resolution works on these only.
    pub fn positioned(&self) -> Vec<TagRecord> {
        return self
            .records
            .iter()
            .filter(|r| return r.line.is_some())
            .cloned()
            .collect();
    }

    /// Read and parse a tags file from disk.
    ///
    /// # Errors
    ///
    /// Returns `Error::TagsFileNotFound` if the file doesn't exist,
    /// or `Error::Io` for other read failures (including invalid UTF-8).
    pub fn read(path: &Path, target: &str) -> Result<Self, Error> {
        let content = match std::fs::read_to_string(path) {
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Err(Error::TagsFileNotFound { path: path.to_path_buf() });
            },
            Err(e) => return Err(Error::Io(e)),
            Ok(c) => c,
        };
        return Ok(Self::parse(&content, target));
    }

    /// All heading records in ascending line order.
    pub fn records(&self) -> &[TagRecord] {
        return &self.records;
    }

    /// The target file name exactly as requested.
    pub fn target(&self) -> &str {
        return &self.target;
    }
}

/// Turn one tab-separated data line into a record for `target`.
///
/// # Errors
///
/// Returns the `Skip` reason when the line does not yield a record.
fn parse_tag_line(line: &str, target: &str) -> Result<TagRecord, Skip> {
    let fields: Vec<&str> = line.split('\t').collect();
    if fields.len() < MIN_FIELDS {
        return Err(Skip::TooFewFields);
    }
    let [name, file, pattern, extras @ ..] = fields.as_slice() else {
        return Err(Skip::TooFewFields);
    };
    if *file != target {
        return Err(Skip::OtherFile);
    }

    let mut kind = None;
    let mut line_number = None;
    let mut scope = None;

    for field in extras {
        if field.starts_with(EXTENSION_MARKER) {
            continue;
        }
        if let Ok(parsed) = field.parse::<HeadingKind>() {
            kind = Some(parsed);
        } else if let Some(digits) = field.strip_prefix(LINE_FIELD) {
            let number: u32 = digits.parse().map_err(|_err| return Skip::BadLineNumber)?;
            // line:0 carries no position.
            line_number = (number > 0).then_some(number);
        } else if SCOPE_FIELDS.iter().any(|prefix| return field.starts_with(prefix)) {
            scope = field.split_once(':').map(|(_, parent)| return parent.to_string());
        }
    }

    let Some(kind) = kind else {
        return Err(Skip::NoKind);
    };

    return Ok(TagRecord {
        end: None,
        file: (*file).to_string(),
        kind,
        line: line_number,
        name: (*name).to_string(),
        pattern: (*pattern).to_string(),
        scope,
    });
}
