//! Outline filters applied before tree rendering.

use regex::{Regex, RegexBuilder};

use crate::error::Error;
use crate::types::TagRecord;

/// Keep headings at `max_depth` or shallower. A depth of 0 keeps everything.
pub fn by_max_depth(records: &[TagRecord], max_depth: u8) -> Vec<TagRecord> {
    if max_depth == 0 {
        return records.to_vec();
    }
    return records
        .iter()
        .filter(|r| return r.level() <= max_depth)
        .cloned()
        .collect();
}

/// Keep only headings whose name matches `pattern`, without their parents.
/// Used by the flat section list.
pub fn by_pattern(records: &[TagRecord], pattern: &Regex) -> Vec<TagRecord> {
    return records
        .iter()
        .filter(|r| return pattern.is_match(&r.name))
        .cloned()
        .collect();
}

/// Keep headings whose name matches `pattern`, together with every heading
/// that is an open ancestor of a match, so the filtered outline still nests
/// the same way. Order is preserved.
pub fn by_pattern_with_parents(records: &[TagRecord], pattern: &Regex) -> Vec<TagRecord> {
    let mut keep = vec![false; records.len()];
    // (level, index) of the currently open ancestors.
    let mut open: Vec<(u8, usize)> = Vec::new();

    for (index, record) in records.iter().enumerate() {
        let level = record.level();
        while open.last().is_some_and(|&(top, _)| return top >= level) {
            open.pop();
        }

        if pattern.is_match(&record.name) {
            for slot in open
                .iter()
                .map(|&(_, ancestor)| return ancestor)
                .chain(std::iter::once(index))
            {
                if let Some(flag) = keep.get_mut(slot) {
                    *flag = true;
                }
            }
        }

        open.push((level, index));
    }

    return records
        .iter()
        .zip(keep)
        .filter_map(|(record, kept)| return kept.then(|| return record.clone()))
        .collect();
}

/// Compile a user-supplied filter pattern. Matching ignores case, like
/// the section query.
///
/// # Errors
///
/// Returns `Error::InvalidPattern` if the pattern is not a valid regex.
pub fn compile_pattern(pattern: &str) -> Result<Regex, Error> {
    return RegexBuilder::new(pattern).case_insensitive(true).build().map_err(|source| {
        return Error::InvalidPattern {
            pattern: pattern.to_string(),
            source,
        };
    });
}
