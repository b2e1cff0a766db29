//! Section bounds: the line range a heading owns, found by scanning forward
//! for the next heading at the same or a coarser level.

use crate::error::Error;
use crate::types::{HeadingKind, TagRecord};

/// A resolved section. `end` is `None` when the section runs to end of file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionBounds {
    /// Last line of the section, inclusive.
    pub end: Option<u32>,
    /// Kind of the matched heading.
    pub kind: HeadingKind,
    /// Heading text of the matched entry.
    pub name: String,
    /// One-based first line of the section (the heading itself).
    pub start: u32,
}

impl SectionBounds {
    /// Heading level of the matched entry.
    pub const fn level(&self) -> u8 {
        return self.kind.level();
    }

    /// Number of lines in a bounded section; `None` when open-ended.
    /// A heading closed on its own line (a tie) owns zero lines.
    pub fn line_count(&self) -> Option<u32> {
        return self.end.map(|end| {
            return end
                .checked_sub(self.start)
                .map_or(0, |span| return span.saturating_add(1));
        });
    }

    /// Zero-based offset of the first line, for offset/limit style readers.
    pub const fn offset(&self) -> u32 {
        return self.start.saturating_sub(1);
    }
}

/// Record on every positioned entry the last line it owns, scanning the
/// full line-sorted list. Filters applied afterwards keep these values.
pub fn assign_section_ends(records: &mut [TagRecord]) {
    let ends: Vec<Option<u32>> = (0..records.len())
        .map(|index| {
            let positioned = records.get(index).is_some_and(|r| return r.line.is_some());
            return if positioned { section_end(records, index) } else { None };
        })
        .collect();
    for (record, end) in records.iter_mut().zip(ends) {
        record.end = end;
    }
}

/// Find the first entry whose name contains `query` (case-insensitive) and
/// compute the range it owns.
///
/// `records` must be line-sorted. Entries without a line can neither match
/// nor close a section.
///
/// # Errors
///
/// Returns `Error::SectionNotFound` if no entry name contains the query.
pub fn resolve_bounds(records: &[TagRecord], query: &str) -> Result<SectionBounds, Error> {
    let lowered = query.to_lowercase();

    let found = records
        .iter()
        .enumerate()
        .find_map(|(index, record)| {
            let start = record.line?;
            return record.name_contains(&lowered).then_some((index, record, start));
        });

    let Some((index, record, start)) = found else {
        return Err(Error::SectionNotFound { query: query.to_string() });
    };

    let end = section_end(records, index);
    tracing::debug!(name = %record.name, start, ?end, "resolved section bounds");

    return Ok(SectionBounds {
        end,
        kind: record.kind,
        name: record.name.clone(),
        start,
    });
}

/// Last line owned by the entry at `index`: one before the next positioned
/// entry whose level is equal or coarser. Deeper entries belong to the
/// section and are passed over. `None` when nothing closes it, or when
/// `index` is out of range.
pub fn section_end(records: &[TagRecord], index: usize) -> Option<u32> {
    let level = records.get(index)?.level();
    return records
        .iter()
        .skip(index.saturating_add(1))
        .filter(|r| return r.level() <= level)
        .find_map(|r| return r.line)
        .map(|line| return line.saturating_sub(1));
}
