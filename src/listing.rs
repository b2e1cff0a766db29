//! Flat section list: every heading with its line range, for exploring a
//! document's structure before reading any of it.

use serde::Serialize;

use crate::types::TagRecord;

/// One row of the section list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SectionInfo {
    /// Last line owned, from the unfiltered index; `None` means end of file.
    pub end_line: Option<u32>,
    /// Level tag, e.g. `H2`.
    pub level: String,
    /// Heading text.
    pub name: String,
    /// Heading line; `None` when the index omitted it.
    pub start_line: Option<u32>,
}

/// The section list with its length, as printed by `ctags-tree --list`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SectionList {
    /// Number of sections listed.
    pub count: usize,
    /// Sections in line order.
    pub sections: Vec<SectionInfo>,
}

impl SectionList {
    /// Build the list from already filtered records. Returns `None` when
    /// nothing is left so callers can report it.
    pub fn from_records(records: &[TagRecord]) -> Option<Self> {
        if records.is_empty() {
            return None;
        }
        let sections: Vec<SectionInfo> = records
            .iter()
            .map(|r| {
                return SectionInfo {
                    end_line: r.end,
                    level: r.kind.level_tag(),
                    name: r.name.clone(),
                    start_line: r.line,
                };
            })
            .collect();
        return Some(Self {
            count: sections.len(),
            sections,
        });
    }

    /// One `H<level> <start>-<end|EOF> <name>` row per section. Unpositioned
    /// headings show `?` for their range.
    pub fn render_text(&self) -> String {
        return self
            .sections
            .iter()
            .map(|s| {
                let range = match (s.start_line, s.end_line) {
                    (Some(start), Some(end)) => format!("{start}-{end}"),
                    (Some(start), None) => format!("{start}-EOF"),
                    (None, _) => "?".to_string(),
                };
                return format!("{} {range} {}", s.level, s.name);
            })
            .collect::<Vec<_>>()
            .join("\n");
    }
}

#[cfg(test)]
mod tests {
    use super::SectionList;
    use crate::reader::TagIndex;
    use crate::{filter, types::HeadingKind};

    const TAGS: &str = "\
Ch\td.md\t/^# Ch$/;\"\tchapter\tline:1
Task 1\td.md\t/^## Task 1$/;\"\tsection\tline:3
Task 2\td.md\t/^## Task 2$/;\"\tsection\tline:10
Steps\td.md\t/^#### Steps$/;\"\tsubsubsection\tline:12
Loose\td.md\t/^## Loose$/;\"\tsection
";

    #[test]
    fn lists_every_heading_with_range() {
        let index = TagIndex::parse(TAGS, "d.md");
        let list = SectionList::from_records(index.records()).unwrap();
        assert_eq!(list.count, 5);
        assert_eq!(
            list.render_text(),
            "H2 ? Loose\nH1 1-EOF Ch\nH2 3-9 Task 1\nH2 10-EOF Task 2\nH4 12-EOF Steps"
        );
        assert_eq!(
            list.sections.first().map(|s| s.level.as_str()),
            Some(HeadingKind::Section.level_tag().as_str())
        );
    }

    #[test]
    fn filtered_list_keeps_unfiltered_ends() {
        let index = TagIndex::parse(TAGS, "d.md");
        let pattern = filter::compile_pattern("task 1").unwrap();
        let kept = filter::by_pattern(index.records(), &pattern);
        let list = SectionList::from_records(&kept).unwrap();
        assert_eq!(list.count, 1);
        let task = list.sections.first().unwrap();
        assert_eq!((task.start_line, task.end_line), (Some(3), Some(9)));
    }

    #[test]
    fn empty_list_is_none() {
        assert_eq!(SectionList::from_records(&[]), None);
    }

    #[test]
    fn json_has_count_and_sections() {
        let index = TagIndex::parse(TAGS, "d.md");
        let list = SectionList::from_records(&filter::by_max_depth(index.records(), 1)).unwrap();
        let value = serde_json::to_value(&list).unwrap();
        assert_eq!(value["count"], 1);
        assert_eq!(value["sections"][0]["name"], "Ch");
        assert_eq!(value["sections"][0]["level"], "H1");
        assert!(value["sections"][0]["end_line"].is_null());
    }
}
