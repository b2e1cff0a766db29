//! Outline trees rebuilt from a flat, line-ordered list of leveled headings.
//!
//! Nesting comes from order and level alone: each heading closes every open
//! ancestor at its own level or deeper, and whatever stays open is its parent
//! chain. Nothing is validated, so a `subsection` with no enclosing `section`
//! simply renders shallow.

use serde::Serialize;

use crate::types::TagRecord;

/// Glyph for a heading with no open ancestors.
const ROOT_GLYPH: char = '└';

/// Glyph for any nested heading.
const BRANCH_GLYPH: char = '│';

/// Indentation per open ancestor.
const INDENT: &str = "  ";

/// One node of the JSON outline. The root stands for the file itself.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TreeNode {
    /// Nested headings, in line order.
    pub children: Vec<TreeNode>,
    /// Last line owned by this heading, taken from the record so it does
    /// not depend on which headings were filtered out. `None` for
    /// open-ended sections, unpositioned headings, and the root.
    pub end_line: Option<u32>,
    /// Level tag: `H0` for the root, `H1`..`H4` for headings.
    pub level: String,
    /// Heading text, or the file's base name for the root.
    pub name: String,
    /// Heading line; `None` for unpositioned headings and the root.
    pub start_line: Option<u32>,
}

/// Open-ancestor stack shared by both renderers. Holds the levels of the
/// headings that can still receive children.
#[derive(Debug, Default)]
struct AncestorStack {
    /// Levels of the open ancestors, outermost first.
    levels: Vec<u8>,
}

impl AncestorStack {
    /// Close every ancestor at `level` or deeper, then report how many
    /// remain open. That count is the depth of the arriving heading.
    fn close_for(&mut self, level: u8) -> usize {
        while self.levels.last().is_some_and(|&top| return top >= level) {
            self.levels.pop();
        }
        return self.levels.len();
    }

    /// Open `level` as a potential parent of what follows.
    fn open(&mut self, level: u8) {
        self.levels.push(level);
    }
}

/// Build the nested JSON outline. Returns `None` for an empty input.
pub fn build_json(records: &[TagRecord], base_name: &str) -> Option<TreeNode> {
    if records.is_empty() {
        return None;
    }

    // `chain` mirrors the ancestor stack: chain[0] is the root, chain[d] the
    // open heading at depth d. Closed nodes are folded into their parent.
    let mut chain: Vec<TreeNode> = vec![TreeNode {
        children: Vec::new(),
        end_line: None,
        level: "H0".to_string(),
        name: base_name.to_string(),
        start_line: None,
    }];
    let mut stack = AncestorStack::default();

    for record in records {
        let depth = stack.close_for(record.level());
        fold_chain_to(&mut chain, depth.saturating_add(1));

        chain.push(TreeNode {
            children: Vec::new(),
            end_line: record.end,
            level: record.kind.level_tag(),
            name: record.name.clone(),
            start_line: record.line,
        });
        stack.open(record.level());
    }

    fold_chain_to(&mut chain, 1);
    return chain.pop();
}

/// Render the indented outline with the base name as a header line.
/// Returns `None` for an empty input so callers can report it.
pub fn render_ascii(records: &[TagRecord], base_name: &str) -> Option<String> {
    if records.is_empty() {
        return None;
    }

    let mut stack = AncestorStack::default();
    let mut lines = Vec::with_capacity(records.len());

    for record in records {
        let depth = stack.close_for(record.level());
        lines.push(render_line(record, depth));
        stack.open(record.level());
    }

    return Some(format!("{base_name}\n\n{}", lines.join("\n")));
}

/// Pop nodes off `chain` into their parents until `len` remain.
fn fold_chain_to(chain: &mut Vec<TreeNode>, len: usize) {
    while chain.len() > len {
        let Some(node) = chain.pop() else {
            return;
        };
        let Some(parent) = chain.last_mut() else {
            return;
        };
        parent.children.push(node);
    }
}

/// One outline row: indent, glyph, name, and `H<level>[:line]`.
fn render_line(record: &TagRecord, depth: usize) -> String {
    let glyph = if depth == 0 { ROOT_GLYPH } else { BRANCH_GLYPH };
    let indent = INDENT.repeat(depth);
    let tag = record.kind.level_tag();
    return match record.line {
        Some(line) => format!("{indent}{glyph} {} {tag}:{line}", record.name),
        None => format!("{indent}{glyph} {} {tag}", record.name),
    };
}

#[cfg(test)]
mod tests {
    use super::{build_json, render_ascii};
    use crate::bounds::assign_section_ends;
    use crate::filter;
    use crate::types::{HeadingKind, TagRecord};

    fn record(name: &str, kind: HeadingKind, line: Option<u32>) -> TagRecord {
        TagRecord {
            end: None,
            file: "docs/plan.md".to_string(),
            kind,
            line,
            name: name.to_string(),
            pattern: String::new(),
            scope: None,
        }
    }

    fn plan() -> Vec<TagRecord> {
        let mut records = vec![
            record("Intro", HeadingKind::Chapter, Some(1)),
            record("Background", HeadingKind::Section, Some(5)),
            record("Details", HeadingKind::Subsection, Some(10)),
            record("Next Chapter", HeadingKind::Chapter, Some(20)),
        ];
        assign_section_ends(&mut records);
        records
    }

    #[test]
    fn renders_nested_outline() {
        let tree = render_ascii(&plan(), "plan.md").unwrap();
        let expected = "\
plan.md

└ Intro H1:1
  │ Background H2:5
    │ Details H3:10
└ Next Chapter H1:20";
        assert_eq!(tree, expected);
    }

    #[test]
    fn empty_input_is_none() {
        assert_eq!(render_ascii(&[], "plan.md"), None);
        assert_eq!(build_json(&[], "plan.md"), None);
    }

    #[test]
    fn sibling_pops_its_equal_level_predecessor() {
        let records = vec![
            record("A", HeadingKind::Section, Some(1)),
            record("A.1", HeadingKind::Subsection, Some(2)),
            record("B", HeadingKind::Section, Some(3)),
            record("B.1", HeadingKind::Subsection, Some(4)),
        ];
        let tree = render_ascii(&records, "f.md").unwrap();
        let rows: Vec<&str> = tree.lines().skip(2).collect();
        assert_eq!(rows, vec!["└ A H2:1", "  │ A.1 H3:2", "└ B H2:3", "  │ B.1 H3:4"]);
    }

    #[test]
    fn orphan_deep_heading_renders_shallow() {
        let records = vec![
            record("Orphan", HeadingKind::Subsubsection, Some(1)),
            record("Chapter", HeadingKind::Chapter, Some(5)),
            record("Skip", HeadingKind::Subsection, Some(6)),
        ];
        let tree = render_ascii(&records, "f.md").unwrap();
        let rows: Vec<&str> = tree.lines().skip(2).collect();
        assert_eq!(rows, vec!["└ Orphan H4:1", "└ Chapter H1:5", "  │ Skip H3:6"]);
    }

    #[test]
    fn unpositioned_heading_shows_level_only() {
        let records = vec![record("Floating", HeadingKind::Section, None)];
        let tree = render_ascii(&records, "f.md").unwrap();
        assert_eq!(tree, "f.md\n\n└ Floating H2");
    }

    #[test]
    fn json_root_is_file_with_nested_children() {
        let root = build_json(&plan(), "plan.md").unwrap();
        assert_eq!(root.name, "plan.md");
        assert_eq!(root.level, "H0");
        assert_eq!(root.children.len(), 2);

        let intro = root.children.first().unwrap();
        assert_eq!((intro.start_line, intro.end_line), (Some(1), Some(19)));
        let background = intro.children.first().unwrap();
        assert_eq!(background.name, "Background");
        let details = background.children.first().unwrap();
        assert_eq!(details.level, "H3");
        assert!(details.children.is_empty());

        let next = root.children.get(1).unwrap();
        assert_eq!(next.name, "Next Chapter");
        assert_eq!(next.end_line, None);
    }

    #[test]
    fn json_flat_siblings_attach_to_root() {
        let mut records = vec![
            record("Section 1", HeadingKind::Section, Some(10)),
            record("Section 2", HeadingKind::Section, Some(21)),
            record("Section 3", HeadingKind::Section, Some(31)),
        ];
        assign_section_ends(&mut records);
        let root = build_json(&records, "test.md").unwrap();
        let names: Vec<&str> = root.children.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["Section 1", "Section 2", "Section 3"]);
        assert!(root.children.iter().all(|c| c.children.is_empty()));
        assert_eq!(root.children.first().unwrap().end_line, Some(20));
    }

    #[test]
    fn json_end_line_survives_filtering() {
        let mut records = vec![
            record("Ch", HeadingKind::Chapter, Some(1)),
            record("Task 1", HeadingKind::Section, Some(3)),
            record("Task 2", HeadingKind::Section, Some(10)),
            record("Steps", HeadingKind::Subsubsection, Some(12)),
        ];
        assign_section_ends(&mut records);
        let pattern = filter::compile_pattern("Task 1").unwrap();
        let kept = filter::by_pattern_with_parents(&records, &pattern);

        let root = build_json(&kept, "d.md").unwrap();
        let chapter = root.children.first().unwrap();
        assert_eq!(chapter.end_line, None);
        let task = chapter.children.first().unwrap();
        assert_eq!(task.name, "Task 1");
        assert_eq!((task.start_line, task.end_line), (Some(3), Some(9)));
    }

    #[test]
    fn json_serializes_field_names() {
        let root = build_json(&plan(), "plan.md").unwrap();
        let value = serde_json::to_value(&root).unwrap();
        assert_eq!(value["children"][0]["start_line"], 1);
        assert_eq!(value["children"][1]["end_line"], serde_json::Value::Null);
    }
}
