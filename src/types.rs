/// Core domain types: heading kinds and the records read from a tags index.
use std::fmt;
use std::str::FromStr;

/// The four heading kinds the markdown ctags parser emits, coarsest first.
/// Any other kind token is not a heading and never becomes a record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum HeadingKind {
    /// `#` heading, level 1.
    Chapter,
    /// `##` heading, level 2.
    Section,
    /// `###` heading, level 3.
    Subsection,
    /// `####` heading, level 4.
    Subsubsection,
}

impl HeadingKind {
    /// Every kind, ordered by level.
    pub const ALL: [Self; 4] = [
        Self::Chapter,
        Self::Section,
        Self::Subsection,
        Self::Subsubsection,
    ];

    /// Nesting depth: 1 for `chapter` through 4 for `subsubsection`.
    /// A smaller level is a coarser heading.
    pub const fn level(self) -> u8 {
        return match self {
            Self::Chapter => 1,
            Self::Section => 2,
            Self::Subsection => 3,
            Self::Subsubsection => 4,
        };
    }

    /// The literal kind token as written in a tags file.
    pub const fn as_str(self) -> &'static str {
        return match self {
            Self::Chapter => "chapter",
            Self::Section => "section",
            Self::Subsection => "subsection",
            Self::Subsubsection => "subsubsection",
        };
    }

    /// Level tag used in rendered output, e.g. `H2`.
    pub fn level_tag(self) -> String {
        return format!("H{}", self.level());
    }
}

impl fmt::Display for HeadingKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        return f.write_str(self.as_str());
    }
}

/// Returned when a token is not one of the four heading kind literals.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownKind(
    /// The rejected token.
    pub String,
);

impl FromStr for HeadingKind {
    type Err = UnknownKind;

    /// Exact, case-sensitive match against the kind literals.
    fn from_str(token: &str) -> Result<Self, Self::Err> {
        return Self::ALL
            .into_iter()
            .find(|kind| return kind.as_str() == token)
            .ok_or_else(|| return UnknownKind(token.to_string()));
    }
}

/// One heading entry from the tags file, already scoped to the target file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagRecord {
    /// Last line the heading owns, computed over every positioned heading
    /// of the file so later filtering cannot change it. `None` when the
    /// section runs to end of file or the heading has no line.
    pub end: Option<u32>,
    /// The file field exactly as written in the index.
    pub file: String,
    /// Heading kind, which fixes the nesting level.
    pub kind: HeadingKind,
    /// One-based line of the heading. `None` when the index omitted it
    /// or wrote `line:0`.
    pub line: Option<u32>,
    /// Heading text as written in the index.
    pub name: String,
    /// The ex search pattern field, kept verbatim.
    pub pattern: String,
    /// Parent path from a `chapter:`/`section:`/`subsection:` field.
    /// Informational only: nesting always comes from order and level.
    pub scope: Option<String>,
}

impl TagRecord {
    /// Nesting level of this record's kind.
    pub const fn level(&self) -> u8 {
        return self.kind.level();
    }

    /// Case-insensitive substring test against the heading name.
    /// `lowered_query` must already be lowercase.
    pub fn name_contains(&self, lowered_query: &str) -> bool {
        return self.name.to_lowercase().contains(lowered_query);
    }
}
