//! Outline data models: page text in, title and headings out.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Text of a single PDF page as produced by the extractor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageText {
    /// Page index (0-based, document order).
    pub page_index: u32,
    /// Raw page text, lines separated by `\n`.
    pub raw_text: String,
}

impl PageText {
    pub fn new(page_index: u32, raw_text: impl Into<String>) -> Self {
        Self {
            page_index,
            raw_text: raw_text.into(),
        }
    }
}

/// Heading level, ordered by nesting depth (H1 shallowest).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum HeadingLevel {
    H1,
    H2,
    H3,
    H4,
}

impl HeadingLevel {
    /// Nesting depth, 1 for H1 through 4 for H4.
    pub fn depth(&self) -> u8 {
        match self {
            HeadingLevel::H1 => 1,
            HeadingLevel::H2 => 2,
            HeadingLevel::H3 => 3,
            HeadingLevel::H4 => 4,
        }
    }

    /// Label used in the JSON output.
    pub fn as_str(&self) -> &'static str {
        match self {
            HeadingLevel::H1 => "H1",
            HeadingLevel::H2 => "H2",
            HeadingLevel::H3 => "H3",
            HeadingLevel::H4 => "H4",
        }
    }

    /// All levels, shallowest first.
    pub fn all() -> [HeadingLevel; 4] {
        [HeadingLevel::H1, HeadingLevel::H2, HeadingLevel::H3, HeadingLevel::H4]
    }
}

impl fmt::Display for HeadingLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One heading in the document outline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutlineEntry {
    /// Heading level.
    pub level: HeadingLevel,

    /// Heading text, numbering prefix included.
    pub text: String,

    /// Page index the heading was found on (0-based).
    pub page: u32,
}

/// Title and headings of one document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentOutline {
    /// Document title, empty when none was found.
    pub title: String,

    /// Headings in reading order.
    pub outline: Vec<OutlineEntry>,
}

impl DocumentOutline {
    /// True when there is neither a title nor any heading.
    pub fn is_empty(&self) -> bool {
        self.title.is_empty() && self.outline.is_empty()
    }

    /// Number of headings at each level, indexed H1..H4.
    pub fn count_by_level(&self) -> [usize; 4] {
        let mut counts = [0; 4];
        for entry in &self.outline {
            counts[(entry.level.depth() - 1) as usize] += 1;
        }
        counts
    }
}
