//! Heading detection and level assignment for a single cleaned line.
//!
//! Classification runs in three steps:
//! 1. noise rejection (empty lines, watermark markers),
//! 2. admission by one of the ordered heading shapes,
//! 3. level assignment from the line text, deepest numbering first.
//!
//! Step 3 never looks at which shape admitted the line.

use regex::Regex;

use crate::models::config::HeadingConfig;
use crate::models::outline::HeadingLevel;

use super::patterns::{
    APPENDIX_SHAPE, CAPITALIZED_SHAPE, NUMBERED_SHAPE, NUMBERING_H1, NUMBERING_H2, NUMBERING_H3,
    NUMBERING_H4,
};

/// Shape that admitted a line as a heading candidate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeadingShape {
    /// `1.`, `1.2`, `1.2.3` ... followed by text.
    Numbered,
    /// `Appendix X:` followed by text.
    Appendix,
    /// Capitalized phrase or caption label.
    Capitalized,
}

/// Why a line is not a heading.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
    /// Nothing left after normalization.
    Empty,
    /// Contains a noise marker.
    Noise,
    /// Matches none of the heading shapes.
    NoShape,
    /// Admitted by a shape, but no level rule applies.
    NoLevel,
}

/// An accepted heading.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Heading {
    pub level: HeadingLevel,
    pub text: String,
    pub shape: HeadingShape,
}

/// Classification result for one line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineClass {
    Heading(Heading),
    NotHeading(Rejection),
}

impl LineClass {
    pub fn is_heading(&self) -> bool {
        matches!(self, LineClass::Heading(_))
    }

    /// Level of the heading, if accepted.
    pub fn level(&self) -> Option<HeadingLevel> {
        match self {
            LineClass::Heading(h) => Some(h.level),
            LineClass::NotHeading(_) => None,
        }
    }

    pub fn into_heading(self) -> Option<Heading> {
        match self {
            LineClass::Heading(h) => Some(h),
            LineClass::NotHeading(_) => None,
        }
    }
}

/// Stateless per-line heading classifier.
#[derive(Debug, Clone)]
pub struct HeadingClassifier {
    /// Uppercased noise markers.
    noise_markers: Vec<String>,
}

impl HeadingClassifier {
    /// Create a classifier with the default `TOPJUMP` noise marker.
    pub fn new() -> Self {
        Self::from_config(&HeadingConfig::default())
    }

    pub fn from_config(config: &HeadingConfig) -> Self {
        Self::with_noise_markers(config.noise_markers.iter().map(String::as_str))
    }

    /// Create a classifier with a custom set of noise markers.
    pub fn with_noise_markers<'a>(markers: impl IntoIterator<Item = &'a str>) -> Self {
        let noise_markers = markers
            .into_iter()
            .map(str::trim)
            .filter(|m| !m.is_empty())
            .map(str::to_uppercase)
            .collect();
        Self { noise_markers }
    }

    /// Classify a line that has already been through `normalize_line`.
    pub fn classify(&self, line: &str) -> LineClass {
        if line.is_empty() {
            return LineClass::NotHeading(Rejection::Empty);
        }

        if self.is_noise(line) {
            return LineClass::NotHeading(Rejection::Noise);
        }

        let Some((shape, text)) = match_shape(line) else {
            return LineClass::NotHeading(Rejection::NoShape);
        };

        match assign_level(text) {
            Some(level) => LineClass::Heading(Heading {
                level,
                text: text.to_string(),
                shape,
            }),
            None => LineClass::NotHeading(Rejection::NoLevel),
        }
    }

    fn is_noise(&self, line: &str) -> bool {
        if self.noise_markers.is_empty() {
            return false;
        }
        let upper = line.to_uppercase();
        self.noise_markers.iter().any(|m| upper.contains(m.as_str()))
    }
}

impl Default for HeadingClassifier {
    fn default() -> Self {
        Self::new()
    }
}

/// Classify a cleaned line with the default classifier.
pub fn classify_line(line: &str) -> LineClass {
    HeadingClassifier::new().classify(line)
}

fn shapes() -> [(HeadingShape, &'static Regex); 3] {
    [
        (HeadingShape::Numbered, &*NUMBERED_SHAPE),
        (HeadingShape::Appendix, &*APPENDIX_SHAPE),
        (HeadingShape::Capitalized, &*CAPITALIZED_SHAPE),
    ]
}

/// First admitting shape and the captured heading text.
fn match_shape(line: &str) -> Option<(HeadingShape, &str)> {
    shapes().into_iter().find_map(|(shape, pattern)| {
        pattern.find(line).map(|m| (shape, m.as_str().trim()))
    })
}

fn assign_level(text: &str) -> Option<HeadingLevel> {
    let numbering: [(&Regex, HeadingLevel); 4] = [
        (&*NUMBERING_H4, HeadingLevel::H4),
        (&*NUMBERING_H3, HeadingLevel::H3),
        (&*NUMBERING_H2, HeadingLevel::H2),
        (&*NUMBERING_H1, HeadingLevel::H1),
    ];

    if let Some((_, level)) = numbering.iter().find(|(pattern, _)| pattern.is_match(text)) {
        return Some(*level);
    }

    if text.starts_with("Appendix") {
        return Some(HeadingLevel::H2);
    }

    if is_all_uppercase(text) || text.contains(':') {
        return Some(HeadingLevel::H1);
    }

    None
}

/// At least one cased letter and no lowercase letters.
fn is_all_uppercase(text: &str) -> bool {
    text.chars().any(|c| c.is_uppercase()) && !text.chars().any(|c| c.is_lowercase())
}
