//! Configuration structures for the outline pipeline.

use serde::{Deserialize, Serialize};

use crate::error::{OutlinerError, Result};
use crate::output::DEFAULT_INDENT;

/// Main configuration for the outliner pipeline.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct OutlinerConfig {
    /// Title selection configuration.
    pub title: TitleConfig,

    /// Heading classification configuration.
    pub heading: HeadingConfig,

    /// JSON output configuration.
    pub output: OutputConfig,
}

/// Title selection configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TitleConfig {
    /// Number of leading first-page lines considered.
    pub max_lines: usize,

    /// Maximum whitespace-separated words in a title.
    pub max_words: usize,
}

impl Default for TitleConfig {
    fn default() -> Self {
        Self {
            max_lines: 3,
            max_words: 10,
        }
    }
}

/// Heading classification configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct HeadingConfig {
    /// Lines containing any of these markers (case-insensitive) are never headings.
    pub noise_markers: Vec<String>,
}

impl Default for HeadingConfig {
    fn default() -> Self {
        Self {
            noise_markers: vec!["TOPJUMP".to_string()],
        }
    }
}

/// JSON output configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Spaces per indentation level.
    pub indent: usize,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            indent: DEFAULT_INDENT,
        }
    }
}

impl OutlinerConfig {
    /// Load configuration from a JSON file.
    pub fn from_file(path: &std::path::Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    /// Parse configuration from a JSON string.
    pub fn from_json(content: &str) -> Result<Self> {
        serde_json::from_str(content).map_err(|e| OutlinerError::Config(e.to_string()))
    }
}
