//! JSON sidecar output.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};
use tracing::debug;

use crate::error::Result;
use crate::models::outline::DocumentOutline;

/// Default indentation of the JSON sidecar.
pub const DEFAULT_INDENT: usize = 4;

/// Serialize an outline as pretty JSON with `indent` spaces per level.
///
/// Non-ASCII characters are written as-is, not escaped.
pub fn to_json_string(outline: &DocumentOutline, indent: usize) -> Result<String> {
    let indent = " ".repeat(indent);
    let mut buf = Vec::new();
    let formatter = PrettyFormatter::with_indent(indent.as_bytes());
    let mut serializer = Serializer::with_formatter(&mut buf, formatter);
    outline.serialize(&mut serializer)?;

    // serde_json only emits valid UTF-8
    Ok(String::from_utf8_lossy(&buf).into_owned())
}

/// Write an outline to `path`.
pub fn write_outline(outline: &DocumentOutline, path: &Path, indent: usize) -> Result<()> {
    let content = to_json_string(outline, indent)?;
    fs::write(path, content)?;
    debug!("Wrote outline to {}", path.display());
    Ok(())
}

/// `<output_dir>/<input-stem>.json`.
pub fn output_path_for(input: &Path, output_dir: &Path) -> PathBuf {
    let stem = input
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "document".to_string());
    output_dir.join(format!("{}.json", stem))
}
