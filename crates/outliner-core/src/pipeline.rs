//! Per-document pipeline: page text, outline, JSON sidecar.

use std::path::{Path, PathBuf};

use glob::{glob, Pattern};
use tracing::{info, warn};

use crate::models::config::OutlinerConfig;
use crate::models::outline::PageText;
use crate::outline::{OutlineBuilder, OutlineExtractor};
use crate::output::{output_path_for, write_outline};
use crate::pdf::extract_pages_from_file;

/// Source of page text for a document.
pub trait PageSource {
    /// Page text of the document at `path`; empty when nothing could be read.
    fn pages(&self, path: &Path) -> Vec<PageText>;
}

/// Reads page text from PDF files.
#[derive(Debug, Clone, Copy, Default)]
pub struct PdfPageSource;

impl PageSource for PdfPageSource {
    fn pages(&self, path: &Path) -> Vec<PageText> {
        extract_pages_from_file(path)
    }
}

/// Outcome of processing a single document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileOutcome {
    /// Outline written to `output`.
    Written {
        output: PathBuf,
        title: String,
        headings: usize,
    },
    /// The extractor produced no pages.
    NoText,
    /// Serializing or writing the sidecar failed.
    WriteFailed(String),
}

impl FileOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, FileOutcome::Written { .. })
    }
}

/// Runs one document at a time through extraction, outline building and output.
pub struct DocumentPipeline<S = PdfPageSource> {
    source: S,
    builder: OutlineBuilder,
    output_dir: PathBuf,
    indent: usize,
}

impl DocumentPipeline<PdfPageSource> {
    /// Create a PDF pipeline writing into `output_dir`.
    pub fn new(output_dir: impl Into<PathBuf>, config: &OutlinerConfig) -> Self {
        Self::with_source(PdfPageSource, output_dir, config)
    }
}

impl<S: PageSource> DocumentPipeline<S> {
    /// Create a pipeline with a custom page source.
    pub fn with_source(
        source: S,
        output_dir: impl Into<PathBuf>,
        config: &OutlinerConfig,
    ) -> Self {
        Self {
            source,
            builder: OutlineBuilder::from_config(config),
            output_dir: output_dir.into(),
            indent: config.output.indent,
        }
    }

    /// Process one document. Never fails; the outcome says what happened.
    pub fn process(&self, path: &Path) -> FileOutcome {
        info!("Processing {}", path.display());

        let pages = self.source.pages(path);
        if pages.is_empty() {
            warn!("No text extracted from {}", path.display());
            return FileOutcome::NoText;
        }

        let outline = self.builder.extract(&pages);
        let output = output_path_for(path, &self.output_dir);

        match write_outline(&outline, &output, self.indent) {
            Ok(()) => {
                info!("Saved output to {}", output.display());
                FileOutcome::Written {
                    output,
                    headings: outline.outline.len(),
                    title: outline.title,
                }
            }
            Err(e) => {
                warn!("Error saving JSON to {}: {}", output.display(), e);
                FileOutcome::WriteFailed(e.to_string())
            }
        }
    }
}

/// `*.pdf` files directly inside `dir`, sorted by path.
pub fn find_pdfs(dir: &Path) -> Vec<PathBuf> {
    if dir.to_str().is_none() {
        warn!(
            "{} is not valid UTF-8; searching a lossy copy of the path",
            dir.display()
        );
    }
    let pattern = format!("{}/*.pdf", Pattern::escape(&dir.to_string_lossy()));
    let mut files: Vec<PathBuf> = match glob(&pattern) {
        Ok(paths) => paths.filter_map(|r| r.ok()).filter(|p| p.is_file()).collect(),
        Err(e) => {
            warn!("Invalid search pattern {}: {}", pattern, e);
            Vec::new()
        }
    };
    files.sort();
    files
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::outline::{DocumentOutline, HeadingLevel, OutlineEntry};
    use pretty_assertions::assert_eq;
    use std::collections::HashMap;

    #[derive(Default)]
    struct MemorySource {
        documents: HashMap<PathBuf, Vec<PageText>>,
    }

    impl MemorySource {
        fn with(mut self, path: &str, pages: Vec<PageText>) -> Self {
            self.documents.insert(PathBuf::from(path), pages);
            self
        }
    }

    impl PageSource for MemorySource {
        fn pages(&self, path: &Path) -> Vec<PageText> {
            self.documents.get(path).cloned().unwrap_or_default()
        }
    }

    #[test]
    fn test_process_writes_sidecar() {
        let dir = tempfile::tempdir().unwrap();
        let source = MemorySource::default().with(
            "in/report.pdf",
            vec![
                PageText::new(0, "Annual Report\n1. Overview\nbody"),
                PageText::new(1, "1.1 Scope"),
            ],
        );
        let pipeline = DocumentPipeline::with_source(source, dir.path(), &OutlinerConfig::default());

        let outcome = pipeline.process(Path::new("in/report.pdf"));
        let output = dir.path().join("report.json");
        assert_eq!(
            outcome,
            FileOutcome::Written {
                output: output.clone(),
                title: "Annual Report".to_string(),
                headings: 2,
            }
        );

        let written: DocumentOutline =
            serde_json::from_str(&std::fs::read_to_string(&output).unwrap()).unwrap();
        assert_eq!(
            written.outline,
            vec![
                OutlineEntry {
                    level: HeadingLevel::H1,
                    text: "1. Overview".into(),
                    page: 0,
                },
                OutlineEntry {
                    level: HeadingLevel::H2,
                    text: "1.1 Scope".into(),
                    page: 1,
                },
            ]
        );
    }

    #[test]
    fn test_no_text_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let pipeline = DocumentPipeline::with_source(
            MemorySource::default(),
            dir.path(),
            &OutlinerConfig::default(),
        );

        assert_eq!(pipeline.process(Path::new("empty.pdf")), FileOutcome::NoText);
        assert!(!dir.path().join("empty.json").exists());
    }

    #[test]
    fn test_write_failure_reported() {
        let dir = tempfile::tempdir().unwrap();
        let source = MemorySource::default().with("a.pdf", vec![PageText::new(0, "1. One")]);
        let pipeline = DocumentPipeline::with_source(
            source,
            dir.path().join("does-not-exist"),
            &OutlinerConfig::default(),
        );

        let outcome = pipeline.process(Path::new("a.pdf"));
        assert!(matches!(outcome, FileOutcome::WriteFailed(_)));
        assert!(!outcome.is_success());
    }

    #[test]
    fn test_find_pdfs() {
        let dir = tempfile::tempdir().unwrap();
        for name in ["b.pdf", "a.pdf", "notes.txt", "c.PDF"] {
            std::fs::write(dir.path().join(name), b"").unwrap();
        }
        std::fs::create_dir(dir.path().join("nested")).unwrap();
        std::fs::write(dir.path().join("nested").join("d.pdf"), b"").unwrap();

        let files = find_pdfs(dir.path());
        assert_eq!(files, vec![dir.path().join("a.pdf"), dir.path().join("b.pdf")]);
    }

    #[cfg(target_os = "linux")]
    #[test]
    fn test_find_pdfs_non_utf8_dir() {
        use std::ffi::OsStr;
        use std::os::unix::ffi::OsStrExt;

        let root = tempfile::tempdir().unwrap();
        let dir = root.path().join(OsStr::from_bytes(b"scans-\xff"));
        std::fs::create_dir(&dir).unwrap();
        std::fs::write(dir.join("a.pdf"), b"").unwrap();

        // The lossy pattern names a different directory, so nothing matches
        assert!(dir.to_str().is_none());
        assert_eq!(find_pdfs(&dir), Vec::<PathBuf>::new());
    }
}
