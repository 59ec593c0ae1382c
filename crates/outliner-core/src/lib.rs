//! Core library for PDF outline extraction.
//!
//! This crate provides:
//! - PDF page text extraction (lopdf, pdf-extract)
//! - Line normalization, title selection and heading classification (H1-H4)
//! - Outline assembly and JSON sidecar output
//! - A per-document pipeline with an injectable page source

pub mod error;
pub mod models;
pub mod outline;
pub mod output;
pub mod pdf;
pub mod pipeline;

pub use error::{OutlinerError, PdfError, Result};
pub use models::config::OutlinerConfig;
pub use models::outline::{DocumentOutline, HeadingLevel, OutlineEntry, PageText};
pub use outline::rules::{
    classify_line, normalize_line, select_title, HeadingClassifier, LineClass, TitleSelector,
};
pub use outline::{build_outline, extract_outline, OutlineBuilder, OutlineExtractor};
pub use pdf::{extract_pages_from_file, PdfExtractor, PdfProcessor};
pub use pipeline::{find_pdfs, DocumentPipeline, FileOutcome, PageSource, PdfPageSource};
