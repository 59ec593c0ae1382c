//! PDF processing module.

mod extractor;

pub use extractor::{extract_pages_from_file, PdfExtractor};

use crate::error::PdfError;
use crate::models::outline::PageText;

/// Result type for PDF operations.
pub type Result<T> = std::result::Result<T, PdfError>;

/// Trait for PDF processing implementations.
pub trait PdfProcessor {
    /// Load a PDF from bytes.
    fn load(&mut self, data: &[u8]) -> Result<()>;

    /// Get the number of pages in the PDF.
    fn page_count(&self) -> u32;

    /// Extract text of every page, 0-based, in document order.
    fn extract_pages(&self) -> Result<Vec<PageText>>;
}
