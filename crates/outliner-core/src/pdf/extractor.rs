//! PDF page text extraction using lopdf and pdf-extract.

use std::panic::{catch_unwind, AssertUnwindSafe};
use std::path::Path;

use lopdf::Document;
use tracing::{debug, error, warn};

use super::{PdfProcessor, Result};
use crate::error::PdfError;
use crate::models::outline::PageText;

/// PDF page text extractor using lopdf.
pub struct PdfExtractor {
    document: Option<Document>,
    raw_data: Vec<u8>,
}

impl PdfExtractor {
    /// Create a new PDF extractor.
    pub fn new() -> Self {
        Self {
            document: None,
            raw_data: Vec::new(),
        }
    }

    fn extract_with_pdf_extract(&self) -> Result<Vec<String>> {
        // pdf-extract panics on some malformed content streams
        match catch_unwind(AssertUnwindSafe(|| {
            pdf_extract::extract_text_from_mem_by_pages(&self.raw_data)
        })) {
            Ok(Ok(pages)) => Ok(pages),
            Ok(Err(e)) => Err(PdfError::TextExtraction(e.to_string())),
            Err(_) => Err(PdfError::TextExtraction(
                "pdf-extract panicked while decoding page text".to_string(),
            )),
        }
    }

    fn extract_with_lopdf(&self, doc: &Document) -> Vec<String> {
        doc.get_pages()
            .keys()
            .map(|&page_num| {
                doc.extract_text(&[page_num]).unwrap_or_else(|e| {
                    debug!("lopdf could not extract page {}: {}", page_num, e);
                    String::new()
                })
            })
            .collect()
    }
}

impl Default for PdfExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl PdfProcessor for PdfExtractor {
    fn load(&mut self, data: &[u8]) -> Result<()> {
        let mut doc = Document::load_mem(data).map_err(|e| PdfError::Parse(e.to_string()))?;

        // Handle PDFs with empty password encryption
        if doc.is_encrypted() {
            if doc.decrypt("").is_err() {
                return Err(PdfError::Encrypted);
            }
            debug!("Decrypted PDF with empty password");

            // pdf-extract reads the decrypted copy
            let mut decrypted_data = Vec::new();
            doc.save_to(&mut decrypted_data)
                .map_err(|e| PdfError::Parse(format!("Failed to save decrypted PDF: {}", e)))?;
            self.raw_data = decrypted_data;
        } else {
            self.raw_data = data.to_vec();
        }

        let page_count = doc.get_pages().len();
        if page_count == 0 {
            return Err(PdfError::NoPages);
        }

        debug!("Loaded PDF with {} pages", page_count);
        self.document = Some(doc);
        Ok(())
    }

    fn page_count(&self) -> u32 {
        self.document
            .as_ref()
            .map(|doc| doc.get_pages().len() as u32)
            .unwrap_or(0)
    }

    fn extract_pages(&self) -> Result<Vec<PageText>> {
        let doc = self
            .document
            .as_ref()
            .ok_or(PdfError::Parse("No document loaded".to_string()))?;

        let texts = match self.extract_with_pdf_extract() {
            Ok(texts) => texts,
            Err(e) => {
                warn!("{}; falling back to lopdf text extraction", e);
                self.extract_with_lopdf(doc)
            }
        };

        let pages: Vec<PageText> = texts
            .into_iter()
            .enumerate()
            .map(|(index, text)| PageText::new(index as u32, text.trim()))
            .collect();

        debug!(
            "Extracted text from {} pages ({} chars)",
            pages.len(),
            pages.iter().map(|p| p.raw_text.len()).sum::<usize>()
        );

        Ok(pages)
    }
}

/// Extract page text from a PDF file.
///
/// Failures are logged and yield an empty list; callers never see an error.
pub fn extract_pages_from_file(path: &Path) -> Vec<PageText> {
    match try_extract_pages(path) {
        Ok(pages) => pages,
        Err(e) => {
            error!("Error extracting text from {}: {}", path.display(), e);
            Vec::new()
        }
    }
}

fn try_extract_pages(path: &Path) -> crate::Result<Vec<PageText>> {
    let data = std::fs::read(path)?;
    let mut extractor = PdfExtractor::new();
    extractor.load(&data)?;
    Ok(extractor.extract_pages()?)
}
