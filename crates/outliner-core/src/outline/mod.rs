//! Outline extraction module.

mod builder;
pub mod rules;

pub use builder::{build_outline, extract_outline, OutlineBuilder};

use crate::models::outline::{DocumentOutline, PageText};

/// Trait for outline extraction strategies.
pub trait OutlineExtractor {
    /// Build the title and heading outline of one document.
    fn extract(&self, pages: &[PageText]) -> DocumentOutline;
}
