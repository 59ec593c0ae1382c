//! Outline assembly across all pages of a document.

use tracing::{debug, trace};

use crate::models::config::OutlinerConfig;
use crate::models::outline::{DocumentOutline, OutlineEntry, PageText};

use super::rules::{normalize_line, HeadingClassifier, LineClass, TitleSelector};
use super::OutlineExtractor;

/// Builds the outline of a document from its page text.
#[derive(Debug, Clone, Default)]
pub struct OutlineBuilder {
    classifier: HeadingClassifier,
    title: TitleSelector,
}

impl OutlineBuilder {
    /// Create a builder with default title and heading rules.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a builder from configuration.
    pub fn from_config(config: &OutlinerConfig) -> Self {
        Self {
            classifier: HeadingClassifier::from_config(&config.heading),
            title: TitleSelector::from_config(&config.title),
        }
    }

    /// Set the heading classifier.
    pub fn with_classifier(mut self, classifier: HeadingClassifier) -> Self {
        self.classifier = classifier;
        self
    }

    /// Set the title selector.
    pub fn with_title_selector(mut self, title: TitleSelector) -> Self {
        self.title = title;
        self
    }

    /// Collect every heading line, in reading order, tagged with its page.
    pub fn headings(&self, pages: &[PageText]) -> Vec<OutlineEntry> {
        let mut outline = Vec::new();

        for page in pages {
            for raw_line in page.raw_text.split('\n') {
                let line = normalize_line(raw_line);
                if let LineClass::Heading(heading) = self.classifier.classify(&line) {
                    trace!("page {}: {} {:?}", page.page_index, heading.level, heading.text);
                    outline.push(OutlineEntry {
                        level: heading.level,
                        text: heading.text,
                        page: page.page_index,
                    });
                }
            }
        }

        outline
    }

    /// Select the title, then collect the headings.
    pub fn build(&self, pages: &[PageText]) -> DocumentOutline {
        let title = self.title.select(pages);
        let outline = self.headings(pages);

        debug!(
            "Outline built: {} pages, title {:?}, {} headings",
            pages.len(),
            title,
            outline.len()
        );

        DocumentOutline { title, outline }
    }
}

impl OutlineExtractor for OutlineBuilder {
    fn extract(&self, pages: &[PageText]) -> DocumentOutline {
        self.build(pages)
    }
}

/// Build title and outline with the default rules.
pub fn build_outline(pages: &[PageText]) -> DocumentOutline {
    OutlineBuilder::new().build(pages)
}

/// Collect headings with the default rules.
pub fn extract_outline(pages: &[PageText]) -> Vec<OutlineEntry> {
    OutlineBuilder::new().headings(pages)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::outline::HeadingLevel;
    use pretty_assertions::assert_eq;

    fn entry(level: HeadingLevel, text: &str, page: u32) -> OutlineEntry {
        OutlineEntry {
            level,
            text: text.to_string(),
            page,
        }
    }

    #[test]
    fn test_sample_document() {
        let pages = vec![PageText::new(
            0,
            "1. Introduction\n1.1 Background\n1.2 Objectives\n2. Methodology\nThis is regular body text.",
        )];

        assert_eq!(
            extract_outline(&pages),
            vec![
                entry(HeadingLevel::H1, "1. Introduction", 0),
                entry(HeadingLevel::H2, "1.1 Background", 0),
                entry(HeadingLevel::H2, "1.2 Objectives", 0),
                entry(HeadingLevel::H1, "2. Methodology", 0),
            ]
        );
    }

    #[test]
    fn test_build_outline_with_title() {
        let pages = vec![
            PageText::new(0, "Test Document Title\n1. Introduction\nsome body text"),
            PageText::new(1, "1.1 Background\nAppendix A: Tables"),
        ];

        let outline = build_outline(&pages);
        assert_eq!(outline.title, "Test Document Title");
        assert_eq!(
            outline.outline,
            vec![
                entry(HeadingLevel::H1, "1. Introduction", 0),
                entry(HeadingLevel::H2, "1.1 Background", 1),
                entry(HeadingLevel::H2, "Appendix A: Tables", 1),
            ]
        );
    }

    #[test]
    fn test_empty_pages() {
        assert_eq!(build_outline(&[]), DocumentOutline::default());
    }

    #[test]
    fn test_duplicates_and_order_kept() {
        let pages = vec![
            PageText::new(0, "1.1.1 Details\nCONTENTS"),
            PageText::new(1, "CONTENTS\n1. Start"),
        ];

        assert_eq!(
            extract_outline(&pages),
            vec![
                entry(HeadingLevel::H3, "1.1.1 Details", 0),
                entry(HeadingLevel::H1, "CONTENTS", 0),
                entry(HeadingLevel::H1, "CONTENTS", 1),
                entry(HeadingLevel::H1, "1. Start", 1),
            ]
        );
    }

    #[test]
    fn test_lines_are_normalized_first() {
        let pages = vec![PageText::new(3, "  2.1\u{00a0}  Scope\u{2122}\t\r\nTOPJUMP 1. Intro")];

        assert_eq!(extract_outline(&pages), vec![entry(HeadingLevel::H2, "2.1 Scope", 3)]);
    }

    #[test]
    fn test_from_config() {
        let mut config = OutlinerConfig::default();
        config.heading.noise_markers = vec!["confidential".to_string()];
        config.title.max_lines = 1;

        let pages = vec![PageText::new(0, "\nReal Title\nCONFIDENTIAL\nTOPJUMP")];
        let outline = OutlineBuilder::from_config(&config).extract(&pages);

        assert_eq!(outline.title, "");
        assert_eq!(outline.outline, vec![entry(HeadingLevel::H1, "TOPJUMP", 0)]);
    }
}
