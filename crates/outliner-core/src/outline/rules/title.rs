//! Document title selection from the first page.

use crate::models::config::TitleConfig;
use crate::models::outline::PageText;

use super::normalize::normalize_line;

/// Picks the title from the leading lines of the first page.
#[derive(Debug, Clone)]
pub struct TitleSelector {
    max_lines: usize,
    max_words: usize,
}

impl TitleSelector {
    /// Create a selector that checks 3 lines and accepts up to 10 words.
    pub fn new() -> Self {
        Self::from_config(&TitleConfig::default())
    }

    pub fn from_config(config: &TitleConfig) -> Self {
        Self {
            max_lines: config.max_lines,
            max_words: config.max_words,
        }
    }

    /// Set how many leading lines are considered.
    pub fn with_max_lines(mut self, max_lines: usize) -> Self {
        self.max_lines = max_lines;
        self
    }

    /// Set the word limit for a title.
    pub fn with_max_words(mut self, max_words: usize) -> Self {
        self.max_words = max_words;
        self
    }

    /// Return the first short, non-empty line of the first page, or "".
    pub fn select(&self, pages: &[PageText]) -> String {
        let Some(first) = pages.first() else {
            return String::new();
        };

        first
            .raw_text
            .split('\n')
            .take(self.max_lines)
            .map(normalize_line)
            .find(|line| !line.is_empty() && line.split_whitespace().count() <= self.max_words)
            .unwrap_or_default()
    }
}

impl Default for TitleSelector {
    fn default() -> Self {
        Self::new()
    }
}

/// Select a title with the default settings.
pub fn select_title(pages: &[PageText]) -> String {
    TitleSelector::new().select(pages)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn page(text: &str) -> Vec<PageText> {
        vec![PageText::new(0, text)]
    }

    #[test]
    fn test_first_line_is_title() {
        let pages = page("Test Document Title\nshort\nthird line");
        assert_eq!(select_title(&pages), "Test Document Title");
    }

    #[test]
    fn test_long_first_line_skipped() {
        let pages = page(
            "This opening line is far too long to be the title of any document\nReal Title\nother",
        );
        assert_eq!(select_title(&pages), "Real Title");
    }

    #[test]
    fn test_blank_lines_skipped() {
        let pages = page("   \n\u{2022}\nThird Line Title\nFourth");
        assert_eq!(select_title(&pages), "Third Line Title");
    }

    #[test]
    fn test_only_first_three_lines() {
        let pages = page("\n\n\nFourth Line Title");
        assert_eq!(select_title(&pages), "");
    }

    #[test]
    fn test_no_qualifying_line() {
        let long = "one two three four five six seven eight nine ten eleven";
        let pages = page(&format!("{long}\n{long}\n{long}\nShort"));
        assert_eq!(select_title(&pages), "");
    }

    #[test]
    fn test_exactly_ten_words_accepted() {
        let pages = page("one two three four five six seven eight nine ten");
        assert_eq!(select_title(&pages), "one two three four five six seven eight nine ten");
    }

    #[test]
    fn test_no_pages() {
        assert_eq!(select_title(&[]), "");
    }

    #[test]
    fn test_only_first_page_considered() {
        let pages = vec![PageText::new(0, ""), PageText::new(1, "Second Page Title")];
        assert_eq!(select_title(&pages), "");
    }

    #[test]
    fn test_custom_limits() {
        let pages = page("Quarterly Financial Results Report\nQ3");
        let selector = TitleSelector::new().with_max_words(2);
        assert_eq!(selector.select(&pages), "Q3");
        let selector = TitleSelector::new().with_max_words(2).with_max_lines(1);
        assert_eq!(selector.select(&pages), "");
    }
}
