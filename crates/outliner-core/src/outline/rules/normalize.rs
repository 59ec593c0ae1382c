//! Line cleanup applied before title and heading rules.

/// Collapse whitespace and drop non-ASCII characters.
///
/// Whitespace runs (newlines included) become a single space and the result
/// is trimmed. Characters above 0x7F are deleted rather than replaced; a word
/// made only of such characters disappears along with its separator.
pub fn normalize_line(raw: &str) -> String {
    raw.split_whitespace()
        .map(|word| word.chars().filter(|c| c.is_ascii()).collect::<String>())
        .filter(|word| !word.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}
