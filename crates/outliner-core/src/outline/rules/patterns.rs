//! Compiled patterns for heading detection.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // Admission shapes, tried in this order
    pub static ref NUMBERED_SHAPE: Regex = Regex::new(
        r"^(?:\d+\.)+\d*\s+.*$"
    ).unwrap();

    pub static ref APPENDIX_SHAPE: Regex = Regex::new(
        r"^Appendix [A-Z]:.*$"
    ).unwrap();

    // Either a plain capitalized phrase, or a caption label with digits and a colon
    pub static ref CAPITALIZED_SHAPE: Regex = Regex::new(
        r"^[A-Z](?:[A-Za-z\s\-:]+|[A-Za-z0-9\s\-]*:[A-Za-z0-9\s\-:]*)$"
    ).unwrap();

    // Numbering depth, deepest first
    pub static ref NUMBERING_H4: Regex = Regex::new(
        r"^\d+\.\d+\.\d+\.\d+\s"
    ).unwrap();

    pub static ref NUMBERING_H3: Regex = Regex::new(
        r"^\d+\.\d+\.\d+\s"
    ).unwrap();

    pub static ref NUMBERING_H2: Regex = Regex::new(
        r"^\d+\.\d+\s"
    ).unwrap();

    pub static ref NUMBERING_H1: Regex = Regex::new(
        r"^\d+\.\s"
    ).unwrap();
}
