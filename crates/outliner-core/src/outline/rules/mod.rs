//! Rule-based line analysis: normalization, title and heading rules.

pub mod heading;
pub mod normalize;
pub mod patterns;
pub mod title;

pub use heading::{classify_line, Heading, HeadingClassifier, HeadingShape, LineClass, Rejection};
pub use normalize::normalize_line;
pub use title::{select_title, TitleSelector};
