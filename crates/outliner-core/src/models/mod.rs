//! Data models for outlines and configuration.

pub mod config;
pub mod outline;

pub use config::OutlinerConfig;
pub use outline::{DocumentOutline, HeadingLevel, OutlineEntry, PageText};
