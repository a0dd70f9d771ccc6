//! Pure, platform-agnostic building blocks: catalogs, scoring and formatting.

pub mod catalog;
pub mod format;
pub mod metrics;
pub mod scoring;
