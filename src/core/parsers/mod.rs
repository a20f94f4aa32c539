//! Parsers for the two pipeline inputs.
//!
//! - `markdown`: documentation files (front-matter and description)
//! - `web_types`: the type index written by the external extractor

pub mod markdown;
pub mod web_types;
