//! Utility functions shared across the generation pipeline.
//!
//! ## Module Structure
//!
//! - `case`: kebab-case / UpperCamelCase conversions for tag and title matching

pub mod case;

pub use case::*;
