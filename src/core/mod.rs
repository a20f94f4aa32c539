//! Core generation engine.
//!
//! ## Pipeline
//!
//! ```text
//! docs (index.<locale>.md) ──► DocComponent ─┐
//!                                            ├─► Reconciler ─► build ─► passes ─► materials
//! type extractor ─► TypeIndex ─► merge ──────┘
//! ```
//!
//! ## Module Structure
//!
//! - `data`: shared data types (docs, type index, material descriptor, locales)
//! - `parsers`: documentation front-matter and web-types readers
//! - `loader`: the `TypeExtractor` seam and its implementations
//! - `merge`: bilingual type index merge
//! - `resolve`: tag to documented component reconciliation
//! - `build`: material descriptor construction
//! - `tables`: static lookup tables
//! - `pipeline`: end-to-end `generate`
//! - `utils`: name case conversions

pub mod build;
pub mod data;
pub mod loader;
pub mod merge;
pub mod parsers;
pub mod pipeline;
pub mod resolve;
pub mod tables;
pub mod utils;

pub use pipeline::{GenerateOutput, GeneratedMaterial, extractor_for, generate};
pub use tables::Tables;
