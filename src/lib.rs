//! Matgen - editor material generator for Vue component libraries
//!
//! Matgen reads a component library's per-locale documentation and the type
//! index produced by an external extractor, reconciles generated tag names
//! with documented components, and writes one JSON material descriptor per
//! component for a low-code page editor.
//!
//! ## Module Structure
//!
//! - `cli`: Command-line interface layer (arguments, commands, console report)
//! - `config`: Configuration file loading and parsing
//! - `core`: Generation engine (read, extract, reconcile, build)
//! - `issues`: Diagnostic types and reporting
//! - `passes`: Post-processing rules applied to generated materials
//! - `writer`: Material JSON output

pub mod cli;
pub mod config;
pub mod core;
pub mod issues;
pub mod passes;
pub mod writer;
