//! Core data types used across all pipeline phases.
//!
//! ## Module Structure
//!
//! - `locale`: Locale, LocaleSelection and LocalizedText
//! - `doc`: DocComponent read from documentation front-matter
//! - `tag`: TagDescriptor and the TypeIndex produced by the type extractor
//! - `material`: MaterialDescriptor, the generated output record

pub mod doc;
pub mod locale;
pub mod material;
pub mod tag;

pub use doc::DocComponent;
pub use locale::{Locale, LocaleSelection, LocalizedText};
pub use material::{
    Configure, ContextMenu, EventDescriptor, EventParam, FunctionInfo, MaterialDescriptor,
    NestingRule, NpmInfo, PropType, PropertyDescriptor, PropertyGroup, PropertyLabel, Schema,
    Shortcuts, SlotDescriptor, Snippet, Widget,
};
pub use tag::{AttributeSpec, EventSpec, Named, SlotSpec, TagDescriptor, TypeIndex, ValueSpec};
