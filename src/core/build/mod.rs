//! Descriptor builder: one material per resolved (tag, component) pair.
//!
//! ## Module Structure
//!
//! - `property`: type inference, default parsing, widget selection
//! - `event`: declared and synthesized `update:` events, callback de-duplication
//! - `slot`: slot canonicalization
//! - `snippet`: usage templates

pub mod event;
pub mod property;
pub mod slot;
pub mod snippet;

use std::collections::{HashMap, HashSet};

use super::data::{
    Configure, DocComponent, Locale, LocalizedText, MaterialDescriptor, NpmInfo,
    PropertyDescriptor, PropertyGroup, Schema, TagDescriptor,
};
use super::resolve::Resolution;
use super::tables::Tables;
use crate::config::PackageConfig;

pub use event::{build_events, event_key, remove_shadowed_callbacks};
pub use property::{build_property, infer_type, parse_default, select_options, widget_for};
pub use slot::{build_slots, default_slot};
pub use snippet::build_snippet;

/// Shared inputs for building every material of a run.
pub struct BuildContext<'a> {
    /// Requested locales, primary first. Never empty.
    pub locales: &'a [Locale],
    pub version: &'a str,
    pub package: &'a PackageConfig,
    /// Secondary-locale docs keyed by title.
    pub translations: &'a HashMap<String, DocComponent>,
    pub tables: &'a Tables,
}

fn property_group(content: Vec<PropertyDescriptor>, locales: &[Locale]) -> PropertyGroup {
    let label = LocalizedText {
        zh_cn: Some("基础属性".to_string()),
        en_us: Some("Basic properties".to_string()),
    };
    PropertyGroup {
        name: "0".to_string(),
        label: label.restrict(locales),
        content,
        description: LocalizedText::uniform(locales, ""),
    }
}

/// Name and description in every requested locale the docs provide.
fn localized_metadata(doc: &DocComponent, ctx: &BuildContext) -> (LocalizedText, LocalizedText) {
    let mut name = LocalizedText::new(doc.locale, doc.display_name());
    let mut description = LocalizedText::new(doc.locale, doc.description.as_str());

    if let Some(translated) = ctx.translations.get(doc.source_title()) {
        let translated_name = if doc.is_derived() {
            doc.title.as_str()
        } else {
            translated.display_name()
        };
        name.set(translated.locale, translated_name);
        description.set(translated.locale, translated.description.as_str());
    }

    (name.restrict(ctx.locales), description.restrict(ctx.locales))
}

fn build_properties(tag: &TagDescriptor, locales: &[Locale]) -> Vec<PropertyDescriptor> {
    let mut seen = HashSet::new();
    tag.attributes
        .iter()
        .filter_map(|attr| build_property(attr, locales))
        .filter(|prop| seen.insert(prop.property.clone()))
        .collect()
}

pub fn build_material(
    id: usize,
    resolution: &Resolution,
    tag: &TagDescriptor,
    ctx: &BuildContext,
) -> MaterialDescriptor {
    let doc = &resolution.component;
    let locales = ctx.locales;
    let component = format!("{}{}", ctx.package.component_prefix, doc.title);
    let (name, description) = localized_metadata(doc, ctx);
    let icon = doc.icon.clone().unwrap_or_else(|| tag.name.clone());

    let mut properties = build_properties(tag, locales);
    let events = build_events(&tag.events, &properties, locales);
    remove_shadowed_callbacks(&mut properties, &tag.events);
    let slots = build_slots(&tag.slots, locales);

    let snippet = build_snippet(&doc.title, &component, &name, &icon, ctx.tables);

    MaterialDescriptor {
        id,
        version: ctx.version.to_string(),
        name,
        component,
        icon,
        description,
        doc_url: String::new(),
        screenshot: doc.cover.clone().unwrap_or_default(),
        tags: String::new(),
        keywords: String::new(),
        dev_mode: "proCode".to_string(),
        npm: NpmInfo {
            package: ctx.package.name.clone(),
            version: ctx.package.version.clone(),
            script: ctx.package.script_url(),
            css: ctx.package.css_url(),
            dependencies: None,
            export_name: doc.title.clone(),
        },
        group: "component".to_string(),
        category: doc.category.clone(),
        configure: Configure::default(),
        schema: Schema {
            properties: vec![property_group(properties, locales)],
            events,
            slots,
        },
        snippets: vec![snippet],
    }
}
