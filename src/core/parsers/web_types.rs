use std::{collections::BTreeMap, fs, path::Path};

use anyhow::{Context, Result};
use serde::Deserialize;
use serde_json::Value;

use crate::core::data::{
    AttributeSpec, EventSpec, Locale, LocalizedText, SlotSpec, TagDescriptor, TypeIndex, ValueSpec,
};

/// Output file name written by the type extractor.
pub const WEB_TYPES_FILE: &str = "web-types.json";

#[derive(Debug, Default, Deserialize)]
struct WebTypes {
    #[serde(default)]
    version: String,
    #[serde(default)]
    contributions: Contributions,
}

#[derive(Debug, Default, Deserialize)]
struct Contributions {
    #[serde(default)]
    html: HtmlContributions,
}

#[derive(Debug, Default, Deserialize)]
struct HtmlContributions {
    #[serde(default)]
    tags: Vec<RawTag>,
}

#[derive(Debug, Deserialize)]
struct RawTag {
    name: String,
    #[serde(default)]
    attributes: Vec<RawAttribute>,
    #[serde(default)]
    events: Vec<RawNamed>,
    #[serde(default)]
    slots: Vec<RawNamed>,
}

#[derive(Debug, Deserialize)]
struct RawAttribute {
    name: String,
    #[serde(default)]
    description: String,
    #[serde(default)]
    default: Option<Value>,
    #[serde(default)]
    value: RawValue,
}

#[derive(Debug, Default, Deserialize)]
struct RawValue {
    #[serde(rename = "type", default)]
    type_name: String,
    #[serde(default)]
    kind: Option<String>,
}

#[derive(Debug, Deserialize)]
struct RawNamed {
    name: String,
    #[serde(default)]
    description: String,
}

fn localized(locale: Locale, text: String) -> LocalizedText {
    if text.is_empty() {
        LocalizedText::default()
    } else {
        LocalizedText::new(locale, text)
    }
}

impl RawTag {
    fn into_descriptor(self, locale: Locale) -> TagDescriptor {
        TagDescriptor {
            name: self.name,
            attributes: self
                .attributes
                .into_iter()
                .map(|attr| AttributeSpec {
                    name: attr.name,
                    description: localized(locale, attr.description),
                    default: attr.default.filter(|v| !v.is_null()),
                    value: ValueSpec {
                        type_name: attr.value.type_name,
                        kind: attr.value.kind,
                    },
                })
                .collect(),
            events: self
                .events
                .into_iter()
                .map(|e| EventSpec {
                    name: e.name,
                    description: localized(locale, e.description),
                })
                .collect(),
            slots: self
                .slots
                .into_iter()
                .map(|s| SlotSpec {
                    name: s.name,
                    description: localized(locale, s.description),
                })
                .collect(),
        }
    }
}

/// Parse a web-types document into a tag-indexed table.
///
/// Descriptions are recorded under `locale`. When a tag name repeats, the
/// first entry is kept.
pub fn parse_web_types(content: &str, locale: Locale) -> Result<TypeIndex> {
    let web_types: WebTypes =
        serde_json::from_str(content).context("Failed to parse web-types document")?;

    let mut tags = BTreeMap::new();
    for raw in web_types.contributions.html.tags {
        if tags.contains_key(&raw.name) {
            continue;
        }
        let descriptor = raw.into_descriptor(locale);
        tags.insert(descriptor.name.clone(), descriptor);
    }

    Ok(TypeIndex {
        version: web_types.version,
        tags,
    })
}

pub fn load_web_types(path: &Path, locale: Locale) -> Result<TypeIndex> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read type index: {}", path.display()))?;
    parse_web_types(&content, locale)
        .with_context(|| format!("Invalid type index: {}", path.display()))
}
