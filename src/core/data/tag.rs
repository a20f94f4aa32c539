use std::collections::BTreeMap;

use serde_json::Value;

use super::LocalizedText;

/// One tag from the extracted type index.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TagDescriptor {
    pub name: String,
    pub attributes: Vec<AttributeSpec>,
    pub events: Vec<EventSpec>,
    pub slots: Vec<SlotSpec>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct AttributeSpec {
    pub name: String,
    pub description: LocalizedText,
    /// Raw default as documented. Usually a string, but any JSON value is kept.
    pub default: Option<Value>,
    pub value: ValueSpec,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ValueSpec {
    /// Raw type string, possibly a `|` union.
    pub type_name: String,
    pub kind: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct EventSpec {
    pub name: String,
    pub description: LocalizedText,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SlotSpec {
    pub name: String,
    pub description: LocalizedText,
}

/// Entries that are unioned by name when indices are merged.
pub trait Named {
    fn name(&self) -> &str;
    fn description(&self) -> &LocalizedText;
    fn description_mut(&mut self) -> &mut LocalizedText;
}

impl Named for AttributeSpec {
    fn name(&self) -> &str {
        &self.name
    }

    fn description(&self) -> &LocalizedText {
        &self.description
    }

    fn description_mut(&mut self) -> &mut LocalizedText {
        &mut self.description
    }
}

impl Named for EventSpec {
    fn name(&self) -> &str {
        &self.name
    }

    fn description(&self) -> &LocalizedText {
        &self.description
    }

    fn description_mut(&mut self) -> &mut LocalizedText {
        &mut self.description
    }
}

impl Named for SlotSpec {
    fn name(&self) -> &str {
        &self.name
    }

    fn description(&self) -> &LocalizedText {
        &self.description
    }

    fn description_mut(&mut self) -> &mut LocalizedText {
        &mut self.description
    }
}

/// Tag-indexed table produced by the type extractor.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TypeIndex {
    pub version: String,
    pub tags: BTreeMap<String, TagDescriptor>,
}

impl TypeIndex {
    pub fn get(&self, tag: &str) -> Option<&TagDescriptor> {
        self.tags.get(tag)
    }
}
