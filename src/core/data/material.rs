//! Material descriptor: the JSON record consumed by the visual page editor.

use std::collections::BTreeMap;

use serde::Serialize;
use serde_json::{Map, Value};

use super::{Locale, LocalizedText};

/// Coarse property type. Anything outside this set is dropped from output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PropType {
    String,
    Number,
    Boolean,
    Object,
    Function,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MaterialDescriptor {
    pub id: usize,
    pub version: String,
    pub name: LocalizedText,
    pub component: String,
    pub icon: String,
    pub description: LocalizedText,
    pub doc_url: String,
    pub screenshot: String,
    pub tags: String,
    pub keywords: String,
    pub dev_mode: String,
    pub npm: NpmInfo,
    pub group: String,
    pub category: String,
    pub configure: Configure,
    pub schema: Schema,
    pub snippets: Vec<Snippet>,
}

impl MaterialDescriptor {
    /// Locales this material carries text for.
    pub fn locales(&self) -> Vec<Locale> {
        self.name.locales()
    }

    pub fn properties(&self) -> impl Iterator<Item = &PropertyDescriptor> {
        self.schema
            .properties
            .iter()
            .flat_map(|group| group.content.iter())
    }

    pub fn property_mut(&mut self, name: &str) -> Option<&mut PropertyDescriptor> {
        self.schema
            .properties
            .iter_mut()
            .flat_map(|group| group.content.iter_mut())
            .find(|prop| prop.property == name)
    }

    pub fn property_count(&self) -> usize {
        self.properties().count()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NpmInfo {
    pub package: String,
    pub version: String,
    pub script: String,
    pub css: String,
    pub dependencies: Option<Value>,
    pub export_name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Configure {
    #[serde(rename = "loop")]
    pub loop_: bool,
    pub condition: bool,
    pub styles: bool,
    pub is_container: bool,
    pub is_modal: bool,
    pub is_popper: bool,
    pub nesting_rule: NestingRule,
    pub is_null_node: bool,
    pub is_layout: bool,
    pub root_selector: String,
    pub shortcuts: Shortcuts,
    pub context_menu: ContextMenu,
    pub invalidity: Vec<String>,
    pub click_capture: bool,
    pub framework: String,
}

/// Context-menu actions offered for ordinary components.
///
/// `bindEevent` is the editor's own key spelling.
pub const DEFAULT_CONTEXT_ACTIONS: &[&str] = &[
    "copy",
    "remove",
    "insert",
    "updateAttr",
    "bindEevent",
    "createBlock",
];

impl Default for Configure {
    fn default() -> Self {
        Self {
            loop_: true,
            condition: true,
            styles: true,
            is_container: false,
            is_modal: false,
            is_popper: false,
            nesting_rule: NestingRule::default(),
            is_null_node: false,
            is_layout: false,
            root_selector: String::new(),
            shortcuts: Shortcuts::default(),
            context_menu: ContextMenu {
                actions: DEFAULT_CONTEXT_ACTIONS.iter().map(|s| s.to_string()).collect(),
                disable: Vec::new(),
            },
            invalidity: vec![String::new()],
            click_capture: true,
            framework: "Vue".to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NestingRule {
    pub child_whitelist: String,
    pub parent_whitelist: String,
    pub descendant_blacklist: String,
    pub ancestor_whitelist: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Shortcuts {
    pub properties: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ContextMenu {
    pub actions: Vec<String>,
    pub disable: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Schema {
    pub properties: Vec<PropertyGroup>,
    pub events: BTreeMap<String, EventDescriptor>,
    pub slots: BTreeMap<String, SlotDescriptor>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PropertyGroup {
    pub name: String,
    pub label: LocalizedText,
    pub content: Vec<PropertyDescriptor>,
    pub description: LocalizedText,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PropertyDescriptor {
    pub property: String,
    pub label: PropertyLabel,
    pub description: LocalizedText,
    pub required: bool,
    pub read_only: bool,
    pub disabled: bool,
    pub cols: u8,
    pub label_position: String,
    #[serde(rename = "type")]
    pub prop_type: PropType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_value: Option<Value>,
    pub widget: Widget,
    pub device: Vec<String>,
    /// Two-way bound; drives the synthesized `update:<name>` event.
    #[serde(skip)]
    pub bindable: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PropertyLabel {
    pub text: LocalizedText,
}

/// Editor-side input control for a property.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Widget {
    pub component: String,
    pub props: Map<String, Value>,
}

impl Widget {
    pub fn new(component: &str) -> Self {
        Self {
            component: component.to_string(),
            props: Map::new(),
        }
    }

    pub fn with_prop(mut self, key: &str, value: Value) -> Self {
        self.props.insert(key.to_string(), value);
        self
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EventDescriptor {
    pub label: LocalizedText,
    pub description: LocalizedText,
    #[serde(rename = "type")]
    pub kind: String,
    pub function_info: FunctionInfo,
    pub default_value: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct FunctionInfo {
    pub params: Vec<EventParam>,
    pub returns: Map<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EventParam {
    pub name: String,
    #[serde(rename = "type")]
    pub param_type: PropType,
    pub default_value: String,
    pub description: LocalizedText,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SlotDescriptor {
    pub label: LocalizedText,
    pub description: LocalizedText,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Snippet {
    pub name: LocalizedText,
    pub icon: String,
    pub screenshot: String,
    pub snippet_name: String,
    pub schema: Value,
}
