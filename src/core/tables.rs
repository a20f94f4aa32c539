//! Static lookup tables driving reconciliation, snippets and post-processing.
//!
//! `Tables::default()` holds the compiled-in data for ant-design-vue. Every
//! stage takes `&Tables` explicitly so tests can substitute fixtures.

use std::collections::{BTreeMap, HashMap};

use serde_json::{Value, json};

use super::data::{LocalizedText, PropType};

/// Property injected or patched on a specific component after generation.
#[derive(Debug, Clone, PartialEq)]
pub struct PropertyPatch {
    pub component: String,
    pub property: String,
    pub prop_type: PropType,
    pub default_value: Option<Value>,
    pub description: LocalizedText,
}

#[derive(Debug, Clone)]
pub struct Tables {
    /// Component titles or tag names excluded from processing entirely.
    pub ignored: Vec<String>,
    /// Tags whose kebab form does not follow from the documented title.
    pub exact_aliases: BTreeMap<String, String>,
    /// Sub-component suffixes stripped to find the parent component.
    pub suffixes: Vec<String>,
    /// Composite tags mapped to the tag they should resolve as.
    pub tag_overrides: BTreeMap<String, String>,
    /// Usage templates keyed by component title.
    pub snippets: HashMap<String, Value>,
    pub modals: Vec<String>,
    pub containers: Vec<String>,
    pub default_slot_components: Vec<String>,
    pub hidden: Vec<String>,
    /// Generated component id -> exported component id.
    pub renames: BTreeMap<String, String>,
    pub property_patches: Vec<PropertyPatch>,
}

impl Tables {
    /// Tables with every entry empty.
    pub fn empty() -> Self {
        Self {
            ignored: Vec::new(),
            exact_aliases: BTreeMap::new(),
            suffixes: Vec::new(),
            tag_overrides: BTreeMap::new(),
            snippets: HashMap::new(),
            modals: Vec::new(),
            containers: Vec::new(),
            default_slot_components: Vec::new(),
            hidden: Vec::new(),
            renames: BTreeMap::new(),
            property_patches: Vec::new(),
        }
    }
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn pairs(items: &[(&str, &str)]) -> BTreeMap<String, String> {
    items
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

fn bilingual(zh: &str, en: &str) -> LocalizedText {
    LocalizedText {
        zh_cn: Some(zh.to_string()),
        en_us: Some(en.to_string()),
    }
}

fn text_child(text: &str) -> Value {
    json!({
        "componentName": "Text",
        "props": { "text": text }
    })
}

fn default_snippets() -> HashMap<String, Value> {
    let mut snippets = HashMap::new();
    snippets.insert(
        "Button".to_string(),
        json!({ "props": { "type": "primary" }, "children": [text_child("按钮文本")] }),
    );
    snippets.insert(
        "Card".to_string(),
        json!({ "props": { "title": "卡片标题" }, "children": [text_child("卡片内容")] }),
    );
    snippets.insert(
        "Alert".to_string(),
        json!({ "props": { "message": "提示信息", "type": "info" } }),
    );
    snippets.insert(
        "Tag".to_string(),
        json!({ "props": { "color": "blue" }, "children": [text_child("标签")] }),
    );
    snippets.insert(
        "Input".to_string(),
        json!({ "props": { "placeholder": "请输入" } }),
    );
    snippets.insert(
        "Modal".to_string(),
        json!({ "props": { "title": "对话框标题", "open": false }, "children": [text_child("对话框内容")] }),
    );
    snippets.insert(
        "Space".to_string(),
        json!({
            "children": [
                { "componentName": "AButton", "children": [text_child("按钮一")] },
                { "componentName": "AButton", "children": [text_child("按钮二")] }
            ]
        }),
    );
    snippets.insert(
        "Row".to_string(),
        json!({
            "props": { "gutter": 16 },
            "children": [
                { "componentName": "ACol", "props": { "span": 12 } },
                { "componentName": "ACol", "props": { "span": 12 } }
            ]
        }),
    );
    snippets
}

impl Default for Tables {
    fn default() -> Self {
        Self {
            ignored: strings(&["ConfigProvider", "locale-provider", "style-provider", "App"]),
            exact_aliases: pairs(&[("qrcode", "QRCode")]),
            suffixes: strings(&[
                "step",
                "item",
                "panel",
                "group",
                "divider",
                "title",
                "paragraph",
                "text",
                "link",
                "button",
                "search",
                "password",
                "textarea",
                "meta",
                "separator",
                "countdown",
                "tab-pane",
                "radio-button",
                "item-group",
                "preview-group",
                "range-picker",
                "option",
                "opt-group",
                "node",
                "file",
                "ribbon",
                "sub-menu",
                "header",
                "footer",
                "content",
                "sider",
                "column",
                "column-group",
            ]),
            tag_overrides: pairs(&[
                ("radio-radio-button", "radio-button"),
                ("radio-radio-group", "radio-group"),
                ("checkbox-checkbox-group", "checkbox-group"),
                ("input-input-search", "input-search"),
                ("input-input-password", "input-password"),
                ("image-image-preview-group", "image-preview-group"),
            ]),
            snippets: default_snippets(),
            modals: strings(&["AModal", "ADrawer"]),
            containers: strings(&[
                "ACard",
                "ACol",
                "ARow",
                "ASpace",
                "AFlex",
                "ALayout",
                "ALayoutHeader",
                "ALayoutContent",
                "ALayoutFooter",
                "ALayoutSider",
                "AForm",
                "AFormItem",
                "ATabPane",
                "ACollapsePanel",
            ]),
            default_slot_components: strings(&[
                "AButton",
                "ACard",
                "ASpace",
                "AFlex",
                "ACol",
                "ARow",
                "AModal",
                "ADrawer",
                "ATabPane",
                "ACollapsePanel",
                "AFormItem",
                "ALayoutContent",
                "ATag",
            ]),
            hidden: strings(&[
                "ASelectOption",
                "ASelectOptGroup",
                "ATableColumn",
                "ATableColumnGroup",
                "ATreeNode",
                "AMentionsOption",
            ]),
            renames: pairs(&[
                ("AInputTextarea", "ATextarea"),
                ("AMenuSubMenu", "ASubMenu"),
                ("ADatePickerRangePicker", "ARangePicker"),
                ("ATabsTabPane", "ATabPane"),
                ("ATreeTreeNode", "ATreeNode"),
            ]),
            property_patches: vec![
                PropertyPatch {
                    component: "AModal".to_string(),
                    property: "open".to_string(),
                    prop_type: PropType::Boolean,
                    default_value: Some(json!(false)),
                    description: bilingual("对话框是否可见", "Whether the modal dialog is visible"),
                },
                PropertyPatch {
                    component: "ADrawer".to_string(),
                    property: "open".to_string(),
                    prop_type: PropType::Boolean,
                    default_value: Some(json!(false)),
                    description: bilingual("抽屉是否可见", "Whether the drawer is visible"),
                },
                PropertyPatch {
                    component: "AButton".to_string(),
                    property: "type".to_string(),
                    prop_type: PropType::String,
                    default_value: Some(json!("default")),
                    description: bilingual("按钮类型", "Button type"),
                },
                PropertyPatch {
                    component: "ATextarea".to_string(),
                    property: "value".to_string(),
                    prop_type: PropType::String,
                    default_value: None,
                    description: bilingual("输入框内容", "Input content"),
                },
            ],
        }
    }
}
