//! Property inference: raw documented types to coarse types, defaults and widgets.

use std::sync::LazyLock;

use regex::Regex;
use serde_json::{Number, Value, json};

use crate::core::data::{
    AttributeSpec, Locale, LocalizedText, PropType, PropertyDescriptor, PropertyLabel, Widget,
};

/// A single quoted literal alternative: `'a'`, `"a"` or `` `a` ``.
static LITERAL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"^(?:'([\w-]+)'|"([\w-]+)"|`([\w-]+)`)$"#).unwrap()
});

/// Two-way binding marker as a trailing `(v-model)` / `(v-model:x)`.
static BINDING_SUFFIX_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(.+?)\s*\(v-model(?::[\w-]+)?\)$").unwrap());

const BINDING_PREFIX: &str = "v-model:";
const BINDING_BARE: &str = "v-model";

/// Default values meaning "no default".
const NO_DEFAULT_MARKERS: &[&str] = &["", "-", "无", "undefined"];

const QUOTES: &[char] = &['\'', '"', '`'];

/// Unify union separators: `<br>` line breaks and markdown-escaped pipes.
fn normalize_union(raw: &str) -> String {
    raw.replace("\\|", "|")
        .replace("<br/>", "|")
        .replace("<br />", "|")
        .replace("<br>", "|")
}

fn alternatives(raw: &str) -> Vec<String> {
    normalize_union(raw)
        .split('|')
        .map(|alt| alt.trim().to_string())
        .filter(|alt| !alt.is_empty())
        .collect()
}

fn is_object_spelling(ty: &str) -> bool {
    matches!(ty, "object" | "array" | "cssproperties")
        || ty.ends_with("[]")
        || ty.starts_with("array<")
        || ty.starts_with("record<")
        || ty.starts_with('{')
        || ty.starts_with('[')
}

/// Infer the coarse type of a raw documented type string.
///
/// Only the first `|` alternative counts. Quoted literals are strings,
/// composite spellings are objects, anything mentioning `function` is a
/// function. Returns `None` when the result is outside the allowed set.
pub fn infer_type(raw: &str) -> Option<PropType> {
    let first = alternatives(raw).into_iter().next()?.to_lowercase();

    if first.contains(QUOTES) {
        return Some(PropType::String);
    }
    if is_object_spelling(&first) {
        return Some(PropType::Object);
    }
    if first.contains("function") {
        return Some(PropType::Function);
    }

    match first.as_str() {
        "string" => Some(PropType::String),
        "number" => Some(PropType::Number),
        "boolean" => Some(PropType::Boolean),
        _ => None,
    }
}

/// Options for a closed union of quoted identifiers: `'a' | 'b'` -> `[a, b]`.
pub fn select_options(raw: &str) -> Option<Vec<String>> {
    let alternatives = alternatives(raw);
    if alternatives.len() < 2 {
        return None;
    }

    let mut options: Vec<String> = Vec::with_capacity(alternatives.len());
    for alt in &alternatives {
        let caps = LITERAL_REGEX.captures(alt)?;
        let value = caps
            .iter()
            .skip(1)
            .flatten()
            .next()
            .map(|m| m.as_str().to_string())?;
        if !options.contains(&value) {
            options.push(value);
        }
    }
    Some(options)
}

/// Parse a documented default by the property's coarse type.
///
/// Placeholders and anything unparsable give `None`. A non-string default is
/// kept only when its JSON kind agrees with `ty`.
pub fn parse_default(raw: Option<&Value>, ty: PropType) -> Option<Value> {
    match raw? {
        Value::String(text) => parse_default_text(text, ty),
        Value::Bool(b) if ty == PropType::Boolean => Some(Value::Bool(*b)),
        Value::Number(n) if ty == PropType::Number => Some(Value::Number(n.clone())),
        value @ (Value::Object(_) | Value::Array(_)) if ty == PropType::Object => {
            Some(value.clone())
        }
        _ => None,
    }
}

fn parse_default_text(raw: &str, ty: PropType) -> Option<Value> {
    let text = raw.trim();
    if NO_DEFAULT_MARKERS.contains(&text) {
        return None;
    }

    match ty {
        PropType::Boolean => {
            if text.contains("true") {
                Some(Value::Bool(true))
            } else if text.contains("false") {
                Some(Value::Bool(false))
            } else {
                None
            }
        }
        PropType::Number => parse_number(text.trim_matches(QUOTES).trim()),
        PropType::Object => serde_json::from_str(text.trim_matches('`').trim()).ok(),
        PropType::String => {
            let stripped: String = text.chars().filter(|c| !QUOTES.contains(c)).collect();
            let stripped = stripped.trim();
            if stripped.is_empty() {
                None
            } else {
                Some(Value::String(stripped.to_string()))
            }
        }
        PropType::Function => None,
    }
}

fn parse_number(text: &str) -> Option<Value> {
    let n: f64 = text.parse().ok()?;
    if n.fract() == 0.0 && n.abs() < i64::MAX as f64 {
        return Some(Value::from(n as i64));
    }
    Number::from_f64(n).map(Value::Number)
}

/// Editor widget for a coarse type.
pub fn widget_for(ty: PropType, options: Option<&[String]>) -> Widget {
    match ty {
        PropType::Boolean => Widget::new("MetaSwitch"),
        PropType::String => match options {
            Some(options) => Widget::new("MetaSelect").with_prop(
                "options",
                Value::Array(
                    options
                        .iter()
                        .map(|o| json!({ "label": o, "value": o }))
                        .collect(),
                ),
            ),
            None => Widget::new("MetaInput"),
        },
        PropType::Number => Widget::new("MetaNumber"),
        PropType::Object => Widget::new("MetaCodeEditor").with_prop("language", json!("json")),
        PropType::Function => {
            Widget::new("MetaCodeEditor").with_prop("language", json!("javascript"))
        }
    }
}

/// Strip a two-way binding marker. Returns the property name and whether
/// the attribute is two-way bound.
pub fn strip_binding(name: &str) -> (String, bool) {
    let name = name.trim();
    if name == BINDING_BARE {
        return ("value".to_string(), true);
    }
    if let Some(rest) = name.strip_prefix(BINDING_PREFIX) {
        return (rest.trim().to_string(), true);
    }
    if let Some(caps) = BINDING_SUFFIX_REGEX.captures(name) {
        return (caps[1].to_string(), true);
    }
    (name.to_string(), false)
}

impl PropertyDescriptor {
    pub fn new(
        name: &str,
        prop_type: PropType,
        default_value: Option<Value>,
        description: LocalizedText,
        locales: &[Locale],
        options: Option<&[String]>,
    ) -> Self {
        Self {
            property: name.to_string(),
            label: PropertyLabel {
                text: LocalizedText::uniform(locales, name),
            },
            description: description.restrict(locales),
            required: false,
            read_only: false,
            disabled: false,
            cols: 12,
            label_position: "top".to_string(),
            prop_type,
            default_value,
            widget: widget_for(prop_type, options),
            device: Vec::new(),
            bindable: false,
        }
    }
}

/// Build the editor property for an attribute, or `None` if its type is
/// outside the allowed set.
pub fn build_property(attr: &AttributeSpec, locales: &[Locale]) -> Option<PropertyDescriptor> {
    let prop_type = infer_type(&attr.value.type_name)?;
    let (name, bindable) = strip_binding(&attr.name);
    let options = match prop_type {
        PropType::String => select_options(&attr.value.type_name),
        _ => None,
    };
    let default_value = parse_default(attr.default.as_ref(), prop_type);

    let mut property = PropertyDescriptor::new(
        &name,
        prop_type,
        default_value,
        attr.description.clone(),
        locales,
        options.as_deref(),
    );
    property.bindable = bindable;
    Some(property)
}
