use serde_json::{Map, Value};

use crate::core::data::{LocalizedText, Snippet};
use crate::core::tables::Tables;

/// Usage snippet for a component, with the template looked up by title.
/// Components without a template get an empty schema.
pub fn build_snippet(
    title: &str,
    component: &str,
    name: &LocalizedText,
    icon: &str,
    tables: &Tables,
) -> Snippet {
    let schema = tables
        .snippets
        .get(title)
        .cloned()
        .unwrap_or_else(|| Value::Object(Map::new()));

    Snippet {
        name: name.clone(),
        icon: icon.to_string(),
        screenshot: String::new(),
        snippet_name: component.to_string(),
        schema,
    }
}
