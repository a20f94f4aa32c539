use std::collections::{BTreeMap, HashSet};

use serde_json::Map;

use crate::core::data::{
    EventDescriptor, EventParam, EventSpec, FunctionInfo, Locale, LocalizedText, PropType,
    PropertyDescriptor,
};
use crate::core::utils::capitalize_first;

/// Editor key for an event: `click` -> `onClick`, `update:value` -> `onUpdate:value`.
pub fn event_key(name: &str) -> String {
    format!("on{}", capitalize_first(name))
}

fn update_event_description(name: &str) -> LocalizedText {
    LocalizedText {
        zh_cn: Some(format!("双向绑定的 {} 值改变时触发", name)),
        en_us: Some(format!("Triggered when the two-way bound {} changes", name)),
    }
}

fn update_param_description(name: &str) -> LocalizedText {
    LocalizedText {
        zh_cn: Some(format!("双向绑定的 {} 值", name)),
        en_us: Some(format!("The two-way bound {} value", name)),
    }
}

fn event_descriptor(
    key: &str,
    description: LocalizedText,
    params: Vec<EventParam>,
    locales: &[Locale],
) -> EventDescriptor {
    EventDescriptor {
        label: LocalizedText::uniform(locales, key),
        description: description.restrict(locales),
        kind: "event".to_string(),
        function_info: FunctionInfo {
            params,
            returns: Map::new(),
        },
        default_value: String::new(),
    }
}

/// Declared events plus an `update:<name>` event for every two-way bound
/// property. A declared event wins over a synthesized one with the same key.
pub fn build_events(
    events: &[EventSpec],
    properties: &[PropertyDescriptor],
    locales: &[Locale],
) -> BTreeMap<String, EventDescriptor> {
    let mut built = BTreeMap::new();

    for event in events {
        let key = event_key(&event.name);
        built.entry(key.clone()).or_insert_with(|| {
            event_descriptor(&key, event.description.clone(), Vec::new(), locales)
        });
    }

    for property in properties.iter().filter(|p| p.bindable) {
        let key = event_key(&format!("update:{}", property.property));
        built.entry(key.clone()).or_insert_with(|| {
            let param = EventParam {
                name: property.property.clone(),
                param_type: property.prop_type,
                default_value: String::new(),
                description: update_param_description(&property.property).restrict(locales),
            };
            event_descriptor(
                &key,
                update_event_description(&property.property),
                vec![param],
                locales,
            )
        });
    }

    built
}

/// Drop function-typed properties shadowed by a declared event of the same
/// key. Synthesized `update:` events never shadow anything.
pub fn remove_shadowed_callbacks(
    properties: &mut Vec<PropertyDescriptor>,
    declared: &[EventSpec],
) {
    let keys: HashSet<String> = declared.iter().map(|e| event_key(&e.name)).collect();
    properties.retain(|p| {
        let shadowed = keys.contains(&p.property) || keys.contains(&event_key(&p.property));
        !(shadowed && p.prop_type == PropType::Function)
    });
}
