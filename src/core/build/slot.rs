use std::collections::BTreeMap;

use crate::core::data::{Locale, LocalizedText, SlotDescriptor, SlotSpec};

pub const DEFAULT_SLOT: &str = "default";

/// `default`, `default(xxx)` and the like all name the default slot.
pub fn slot_name(name: &str) -> &str {
    if name.starts_with(DEFAULT_SLOT) {
        DEFAULT_SLOT
    } else {
        name
    }
}

pub fn slot_descriptor(
    name: &str,
    description: &LocalizedText,
    locales: &[Locale],
) -> SlotDescriptor {
    SlotDescriptor {
        label: LocalizedText::uniform(locales, name),
        description: description.restrict(locales),
    }
}

pub fn default_slot(locales: &[Locale]) -> SlotDescriptor {
    let description = LocalizedText {
        zh_cn: Some("自定义默认内容".to_string()),
        en_us: Some("Custom default content".to_string()),
    };
    slot_descriptor(DEFAULT_SLOT, &description, locales)
}

pub fn build_slots(slots: &[SlotSpec], locales: &[Locale]) -> BTreeMap<String, SlotDescriptor> {
    let mut built = BTreeMap::new();
    for slot in slots {
        let name = slot_name(&slot.name);
        built
            .entry(name.to_string())
            .or_insert_with(|| slot_descriptor(name, &slot.description, locales));
    }
    built
}
