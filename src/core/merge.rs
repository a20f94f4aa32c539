//! Bilingual merge of two type indices.
//!
//! A key-wise outer join on tag name. For tags present in both indices the
//! attributes, events and slots are unioned by `name`: the first occurrence
//! keeps its place and its other fields, and the other locale's description is
//! filled in rather than added as a duplicate entry.

use std::collections::{HashMap, btree_map::Entry};

use super::data::{Named, TagDescriptor, TypeIndex};

/// Merge `secondary` into `primary`. The primary index's version is kept.
pub fn merge_indices(primary: TypeIndex, secondary: TypeIndex) -> TypeIndex {
    let mut merged = primary;
    if merged.version.is_empty() {
        merged.version = secondary.version;
    }

    for (name, tag) in secondary.tags {
        match merged.tags.entry(name) {
            Entry::Occupied(mut entry) => {
                let existing = std::mem::take(entry.get_mut());
                entry.insert(merge_tag(existing, tag));
            }
            Entry::Vacant(entry) => {
                entry.insert(tag);
            }
        }
    }

    merged
}

pub fn merge_tag(primary: TagDescriptor, secondary: TagDescriptor) -> TagDescriptor {
    TagDescriptor {
        name: primary.name,
        attributes: union_by_name(primary.attributes, secondary.attributes),
        events: union_by_name(primary.events, secondary.events),
        slots: union_by_name(primary.slots, secondary.slots),
    }
}

/// Union two lists by `name`, first occurrence wins.
pub fn union_by_name<T: Named>(primary: Vec<T>, secondary: Vec<T>) -> Vec<T> {
    let mut positions: HashMap<String, usize> = HashMap::new();
    let mut merged: Vec<T> = Vec::with_capacity(primary.len() + secondary.len());

    for item in primary.into_iter().chain(secondary) {
        match positions.get(item.name()) {
            Some(&pos) => merged[pos].description_mut().fill_from(item.description()),
            None => {
                positions.insert(item.name().to_string(), merged.len());
                merged.push(item);
            }
        }
    }

    merged
}
