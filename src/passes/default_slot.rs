use super::Pass;
use crate::core::build::default_slot;
use crate::core::build::slot::DEFAULT_SLOT;
use crate::core::data::MaterialDescriptor;
use crate::core::tables::Tables;

/// Add a `default` slot to listed components whose index omits it.
/// A declared default slot is left as is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InjectDefaultSlots;

impl Pass for InjectDefaultSlots {
    fn name(&self) -> &'static str {
        "inject-default-slots"
    }

    fn apply(&self, material: &mut MaterialDescriptor, tables: &Tables) {
        if !tables.default_slot_components.contains(&material.component) {
            return;
        }
        let locales = material.locales();
        material
            .schema
            .slots
            .entry(DEFAULT_SLOT.to_string())
            .or_insert_with(|| default_slot(&locales));
    }
}
