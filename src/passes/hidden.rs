use super::Pass;
use crate::core::data::MaterialDescriptor;
use crate::core::tables::Tables;

/// Keep non-visual sub-components off the palette by clearing their category.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HideComponents;

impl Pass for HideComponents {
    fn name(&self) -> &'static str {
        "hide-components"
    }

    fn apply(&self, material: &mut MaterialDescriptor, tables: &Tables) {
        if tables.hidden.contains(&material.component) {
            material.category.clear();
        }
    }
}
