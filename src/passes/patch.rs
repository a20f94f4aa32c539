use super::Pass;
use crate::core::build::widget_for;
use crate::core::data::{Locale, MaterialDescriptor, PropertyDescriptor};
use crate::core::tables::{PropertyPatch, Tables};

/// Inject or correct properties the type index gets wrong.
///
/// An existing property takes the patched type (and default, when the patch
/// has one); its description is only filled where missing. A missing property
/// is appended to the first group.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PatchProperties;

fn patch_existing(property: &mut PropertyDescriptor, patch: &PropertyPatch, locales: &[Locale]) {
    if property.prop_type != patch.prop_type {
        property.prop_type = patch.prop_type;
        property.widget = widget_for(patch.prop_type, None);
        if patch.default_value.is_none() {
            property.default_value = None;
        }
    }
    if patch.default_value.is_some() {
        property.default_value = patch.default_value.clone();
    }
    property
        .description
        .fill_from(&patch.description.restrict(locales));
}

impl Pass for PatchProperties {
    fn name(&self) -> &'static str {
        "patch-properties"
    }

    fn apply(&self, material: &mut MaterialDescriptor, tables: &Tables) {
        let locales = material.locales();
        let component = material.component.clone();
        let patches = tables
            .property_patches
            .iter()
            .filter(|p| p.component == component);

        for patch in patches {
            if let Some(property) = material.property_mut(&patch.property) {
                patch_existing(property, patch, &locales);
                continue;
            }

            let property = PropertyDescriptor::new(
                &patch.property,
                patch.prop_type,
                patch.default_value.clone(),
                patch.description.clone(),
                &locales,
                None,
            );
            if let Some(group) = material.schema.properties.first_mut() {
                group.content.push(property);
            }
        }
    }
}
