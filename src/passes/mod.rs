//! Post-processing passes over the generated materials.
//!
//! Each pass is a map over every material, driven by `Tables`. Passes run in
//! a fixed order because later ones key on identities earlier ones change
//! (patches target renamed components).
//!
//! ## Module Structure
//!
//! - `rename`: component id fixes (`AInputTextarea` -> `ATextarea`)
//! - `patch`: injected or corrected properties
//! - `modal`: modal-style placement and restricted context menu
//! - `container`: children-accepting components
//! - `default_slot`: default slot entry where the index omits it
//! - `hidden`: components kept off the palette

pub mod container;
pub mod default_slot;
pub mod hidden;
pub mod modal;
pub mod patch;
pub mod rename;

use enum_dispatch::enum_dispatch;

use crate::core::data::MaterialDescriptor;
use crate::core::tables::Tables;

pub use container::MarkContainers;
pub use default_slot::InjectDefaultSlots;
pub use hidden::HideComponents;
pub use modal::MarkModals;
pub use patch::PatchProperties;
pub use rename::RenameComponents;

#[enum_dispatch]
pub trait Pass {
    /// Short identifier used in verbose output.
    fn name(&self) -> &'static str;

    fn apply(&self, material: &mut MaterialDescriptor, tables: &Tables);
}

#[enum_dispatch(Pass)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PostPass {
    RenameComponents,
    PatchProperties,
    MarkModals,
    MarkContainers,
    InjectDefaultSlots,
    HideComponents,
}

/// Passes in application order.
pub fn default_passes() -> Vec<PostPass> {
    vec![
        RenameComponents.into(),
        PatchProperties.into(),
        MarkModals.into(),
        MarkContainers.into(),
        InjectDefaultSlots.into(),
        HideComponents.into(),
    ]
}

pub fn run_passes(
    materials: Vec<MaterialDescriptor>,
    passes: &[PostPass],
    tables: &Tables,
) -> Vec<MaterialDescriptor> {
    passes.iter().fold(materials, |mut materials, pass| {
        for material in &mut materials {
            pass.apply(material, tables);
        }
        materials
    })
}
