use super::Pass;
use crate::core::data::MaterialDescriptor;
use crate::core::tables::Tables;

/// Context-menu actions kept for modal-style components.
pub const MODAL_CONTEXT_ACTIONS: &[&str] = &["copy", "remove", "updateAttr", "bindEevent"];

/// Context-menu actions disabled for modal-style components.
pub const MODAL_DISABLED_ACTIONS: &[&str] = &["insert", "createBlock"];

/// Mark overlay components. They render outside the page flow, take
/// children, and cannot have siblings inserted next to them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MarkModals;

fn to_strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

impl Pass for MarkModals {
    fn name(&self) -> &'static str {
        "mark-modals"
    }

    fn apply(&self, material: &mut MaterialDescriptor, tables: &Tables) {
        if !tables.modals.contains(&material.component) {
            return;
        }

        let configure = &mut material.configure;
        configure.is_modal = true;
        configure.is_container = true;
        configure.is_popper = false;
        configure.loop_ = false;
        configure.context_menu.actions = to_strings(MODAL_CONTEXT_ACTIONS);
        configure.context_menu.disable = to_strings(MODAL_DISABLED_ACTIONS);
    }
}
