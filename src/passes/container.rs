use super::Pass;
use crate::core::data::MaterialDescriptor;
use crate::core::tables::Tables;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MarkContainers;

impl Pass for MarkContainers {
    fn name(&self) -> &'static str {
        "mark-containers"
    }

    fn apply(&self, material: &mut MaterialDescriptor, tables: &Tables) {
        if tables.containers.contains(&material.component) {
            material.configure.is_container = true;
        }
    }
}
