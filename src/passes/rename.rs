use super::Pass;
use crate::core::data::MaterialDescriptor;
use crate::core::tables::Tables;

/// Replace generated component ids that differ from the exported names.
///
/// The export name and snippet follow the new id. The component prefix is
/// whatever the old id carried in front of its export name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenameComponents;

impl Pass for RenameComponents {
    fn name(&self) -> &'static str {
        "rename"
    }

    fn apply(&self, material: &mut MaterialDescriptor, tables: &Tables) {
        let Some(renamed) = tables.renames.get(&material.component) else {
            return;
        };

        let prefix = material
            .component
            .strip_suffix(material.npm.export_name.as_str())
            .unwrap_or("");
        let export_name = renamed.strip_prefix(prefix).unwrap_or(renamed).to_string();

        for snippet in &mut material.snippets {
            if snippet.snippet_name == material.component {
                snippet.snippet_name = renamed.clone();
            }
        }
        material.component = renamed.clone();
        material.npm.export_name = export_name;
    }
}
