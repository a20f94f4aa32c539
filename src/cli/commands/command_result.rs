use std::path::PathBuf;

use crate::core::GeneratedMaterial;
use crate::core::data::Locale;
use crate::core::resolve::MatchKind;
use crate::issues::Issue;

#[derive(Debug)]
pub enum CommandSummary {
    Generate(GenerateSummary),
    Init(InitSummary),
}

/// One row of the verbose material table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MaterialRow {
    pub component: String,
    pub tag: String,
    pub matched_by: String,
    /// Display name in the primary locale.
    pub name: String,
    pub property_count: usize,
    pub event_count: usize,
    pub slot_count: usize,
}

impl MaterialRow {
    pub fn new(generated: &GeneratedMaterial, primary: Locale) -> Self {
        let material = &generated.material;
        let matched_by = match &generated.kind {
            MatchKind::Exact => "exact".to_string(),
            MatchKind::Override { target } => format!("override:{}", target),
            MatchKind::Suffix { suffix } => format!("suffix:{}", suffix),
        };
        Self {
            component: material.component.clone(),
            tag: generated.tag.clone(),
            matched_by,
            name: material.name.get(primary).unwrap_or_default().to_string(),
            property_count: material.property_count(),
            event_count: material.schema.events.len(),
            slot_count: material.schema.slots.len(),
        }
    }
}

#[derive(Debug)]
pub struct GenerateSummary {
    pub rows: Vec<MaterialRow>,
    pub docs_read: usize,
    pub tags_seen: usize,
    pub output_dir: PathBuf,
    pub dry_run: bool,
}

#[derive(Debug)]
pub struct InitSummary {
    pub created: bool,
}

/// Result of running a matgen command.
pub struct CommandResult {
    pub summary: CommandSummary,
    /// Diagnostics collected during the run. Never affects the exit code.
    pub issues: Vec<Issue>,
}
