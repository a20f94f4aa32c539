use std::{
    env,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};

use super::{CommandResult, CommandSummary, GenerateSummary, MaterialRow};
use crate::cli::args::{CommonArgs, GenerateArgs};
use crate::config::{Config, load_config};
use crate::core::data::Locale;
use crate::core::{Tables, extractor_for};
use crate::passes::default_passes;
use crate::writer::MaterialWriter;

/// Apply command-line overrides on top of the loaded config.
///
/// Override paths are relative to the working directory, so they are made
/// absolute before being joined onto the config root.
fn apply_overrides(config: &mut Config, common: &CommonArgs, cwd: &Path) {
    let absolute = |path: &PathBuf| cwd.join(path).to_string_lossy().into_owned();

    if let Some(locale) = common.locale {
        config.locale = locale;
    }
    if let Some(docs_root) = &common.docs_root {
        config.docs_root = absolute(docs_root);
    }
    if let Some(metadata_dir) = &common.metadata_dir {
        config.metadata_dir = absolute(metadata_dir);
    }
    if let Some(output_dir) = &common.output_dir {
        config.output_dir = absolute(output_dir);
    }
}

pub fn generate(args: GenerateArgs) -> Result<CommandResult> {
    let cwd = env::current_dir().context("Failed to get current directory")?;
    let loaded = load_config(&cwd)?;
    let mut config = loaded.config;
    apply_overrides(&mut config, &args.common, &cwd);

    let tables = Tables::default();
    let extractor = extractor_for(&config, &loaded.root);
    let output = crate::core::generate(
        &config,
        &loaded.root,
        &tables,
        extractor.as_ref(),
        &default_passes(),
    )?;

    let writer = MaterialWriter::new(loaded.root.join(&config.output_dir));
    if !args.dry_run {
        writer.write_all(output.materials.iter().map(|m| &m.material))?;
    }

    let primary = config
        .locale
        .locales()
        .first()
        .copied()
        .unwrap_or(Locale::ZhCn);
    let rows = output
        .materials
        .iter()
        .map(|m| MaterialRow::new(m, primary))
        .collect();

    Ok(CommandResult {
        summary: CommandSummary::Generate(GenerateSummary {
            rows,
            docs_read: output.docs_read,
            tags_seen: output.tags_seen,
            output_dir: writer.dir().to_path_buf(),
            dry_run: args.dry_run,
        }),
        issues: output.issues,
    })
}
