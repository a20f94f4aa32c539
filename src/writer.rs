//! Material file output.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::core::data::MaterialDescriptor;

/// Output file for a component: `<dir>/<component>.json`.
pub fn output_path(dir: &Path, component: &str) -> PathBuf {
    dir.join(format!("{}.json", component))
}

/// Writes one pretty-printed JSON file per material into a directory.
pub struct MaterialWriter {
    dir: PathBuf,
}

impl MaterialWriter {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Serialize a material exactly as it will be written.
    ///
    /// Uses 2-space indentation and adds a trailing newline.
    pub fn render(material: &MaterialDescriptor) -> Result<String> {
        let content = serde_json::to_string_pretty(material)
            .with_context(|| format!("Failed to serialize {}", material.component))?;
        Ok(format!("{}\n", content))
    }

    /// Write a single material, replacing any previous file.
    pub fn write(&self, material: &MaterialDescriptor) -> Result<PathBuf> {
        fs::create_dir_all(&self.dir)
            .with_context(|| format!("Failed to create directory: {}", self.dir.display()))?;

        let path = output_path(&self.dir, &material.component);
        fs::write(&path, Self::render(material)?)
            .with_context(|| format!("Failed to write file: {}", path.display()))?;
        Ok(path)
    }

    /// Write every material. Returns the number of files written.
    pub fn write_all<'a>(
        &self,
        materials: impl IntoIterator<Item = &'a MaterialDescriptor>,
    ) -> Result<usize> {
        let mut written = 0;
        for material in materials {
            self.write(material)?;
            written += 1;
        }
        Ok(written)
    }
}
