//! Type index loading.
//!
//! The extraction of attributes, events and slots from component sources is
//! done by an external tool. `TypeExtractor` is the seam: one call per locale,
//! run to completion before its index is read.

use std::{
    path::{Path, PathBuf},
    process::Command,
};

use anyhow::{Context, Result, bail};

use super::data::{Locale, TypeIndex};
use super::parsers::web_types::{WEB_TYPES_FILE, load_web_types};

pub trait TypeExtractor {
    fn extract(&self, locale: Locale) -> Result<TypeIndex>;
}

/// Reads indices already generated under `<metadata_dir>/<locale>/web-types.json`.
#[derive(Debug, Clone)]
pub struct WebTypesFiles {
    metadata_dir: PathBuf,
}

impl WebTypesFiles {
    pub fn new(metadata_dir: impl Into<PathBuf>) -> Self {
        Self {
            metadata_dir: metadata_dir.into(),
        }
    }

    pub fn locale_dir(&self, locale: Locale) -> PathBuf {
        self.metadata_dir.join(locale.tag())
    }

    pub fn index_path(&self, locale: Locale) -> PathBuf {
        self.locale_dir(locale).join(WEB_TYPES_FILE)
    }
}

impl TypeExtractor for WebTypesFiles {
    fn extract(&self, locale: Locale) -> Result<TypeIndex> {
        let path = self.index_path(locale);
        if !path.exists() {
            bail!(
                "Type index '{}' does not exist.\n\
                 Hint: Run the type extractor first or set 'extractor' in .matgenrc.json.",
                path.display()
            );
        }
        load_web_types(&path, locale)
    }
}

/// Runs the configured extraction tool for a locale, then reads what it wrote.
///
/// `{locale}` and `{outDir}` in `args` are replaced before the call.
#[derive(Debug, Clone)]
pub struct CommandExtractor {
    program: String,
    args: Vec<String>,
    working_dir: PathBuf,
    files: WebTypesFiles,
}

impl CommandExtractor {
    pub fn new(
        program: impl Into<String>,
        args: Vec<String>,
        working_dir: &Path,
        files: WebTypesFiles,
    ) -> Self {
        Self {
            program: program.into(),
            args,
            working_dir: working_dir.to_path_buf(),
            files,
        }
    }

    fn expand_args(&self, locale: Locale) -> Vec<String> {
        let out_dir = self.files.locale_dir(locale);
        let out_dir = out_dir.to_string_lossy();
        self.args
            .iter()
            .map(|arg| {
                arg.replace("{locale}", locale.tag())
                    .replace("{outDir}", &out_dir)
            })
            .collect()
    }
}

impl TypeExtractor for CommandExtractor {
    fn extract(&self, locale: Locale) -> Result<TypeIndex> {
        let args = self.expand_args(locale);
        let status = Command::new(&self.program)
            .args(&args)
            .current_dir(&self.working_dir)
            .status()
            .with_context(|| format!("Failed to start type extractor '{}'", self.program))?;

        if !status.success() {
            bail!(
                "Type extractor '{}' failed for locale {} ({})",
                self.program,
                locale,
                status
            );
        }

        self.files.extract(locale)
    }
}
