use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Ok, Result};
use glob::Pattern;
use serde::{Deserialize, Serialize};

use crate::core::data::LocaleSelection;

pub const CONFIG_FILE_NAME: &str = ".matgenrc.json";

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    #[serde(default = "default_docs_root")]
    pub docs_root: String,
    #[serde(default = "default_metadata_dir")]
    pub metadata_dir: String,
    #[serde(default = "default_output_dir")]
    pub output_dir: String,
    #[serde(default)]
    pub locale: LocaleSelection,
    #[serde(default)]
    pub ignores: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extractor: Option<ExtractorConfig>,
    #[serde(default)]
    pub package: PackageConfig,
}

/// External tool that regenerates `<metadataDir>/<locale>/web-types.json`.
///
/// `{locale}` and `{outDir}` in `args` are substituted before running.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtractorConfig {
    pub command: String,
    #[serde(default)]
    pub args: Vec<String>,
}

/// The published component library the materials point at.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PackageConfig {
    #[serde(default = "default_package_name")]
    pub name: String,
    #[serde(default = "default_package_version")]
    pub version: String,
    #[serde(default = "default_component_prefix")]
    pub component_prefix: String,
}

fn default_docs_root() -> String {
    "components".to_string()
}

fn default_metadata_dir() -> String {
    "dsl/metadata".to_string()
}

fn default_output_dir() -> String {
    "dsl/materials".to_string()
}

fn default_package_name() -> String {
    "ant-design-vue".to_string()
}

fn default_package_version() -> String {
    "4.0.0".to_string()
}

fn default_component_prefix() -> String {
    "A".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            docs_root: default_docs_root(),
            metadata_dir: default_metadata_dir(),
            output_dir: default_output_dir(),
            locale: LocaleSelection::default(),
            ignores: Vec::new(),
            extractor: None,
            package: PackageConfig::default(),
        }
    }
}

impl Default for PackageConfig {
    fn default() -> Self {
        Self {
            name: default_package_name(),
            version: default_package_version(),
            component_prefix: default_component_prefix(),
        }
    }
}

impl PackageConfig {
    fn unpkg_url(&self, file: &str) -> String {
        format!(
            "https://unpkg.com/browse/{}@{}/dist/{}",
            self.name, self.version, file
        )
    }

    pub fn script_url(&self) -> String {
        self.unpkg_url("antd.esm.min.js")
    }

    pub fn css_url(&self) -> String {
        self.unpkg_url("reset.css")
    }
}

impl Config {
    /// Validate configuration values.
    ///
    /// Returns an error if any glob pattern in `ignores` is invalid or the
    /// extractor command is blank.
    pub fn validate(&self) -> Result<()> {
        for pattern in &self.ignores {
            Pattern::new(pattern)
                .with_context(|| format!("Invalid glob pattern in 'ignores': \"{}\"", pattern))?;
        }

        if let Some(extractor) = &self.extractor
            && extractor.command.trim().is_empty()
        {
            anyhow::bail!("'extractor.command' must not be empty");
        }

        Ok(())
    }

    /// Compiled `ignores` patterns. Call after `validate`.
    pub fn ignore_patterns(&self) -> Result<Vec<Pattern>> {
        self.ignores
            .iter()
            .map(|p| {
                Pattern::new(p)
                    .with_context(|| format!("Invalid glob pattern in 'ignores': \"{}\"", p))
            })
            .collect()
    }
}

pub fn default_config_json() -> Result<String> {
    let config = Config::default();
    serde_json::to_string_pretty(&config).context("Failed to generate default config.")
}

pub fn find_config_file(start_dir: &Path) -> Option<PathBuf> {
    let mut current = start_dir.to_path_buf();

    loop {
        let config_path = current.join(CONFIG_FILE_NAME);
        if config_path.exists() {
            return Some(config_path);
        }
        if current.join(".git").exists() {
            return None;
        }
        if !current.pop() {
            return None;
        }
    }
}

/// Result of loading configuration.
pub struct ConfigLoadResult {
    pub config: Config,
    /// Directory relative paths in the config resolve against: the config
    /// file's directory, or the start directory when using defaults.
    pub root: PathBuf,
    /// True if config was loaded from a file, false if using defaults.
    pub from_file: bool,
}

pub fn load_config(start_dir: &Path) -> Result<ConfigLoadResult> {
    match find_config_file(start_dir) {
        Some(path) => {
            let content = fs::read_to_string(&path)
                .with_context(|| format!("Failed to read config file: {}", path.display()))?;
            let config: Config = serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse config file: {}", path.display()))?;
            config.validate()?;
            let root = path
                .parent()
                .map(Path::to_path_buf)
                .unwrap_or_else(|| start_dir.to_path_buf());
            Ok(ConfigLoadResult {
                config,
                root,
                from_file: true,
            })
        }
        None => Ok(ConfigLoadResult {
            config: Config::default(),
            root: start_dir.to_path_buf(),
            from_file: false,
        }),
    }
}
