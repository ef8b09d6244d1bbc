//! Job file support for cleaning runs

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// A cleaning job loaded from a TOML or YAML file
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobConfig {
    /// Survey CSV to clean
    pub input: PathBuf,
    /// Where the cleaned table is written (omit to keep in memory only)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output: Option<PathBuf>,
    /// Variables reference sheet, loaded for information only
    #[serde(skip_serializing_if = "Option::is_none")]
    pub variables: Option<PathBuf>,
    /// Keep the first copy of duplicated rows instead of dropping all
    #[serde(default)]
    pub keep_first: bool,
}

impl Default for JobConfig {
    fn default() -> Self {
        Self {
            input: PathBuf::from("data/Climate Data Clean.csv"),
            output: Some(PathBuf::from("data/climate_clean.csv")),
            variables: None,
            keep_first: false,
        }
    }
}

impl JobConfig {
    /// Load a job from a file (YAML or TOML, by extension)
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read job file: {}", path.display()))?;

        let extension = path.extension().and_then(|s| s.to_str()).unwrap_or("");

        match extension {
            "yaml" | "yml" => serde_yaml::from_str(&content)
                .with_context(|| format!("Failed to parse YAML job file: {}", path.display())),
            "toml" => toml::from_str(&content)
                .with_context(|| format!("Failed to parse TOML job file: {}", path.display())),
            _ => Err(anyhow::anyhow!(
                "Unsupported job file format: {}. Use .yaml, .yml, or .toml",
                extension
            )),
        }
    }
}
