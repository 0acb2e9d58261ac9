//! Configuration for the analyzer: where artifacts and the taxonomy live

use eduscope_core::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Analyzer configuration, loaded from YAML.
///
/// ```yaml
/// models_dir: models
/// taxonomy: config/taxonomy.yaml
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalyzerConfig {
    /// Directory holding the named classifier artifacts
    #[serde(default = "default_models_dir")]
    pub models_dir: PathBuf,

    /// Path to the category taxonomy YAML file
    #[serde(default = "default_taxonomy_path")]
    pub taxonomy: PathBuf,
}

fn default_models_dir() -> PathBuf {
    PathBuf::from("models")
}

fn default_taxonomy_path() -> PathBuf {
    PathBuf::from("config/taxonomy.yaml")
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            models_dir: default_models_dir(),
            taxonomy: default_taxonomy_path(),
        }
    }
}

impl AnalyzerConfig {
    /// Load the configuration from a YAML file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|e| {
            Error::config(format!("failed to read config {}: {e}", path.display()))
        })?;
        serde_yaml::from_str(&contents)
            .map_err(|e| Error::config(format!("invalid config {}: {e}", path.display())))
    }
}
