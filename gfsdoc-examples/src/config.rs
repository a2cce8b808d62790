//! Generator configuration loaded with Figment.
//!
//! Sources are merged in precedence order (later sources override earlier ones):
//! 1. Built-in defaults
//! 2. An optional TOML file
//! 3. Environment variables prefixed with `GFSDOC_`

use crate::error::Result;
use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::debug;

/// Environment variable prefix for configuration overrides.
pub const ENV_PREFIX: &str = "GFSDOC_";

/// What to do with a directory that does not form a valid example.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InvalidExamplePolicy {
    /// Log a warning and leave the directory out of every list.
    #[default]
    Skip,
    /// Abort the whole run.
    Fail,
}

impl std::fmt::Display for InvalidExamplePolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InvalidExamplePolicy::Skip => write!(f, "skip"),
            InvalidExamplePolicy::Fail => write!(f, "fail"),
        }
    }
}

/// Settings controlling how examples are turned into Makefile fragments.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    /// Directories whose path contains this substring are never examples.
    pub exclude_marker: String,
    /// Required files left out of the source distribution.
    pub dist_excluded_files: Vec<String>,
    /// Suffixes of generated files that also belong to the documentation.
    pub doc_media_extensions: Vec<String>,
    /// Name of the dependency target.
    pub depends_target: String,
    pub invalid_examples: InvalidExamplePolicy,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            exclude_marker: ".xvpics".to_string(),
            dist_excluded_files: vec!["S60-scaled.gts".to_string()],
            doc_media_extensions: [".mpg", ".ogv", ".png", ".mp4"]
                .iter()
                .map(|s| s.to_string())
                .collect(),
            depends_target: "examples.tex".to_string(),
            invalid_examples: InvalidExamplePolicy::Skip,
        }
    }
}

impl GeneratorConfig {
    /// Load configuration from defaults, an optional TOML file and the environment.
    pub fn load(file: Option<&Path>) -> Result<Self> {
        let config: Self = Self::figment(file).extract()?;
        debug!(?config, "Loaded generator configuration");
        Ok(config)
    }

    /// Build the layered figment without extracting it.
    pub fn figment(file: Option<&Path>) -> Figment {
        let mut figment = Figment::new().merge(Serialized::defaults(Self::default()));
        if let Some(path) = file {
            debug!("Loading config file: {}", path.display());
            figment = figment.merge(Toml::file_exact(path));
        }
        figment.merge(Env::prefixed(ENV_PREFIX).split("__"))
    }

    pub fn is_excluded(&self, path: &Path) -> bool {
        !self.exclude_marker.is_empty() && path.to_string_lossy().contains(&self.exclude_marker)
    }

    pub fn is_distributed(&self, file: &str) -> bool {
        !self.dist_excluded_files.iter().any(|f| f == file)
    }

    pub fn is_doc_media(&self, file: &str) -> bool {
        self.doc_media_extensions
            .iter()
            .any(|ext| file.ends_with(ext.as_str()))
    }
}
