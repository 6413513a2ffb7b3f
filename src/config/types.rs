//! Configuration type definitions

use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::domain::entities::DeploymentTarget;
use crate::error::{StagehandError, StagehandResult};

use super::loader::{self, ConfigWarning};

/// AWS connection defaults
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct AwsConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile: Option<String>,
}

impl AwsConfig {
    /// Fill unset fields from `fallback`
    pub fn or(self, fallback: AwsConfig) -> AwsConfig {
        AwsConfig {
            region: self.region.or(fallback.region),
            profile: self.profile.or(fallback.profile),
        }
    }
}

/// Output configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    #[serde(default)]
    pub color: ColorMode,

    #[serde(default = "default_true")]
    pub unicode: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            color: ColorMode::default(),
            unicode: true,
        }
    }
}

fn default_true() -> bool {
    true
}

/// Color output mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    #[default]
    Auto,
    Always,
    Never,
}

/// Contents of a `stagehand.toml`
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub aws: AwsConfig,

    #[serde(default)]
    pub output: OutputConfig,

    #[serde(default)]
    pub deployments: Vec<DeploymentTarget>,
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> StagehandResult<Self> {
        let (config, _warnings) = loader::load_with_warnings(path)?;
        Ok(config)
    }

    /// Load configuration and collect non-fatal warnings (e.g. unknown keys).
    pub fn load_with_warnings(path: &Path) -> StagehandResult<(Self, Vec<ConfigWarning>)> {
        loader::load_with_warnings(path)
    }

    /// Reject configurations that parse but cannot be deployed unambiguously
    pub fn validate(&self, path: &Path) -> StagehandResult<()> {
        let mut seen = HashSet::new();
        for target in &self.deployments {
            if !seen.insert(target.function_name.as_str()) {
                return Err(StagehandError::InvalidConfig {
                    file: path.to_path_buf(),
                    message: format!(
                        "function_name '{}' is declared more than once",
                        target.function_name
                    ),
                });
            }
        }
        Ok(())
    }

    pub fn target(&self, function_name: &str) -> Option<&DeploymentTarget> {
        self.deployments
            .iter()
            .find(|t| t.function_name == function_name)
    }
}
