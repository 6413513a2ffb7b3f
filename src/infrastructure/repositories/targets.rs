//! TOML Target Repository
//!
//! Implements the TargetRepository port over a `stagehand.toml` file. The
//! file is parsed once on open; warnings for unknown keys are kept for the
//! caller to display.

use std::path::{Path, PathBuf};

use crate::config::{Config, ConfigWarning};
use crate::domain::entities::DeploymentTarget;
use crate::domain::ports::TargetRepository;
use crate::error::StagehandResult;

pub struct TomlTargetRepository {
    path: PathBuf,
    root: PathBuf,
    config: Config,
    warnings: Vec<ConfigWarning>,
}

impl TomlTargetRepository {
    /// Load and validate `path`; the project root is its parent directory
    pub fn open(path: impl Into<PathBuf>) -> StagehandResult<Self> {
        let path = path.into();
        let (config, warnings) = Config::load_with_warnings(&path)?;
        let root = match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => PathBuf::from("."),
        };
        Ok(Self {
            path,
            root,
            config,
            warnings,
        })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn warnings(&self) -> &[ConfigWarning] {
        &self.warnings
    }
}

impl TargetRepository for TomlTargetRepository {
    fn load_targets(&self) -> StagehandResult<Vec<DeploymentTarget>> {
        Ok(self.config.deployments.clone())
    }

    fn project_root(&self) -> &Path {
        &self.root
    }

    fn source(&self) -> &Path {
        &self.path
    }
}
