//! Deploy Options
//!
//! Configuration types for deploy runs.

use std::path::PathBuf;

/// Options for the deploy use case
#[derive(Debug, Clone)]
pub struct DeployOptions {
    /// Alias to publish under (also the gateway stage name)
    pub alias: String,
    /// Directory that target `src` paths are relative to
    pub project_root: PathBuf,
    /// Skip the prune step even when the target declares a policy
    pub skip_prune: bool,
}

impl DeployOptions {
    pub fn new(alias: impl Into<String>, project_root: impl Into<PathBuf>) -> Self {
        Self {
            alias: alias.into(),
            project_root: project_root.into(),
            skip_prune: false,
        }
    }

    pub fn with_skip_prune(mut self, skip: bool) -> Self {
        self.skip_prune = skip;
        self
    }
}
