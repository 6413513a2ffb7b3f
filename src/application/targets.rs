//! Target resolution - selects one deployment target by function name

use std::path::PathBuf;

use crate::domain::entities::DeploymentTarget;
use crate::domain::ports::TargetRepository;
use crate::error::{StagehandError, StagehandResult};

/// A target together with the directory its paths are relative to
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedTarget {
    pub target: DeploymentTarget,
    pub project_root: PathBuf,
}

pub struct TargetResolver<R: TargetRepository> {
    repository: R,
}

impl<R: TargetRepository> TargetResolver<R> {
    pub fn new(repository: R) -> Self {
        Self { repository }
    }

    /// Find the target whose function name equals `name` exactly
    pub fn resolve(&self, name: &str) -> StagehandResult<ResolvedTarget> {
        let target = self
            .repository
            .load_targets()?
            .into_iter()
            .find(|t| t.function_name == name)
            .ok_or_else(|| StagehandError::TargetNotFound {
                name: name.to_string(),
                file: self.repository.source().to_path_buf(),
            })?;

        Ok(ResolvedTarget {
            target,
            project_root: self.repository.project_root().to_path_buf(),
        })
    }

    /// All declared targets, in file order
    pub fn list(&self) -> StagehandResult<Vec<DeploymentTarget>> {
        self.repository.load_targets()
    }
}
