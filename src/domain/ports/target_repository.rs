//! Target repository port - abstracts where deployment targets are declared

use std::path::Path;

use crate::domain::entities::DeploymentTarget;
use crate::error::StagehandResult;

/// Source of deployment targets.
///
/// Abstracts the underlying storage (TOML file, in-memory for tests) so the
/// resolver can be tested without touching disk.
pub trait TargetRepository {
    /// All declared targets; `StagehandError::InvalidConfig` if unreadable
    fn load_targets(&self) -> StagehandResult<Vec<DeploymentTarget>>;

    /// Directory that `src` paths are relative to
    fn project_root(&self) -> &Path;

    /// Where the targets were loaded from (for messages)
    fn source(&self) -> &Path;
}
