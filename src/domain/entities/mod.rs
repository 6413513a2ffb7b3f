//! Domain Entities
//!
//! - `DeploymentTarget` - One deployable function as declared in `stagehand.toml`
//! - `FunctionHandle` / `FunctionVersion` / `AliasInfo` - Remote function state
//! - `RestApi` / `Stage` / `Integration` - Remote gateway state
//! - `ArtifactLocation` - Where the runtime reads the new code from

mod artifact;
mod function;
mod gateway;
mod target;

pub use artifact::ArtifactLocation;
pub use function::{AliasInfo, AliasSync, FunctionHandle, FunctionVersion};
pub use gateway::{ApiResource, Integration, RestApi, Stage};
pub use target::{ApiBinding, DeploymentTarget, PrunePolicy, WORK_DIR};
