//! Function runtime port - the serverless platform holding functions,
//! versions and aliases

use crate::domain::entities::{
    AliasInfo, AliasSync, ArtifactLocation, DeploymentTarget, FunctionHandle, FunctionVersion,
};
use crate::domain::services::plan_prune;
use crate::domain::value_objects::Alias;

use super::RemoteResult;

/// Client for the function runtime
///
/// Implementations:
/// - `AwsLambda` - AWS Lambda through the `aws` CLI
/// - recording fakes in tests
pub trait FunctionRuntime {
    /// Look a function up by name; `RemoteError::NotFound` if absent
    fn lookup(&self, name: &str) -> RemoteResult<FunctionHandle>;

    /// Replace the function's `$LATEST` code
    fn update_code(&self, target: &DeploymentTarget, artifact: &ArtifactLocation)
        -> RemoteResult<()>;

    /// Publish `$LATEST` as a new immutable version
    fn publish(&self, target: &DeploymentTarget) -> RemoteResult<FunctionVersion>;

    /// Create the alias or move it to `version`
    fn sync_alias(
        &self,
        target: &DeploymentTarget,
        alias: &Alias,
        version: &FunctionVersion,
    ) -> RemoteResult<AliasSync>;

    /// Allow the HTTP gateway to invoke `function_name:alias`; returns the statement id
    fn add_permission(&self, function_name: &str, alias: &Alias) -> RemoteResult<String>;

    fn list_versions(&self, function_name: &str) -> RemoteResult<Vec<FunctionVersion>>;

    fn list_aliases(&self, function_name: &str) -> RemoteResult<Vec<AliasInfo>>;

    fn delete_version(&self, function_name: &str, version: &FunctionVersion) -> RemoteResult<()>;

    /// Delete old versions according to the target's prune policy.
    ///
    /// `live` is the version the deployed alias now points at; it is always
    /// kept, as is every version any alias references. Returns the deleted
    /// versions.
    fn prune(
        &self,
        target: &DeploymentTarget,
        live: &FunctionVersion,
    ) -> RemoteResult<Vec<FunctionVersion>> {
        let versions = self.list_versions(&target.function_name)?;
        let aliases = self.list_aliases(&target.function_name)?;
        let doomed = plan_prune(&versions, &aliases, live, &target.prune);
        for version in &doomed {
            self.delete_version(&target.function_name, version)?;
        }
        Ok(doomed)
    }
}
