//! Lambda client over `aws lambda`

use std::sync::Arc;

use serde::Deserialize;

use crate::domain::entities::{
    AliasInfo, AliasSync, ArtifactLocation, DeploymentTarget, FunctionHandle, FunctionVersion,
};
use crate::domain::ports::{FunctionRuntime, RemoteResult};
use crate::domain::value_objects::Alias;

use super::cli::AwsCli;
use crate::infrastructure::process::{CommandRunner, SystemRunner};

/// Principal allowed to invoke the alias through API Gateway
pub const GATEWAY_PRINCIPAL: &str = "apigateway.amazonaws.com";

#[derive(Deserialize)]
#[serde(rename_all = "PascalCase")]
struct GetFunctionResponse {
    configuration: FunctionConfiguration,
}

#[derive(Deserialize)]
#[serde(rename_all = "PascalCase")]
struct FunctionConfiguration {
    function_name: String,
    function_arn: String,
    #[serde(default)]
    runtime: Option<String>,
}

#[derive(Deserialize)]
#[serde(rename_all = "PascalCase")]
struct VersionEntry {
    version: String,
}

#[derive(Deserialize)]
#[serde(rename_all = "PascalCase")]
struct ListVersionsResponse {
    #[serde(default)]
    versions: Vec<VersionEntry>,
}

#[derive(Deserialize)]
#[serde(rename_all = "PascalCase")]
struct AliasEntry {
    name: String,
    function_version: String,
}

#[derive(Deserialize)]
#[serde(rename_all = "PascalCase")]
struct ListAliasesResponse {
    #[serde(default)]
    aliases: Vec<AliasEntry>,
}

pub struct AwsLambda<R: CommandRunner = SystemRunner> {
    cli: Arc<AwsCli<R>>,
}

impl<R: CommandRunner> AwsLambda<R> {
    pub fn new(cli: Arc<AwsCli<R>>) -> Self {
        Self { cli }
    }

    fn get_alias(&self, function_name: &str, alias: &str) -> RemoteResult<AliasEntry> {
        self.cli.run_json(
            "get-alias",
            &[
                "lambda",
                "get-alias",
                "--function-name",
                function_name,
                "--name",
                alias,
            ],
        )
    }

    fn wait_updated(&self, function_name: &str) -> RemoteResult<()> {
        self.cli
            .run(
                "wait function-updated",
                &[
                    "lambda",
                    "wait",
                    "function-updated",
                    "--function-name",
                    function_name,
                ],
            )
            .map(|_| ())
    }
}

impl<R: CommandRunner> FunctionRuntime for AwsLambda<R> {
    fn lookup(&self, name: &str) -> RemoteResult<FunctionHandle> {
        let response: GetFunctionResponse = self.cli.run_json(
            "get-function",
            &["lambda", "get-function", "--function-name", name],
        )?;
        let config = response.configuration;
        Ok(FunctionHandle {
            name: config.function_name,
            arn: config.function_arn,
            runtime: config.runtime,
        })
    }

    fn update_code(
        &self,
        target: &DeploymentTarget,
        artifact: &ArtifactLocation,
    ) -> RemoteResult<()> {
        let function = target.function_name.as_str();
        match artifact {
            ArtifactLocation::Inline(path) => {
                let zip_file = format!("fileb://{}", path.display());
                self.cli.run(
                    "update-function-code",
                    &[
                        "lambda",
                        "update-function-code",
                        "--function-name",
                        function,
                        "--zip-file",
                        &zip_file,
                    ],
                )?;
            }
            ArtifactLocation::Object { bucket, key } => {
                self.cli.run(
                    "update-function-code",
                    &[
                        "lambda",
                        "update-function-code",
                        "--function-name",
                        function,
                        "--s3-bucket",
                        bucket,
                        "--s3-key",
                        key,
                    ],
                )?;
            }
        }
        // Publishing while the update is in progress is rejected.
        self.wait_updated(function)
    }

    fn publish(&self, target: &DeploymentTarget) -> RemoteResult<FunctionVersion> {
        let published: VersionEntry = self.cli.run_json(
            "publish-version",
            &[
                "lambda",
                "publish-version",
                "--function-name",
                &target.function_name,
            ],
        )?;
        Ok(FunctionVersion::new(published.version))
    }

    fn sync_alias(
        &self,
        target: &DeploymentTarget,
        alias: &Alias,
        version: &FunctionVersion,
    ) -> RemoteResult<AliasSync> {
        let function = target.function_name.as_str();
        match self.get_alias(function, alias.as_str()) {
            Ok(existing) if existing.function_version == version.as_str() => {
                Ok(AliasSync::Unchanged)
            }
            Ok(existing) => {
                self.cli.run(
                    "update-alias",
                    &[
                        "lambda",
                        "update-alias",
                        "--function-name",
                        function,
                        "--name",
                        alias.as_str(),
                        "--function-version",
                        version.as_str(),
                    ],
                )?;
                Ok(AliasSync::Moved {
                    from: FunctionVersion::new(existing.function_version),
                })
            }
            Err(e) if e.is_not_found() => {
                self.cli.run(
                    "create-alias",
                    &[
                        "lambda",
                        "create-alias",
                        "--function-name",
                        function,
                        "--name",
                        alias.as_str(),
                        "--function-version",
                        version.as_str(),
                    ],
                )?;
                Ok(AliasSync::Created)
            }
            Err(e) => Err(e),
        }
    }

    fn add_permission(&self, function_name: &str, alias: &Alias) -> RemoteResult<String> {
        let statement_id = format!(
            "stagehand-{}-{}",
            alias,
            chrono::Utc::now().timestamp_millis()
        );
        self.cli.run(
            "add-permission",
            &[
                "lambda",
                "add-permission",
                "--function-name",
                function_name,
                "--qualifier",
                alias.as_str(),
                "--statement-id",
                &statement_id,
                "--action",
                "lambda:InvokeFunction",
                "--principal",
                GATEWAY_PRINCIPAL,
            ],
        )?;
        Ok(statement_id)
    }

    fn list_versions(&self, function_name: &str) -> RemoteResult<Vec<FunctionVersion>> {
        let response: ListVersionsResponse = self.cli.run_json(
            "list-versions-by-function",
            &[
                "lambda",
                "list-versions-by-function",
                "--function-name",
                function_name,
            ],
        )?;
        Ok(response
            .versions
            .into_iter()
            .map(|v| FunctionVersion::new(v.version))
            .collect())
    }

    fn list_aliases(&self, function_name: &str) -> RemoteResult<Vec<AliasInfo>> {
        let response: ListAliasesResponse = self.cli.run_json(
            "list-aliases",
            &["lambda", "list-aliases", "--function-name", function_name],
        )?;
        Ok(response
            .aliases
            .into_iter()
            .map(|a| AliasInfo::new(a.name, a.function_version))
            .collect())
    }

    fn delete_version(&self, function_name: &str, version: &FunctionVersion) -> RemoteResult<()> {
        self.cli
            .run(
                "delete-function",
                &[
                    "lambda",
                    "delete-function",
                    "--function-name",
                    function_name,
                    "--qualifier",
                    version.as_str(),
                ],
            )
            .map(|_| ())
    }
}
