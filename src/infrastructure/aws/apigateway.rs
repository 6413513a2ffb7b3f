//! API Gateway (REST) client over `aws apigateway`

use std::collections::BTreeMap;
use std::sync::Arc;

use serde::Deserialize;

use crate::domain::entities::{ApiResource, Integration, RestApi, Stage};
use crate::domain::ports::{Gateway, RemoteResult};
use crate::domain::value_objects::HttpMethod;

use super::cli::AwsCli;
use crate::infrastructure::process::{CommandRunner, SystemRunner};

#[derive(Deserialize)]
struct Items<T> {
    #[serde(default = "Vec::new")]
    items: Vec<T>,
}

#[derive(Deserialize)]
struct RestApiEntry {
    id: String,
    #[serde(default)]
    name: String,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct ResourceEntry {
    id: String,
    path: String,
    #[serde(default)]
    parent_id: Option<String>,
}

#[derive(Deserialize)]
struct IntegrationEntry {
    #[serde(default)]
    uri: String,
    #[serde(default, rename = "type")]
    integration_type: Option<String>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct StageEntry {
    stage_name: String,
    #[serde(default)]
    deployment_id: Option<String>,
    #[serde(default)]
    variables: BTreeMap<String, String>,
}

impl From<StageEntry> for Stage {
    fn from(entry: StageEntry) -> Self {
        Stage {
            name: entry.stage_name,
            deployment_id: entry.deployment_id,
            variables: entry.variables,
        }
    }
}

#[derive(Deserialize)]
struct DeploymentEntry {
    id: String,
}

pub struct AwsApiGateway<R: CommandRunner = SystemRunner> {
    cli: Arc<AwsCli<R>>,
    region: String,
}

impl<R: CommandRunner> AwsApiGateway<R> {
    /// `region` is the resolved region used to build invoke URLs
    pub fn new(cli: Arc<AwsCli<R>>, region: impl Into<String>) -> Self {
        Self {
            cli,
            region: region.into(),
        }
    }

    fn resources(&self, api_id: &str) -> RemoteResult<Vec<ApiResource>> {
        let response: Items<ResourceEntry> = self.cli.run_json(
            "get-resources",
            &["apigateway", "get-resources", "--rest-api-id", api_id],
        )?;
        Ok(response
            .items
            .into_iter()
            .map(|r| ApiResource {
                id: r.id,
                path: r.path,
                parent_id: r.parent_id,
            })
            .collect())
    }
}

impl<R: CommandRunner> Gateway for AwsApiGateway<R> {
    fn region(&self) -> &str {
        &self.region
    }

    fn list_apis(&self) -> RemoteResult<Vec<RestApi>> {
        let response: Items<RestApiEntry> = self
            .cli
            .run_json("get-rest-apis", &["apigateway", "get-rest-apis"])?;
        response
            .items
            .into_iter()
            .map(|api| {
                Ok(RestApi {
                    resources: self.resources(&api.id)?,
                    id: api.id,
                    name: api.name,
                })
            })
            .collect()
    }

    fn get_integration(
        &self,
        api_id: &str,
        resource_id: &str,
        method: HttpMethod,
    ) -> RemoteResult<Integration> {
        let entry: IntegrationEntry = self.cli.run_json(
            "get-integration",
            &[
                "apigateway",
                "get-integration",
                "--rest-api-id",
                api_id,
                "--resource-id",
                resource_id,
                "--http-method",
                method.as_str(),
            ],
        )?;
        Ok(Integration {
            uri: entry.uri,
            integration_type: entry.integration_type,
        })
    }

    fn get_stage(&self, api_id: &str, stage: &str) -> RemoteResult<Stage> {
        let entry: StageEntry = self.cli.run_json(
            "get-stage",
            &[
                "apigateway",
                "get-stage",
                "--rest-api-id",
                api_id,
                "--stage-name",
                stage,
            ],
        )?;
        Ok(entry.into())
    }

    fn create_deployment(&self, api_id: &str, stage: &str) -> RemoteResult<String> {
        let entry: DeploymentEntry = self.cli.run_json(
            "create-deployment",
            &[
                "apigateway",
                "create-deployment",
                "--rest-api-id",
                api_id,
                "--stage-name",
                stage,
            ],
        )?;
        Ok(entry.id)
    }

    fn update_stage(&self, api_id: &str, stage: &str, lambda_alias: &str) -> RemoteResult<Stage> {
        let patch = format!(
            "op=replace,path=/variables/{},value={}",
            Stage::ALIAS_VARIABLE,
            lambda_alias
        );
        let entry: StageEntry = self.cli.run_json(
            "update-stage",
            &[
                "apigateway",
                "update-stage",
                "--rest-api-id",
                api_id,
                "--stage-name",
                stage,
                "--patch-operations",
                &patch,
            ],
        )?;
        Ok(entry.into())
    }
}
