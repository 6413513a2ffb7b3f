//! Gateway Reconciler
//!
//! 1. Find the bound API and resource in the resource tree
//! 2. Require the integration to route through `${stageVariables.lambdaAlias}`
//! 3. Fetch the alias stage, bootstrapping it on first deployment
//! 4. Point the stage's `lambdaAlias` variable at the alias when stale
//!
//! A missing stage is the only remote "not found" treated as a normal state.
//! Bootstrap (deployment + invoke permission) therefore happens once per
//! stage, not on every run.

use crate::domain::entities::{ApiBinding, Stage};
use crate::domain::ports::{DeployEvent, DeployEventSink, FunctionRuntime, Gateway, RemoteError};
use crate::domain::services::{invoke_url, routes_through_alias, ALIAS_PLACEHOLDER};
use crate::domain::value_objects::Alias;
use crate::error::{StagehandError, StagehandResult};

/// Outcome of a gateway reconciliation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GatewayReport {
    pub api_id: String,
    pub stage: String,
    pub resource_path: String,
    pub url: String,
    /// The stage did not exist and was bootstrapped by this run
    pub stage_created: bool,
    /// The `lambdaAlias` variable had to be rewritten
    pub variable_updated: bool,
}

pub struct GatewayReconciler<'a, GW, RT>
where
    GW: Gateway,
    RT: FunctionRuntime,
{
    gateway: &'a GW,
    runtime: &'a RT,
}

impl<'a, GW, RT> GatewayReconciler<'a, GW, RT>
where
    GW: Gateway,
    RT: FunctionRuntime,
{
    pub fn new(gateway: &'a GW, runtime: &'a RT) -> Self {
        Self { gateway, runtime }
    }

    pub fn reconcile(
        &self,
        function_name: &str,
        binding: &ApiBinding,
        alias: &Alias,
        sink: &dyn DeployEventSink,
    ) -> StagehandResult<GatewayReport> {
        let apis = self.gateway.list_apis().map_err(lookup_failed)?;
        let api = apis
            .iter()
            .find(|api| api.id == binding.api_id)
            .ok_or_else(|| StagehandError::ApiNotFound {
                api_id: binding.api_id.clone(),
            })?;
        let resource =
            api.resource(&binding.resource_id)
                .ok_or_else(|| StagehandError::ResourceNotFound {
                    api_id: binding.api_id.clone(),
                    resource_id: binding.resource_id.clone(),
                })?;

        let integration = self
            .gateway
            .get_integration(&binding.api_id, &binding.resource_id, binding.http_method)
            .map_err(lookup_failed)?;
        if !routes_through_alias(&integration.uri) {
            return Err(StagehandError::InvalidIntegration {
                uri: integration.uri,
                placeholder: ALIAS_PLACEHOLDER.to_string(),
            });
        }

        let (stage, stage_created) =
            self.ensure_stage(function_name, &binding.api_id, alias, sink)?;

        let variable_updated = if stage.routes_to(alias.as_str()) {
            false
        } else {
            self.gateway
                .update_stage(&binding.api_id, alias.as_str(), alias.as_str())
                .map_err(|e| StagehandError::StageUpdateFailed {
                    stage: alias.to_string(),
                    message: e.to_string(),
                })?;
            sink.on_event(DeployEvent::StageVariableUpdated {
                stage: alias.to_string(),
                previous: stage.lambda_alias().map(str::to_string),
                alias: alias.to_string(),
            });
            true
        };

        let url = invoke_url(
            &binding.api_id,
            self.gateway.region(),
            alias.as_str(),
            &resource.path,
        );
        sink.on_event(DeployEvent::ApiAvailable { url: url.clone() });

        Ok(GatewayReport {
            api_id: binding.api_id.clone(),
            stage: alias.to_string(),
            resource_path: resource.path.clone(),
            url,
            stage_created,
            variable_updated,
        })
    }

    /// Fetch the alias stage, creating it (and granting invoke permission)
    /// when it does not exist yet
    fn ensure_stage(
        &self,
        function_name: &str,
        api_id: &str,
        alias: &Alias,
        sink: &dyn DeployEventSink,
    ) -> StagehandResult<(Stage, bool)> {
        match self.gateway.get_stage(api_id, alias.as_str()) {
            Ok(stage) => Ok((stage, false)),
            Err(e) if e.is_not_found() => {
                let deployment_id = self
                    .gateway
                    .create_deployment(api_id, alias.as_str())
                    .map_err(bootstrap_failed(alias))?;
                sink.on_event(DeployEvent::StageCreated {
                    stage: alias.to_string(),
                    deployment_id,
                });

                let statement_id = self
                    .runtime
                    .add_permission(function_name, alias)
                    .map_err(bootstrap_failed(alias))?;
                sink.on_event(DeployEvent::PermissionGranted { statement_id });

                let stage = self
                    .gateway
                    .get_stage(api_id, alias.as_str())
                    .map_err(bootstrap_failed(alias))?;
                Ok((stage, true))
            }
            Err(e) => Err(lookup_failed(e)),
        }
    }
}

fn lookup_failed(e: RemoteError) -> StagehandError {
    StagehandError::GatewayLookupFailed(e.to_string())
}

fn bootstrap_failed(stage: &Alias) -> impl Fn(RemoteError) -> StagehandError + '_ {
    move |e| StagehandError::StageBootstrapFailed {
        stage: stage.to_string(),
        message: e.to_string(),
    }
}
