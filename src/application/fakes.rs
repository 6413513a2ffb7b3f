//! Recording fakes for the deploy ports
//!
//! Every fake appends to one shared [`CallLog`] so tests can assert on the
//! order of remote calls across clients.

use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use crate::domain::entities::{
    AliasInfo, AliasSync, ApiResource, ArtifactLocation, DeploymentTarget, FunctionHandle,
    FunctionVersion, Integration, RestApi, Stage,
};
use crate::domain::ports::{
    ArtifactError, ArtifactProducer, DeployEvent, DeployEventSink, FunctionRuntime, Gateway,
    ObjectStore, RemoteError, RemoteResult,
};
use crate::domain::services::ALIAS_PLACEHOLDER;
use crate::domain::value_objects::{Alias, HttpMethod};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    Lookup(String),
    Produce {
        source: PathBuf,
        output: PathBuf,
        work_dir: PathBuf,
        single_executable: bool,
    },
    Upload {
        bucket: String,
        key: String,
    },
    UpdateCode(String, ArtifactLocation),
    Publish(String),
    SyncAlias(String, String, String),
    AddPermission(String, String),
    ListVersions(String),
    ListAliases(String),
    DeleteVersion(String, String),
    ListApis,
    GetIntegration(String, String, HttpMethod),
    GetStage(String, String),
    CreateDeployment(String, String),
    UpdateStage(String, String, String),
}

impl Call {
    pub fn is_gateway(&self) -> bool {
        matches!(
            self,
            Call::ListApis
                | Call::GetIntegration(..)
                | Call::GetStage(..)
                | Call::CreateDeployment(..)
                | Call::UpdateStage(..)
        )
    }
}

#[derive(Debug, Clone, Default)]
pub struct CallLog(Arc<Mutex<Vec<Call>>>);

impl CallLog {
    pub fn record(&self, call: Call) {
        self.0.lock().unwrap().push(call);
    }

    pub fn calls(&self) -> Vec<Call> {
        self.0.lock().unwrap().clone()
    }

    pub fn count(&self, pred: impl Fn(&Call) -> bool) -> usize {
        self.0.lock().unwrap().iter().filter(|c| pred(c)).count()
    }

    pub fn position(&self, pred: impl Fn(&Call) -> bool) -> Option<usize> {
        self.0.lock().unwrap().iter().position(|c| pred(c))
    }
}

fn injected(op: &str) -> RemoteError {
    RemoteError::failed(op, "injected failure")
}

pub struct FakeRuntime {
    log: CallLog,
    functions: Vec<String>,
    versions: Mutex<Vec<FunctionVersion>>,
    aliases: Mutex<Vec<AliasInfo>>,
    fail_on: Option<&'static str>,
}

impl FakeRuntime {
    pub fn new(log: &CallLog, functions: &[&str]) -> Self {
        Self {
            log: log.clone(),
            functions: functions.iter().map(|f| f.to_string()).collect(),
            versions: Mutex::new(vec![FunctionVersion::new(FunctionVersion::LATEST)]),
            aliases: Mutex::new(Vec::new()),
            fail_on: None,
        }
    }

    pub fn with_versions(self, numbers: &[u64]) -> Self {
        self.versions
            .lock()
            .unwrap()
            .extend(numbers.iter().map(|n| FunctionVersion::new(n.to_string())));
        self
    }

    pub fn with_alias(self, name: &str, version: &str) -> Self {
        self.aliases.lock().unwrap().push(AliasInfo::new(name, version));
        self
    }

    /// Make the named operation fail
    pub fn failing_on(mut self, op: &'static str) -> Self {
        self.fail_on = Some(op);
        self
    }

    fn check(&self, op: &'static str) -> RemoteResult<()> {
        match self.fail_on {
            Some(failing) if failing == op => Err(injected(op)),
            _ => Ok(()),
        }
    }
}

impl FunctionRuntime for FakeRuntime {
    fn lookup(&self, name: &str) -> RemoteResult<FunctionHandle> {
        self.log.record(Call::Lookup(name.to_string()));
        self.check("lookup")?;
        if !self.functions.iter().any(|f| f == name) {
            return Err(RemoteError::not_found(format!("function {}", name)));
        }
        Ok(FunctionHandle {
            name: name.to_string(),
            arn: format!("arn:aws:lambda:eu-west-1:123456789012:function:{}", name),
            runtime: Some("provided.al2023".to_string()),
        })
    }

    fn update_code(
        &self,
        target: &DeploymentTarget,
        artifact: &ArtifactLocation,
    ) -> RemoteResult<()> {
        self.log.record(Call::UpdateCode(
            target.function_name.clone(),
            artifact.clone(),
        ));
        self.check("update_code")
    }

    fn publish(&self, target: &DeploymentTarget) -> RemoteResult<FunctionVersion> {
        self.log.record(Call::Publish(target.function_name.clone()));
        self.check("publish")?;
        let mut versions = self.versions.lock().unwrap();
        let next = versions.iter().filter_map(|v| v.number()).max().unwrap_or(0) + 1;
        let version = FunctionVersion::new(next.to_string());
        versions.push(version.clone());
        Ok(version)
    }

    fn sync_alias(
        &self,
        target: &DeploymentTarget,
        alias: &Alias,
        version: &FunctionVersion,
    ) -> RemoteResult<AliasSync> {
        self.log.record(Call::SyncAlias(
            target.function_name.clone(),
            alias.to_string(),
            version.to_string(),
        ));
        self.check("sync_alias")?;
        let mut aliases = self.aliases.lock().unwrap();
        match aliases.iter_mut().find(|a| a.name == alias.as_str()) {
            Some(existing) if existing.function_version == *version => Ok(AliasSync::Unchanged),
            Some(existing) => {
                let from = std::mem::replace(&mut existing.function_version, version.clone());
                Ok(AliasSync::Moved { from })
            }
            None => {
                aliases.push(AliasInfo::new(alias.as_str(), version.as_str()));
                Ok(AliasSync::Created)
            }
        }
    }

    fn add_permission(&self, function_name: &str, alias: &Alias) -> RemoteResult<String> {
        self.log.record(Call::AddPermission(
            function_name.to_string(),
            alias.to_string(),
        ));
        self.check("add_permission")?;
        Ok(format!("stagehand-{}-1", alias))
    }

    fn list_versions(&self, function_name: &str) -> RemoteResult<Vec<FunctionVersion>> {
        self.log.record(Call::ListVersions(function_name.to_string()));
        self.check("list_versions")?;
        Ok(self.versions.lock().unwrap().clone())
    }

    fn list_aliases(&self, function_name: &str) -> RemoteResult<Vec<AliasInfo>> {
        self.log.record(Call::ListAliases(function_name.to_string()));
        self.check("list_aliases")?;
        Ok(self.aliases.lock().unwrap().clone())
    }

    fn delete_version(&self, function_name: &str, version: &FunctionVersion) -> RemoteResult<()> {
        self.log.record(Call::DeleteVersion(
            function_name.to_string(),
            version.to_string(),
        ));
        self.check("delete_version")?;
        self.versions.lock().unwrap().retain(|v| v != version);
        Ok(())
    }
}

pub struct FakeObjectStore {
    log: CallLog,
    fail: bool,
}

impl FakeObjectStore {
    pub fn new(log: &CallLog) -> Self {
        Self {
            log: log.clone(),
            fail: false,
        }
    }

    pub fn failing(mut self) -> Self {
        self.fail = true;
        self
    }
}

impl ObjectStore for FakeObjectStore {
    fn upload(&self, bucket: &str, key: &str, _artifact: &Path) -> RemoteResult<()> {
        self.log.record(Call::Upload {
            bucket: bucket.to_string(),
            key: key.to_string(),
        });
        if self.fail {
            return Err(injected("upload"));
        }
        Ok(())
    }
}

pub struct FakeProducer {
    log: CallLog,
    fail: bool,
}

impl FakeProducer {
    pub fn new(log: &CallLog) -> Self {
        Self {
            log: log.clone(),
            fail: false,
        }
    }

    pub fn failing(mut self) -> Self {
        self.fail = true;
        self
    }
}

impl ArtifactProducer for FakeProducer {
    fn produce(
        &self,
        source: &Path,
        output: &Path,
        work_dir: &Path,
        single_executable: bool,
    ) -> Result<(), ArtifactError> {
        self.log.record(Call::Produce {
            source: source.to_path_buf(),
            output: output.to_path_buf(),
            work_dir: work_dir.to_path_buf(),
            single_executable,
        });
        if self.fail {
            return Err(ArtifactError::Failed("invalid zip entry name".to_string()));
        }
        Ok(())
    }
}

pub struct FakeGateway {
    log: CallLog,
    apis: Vec<RestApi>,
    integration_uri: String,
    stages: Mutex<Vec<Stage>>,
    stage_error: Option<RemoteError>,
    fail_on: Option<&'static str>,
}

impl FakeGateway {
    pub const REGION: &'static str = "eu-west-1";

    /// Gateway with API `api1` holding `/` (`root`) and `/orders` (`res1`),
    /// an alias-routed integration and no stages
    pub fn new(log: &CallLog) -> Self {
        Self {
            log: log.clone(),
            apis: vec![RestApi {
                id: "api1".to_string(),
                name: "shop".to_string(),
                resources: vec![
                    ApiResource::new("root", "/"),
                    ApiResource {
                        id: "res1".to_string(),
                        path: "/orders".to_string(),
                        parent_id: Some("root".to_string()),
                    },
                ],
            }],
            integration_uri: format!(
                "arn:aws:apigateway:eu-west-1:lambda:path/2015-03-31/functions/arn:aws:lambda:eu-west-1:123456789012:function:svc:{}/invocations",
                ALIAS_PLACEHOLDER
            ),
            stages: Mutex::new(Vec::new()),
            stage_error: None,
            fail_on: None,
        }
    }

    pub fn with_stage(self, stage: Stage) -> Self {
        self.stages.lock().unwrap().push(stage);
        self
    }

    pub fn with_integration_uri(mut self, uri: &str) -> Self {
        self.integration_uri = uri.to_string();
        self
    }

    /// Make every stage lookup fail with `error`
    pub fn with_stage_error(mut self, error: RemoteError) -> Self {
        self.stage_error = Some(error);
        self
    }

    pub fn failing_on(mut self, op: &'static str) -> Self {
        self.fail_on = Some(op);
        self
    }

    fn check(&self, op: &'static str) -> RemoteResult<()> {
        match self.fail_on {
            Some(failing) if failing == op => Err(injected(op)),
            _ => Ok(()),
        }
    }
}

impl Gateway for FakeGateway {
    fn region(&self) -> &str {
        Self::REGION
    }

    fn list_apis(&self) -> RemoteResult<Vec<RestApi>> {
        self.log.record(Call::ListApis);
        self.check("list_apis")?;
        Ok(self.apis.clone())
    }

    fn get_integration(
        &self,
        api_id: &str,
        resource_id: &str,
        method: HttpMethod,
    ) -> RemoteResult<Integration> {
        self.log.record(Call::GetIntegration(
            api_id.to_string(),
            resource_id.to_string(),
            method,
        ));
        self.check("get_integration")?;
        Ok(Integration {
            uri: self.integration_uri.clone(),
            integration_type: Some("AWS_PROXY".to_string()),
        })
    }

    fn get_stage(&self, api_id: &str, stage: &str) -> RemoteResult<Stage> {
        self.log
            .record(Call::GetStage(api_id.to_string(), stage.to_string()));
        if let Some(error) = &self.stage_error {
            return Err(error.clone());
        }
        self.stages
            .lock()
            .unwrap()
            .iter()
            .find(|s| s.name == stage)
            .cloned()
            .ok_or_else(|| RemoteError::not_found(format!("stage {}", stage)))
    }

    fn create_deployment(&self, api_id: &str, stage: &str) -> RemoteResult<String> {
        self.log.record(Call::CreateDeployment(
            api_id.to_string(),
            stage.to_string(),
        ));
        self.check("create_deployment")?;
        let mut stages = self.stages.lock().unwrap();
        if !stages.iter().any(|s| s.name == stage) {
            stages.push(Stage {
                name: stage.to_string(),
                deployment_id: Some("dep1".to_string()),
                ..Stage::default()
            });
        }
        Ok("dep1".to_string())
    }

    fn update_stage(&self, api_id: &str, stage: &str, lambda_alias: &str) -> RemoteResult<Stage> {
        self.log.record(Call::UpdateStage(
            api_id.to_string(),
            stage.to_string(),
            lambda_alias.to_string(),
        ));
        self.check("update_stage")?;
        let mut stages = self.stages.lock().unwrap();
        let existing = stages
            .iter_mut()
            .find(|s| s.name == stage)
            .ok_or_else(|| RemoteError::not_found(format!("stage {}", stage)))?;
        existing
            .variables
            .insert(Stage::ALIAS_VARIABLE.to_string(), lambda_alias.to_string());
        Ok(existing.clone())
    }
}

#[derive(Default)]
pub struct RecordingSink {
    events: Mutex<Vec<DeployEvent>>,
}

impl RecordingSink {
    pub fn events(&self) -> Vec<DeployEvent> {
        self.events.lock().unwrap().clone()
    }
}

impl DeployEventSink for RecordingSink {
    fn on_event(&self, event: DeployEvent) {
        self.events.lock().unwrap().push(event);
    }
}
