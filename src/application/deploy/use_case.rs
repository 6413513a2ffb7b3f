//! Deploy Use Case
//!
//! Orchestrates a deploy run:
//! 1. Check local requirements
//! 2. Confirm the function exists
//! 3. Build the archive
//! 4. Upload it (only when a bucket is configured)
//! 5. Update code, publish a version, move the alias to it
//! 6. Prune old versions (only when a policy is configured)
//! 7. Reconcile the API Gateway stage (only when an API is bound)
//!
//! Each step short-circuits the run with its error. Nothing is rolled back:
//! re-running the deploy is the recovery path.

use std::sync::Arc;
use std::time::Instant;

use crate::application::gateway::GatewayReconciler;
use crate::domain::entities::{AliasSync, ArtifactLocation, DeploymentTarget};
use crate::domain::ports::{
    ArtifactProducer, DeployEvent, DeployEventSink, DeployStep, FunctionRuntime, Gateway,
    NoopEventSink, ObjectStore, RemoteError,
};
use crate::domain::services::RequirementChecker;
use crate::error::{StagehandError, StagehandResult};

use super::options::DeployOptions;
use super::result::DeployReport;

/// Deploy use case - orchestrates the deploy flow
///
/// This use case is parameterized by its dependencies (ports),
/// allowing for easy testing and different implementations.
pub struct DeployUseCase<RT, OS, GW, AP>
where
    RT: FunctionRuntime,
    OS: ObjectStore,
    GW: Gateway,
    AP: ArtifactProducer,
{
    runtime: RT,
    object_store: OS,
    gateway: GW,
    producer: AP,
}

impl<RT, OS, GW, AP> DeployUseCase<RT, OS, GW, AP>
where
    RT: FunctionRuntime,
    OS: ObjectStore,
    GW: Gateway,
    AP: ArtifactProducer,
{
    pub fn new(runtime: RT, object_store: OS, gateway: GW, producer: AP) -> Self {
        Self {
            runtime,
            object_store,
            gateway,
            producer,
        }
    }

    /// Execute the deploy use case
    pub fn execute(
        &self,
        target: &DeploymentTarget,
        options: &DeployOptions,
    ) -> StagehandResult<DeployReport> {
        self.execute_with_events(target, options, Arc::new(NoopEventSink))
    }

    /// Execute the deploy use case with event reporting
    pub fn execute_with_events(
        &self,
        target: &DeploymentTarget,
        options: &DeployOptions,
        event_sink: Arc<dyn DeployEventSink>,
    ) -> StagehandResult<DeployReport> {
        let started = Instant::now();
        let sink = event_sink.as_ref();
        let root = options.project_root.as_path();
        let function = target.function_name.as_str();

        sink.on_event(DeployEvent::Started {
            function: function.to_string(),
            alias: options.alias.clone(),
        });

        let alias = run_step(sink, DeployStep::Requirements, || {
            RequirementChecker::new(root).check(target, &options.alias)
        })?;

        run_step(sink, DeployStep::Lookup, || {
            self.runtime
                .lookup(function)
                .map_err(|e| {
                    if e.is_not_found() {
                        StagehandError::FunctionNotFound {
                            name: function.to_string(),
                            message: e.to_string(),
                        }
                    } else {
                        StagehandError::FunctionLookupFailed {
                            name: function.to_string(),
                            message: e.to_string(),
                        }
                    }
                })
        })?;

        let archive = target.artifact_path(root, &alias);
        run_step(sink, DeployStep::Package, || {
            self.producer
                .produce(
                    &target.source_path(root),
                    &archive,
                    &target.work_dir(root, &alias),
                    target.is_single_executable(),
                )
                .map_err(|e| StagehandError::PackagingFailed {
                    output: archive.clone(),
                    message: e.to_string(),
                })
        })?;
        detail(
            sink,
            DeployEvent::ArtifactBuilt {
                path: archive.clone(),
            },
        );

        let artifact = match target.bucket() {
            Some(bucket) => {
                let key = target.object_key(&alias);
                run_step(sink, DeployStep::Upload, || {
                    self.object_store
                        .upload(bucket, &key, &archive)
                        .map_err(|e| StagehandError::UploadFailed {
                            bucket: bucket.to_string(),
                            message: e.to_string(),
                        })
                })?;
                detail(
                    sink,
                    DeployEvent::ArtifactUploaded {
                        bucket: bucket.to_string(),
                        key: key.clone(),
                    },
                );
                ArtifactLocation::Object {
                    bucket: bucket.to_string(),
                    key,
                }
            }
            None => ArtifactLocation::Inline(archive),
        };

        run_step(sink, DeployStep::UpdateCode, || {
            self.runtime
                .update_code(target, &artifact)
                .map_err(runtime_failed("update code", function))
        })?;

        let version = run_step(sink, DeployStep::Publish, || {
            self.runtime
                .publish(target)
                .map_err(runtime_failed("publish", function))
        })?;
        detail(
            sink,
            DeployEvent::VersionPublished {
                version: version.to_string(),
            },
        );

        let alias_sync = run_step(sink, DeployStep::SyncAlias, || {
            self.runtime
                .sync_alias(target, &alias, &version)
                .map_err(runtime_failed("alias sync", function))
        })?;
        detail(
            sink,
            DeployEvent::AliasSynced {
                alias: alias.to_string(),
                version: version.to_string(),
                previous: match &alias_sync {
                    AliasSync::Moved { from } => Some(from.to_string()),
                    AliasSync::Unchanged => Some(version.to_string()),
                    AliasSync::Created => None,
                },
            },
        );

        // Pruning runs after the alias moved so the live version is protected.
        let pruned = if target.prune.is_enabled() && !options.skip_prune {
            let pruned = run_step(sink, DeployStep::Prune, || {
                self.runtime
                    .prune(target, &version)
                    .map_err(runtime_failed("prune", function))
            })?;
            sink.on_event(DeployEvent::VersionsPruned {
                versions: pruned.iter().map(ToString::to_string).collect(),
            });
            pruned
        } else {
            Vec::new()
        };

        let gateway = match &target.api {
            Some(binding) => Some(run_step(sink, DeployStep::Gateway, || {
                GatewayReconciler::new(&self.gateway, &self.runtime)
                    .reconcile(function, binding, &alias, sink)
            })?),
            None => None,
        };

        let elapsed = started.elapsed();
        sink.on_event(DeployEvent::Completed {
            function: function.to_string(),
            alias: alias.to_string(),
            version: version.to_string(),
            elapsed,
        });

        Ok(DeployReport {
            function: function.to_string(),
            alias,
            version,
            alias_sync,
            artifact,
            pruned,
            gateway,
            elapsed,
        })
    }
}

/// Run one pipeline step, bracketing it with start/complete/failed events
fn run_step<T>(
    sink: &dyn DeployEventSink,
    step: DeployStep,
    f: impl FnOnce() -> StagehandResult<T>,
) -> StagehandResult<T> {
    sink.on_event(DeployEvent::StepStarted { step });
    match f() {
        Ok(value) => {
            sink.on_event(DeployEvent::StepCompleted { step });
            Ok(value)
        }
        Err(e) => {
            sink.on_event(DeployEvent::StepFailed {
                step,
                error: e.to_string(),
            });
            Err(e)
        }
    }
}

fn detail(sink: &dyn DeployEventSink, event: DeployEvent) {
    if sink.wants_detailed_events() {
        sink.on_event(event);
    }
}

fn runtime_failed<'a>(
    step: &'static str,
    function: &'a str,
) -> impl Fn(RemoteError) -> StagehandError + 'a {
    move |e| StagehandError::RuntimeUpdateFailed {
        step,
        function: function.to_string(),
        message: e.to_string(),
    }
}
