//! Deploy Event Port
//!
//! Provides an observable interface for deploy runs.
//! Enables progress reporting, JSON event streams, and debugging.

use std::path::PathBuf;
use std::time::Duration;

/// A pipeline step, in execution order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DeployStep {
    Requirements,
    Lookup,
    Package,
    Upload,
    UpdateCode,
    Publish,
    SyncAlias,
    Prune,
    Gateway,
}

impl DeployStep {
    /// Progress line shown when the step starts
    pub fn label(&self) -> &'static str {
        match self {
            DeployStep::Requirements => "Checking requirements",
            DeployStep::Lookup => "Looking up function",
            DeployStep::Package => "Building archive",
            DeployStep::Upload => "Uploading archive",
            DeployStep::UpdateCode => "Updating function code",
            DeployStep::Publish => "Publishing function",
            DeployStep::SyncAlias => "Synchronizing alias",
            DeployStep::Prune => "Pruning versions",
            DeployStep::Gateway => "Deploying to API Gateway",
        }
    }

    /// Stable identifier for machine-readable output
    pub fn key(&self) -> &'static str {
        match self {
            DeployStep::Requirements => "requirements",
            DeployStep::Lookup => "lookup",
            DeployStep::Package => "package",
            DeployStep::Upload => "upload",
            DeployStep::UpdateCode => "update_code",
            DeployStep::Publish => "publish",
            DeployStep::SyncAlias => "sync_alias",
            DeployStep::Prune => "prune",
            DeployStep::Gateway => "gateway",
        }
    }
}

/// Event emitted during a deploy run
#[derive(Debug, Clone, PartialEq)]
pub enum DeployEvent {
    /// Deploy started
    Started { function: String, alias: String },

    StepStarted { step: DeployStep },

    StepCompleted { step: DeployStep },

    /// Step failed; the run stops here
    StepFailed { step: DeployStep, error: String },

    ArtifactBuilt { path: PathBuf },

    ArtifactUploaded { bucket: String, key: String },

    VersionPublished { version: String },

    /// Alias now points at `version`; `previous` is its old target, if any
    AliasSynced {
        alias: String,
        version: String,
        previous: Option<String>,
    },

    VersionsPruned { versions: Vec<String> },

    /// First deployment of a stage
    StageCreated { stage: String, deployment_id: String },

    PermissionGranted { statement_id: String },

    StageVariableUpdated {
        stage: String,
        previous: Option<String>,
        alias: String,
    },

    ApiAvailable { url: String },

    /// Deploy completed successfully
    Completed {
        function: String,
        alias: String,
        version: String,
        elapsed: Duration,
    },
}

impl DeployEvent {
    /// Whether the event only matters in verbose output
    pub fn is_detail(&self) -> bool {
        matches!(
            self,
            DeployEvent::ArtifactBuilt { .. }
                | DeployEvent::ArtifactUploaded { .. }
                | DeployEvent::VersionPublished { .. }
                | DeployEvent::AliasSynced { .. }
                | DeployEvent::StageCreated { .. }
                | DeployEvent::PermissionGranted { .. }
                | DeployEvent::StageVariableUpdated { .. }
        )
    }
}

/// Trait for receiving deploy events
///
/// Implementations can be:
/// - ConsoleEventSink: Progress display in terminal
/// - JsonEventSink: NDJSON event stream for CI
/// - NoopEventSink: Silent operation
pub trait DeployEventSink: Send + Sync {
    /// Handle a deploy event
    fn on_event(&self, event: DeployEvent);

    /// Check if this sink wants detail events (published version, stage ids...)
    fn wants_detailed_events(&self) -> bool {
        true
    }
}

/// No-op event sink for silent operation
pub struct NoopEventSink;

impl DeployEventSink for NoopEventSink {
    fn on_event(&self, _event: DeployEvent) {}

    fn wants_detailed_events(&self) -> bool {
        false
    }
}
