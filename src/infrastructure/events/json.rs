//! JSON Event Sink
//!
//! Outputs deploy events as NDJSON for CI/automation consumption.

use crate::domain::ports::{DeployEvent, DeployEventSink};
use crate::application::format_elapsed;
use chrono::{SecondsFormat, Utc};
use std::io::{self, Write};
use std::sync::Mutex;

/// Event sink that outputs NDJSON events to stdout
pub struct JsonEventSink {
    /// Mutex to ensure thread-safe writes
    writer: Mutex<Box<dyn Write + Send>>,
}

impl JsonEventSink {
    /// Create a new JSON event sink writing to stdout
    pub fn stdout() -> Self {
        Self {
            writer: Mutex::new(Box::new(io::stdout())),
        }
    }

    /// Create a JSON event sink writing to a custom writer (for testing)
    pub fn with_writer<W: Write + Send + 'static>(writer: W) -> Self {
        Self {
            writer: Mutex::new(Box::new(writer)),
        }
    }

    fn write_event(&self, mut event: serde_json::Value) {
        if let Some(fields) = event.as_object_mut() {
            fields.insert(
                "timestamp".to_string(),
                Utc::now()
                    .to_rfc3339_opts(SecondsFormat::Millis, true)
                    .into(),
            );
        }
        if let Ok(mut writer) = self.writer.lock() {
            let _ = writeln!(writer, "{}", event);
            let _ = writer.flush();
        }
    }
}

/// JSON body of one event, without the timestamp
pub fn event_json(event: &DeployEvent) -> serde_json::Value {
    match event {
        DeployEvent::Started { function, alias } => serde_json::json!({
            "event": "start",
            "command": "deploy",
            "function": function,
            "alias": alias,
        }),

        DeployEvent::StepStarted { step } => serde_json::json!({
            "event": "step_start",
            "step": step.key(),
        }),

        DeployEvent::StepCompleted { step } => serde_json::json!({
            "event": "step_complete",
            "step": step.key(),
        }),

        DeployEvent::StepFailed { step, error } => serde_json::json!({
            "event": "step_error",
            "step": step.key(),
            "error": error,
        }),

        DeployEvent::ArtifactBuilt { path } => serde_json::json!({
            "event": "artifact_built",
            "path": path.display().to_string(),
        }),

        DeployEvent::ArtifactUploaded { bucket, key } => serde_json::json!({
            "event": "artifact_uploaded",
            "bucket": bucket,
            "key": key,
        }),

        DeployEvent::VersionPublished { version } => serde_json::json!({
            "event": "version_published",
            "version": version,
        }),

        DeployEvent::AliasSynced {
            alias,
            version,
            previous,
        } => serde_json::json!({
            "event": "alias_synced",
            "alias": alias,
            "version": version,
            "previous": previous,
        }),

        DeployEvent::VersionsPruned { versions } => serde_json::json!({
            "event": "versions_pruned",
            "versions": versions,
        }),

        DeployEvent::StageCreated {
            stage,
            deployment_id,
        } => serde_json::json!({
            "event": "stage_created",
            "stage": stage,
            "deployment_id": deployment_id,
        }),

        DeployEvent::PermissionGranted { statement_id } => serde_json::json!({
            "event": "permission_granted",
            "statement_id": statement_id,
        }),

        DeployEvent::StageVariableUpdated {
            stage,
            previous,
            alias,
        } => serde_json::json!({
            "event": "stage_variable_updated",
            "stage": stage,
            "previous": previous,
            "alias": alias,
        }),

        DeployEvent::ApiAvailable { url } => serde_json::json!({
            "event": "api_available",
            "url": url,
        }),

        DeployEvent::Completed {
            function,
            alias,
            version,
            elapsed,
        } => serde_json::json!({
            "event": "complete",
            "command": "deploy",
            "status": "success",
            "function": function,
            "alias": alias,
            "version": version,
            "elapsed_ms": elapsed.as_millis() as u64,
            "elapsed": format_elapsed(*elapsed),
        }),
    }
}

impl DeployEventSink for JsonEventSink {
    fn on_event(&self, event: DeployEvent) {
        self.write_event(event_json(&event));
    }

    fn wants_detailed_events(&self) -> bool {
        true // JSON mode wants all events
    }
}
