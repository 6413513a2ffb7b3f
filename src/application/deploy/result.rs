//! Deploy Result
//!
//! Report of a successful deploy run. A failed run has no report, only the
//! first error.

use std::time::Duration;

use crate::application::gateway::GatewayReport;
use crate::domain::entities::{AliasSync, ArtifactLocation, FunctionVersion};
use crate::domain::value_objects::Alias;

#[derive(Debug, Clone)]
pub struct DeployReport {
    pub function: String,
    pub alias: Alias,
    /// Version published by this run
    pub version: FunctionVersion,
    pub alias_sync: AliasSync,
    pub artifact: ArtifactLocation,
    /// Versions deleted by the prune step
    pub pruned: Vec<FunctionVersion>,
    /// Present when the target is bound to an API
    pub gateway: Option<GatewayReport>,
    pub elapsed: Duration,
}

impl DeployReport {
    pub fn elapsed_display(&self) -> String {
        format_elapsed(self.elapsed)
    }

    pub fn invoke_url(&self) -> Option<&str> {
        self.gateway.as_ref().map(|g| g.url.as_str())
    }
}

/// Human-readable duration, e.g. `4.21s` or `830.05ms`
pub fn format_elapsed(elapsed: Duration) -> String {
    format!("{:.2?}", elapsed)
}
