//! Error types for Stagehand
//!
//! Library code returns [`StagehandError`]; the binary wraps it in `anyhow`.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for Stagehand operations
pub type StagehandResult<T> = Result<T, StagehandError>;

/// Main error type for Stagehand operations
///
/// Each variant names the pipeline step that failed. The first error aborts
/// the run; nothing is rolled back.
#[derive(Error, Debug)]
pub enum StagehandError {
    /// Configuration file could not be read or parsed
    #[error("invalid configuration in {file}: {message}")]
    InvalidConfig { file: PathBuf, message: String },

    /// No deployment in the configuration has this function name
    #[error("no deployment named '{name}' in {file}")]
    TargetNotFound { name: String, file: PathBuf },

    /// Local precondition failed before any remote call
    #[error("requirement not met: {0}")]
    PreconditionFailed(String),

    /// The function does not exist in the runtime
    #[error("function '{name}' not found: {message}")]
    FunctionNotFound { name: String, message: String },

    /// Looking the function up failed for a reason other than absence
    #[error("could not look up function '{name}': {message}")]
    FunctionLookupFailed { name: String, message: String },

    /// Building the deployment archive failed
    #[error("packaging failed for {output}: {message}")]
    PackagingFailed { output: PathBuf, message: String },

    /// Uploading the archive to the object store failed
    #[error("upload to bucket '{bucket}' failed: {message}")]
    UploadFailed { bucket: String, message: String },

    /// Update code, publish, alias sync or prune failed
    #[error("{step} failed for '{function}': {message}")]
    RuntimeUpdateFailed {
        step: &'static str,
        function: String,
        message: String,
    },

    /// The bound API id is not part of the gateway resource tree
    #[error("API '{api_id}' not found")]
    ApiNotFound { api_id: String },

    /// The bound resource id is not a child of the API
    #[error("resource '{resource_id}' not found in API '{api_id}'")]
    ResourceNotFound { api_id: String, resource_id: String },

    /// The integration does not route through the alias stage variable
    #[error("integration method is not valid: URI '{uri}' must contain {placeholder}")]
    InvalidIntegration { uri: String, placeholder: String },

    /// Reading gateway state failed
    #[error("API Gateway lookup failed: {0}")]
    GatewayLookupFailed(String),

    /// Creating the stage for a first deployment failed
    #[error("could not bootstrap stage '{stage}': {message}")]
    StageBootstrapFailed { stage: String, message: String },

    /// Writing the alias stage variable failed
    #[error("could not update stage '{stage}': {message}")]
    StageUpdateFailed { stage: String, message: String },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl StagehandError {
    /// Stable identifier for machine-readable output
    pub fn kind(&self) -> &'static str {
        match self {
            StagehandError::InvalidConfig { .. } => "invalid_config",
            StagehandError::TargetNotFound { .. } => "target_not_found",
            StagehandError::PreconditionFailed(_) => "precondition_failed",
            StagehandError::FunctionNotFound { .. } => "function_not_found",
            StagehandError::FunctionLookupFailed { .. } => "function_lookup_failed",
            StagehandError::PackagingFailed { .. } => "packaging_failed",
            StagehandError::UploadFailed { .. } => "upload_failed",
            StagehandError::RuntimeUpdateFailed { .. } => "runtime_update_failed",
            StagehandError::ApiNotFound { .. } => "api_not_found",
            StagehandError::ResourceNotFound { .. } => "resource_not_found",
            StagehandError::InvalidIntegration { .. } => "invalid_integration",
            StagehandError::GatewayLookupFailed(_) => "gateway_lookup_failed",
            StagehandError::StageBootstrapFailed { .. } => "stage_bootstrap_failed",
            StagehandError::StageUpdateFailed { .. } => "stage_update_failed",
            StagehandError::Io(_) => "io",
        }
    }

    /// Whether the error was raised before anything remote was touched.
    pub fn is_local(&self) -> bool {
        matches!(
            self,
            StagehandError::InvalidConfig { .. }
                | StagehandError::TargetNotFound { .. }
                | StagehandError::PreconditionFailed(_)
                | StagehandError::PackagingFailed { .. }
                | StagehandError::Io(_)
        )
    }
}
