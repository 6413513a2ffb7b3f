//! Deployment target entity
//!
//! A target is keyed by its function name and carries everything needed to
//! build, ship and route one function:
//!
//! ```toml
//! [[deployments]]
//! function_name = "svc"
//! src = "build"
//! file = "svc.zip"
//! ```

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::domain::value_objects::{Alias, HttpMethod};

/// Directory (relative to the project) where archives are staged
pub const WORK_DIR: &str = ".stagehand";

/// Version retention policy applied after the alias moves
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PrunePolicy {
    /// Delete every version no alias points at
    #[serde(default, rename = "alias")]
    pub alias_only: bool,
    /// Number of most recent versions to keep regardless of aliases
    #[serde(default)]
    pub keep: u32,
}

impl PrunePolicy {
    pub fn is_enabled(&self) -> bool {
        self.alias_only || self.keep > 0
    }
}

/// HTTP gateway binding in front of the function
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiBinding {
    #[serde(rename = "id")]
    pub api_id: String,
    #[serde(rename = "resource")]
    pub resource_id: String,
    pub http_method: HttpMethod,
}

impl ApiBinding {
    pub fn new(
        api_id: impl Into<String>,
        resource_id: impl Into<String>,
        http_method: HttpMethod,
    ) -> Self {
        Self {
            api_id: api_id.into(),
            resource_id: resource_id.into(),
            http_method,
        }
    }
}

/// One deployable unit
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeploymentTarget {
    pub function_name: String,
    pub src: PathBuf,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub executable: Option<String>,
    pub file: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bucket: Option<String>,
    #[serde(default)]
    pub prune: PrunePolicy,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api: Option<ApiBinding>,
}

impl DeploymentTarget {
    pub fn new(
        function_name: impl Into<String>,
        src: impl Into<PathBuf>,
        file: impl Into<String>,
    ) -> Self {
        Self {
            function_name: function_name.into(),
            src: src.into(),
            executable: None,
            file: file.into(),
            bucket: None,
            prune: PrunePolicy::default(),
            api: None,
        }
    }

    pub fn with_executable(mut self, executable: impl Into<String>) -> Self {
        self.executable = Some(executable.into());
        self
    }

    pub fn with_bucket(mut self, bucket: impl Into<String>) -> Self {
        self.bucket = Some(bucket.into());
        self
    }

    pub fn with_prune(mut self, prune: PrunePolicy) -> Self {
        self.prune = prune;
        self
    }

    pub fn with_api(mut self, api: ApiBinding) -> Self {
        self.api = Some(api);
        self
    }

    /// Executable name, treating an empty string as unset
    pub fn executable(&self) -> Option<&str> {
        self.executable.as_deref().filter(|e| !e.trim().is_empty())
    }

    /// Bucket name, treating an empty string as unset
    pub fn bucket(&self) -> Option<&str> {
        self.bucket.as_deref().filter(|b| !b.trim().is_empty())
    }

    /// Package only the executable instead of the whole source directory
    pub fn is_single_executable(&self) -> bool {
        self.executable().is_some()
    }

    /// `<root>/<src>[/<executable>]`
    pub fn source_path(&self, project_root: &Path) -> PathBuf {
        let src = project_root.join(&self.src);
        match self.executable() {
            Some(executable) => src.join(executable),
            None => src,
        }
    }

    /// `<root>/.stagehand/<function>/<alias>`
    pub fn work_dir(&self, project_root: &Path, alias: &Alias) -> PathBuf {
        project_root
            .join(WORK_DIR)
            .join(&self.function_name)
            .join(alias.as_str())
    }

    /// `<root>/.stagehand/<function>/<alias>/<file>`
    pub fn artifact_path(&self, project_root: &Path, alias: &Alias) -> PathBuf {
        self.work_dir(project_root, alias).join(&self.file)
    }

    /// Object store key for the uploaded archive
    pub fn object_key(&self, alias: &Alias) -> String {
        format!("{}/{}/{}", self.function_name, alias, self.file)
    }
}
