//! Where the runtime picks up new function code

use std::fmt;
use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ArtifactLocation {
    /// Local archive sent inline with the update request
    Inline(PathBuf),
    /// Archive previously uploaded to the object store
    Object { bucket: String, key: String },
}

impl fmt::Display for ArtifactLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArtifactLocation::Inline(path) => write!(f, "{}", path.display()),
            ArtifactLocation::Object { bucket, key } => write!(f, "s3://{}/{}", bucket, key),
        }
    }
}
