//! Artifact producer port - turns a source path into a deployable archive

use std::path::{Path, PathBuf};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ArtifactError {
    #[error("source {0} does not exist")]
    SourceMissing(PathBuf),

    #[error("archiver failed: {0}")]
    Failed(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub trait ArtifactProducer {
    /// Package `source` into `output`, creating `work_dir` first.
    ///
    /// With `single_executable`, `source` is one file placed at the archive
    /// root; otherwise `source` is a directory whose contents are archived.
    fn produce(
        &self,
        source: &Path,
        output: &Path,
        work_dir: &Path,
        single_executable: bool,
    ) -> Result<(), ArtifactError>;
}
