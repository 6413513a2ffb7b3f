//! Object store over `aws s3 cp`

use std::path::Path;
use std::sync::Arc;

use crate::domain::ports::{ObjectStore, RemoteResult};

use super::cli::AwsCli;
use crate::infrastructure::process::{CommandRunner, SystemRunner};

pub struct AwsS3<R: CommandRunner = SystemRunner> {
    cli: Arc<AwsCli<R>>,
}

impl<R: CommandRunner> AwsS3<R> {
    pub fn new(cli: Arc<AwsCli<R>>) -> Self {
        Self { cli }
    }
}

impl<R: CommandRunner> ObjectStore for AwsS3<R> {
    fn upload(&self, bucket: &str, key: &str, artifact: &Path) -> RemoteResult<()> {
        let source = artifact.display().to_string();
        let destination = format!("s3://{}/{}", bucket, key);
        self.cli
            .run("s3 cp", &["s3", "cp", &source, &destination, "--only-show-errors"])
            .map(|_| ())
    }
}
