//! Object store port - artifact upload for runtimes that pull code from a bucket

use std::path::Path;

use super::RemoteResult;

pub trait ObjectStore {
    /// Upload `artifact` to `bucket` under `key`
    fn upload(&self, bucket: &str, key: &str, artifact: &Path) -> RemoteResult<()>;
}
