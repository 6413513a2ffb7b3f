//! Infrastructure Layer
//!
//! Concrete implementations of domain ports.
//! This layer handles all I/O operations.
//!
//! ## Structure
//!
//! - `process` - Child process execution shared by the CLI-backed adapters
//! - `aws/` - Lambda, S3 and API Gateway clients over the `aws` CLI
//! - `archive` - Zip artifact producer
//! - `repositories/` - `stagehand.toml` target repository
//! - `events/` - Event sinks (NDJSON)

pub mod archive;
pub mod aws;
pub mod events;
pub mod process;
pub mod repositories;

#[cfg(test)]
pub(crate) mod scripted;

// Re-export for convenience
pub use archive::ZipArtifactProducer;
pub use aws::{AwsApiGateway, AwsCli, AwsLambda, AwsS3};
pub use events::JsonEventSink;
pub use process::{CommandOutput, CommandRunner, SystemRunner};
pub use repositories::TomlTargetRepository;
