//! Domain Ports (Interfaces)
//!
//! These traits define the boundaries of the domain layer.
//! Infrastructure layer provides concrete implementations.

pub mod artifact_producer;
pub mod deploy_events;
pub mod function_runtime;
pub mod gateway;
pub mod object_store;
pub mod remote_error;
pub mod target_repository;

pub use artifact_producer::{ArtifactError, ArtifactProducer};
pub use deploy_events::{DeployEvent, DeployEventSink, DeployStep, NoopEventSink};
pub use function_runtime::FunctionRuntime;
pub use gateway::Gateway;
pub use object_store::ObjectStore;
pub use remote_error::{RemoteError, RemoteResult};
pub use target_repository::TargetRepository;
