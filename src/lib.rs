//! Stagehand - deploy AWS Lambda functions behind aliases
//!
//! Stagehand packages a function's code, publishes a new version, points a
//! named alias at it and, when the function is bound to an API Gateway
//! method, makes the stage of the same name route to that alias.
//!
//! Layers:
//! - [`domain`] entities, value objects, ports and pure services
//! - [`application`] use cases (`TargetResolver`, `DeployUseCase`, `GatewayReconciler`)
//! - [`infrastructure`] `aws` CLI adapters, zip producer, TOML repository, event sinks
//! - [`presentation`] CLI definition and dependency wiring

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod presentation;

// Re-exports for convenience
pub use application::{DeployOptions, DeployReport, DeployUseCase, TargetResolver};
pub use config::Config;
pub use domain::entities::DeploymentTarget;
pub use error::{StagehandError, StagehandResult};
