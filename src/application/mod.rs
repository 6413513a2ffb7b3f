//! Application Layer
//!
//! Use cases that orchestrate the business flow.
//! This layer:
//! - Depends on Domain layer (entities, services, ports)
//! - Does NOT contain business rules (those are in Domain)
//! - Coordinates between Infrastructure and Domain
//!
//! ## Use Cases
//!
//! - `TargetResolver` - Selects one deployment target from the configuration
//! - `DeployUseCase` - Orchestrates a deploy run (check, package, ship, publish, route)
//! - `GatewayReconciler` - Points an API Gateway stage at the deployed alias

pub mod deploy;
pub mod gateway;
pub mod targets;

#[cfg(test)]
pub(crate) mod fakes;

pub use deploy::{format_elapsed, DeployOptions, DeployReport, DeployUseCase};
pub use gateway::{GatewayReconciler, GatewayReport};
pub use targets::{ResolvedTarget, TargetResolver};
