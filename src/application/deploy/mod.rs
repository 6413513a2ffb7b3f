//! Deploy Module
//!
//! Orchestrates a deploy run for Stagehand.
//!
//! ## Structure
//!
//! - `options` - Run configuration (`DeployOptions`)
//! - `result` - Completion report (`DeployReport`)
//! - `use_case` - Core use case logic (`DeployUseCase`)
//!
//! ## Usage
//!
//! ```ignore
//! use stagehand::application::deploy::{DeployOptions, DeployUseCase};
//!
//! let use_case = DeployUseCase::new(runtime, object_store, gateway, producer);
//! let report = use_case.execute(&target, &DeployOptions::new("prod", project_root))?;
//! ```

mod options;
mod result;
mod use_case;

pub use options::DeployOptions;
pub use result::{format_elapsed, DeployReport};
pub use use_case::DeployUseCase;
