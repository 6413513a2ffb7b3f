//! Presentation Layer
//!
//! This layer handles:
//! - CLI argument parsing (via clap)
//! - Creating use cases with infrastructure dependencies
//!
//! ## Structure
//!
//! - `cli` - Command line definition
//! - `factory` - Creates use cases with proper dependencies (dependency injection)
//!
//! ## Usage
//!
//! ```ignore
//! use stagehand::presentation::factory;
//!
//! let cli = factory::create_aws_cli(&aws);
//! let use_case = factory::create_deploy_use_case(cli);
//! let report = use_case.execute(&target, &options)?;
//! ```

pub mod cli;
pub mod factory;

pub use cli::{Cli, ColorWhen, Commands};
pub use factory::{create_aws_cli, create_deploy_use_case, AwsDeployUseCase};
