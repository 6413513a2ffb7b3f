//! Configuration module for Stagehand
//!
//! Deployment targets come from the project `stagehand.toml`. AWS settings
//! are layered:
//! 1. CLI flags (`--region`, `--profile`)
//! 2. Environment variables (`STAGEHAND_*`, then `AWS_*`)
//! 3. Project config (`stagehand.toml`)
//! 4. User config (`~/.config/stagehand/config.toml`)

mod loader;
mod types;

pub use loader::{
    find_config, load_user_aws, parse_with_warnings, resolve_aws, user_config_path,
    with_env_overrides, ConfigWarning, CONFIG_FILE,
};
pub use types::{AwsConfig, ColorMode, Config, OutputConfig};
