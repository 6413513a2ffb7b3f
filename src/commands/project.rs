//! Project discovery shared by every subcommand

use std::path::{Path, PathBuf};

use anyhow::Result;
use stagehand::config::{
    find_config, load_user_aws, user_config_path, with_env_overrides, AwsConfig, CONFIG_FILE,
};
use stagehand::infrastructure::TomlTargetRepository;
use stagehand::presentation::Cli;
use stagehand::StagehandError;

use crate::ui::context::UiContext;
use crate::ui::error::print_config_warnings;

/// The opened `stagehand.toml` plus the output settings it implies
pub struct Project {
    pub repository: TomlTargetRepository,
    pub ui: UiContext,
}

impl Project {
    /// Locate and load the config, printing unknown-key warnings
    pub fn open(cli: &Cli) -> Result<Self> {
        let path = locate_config(cli.config.as_deref(), &std::env::current_dir()?)?;
        let repository = TomlTargetRepository::open(path)?;
        let ui = UiContext::new(
            cli.json,
            cli.verbose,
            cli.color,
            &repository.config().output,
        );
        print_config_warnings(repository.warnings(), &ui);
        Ok(Self { repository, ui })
    }

    /// Flags, then environment, then project file, then user file
    pub fn aws_settings(&self, cli: &Cli) -> AwsConfig {
        let user = load_user_aws(user_config_path().as_deref());
        let files = with_env_overrides(&self.repository.config().aws, user);
        AwsConfig {
            region: cli.region.clone(),
            profile: cli.profile.clone(),
        }
        .or(files)
    }
}

fn locate_config(explicit: Option<&Path>, cwd: &Path) -> Result<PathBuf, StagehandError> {
    if let Some(path) = explicit {
        return Ok(path.to_path_buf());
    }
    find_config(cwd).ok_or_else(|| StagehandError::InvalidConfig {
        file: cwd.join(CONFIG_FILE),
        message: "not found in this directory or any parent".to_string(),
    })
}
