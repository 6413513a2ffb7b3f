//! CLI Argument Parsing
//!
//! This module defines the CLI interface using clap.
//!
//! ## Design Notes
//!
//! - Global flags (--json, --color, --verbose, --config, --region, --profile)
//!   are inherited by all subcommands
//! - `--region`/`--profile` win over environment variables and config files

use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorWhen {
    Auto,
    Always,
    Never,
}

/// Stagehand - deploy Lambda functions behind aliases and route API Gateway stages to them
#[derive(Parser, Debug)]
#[command(name = "stagehand")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Output format for CI (NDJSON events on stdout)
    #[arg(long, global = true)]
    pub json: bool,

    /// Color output mode
    #[arg(long, global = true, value_enum)]
    pub color: Option<ColorWhen>,

    /// Verbosity level (-v shows detail events)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Path to stagehand.toml (default: search upwards from the current directory)
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// AWS region
    #[arg(long, global = true)]
    pub region: Option<String>,

    /// AWS named profile
    #[arg(long, global = true)]
    pub profile: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Package, publish and alias a function; route its API stage to the alias
    Deploy {
        /// Function name as declared under [[deployments]]
        target: String,

        /// Alias to publish under (also the API Gateway stage name)
        #[arg(short, long)]
        alias: String,

        /// Skip version pruning even when the target declares a policy
        #[arg(long)]
        no_prune: bool,
    },

    /// List configured deployment targets
    List,

    /// Check local requirements for a target without calling AWS
    Check {
        /// Function name as declared under [[deployments]]
        target: String,

        /// Alias that would be deployed
        #[arg(short, long)]
        alias: String,
    },
}
