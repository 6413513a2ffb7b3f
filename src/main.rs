//! Stagehand CLI - deploy Lambda functions behind aliases
//!
//! Usage: stagehand <COMMAND>
//!
//! Commands:
//!   deploy  Package, publish and alias a function; route its API stage
//!   list    List configured deployment targets
//!   check   Check local requirements without calling AWS

use clap::Parser;
use stagehand::presentation::{Cli, Commands};

mod commands;
mod ui;

fn main() {
    let cli = Cli::parse();

    if let Err(err) = run(&cli) {
        ui::error::print_error(&err, cli.json);
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    match &cli.command {
        Commands::Deploy {
            target,
            alias,
            no_prune,
        } => commands::deploy::cmd_deploy(cli, target, alias, *no_prune),
        Commands::List => commands::list::cmd_list(cli),
        Commands::Check { target, alias } => commands::check::cmd_check(cli, target, alias),
    }
}
