use std::sync::Arc;

use anyhow::Result;
use stagehand::application::{DeployOptions, TargetResolver};
use stagehand::domain::ports::DeployEventSink;
use stagehand::infrastructure::JsonEventSink;
use stagehand::presentation::{factory, Cli};
use stagehand::StagehandError;

use super::project::Project;
use crate::ui::console::ConsoleEventSink;
use crate::ui::views::deploy::render_deploy_summary;

pub fn cmd_deploy(cli: &Cli, target: &str, alias: &str, no_prune: bool) -> Result<()> {
    let project = Project::open(cli)?;
    let ui = project.ui;
    let aws = project.aws_settings(cli);
    let resolved = TargetResolver::new(project.repository).resolve(target)?;

    let aws_cli = factory::create_aws_cli(&aws);
    aws_cli.detect().map_err(|e| {
        StagehandError::PreconditionFailed(format!("the aws CLI is not usable: {}", e))
    })?;
    aws_cli.verify_credentials().map_err(|e| {
        StagehandError::PreconditionFailed(format!("AWS credentials are not usable: {}", e))
    })?;

    let use_case = factory::create_deploy_use_case(aws_cli);
    let sink: Arc<dyn DeployEventSink> = if ui.json {
        Arc::new(JsonEventSink::stdout())
    } else {
        Arc::new(ConsoleEventSink::stderr(&ui))
    };

    let options = DeployOptions::new(alias, resolved.project_root).with_skip_prune(no_prune);
    let report = use_case.execute_with_events(&resolved.target, &options, sink)?;

    if !ui.json {
        print!("{}", render_deploy_summary(&report, ui.color, ui.unicode));
    }
    Ok(())
}
