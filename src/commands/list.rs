use anyhow::Result;
use stagehand::application::TargetResolver;
use stagehand::domain::ports::TargetRepository;
use stagehand::presentation::Cli;

use super::project::Project;
use crate::ui::views::targets::render_target_list;

pub fn cmd_list(cli: &Cli) -> Result<()> {
    let project = Project::open(cli)?;
    let ui = project.ui;
    let source = project.repository.source().to_path_buf();
    let targets = TargetResolver::new(project.repository).list()?;

    if ui.json {
        crate::ui::json::emit(serde_json::json!({
            "event": "targets",
            "file": source.display().to_string(),
            "deployments": targets,
        }))?;
        return Ok(());
    }

    print!(
        "{}",
        render_target_list(&targets, &source, ui.color, ui.unicode)
    );
    Ok(())
}
