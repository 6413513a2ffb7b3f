use anyhow::Result;
use stagehand::application::TargetResolver;
use stagehand::domain::services::RequirementChecker;
use stagehand::presentation::Cli;

use super::project::Project;
use crate::ui::views::check::render_check_passed;

/// Local requirement check only; nothing remote is contacted
pub fn cmd_check(cli: &Cli, target: &str, alias: &str) -> Result<()> {
    let project = Project::open(cli)?;
    let ui = project.ui;
    let resolved = TargetResolver::new(project.repository).resolve(target)?;
    let root = resolved.project_root.as_path();
    let alias = RequirementChecker::new(root).check(&resolved.target, alias)?;

    if ui.json {
        crate::ui::json::emit(serde_json::json!({
            "event": "check",
            "status": "ok",
            "function": resolved.target.function_name,
            "alias": alias.as_str(),
            "archive": resolved.target.artifact_path(root, &alias).display().to_string(),
        }))?;
        return Ok(());
    }

    print!(
        "{}",
        render_check_passed(&resolved.target, &alias, root, ui.color, ui.unicode)
    );
    Ok(())
}
