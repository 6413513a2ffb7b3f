use stagehand::application::DeployReport;
use stagehand::domain::ports::DeployEvent;

use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::ColoredText;

/// One progress line for `event`, or `None` when the event is not shown.
///
/// Detail events are only shown when `verbose`. Completion and the API URL
/// are rendered by [`render_deploy_summary`] once the run finishes.
pub fn render_event(
    event: &DeployEvent,
    verbose: bool,
    supports_color: bool,
    supports_unicode: bool,
) -> Option<String> {
    if event.is_detail() && !verbose {
        return None;
    }

    let detail = |text: String| {
        format!(
            "  {} {}",
            Icon::Arrow.colored(supports_color, supports_unicode),
            ColoredText::dim(text).render(supports_color)
        )
    };

    let line = match event {
        DeployEvent::Started { function, alias } => format!(
            "{} Deploying {} to alias {}",
            Icon::Deploy.colored(supports_color, supports_unicode),
            ColoredText::plain(function.as_str()).bold().render(supports_color),
            ColoredText::info(alias.as_str()).render(supports_color)
        ),
        DeployEvent::StepStarted { step } => {
            if !verbose {
                return None;
            }
            format!(
                "{} {}...",
                Icon::Progress.colored(supports_color, supports_unicode),
                step.label()
            )
        }
        DeployEvent::StepCompleted { step } => format!(
            "{} {}",
            Icon::Success.colored(supports_color, supports_unicode),
            step.label()
        ),
        DeployEvent::StepFailed { step, error } => format!(
            "{} {}: {}",
            Icon::Error.colored(supports_color, supports_unicode),
            step.label(),
            ColoredText::error(error.as_str()).render(supports_color)
        ),
        DeployEvent::ArtifactBuilt { path } => detail(format!("archive {}", path.display())),
        DeployEvent::ArtifactUploaded { bucket, key } => {
            detail(format!("uploaded to s3://{}/{}", bucket, key))
        }
        DeployEvent::VersionPublished { version } => detail(format!("published version {}", version)),
        DeployEvent::AliasSynced {
            alias,
            version,
            previous,
        } => match previous {
            Some(previous) if previous == version => {
                detail(format!("alias {} already at version {}", alias, version))
            }
            Some(previous) => detail(format!(
                "alias {} moved from version {} to {}",
                alias, previous, version
            )),
            None => detail(format!("alias {} created at version {}", alias, version)),
        },
        DeployEvent::VersionsPruned { versions } => {
            if versions.is_empty() {
                detail("no versions to prune".to_string())
            } else {
                detail(format!("deleted versions {}", versions.join(", ")))
            }
        }
        DeployEvent::StageCreated {
            stage,
            deployment_id,
        } => detail(format!("stage {} created (deployment {})", stage, deployment_id)),
        DeployEvent::PermissionGranted { statement_id } => {
            detail(format!("invoke permission granted ({})", statement_id))
        }
        DeployEvent::StageVariableUpdated {
            stage,
            previous,
            alias,
        } => detail(format!(
            "stage {} now routes to alias {} (was {})",
            stage,
            alias,
            previous.as_deref().unwrap_or("unset")
        )),
        DeployEvent::ApiAvailable { .. } | DeployEvent::Completed { .. } => return None,
    };
    Some(line)
}

/// Final lines printed after a successful deploy
pub fn render_deploy_summary(
    report: &DeployReport,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    let mut out = format!(
        "{} {}\n",
        Icon::Success.colored(supports_color, supports_unicode),
        ColoredText::success(format!(
            "Deployed {}:{} (version {}) in {}",
            report.function,
            report.alias,
            report.version,
            report.elapsed_display()
        ))
        .bold()
        .render(supports_color)
    );
    if let Some(url) = report.invoke_url() {
        out.push_str(&format!(
            "{} API available at: {}\n",
            Icon::Link.colored(supports_color, supports_unicode),
            ColoredText::info(url).render(supports_color)
        ));
    }
    out
}
