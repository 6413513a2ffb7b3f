use std::path::Path;

use stagehand::domain::entities::DeploymentTarget;
use stagehand::domain::value_objects::Alias;

use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::ColoredText;

/// What a deploy of `target` under `alias` would do, after requirements passed
pub fn render_check_passed(
    target: &DeploymentTarget,
    alias: &Alias,
    project_root: &Path,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    let mut out = format!(
        "{} {}\n",
        Icon::Success.colored(supports_color, supports_unicode),
        ColoredText::success(format!(
            "{} is ready to deploy as '{}'",
            target.function_name, alias
        ))
        .render(supports_color)
    );

    let mut row = |label: &str, value: String| {
        out.push_str(&format!(
            "  {:<8} {}\n",
            ColoredText::dim(label).render(supports_color),
            value
        ));
    };

    row("source", target.source_path(project_root).display().to_string());
    row(
        "archive",
        target
            .artifact_path(project_root, alias)
            .display()
            .to_string(),
    );
    if let Some(bucket) = target.bucket() {
        row("upload", format!("s3://{}/{}", bucket, target.object_key(alias)));
    }
    if let Some(api) = &target.api {
        row(
            "stage",
            format!(
                "{} on {} {}/{}",
                alias,
                api.http_method.as_str(),
                api.api_id,
                api.resource_id
            ),
        );
    }
    out
}
