use std::path::Path;

use stagehand::domain::entities::DeploymentTarget;

use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::ColoredText;

/// One line per declared deployment, in file order
pub fn render_target_list(
    targets: &[DeploymentTarget],
    source: &Path,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    if targets.is_empty() {
        return format!(
            "{} No deployments declared in {}\n",
            Icon::Warning.colored(supports_color, supports_unicode),
            source.display()
        );
    }

    let width = targets
        .iter()
        .map(|t| t.function_name.len())
        .max()
        .unwrap_or(0);

    let mut out = format!(
        "{}\n",
        ColoredText::plain(format!("Deployments in {}", source.display()))
            .bold()
            .render(supports_color)
    );
    for target in targets {
        out.push_str(&format!(
            "  {:<width$}  {}\n",
            target.function_name,
            ColoredText::dim(describe(target)).render(supports_color),
            width = width
        ));
    }
    out
}

fn describe(target: &DeploymentTarget) -> String {
    let mut parts = vec![format!(
        "{} -> {}",
        target.source_path(Path::new("")).display(),
        target.file
    )];
    if let Some(bucket) = target.bucket() {
        parts.push(format!("s3://{}", bucket));
    }
    if target.prune.is_enabled() {
        parts.push(match (target.prune.alias_only, target.prune.keep) {
            (true, 0) => "prune unaliased".to_string(),
            (true, keep) => format!("prune unaliased, keep {}", keep),
            (false, keep) => format!("prune keep {}", keep),
        });
    }
    if let Some(api) = &target.api {
        parts.push(format!(
            "api {}/{} {}",
            api.api_id,
            api.resource_id,
            api.http_method.as_str()
        ));
    }
    parts.join("  ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use insta::assert_snapshot;
    use stagehand::domain::entities::{ApiBinding, PrunePolicy};
    use stagehand::domain::value_objects::HttpMethod;

    #[test]
    fn lists_targets_aligned() {
        let targets = vec![
            DeploymentTarget::new("svc", "build", "svc.zip")
                .with_bucket("artifacts")
                .with_prune(PrunePolicy {
                    alias_only: false,
                    keep: 3,
                }),
            DeploymentTarget::new("api-handler", "target/lambda", "handler.zip")
                .with_executable("bootstrap")
                .with_api(ApiBinding::new("api1", "res1", HttpMethod::Post)),
        ];

        let rendered = render_target_list(&targets, Path::new("stagehand.toml"), false, false);
        assert_snapshot!(rendered.trim_end(), @r"
        Deployments in stagehand.toml
          svc          build -> svc.zip  s3://artifacts  prune keep 3
          api-handler  target/lambda/bootstrap -> handler.zip  api api1/res1 POST
        ");
    }

    #[test]
    fn empty_file_warns() {
        let rendered = render_target_list(&[], Path::new("stagehand.toml"), false, false);
        assert_eq!(rendered, "[WARN] No deployments declared in stagehand.toml\n");
    }
}
