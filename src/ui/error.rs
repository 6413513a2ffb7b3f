use stagehand::config::ConfigWarning;
use stagehand::StagehandError;

use crate::ui::ci::{github_actions_annotation, in_github_actions, AnnotationLevel};
use crate::ui::context::UiContext;
use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::ColoredText;

pub fn format_error(err: &anyhow::Error, supports_color: bool, supports_unicode: bool) -> String {
    let mut out = format!(
        "{} {}\n",
        Icon::Error.colored(supports_color, supports_unicode),
        ColoredText::error(err.to_string()).bold().render(supports_color)
    );

    if let Some(fix) = err.downcast_ref::<StagehandError>().and_then(fix_hint) {
        out.push_str(&format!(
            "  {} {}\n",
            ColoredText::info("FIX:").bold().render(supports_color),
            fix
        ));
    }
    out
}

fn fix_hint(err: &StagehandError) -> Option<String> {
    let hint = match err {
        StagehandError::TargetNotFound { .. } => {
            "Run 'stagehand list' to see the declared deployments.".to_string()
        }
        StagehandError::InvalidIntegration { placeholder, .. } => format!(
            "Point the method integration at the function ARN followed by ':{}'.",
            placeholder
        ),
        StagehandError::FunctionNotFound { .. } => {
            "Create the function first; stagehand only deploys new code to existing functions."
                .to_string()
        }
        StagehandError::PackagingFailed { .. } => {
            "Make sure the source path is readable and the work directory is writable.".to_string()
        }
        _ if err.is_local() => return None,
        _ => "Nothing was rolled back; re-run the deploy once the cause is fixed.".to_string(),
    };
    Some(hint)
}

fn error_location(err: &anyhow::Error) -> Option<String> {
    match err.downcast_ref::<StagehandError>()? {
        StagehandError::InvalidConfig { file, .. } | StagehandError::TargetNotFound { file, .. } => {
            Some(file.display().to_string())
        }
        _ => None,
    }
}

/// Report a fatal error on stderr (or as an NDJSON `error` event with `--json`)
pub fn print_error(err: &anyhow::Error, json: bool) {
    if json {
        let kind = err
            .downcast_ref::<StagehandError>()
            .map(StagehandError::kind)
            .unwrap_or("error");
        let _ = crate::ui::json::emit(serde_json::json!({
            "event": "error",
            "kind": kind,
            "message": err.to_string(),
        }));
        return;
    }

    let caps = crate::ui::terminal::TerminalCapabilities::detect();
    if caps.is_ci && in_github_actions() {
        println!(
            "{}",
            github_actions_annotation(
                AnnotationLevel::Error,
                &err.to_string(),
                error_location(err).as_deref(),
                None,
            )
        );
    }

    eprint!(
        "{}",
        format_error(err, caps.supports_color, caps.supports_unicode)
    );
}

pub fn format_config_warning(
    warning: &ConfigWarning,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    let location = match warning.line {
        Some(line) => format!("{}:{}", warning.file.display(), line),
        None => warning.file.display().to_string(),
    };
    let mut out = format!(
        "{} {} {}\n",
        Icon::Warning.colored(supports_color, supports_unicode),
        ColoredText::warning(format!("Unknown config key '{}'", warning.key))
            .render(supports_color),
        ColoredText::dim(format!("({})", location)).render(supports_color)
    );
    if let Some(suggestion) = &warning.suggestion {
        out.push_str(&format!("  Did you mean '{}'?\n", suggestion));
    }
    out
}

/// Report unknown config keys without failing the command
pub fn print_config_warnings(warnings: &[ConfigWarning], ui: &UiContext) {
    for warning in warnings {
        if ui.json {
            let _ = crate::ui::json::emit(serde_json::json!({
                "event": "warning",
                "kind": "unknown_config_key",
                "key": warning.key,
                "file": warning.file.display().to_string(),
                "line": warning.line,
                "suggestion": warning.suggestion,
            }));
            continue;
        }
        if ui.caps.is_ci && in_github_actions() {
            let file = warning.file.display().to_string();
            println!(
                "{}",
                github_actions_annotation(
                    AnnotationLevel::Warning,
                    &format!("unknown config key '{}'", warning.key),
                    Some(file.as_str()),
                    warning.line,
                )
            );
        }
        eprint!("{}", format_config_warning(warning, ui.color, ui.unicode));
    }
}
