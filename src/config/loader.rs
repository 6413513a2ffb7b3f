//! Configuration loading and layering

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{StagehandError, StagehandResult};

use super::types::{AwsConfig, Config};

/// Project configuration file name
pub const CONFIG_FILE: &str = "stagehand.toml";

/// Non-fatal configuration warning surfaced to CLI users.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    pub key: String,
    pub file: PathBuf,
    pub line: Option<usize>,
    pub suggestion: Option<String>,
}

/// Load configuration and collect non-fatal warnings (e.g. unknown keys).
pub fn load_with_warnings(path: &Path) -> StagehandResult<(Config, Vec<ConfigWarning>)> {
    let content = fs::read_to_string(path).map_err(|e| StagehandError::InvalidConfig {
        file: path.to_path_buf(),
        message: format!("cannot read file: {}", e),
    })?;
    let (config, warnings) = parse_with_warnings(&content, path)?;
    config.validate(path)?;
    Ok((config, warnings))
}

/// Parse TOML content; `path` is only used for error and warning locations.
pub fn parse_with_warnings(
    content: &str,
    path: &Path,
) -> StagehandResult<(Config, Vec<ConfigWarning>)> {
    let mut unknown_paths: Vec<String> = Vec::new();
    let deserializer = toml::de::Deserializer::new(content);

    let config: Config = serde_ignored::deserialize(deserializer, |p| {
        unknown_paths.push(p.to_string());
    })
    .map_err(|e| StagehandError::InvalidConfig {
        file: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let warnings = unknown_paths
        .into_iter()
        .map(|path_str| {
            let key = path_str
                .split('.')
                .next_back()
                .unwrap_or(path_str.as_str())
                .to_string();
            ConfigWarning {
                key: key.clone(),
                file: path.to_path_buf(),
                line: find_line_number(content, &key),
                suggestion: suggest_key(&key),
            }
        })
        .collect();

    Ok((config, warnings))
}

/// Walk up from `start` looking for `stagehand.toml`
pub fn find_config(start: &Path) -> Option<PathBuf> {
    start
        .ancestors()
        .map(|dir| dir.join(CONFIG_FILE))
        .find(|candidate| candidate.is_file())
}

/// `~/.config/stagehand/config.toml` (platform config dir)
pub fn user_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("stagehand").join("config.toml"))
}

/// AWS defaults from the user config; unreadable files count as empty
pub fn load_user_aws(path: Option<&Path>) -> AwsConfig {
    path.filter(|p| p.is_file())
        .and_then(|p| Config::load(p).ok())
        .map(|config| config.aws)
        .unwrap_or_default()
}

/// Resolve AWS settings: environment > project > user.
///
/// `STAGEHAND_*` variables win over the standard `AWS_*` ones.
pub fn resolve_aws(
    project: &AwsConfig,
    user: AwsConfig,
    env: impl Fn(&str) -> Option<String>,
) -> AwsConfig {
    let non_empty = |name: &str| env(name).filter(|v| !v.trim().is_empty());
    let from_env = AwsConfig {
        region: non_empty("STAGEHAND_REGION").or_else(|| non_empty("AWS_REGION")),
        profile: non_empty("STAGEHAND_PROFILE").or_else(|| non_empty("AWS_PROFILE")),
    };
    from_env.or(project.clone()).or(user)
}

/// Apply environment variable overrides from the process environment
pub fn with_env_overrides(project: &AwsConfig, user: AwsConfig) -> AwsConfig {
    resolve_aws(project, user, |name| std::env::var(name).ok())
}

fn find_line_number(content: &str, needle: &str) -> Option<usize> {
    content
        .lines()
        .position(|line| line.trim_start().starts_with(needle))
        .map(|i| i + 1)
}

fn suggest_key(unknown: &str) -> Option<String> {
    const CANDIDATES: &[&str] = &[
        "aws",
        "region",
        "profile",
        "output",
        "color",
        "unicode",
        "deployments",
        "function_name",
        "src",
        "executable",
        "file",
        "bucket",
        "prune",
        "alias",
        "keep",
        "api",
        "id",
        "resource",
        "http_method",
    ];

    let mut best: Option<(&str, usize)> = None;
    for candidate in CANDIDATES {
        let dist = levenshtein(unknown, candidate);
        best = match best {
            None => Some((candidate, dist)),
            Some((_, best_dist)) if dist < best_dist => Some((candidate, dist)),
            Some(current) => Some(current),
        };
    }

    match best {
        Some((candidate, dist)) if dist <= 2 => Some(candidate.to_string()),
        _ => None,
    }
}

fn levenshtein(a: &str, b: &str) -> usize {
    if a == b {
        return 0;
    }

    let a_bytes = a.as_bytes();
    let b_bytes = b.as_bytes();

    let mut prev: Vec<usize> = (0..=b_bytes.len()).collect();
    let mut curr = vec![0usize; b_bytes.len() + 1];

    for (i, &ac) in a_bytes.iter().enumerate() {
        curr[0] = i + 1;
        for (j, &bc) in b_bytes.iter().enumerate() {
            let cost = if ac == bc { 0 } else { 1 };
            curr[j + 1] =
                std::cmp::min(std::cmp::min(prev[j + 1] + 1, curr[j] + 1), prev[j] + cost);
        }
        prev.clone_from_slice(&curr);
    }

    prev[b_bytes.len()]
}
