//! What the terminal behind stagehand's output can show.
//!
//! Progress lines and errors go to stderr, so color follows stderr being a
//! terminal. Piping the stdout summary into a file keeps progress colored.

use is_terminal::IsTerminal;

/// Environment variables set by the CI systems stagehand deploys from
const CI_MARKERS: &[&str] = &[
    "CI",
    "GITHUB_ACTIONS",
    "GITLAB_CI",
    "BUILDKITE",
    "CODEBUILD_BUILD_ID",
];

const LOCALE_KEYS: &[&str] = &["LC_ALL", "LC_CTYPE", "LANG"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TerminalCapabilities {
    pub supports_color: bool,
    pub supports_unicode: bool,
    pub is_ci: bool,
}

impl TerminalCapabilities {
    pub fn detect() -> Self {
        Self::from_env(|key| std::env::var(key).ok(), std::io::stderr().is_terminal())
    }

    fn from_env(env: impl Fn(&str) -> Option<String>, stderr_is_tty: bool) -> Self {
        let dumb = env("TERM").is_some_and(|t| t.eq_ignore_ascii_case("dumb"));

        // The first non-empty locale variable wins; none set means UTF-8.
        let utf8_locale = LOCALE_KEYS
            .iter()
            .find_map(|k| env(k).filter(|v| !v.is_empty()))
            .map_or(true, |locale| {
                let locale = locale.to_ascii_lowercase();
                locale.contains("utf-8") || locale.contains("utf8")
            });

        Self {
            supports_color: stderr_is_tty && !dumb && env("NO_COLOR").is_none(),
            supports_unicode: !dumb && utf8_locale,
            is_ci: CI_MARKERS.iter().any(|k| env(k).is_some()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn caps(vars: &[(&str, &str)], stderr_is_tty: bool) -> TerminalCapabilities {
        TerminalCapabilities::from_env(
            |key| {
                vars.iter()
                    .find(|(k, _)| *k == key)
                    .map(|(_, v)| v.to_string())
            },
            stderr_is_tty,
        )
    }

    #[test]
    fn color_needs_a_terminal_and_no_opt_out() {
        assert!(caps(&[("TERM", "xterm-256color")], true).supports_color);
        assert!(!caps(&[("TERM", "xterm-256color")], false).supports_color);
        assert!(!caps(&[("NO_COLOR", "1")], true).supports_color);
    }

    #[test]
    fn dumb_terminal_gets_plain_ascii() {
        let c = caps(&[("TERM", "dumb")], true);
        assert!(!c.supports_color);
        assert!(!c.supports_unicode);
    }

    #[test]
    fn codebuild_counts_as_ci() {
        assert!(caps(&[("CODEBUILD_BUILD_ID", "build:1")], false).is_ci);
        assert!(!caps(&[], false).is_ci);
    }

    #[test]
    fn locale_decides_unicode() {
        assert!(!caps(&[("LANG", "C")], true).supports_unicode);
        assert!(caps(&[("LC_ALL", "en_US.UTF-8"), ("LANG", "C")], true).supports_unicode);
        assert!(caps(&[("LC_ALL", ""), ("LANG", "de_DE.utf8")], true).supports_unicode);
        assert!(caps(&[], true).supports_unicode);
    }
}
