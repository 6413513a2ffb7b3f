//! GitHub Actions workflow commands

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnnotationLevel {
    Warning,
    Error,
}

/// `::error file=stagehand.toml,line=3,title=Stagehand::message`
pub fn github_actions_annotation(
    level: AnnotationLevel,
    message: &str,
    file: Option<&str>,
    line: Option<usize>,
) -> String {
    let level_str = match level {
        AnnotationLevel::Warning => "warning",
        AnnotationLevel::Error => "error",
    };

    let mut props = Vec::new();
    if let Some(file) = file {
        props.push(format!("file={}", escape_property(file)));
    }
    if let Some(line) = line {
        props.push(format!("line={}", line));
    }
    props.push("title=Stagehand".to_string());

    format!("::{} {}::{}", level_str, props.join(","), escape_data(message))
}

/// Whether annotations should be printed for this process
pub fn in_github_actions() -> bool {
    std::env::var_os("GITHUB_ACTIONS").is_some()
}

fn escape_data(s: &str) -> String {
    s.replace('%', "%25").replace('\r', "%0D").replace('\n', "%0A")
}

fn escape_property(s: &str) -> String {
    escape_data(s).replace(':', "%3A").replace(',', "%2C")
}
