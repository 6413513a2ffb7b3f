//! Requirement checker - local preconditions verified before any remote call
//!
//! Every problem found is reported at once so a broken target can be fixed in
//! one pass.

use std::path::Path;

use crate::domain::entities::DeploymentTarget;
use crate::domain::value_objects::Alias;
use crate::error::{StagehandError, StagehandResult};

pub struct RequirementChecker<'a> {
    project_root: &'a Path,
}

impl<'a> RequirementChecker<'a> {
    pub fn new(project_root: &'a Path) -> Self {
        Self { project_root }
    }

    /// Validate the target and alias, returning the parsed alias.
    pub fn check(&self, target: &DeploymentTarget, alias: &str) -> StagehandResult<Alias> {
        let mut problems = Vec::new();

        let alias = match Alias::parse(alias) {
            Ok(alias) => Some(alias),
            Err(e) => {
                problems.push(e.to_string());
                None
            }
        };

        if target.function_name.trim().is_empty() {
            problems.push("function_name must not be empty".to_string());
        } else if target.function_name.chars().any(char::is_whitespace) {
            problems.push(format!(
                "function_name '{}' must not contain whitespace",
                target.function_name
            ));
        }

        self.check_file(target, &mut problems);
        self.check_source(target, &mut problems);

        if let Some(bucket) = target.bucket() {
            if bucket.contains('/') || bucket.chars().any(char::is_whitespace) {
                problems.push(format!("bucket '{}' is not a valid bucket name", bucket));
            }
        }

        if let Some(api) = &target.api {
            if api.api_id.trim().is_empty() {
                problems.push("api.id must not be empty".to_string());
            }
            if api.resource_id.trim().is_empty() {
                problems.push("api.resource must not be empty".to_string());
            }
        }

        match alias {
            Some(alias) if problems.is_empty() => Ok(alias),
            _ => Err(StagehandError::PreconditionFailed(problems.join("; "))),
        }
    }

    fn check_file(&self, target: &DeploymentTarget, problems: &mut Vec<String>) {
        let file = target.file.trim();
        if file.is_empty() {
            problems.push("file must not be empty".to_string());
        } else if file.contains('/') || file.contains('\\') {
            problems.push(format!("file '{}' must be a file name, not a path", file));
        } else if !file.ends_with(".zip") {
            problems.push(format!("file '{}' must end with .zip", file));
        }
    }

    fn check_source(&self, target: &DeploymentTarget, problems: &mut Vec<String>) {
        if target.src.as_os_str().is_empty() {
            problems.push("src must not be empty".to_string());
            return;
        }

        let src_dir = self.project_root.join(&target.src);
        match target.executable() {
            Some(executable) => {
                if executable.contains('/') || executable.contains('\\') {
                    problems.push(format!(
                        "executable '{}' must be a file name inside src",
                        executable
                    ));
                    return;
                }
                let path = target.source_path(self.project_root);
                if !path.is_file() {
                    problems.push(format!("executable {} does not exist", path.display()));
                }
            }
            None => {
                if !src_dir.is_dir() {
                    problems.push(format!(
                        "source directory {} does not exist",
                        src_dir.display()
                    ));
                }
            }
        }
    }
}
