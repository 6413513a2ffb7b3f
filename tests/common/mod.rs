//! Common test utilities for Stagehand CLI tests.
//!
//! `TestEnv` gives every test its own project directory and config home so
//! the developer's `~/.config/stagehand` and AWS environment never leak in.

#![allow(dead_code)]

use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use tempfile::TempDir;

/// Result of running the stagehand binary
#[derive(Debug)]
pub struct TestResult {
    pub success: bool,
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

impl TestResult {
    /// stdout parsed as NDJSON, one value per non-empty line
    pub fn json_lines(&self) -> Vec<serde_json::Value> {
        self.stdout
            .lines()
            .filter(|l| !l.trim().is_empty())
            .map(|l| serde_json::from_str(l).unwrap_or_else(|e| panic!("bad NDJSON {l:?}: {e}")))
            .collect()
    }
}

pub struct TestEnv {
    pub project_root: TempDir,
    pub home_dir: TempDir,
}

impl TestEnv {
    pub fn new() -> Self {
        Self {
            project_root: TempDir::new().unwrap(),
            home_dir: TempDir::new().unwrap(),
        }
    }

    /// A project whose `stagehand.toml` has `content`
    pub fn with_config(content: &str) -> Self {
        let env = Self::new();
        env.write("stagehand.toml", content);
        env
    }

    pub fn project_path(&self, relative: &str) -> PathBuf {
        self.project_root.path().join(relative)
    }

    pub fn write(&self, relative: &str, content: &str) {
        let path = self.project_path(relative);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).unwrap();
        }
        std::fs::write(path, content).unwrap();
    }

    pub fn mkdir(&self, relative: &str) {
        std::fs::create_dir_all(self.project_path(relative)).unwrap();
    }

    pub fn run(&self, args: &[&str]) -> TestResult {
        self.run_from(self.project_root.path(), args)
    }

    pub fn run_from(&self, cwd: &Path, args: &[&str]) -> TestResult {
        self.run_with_env(cwd, args, &[])
    }

    pub fn run_with_env(&self, cwd: &Path, args: &[&str], env_vars: &[(&str, &str)]) -> TestResult {
        let mut cmd = Command::new(env!("CARGO_BIN_EXE_stagehand"));
        cmd.current_dir(cwd)
            .args(args)
            .env("HOME", self.home_dir.path())
            .env("XDG_CONFIG_HOME", self.home_dir.path().join(".config"))
            .env("NO_COLOR", "1")
            .env_remove("GITHUB_ACTIONS");
        for key in [
            "STAGEHAND_REGION",
            "STAGEHAND_PROFILE",
            "AWS_REGION",
            "AWS_PROFILE",
        ] {
            cmd.env_remove(key);
        }
        for (key, value) in env_vars {
            cmd.env(key, value);
        }

        let output = cmd.output().expect("Failed to execute stagehand");
        to_result(output)
    }
}

fn to_result(output: Output) -> TestResult {
    TestResult {
        success: output.status.success(),
        exit_code: output.status.code().unwrap_or(-1),
        stdout: String::from_utf8_lossy(&output.stdout).to_string(),
        stderr: String::from_utf8_lossy(&output.stderr).to_string(),
    }
}

/// Two targets: a directory bundle behind an API and a single executable in S3
pub const TWO_TARGETS: &str = r#"
[aws]
region = "eu-west-1"

[[deployments]]
function_name = "orders"
src = "build/orders"
file = "orders.zip"

[deployments.api]
id = "api1"
resource = "res1"
http_method = "GET"

[[deployments]]
function_name = "worker"
src = "target/lambda/worker"
executable = "bootstrap"
file = "worker.zip"
bucket = "artifacts"

[deployments.prune]
keep = 3
"#;
