//! External process execution

use std::process::{Command, Stdio};

/// Captured result of one process run
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CommandOutput {
    pub success: bool,
    pub stdout: String,
    pub stderr: String,
}

/// Runs external programs; swapped for a scripted runner in tests
pub trait CommandRunner: Send + Sync {
    /// Run `program` with `args`, capturing its output
    fn run(&self, program: &str, args: &[String]) -> std::io::Result<CommandOutput>;
}

/// Runs programs as child processes
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemRunner;

impl CommandRunner for SystemRunner {
    fn run(&self, program: &str, args: &[String]) -> std::io::Result<CommandOutput> {
        let output = Command::new(program)
            .args(args)
            .stdin(Stdio::null())
            .output()?;
        Ok(CommandOutput {
            success: output.status.success(),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        })
    }
}
