//! Scripted command runner for adapter tests

use std::collections::VecDeque;
use std::io;
use std::sync::{Arc, Mutex};

use super::process::{CommandOutput, CommandRunner};

type Calls = Arc<Mutex<Vec<Vec<String>>>>;

/// Replays canned outputs in order and records every argv
#[derive(Default)]
pub struct ScriptedRunner {
    responses: Mutex<VecDeque<io::Result<CommandOutput>>>,
    calls: Calls,
}

impl ScriptedRunner {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn ok(self, stdout: &str) -> Self {
        self.push(Ok(CommandOutput {
            success: true,
            stdout: stdout.to_string(),
            stderr: String::new(),
        }))
    }

    pub fn fail(self, stderr: &str) -> Self {
        self.push(Ok(CommandOutput {
            success: false,
            stdout: String::new(),
            stderr: stderr.to_string(),
        }))
    }

    pub fn spawn_error(self) -> Self {
        self.push(Err(io::Error::new(io::ErrorKind::NotFound, "program not found")))
    }

    /// Argument vectors of every run, in order
    pub fn calls(&self) -> Calls {
        self.calls.clone()
    }

    fn push(self, response: io::Result<CommandOutput>) -> Self {
        self.responses.lock().unwrap().push_back(response);
        self
    }
}

impl CommandRunner for ScriptedRunner {
    fn run(&self, program: &str, args: &[String]) -> io::Result<CommandOutput> {
        self.calls.lock().unwrap().push(args.to_vec());
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| panic!("unexpected command: {} {}", program, args.join(" ")))
    }
}

/// True when `argv` contains `flag` immediately followed by `value`
pub fn has_arg(argv: &[String], flag: &str, value: &str) -> bool {
    argv.windows(2).any(|w| w[0] == flag && w[1] == value)
}
