//! Shell command runner
//!
//! Executes command strings through `sh -c` in a given working directory.
//! Stdout is captured and returned; a non-zero exit surfaces the captured
//! stderr in the error so CI logs carry the original git/rsync message.

use std::path::Path;
use std::process::Command;

use crate::domain::ports::{CommandRunner, RunnerError, RunnerResult};

/// Command runner backed by the system shell
pub struct ShellRunner;

impl CommandRunner for ShellRunner {
    fn execute(&self, command: &str, cwd: &Path) -> RunnerResult {
        let output = Command::new("sh")
            .arg("-c")
            .arg(command)
            .current_dir(cwd)
            .output()
            .map_err(|e| RunnerError::Spawn {
                command: command.to_string(),
                source: e,
            })?;

        if !output.status.success() {
            return Err(RunnerError::NonZeroExit {
                command: command.to_string(),
                code: output.status.code(),
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        String::from_utf8(output.stdout).map_err(|_| RunnerError::InvalidOutput {
            command: command.to_string(),
        })
    }
}
