//! Publishing-branch bootstrap
//!
//! Creates the target branch on the remote when a deployment finds it
//! missing: an orphan branch sharing no history with any other, holding a
//! single empty commit. Invoked only by the orchestrator's existence check.

use crate::application::switch::switch_to_base_branch;
use crate::config::DeployConfig;
use crate::domain::ports::{shell_quote, CommandRunner, DeployEvent, DeployEventSink};
use crate::error::{WharfError, WharfResult};

/// Create the publishing branch on the remote as an empty orphan commit.
pub fn generate_branch<R: CommandRunner + ?Sized>(
    config: &DeployConfig,
    runner: &R,
    sink: &dyn DeployEventSink,
) -> WharfResult<()> {
    if config.branch.is_empty() {
        return Err(WharfError::MissingBranch);
    }

    sink.log(&format!("Creating the {} branch...", config.branch));
    let workspace = &config.workspace;

    switch_to_base_branch(config, runner)?;
    runner.execute(
        &format!("git checkout --orphan {}", shell_quote(&config.branch)),
        workspace,
    )?;
    // Drop everything inherited from the base branch's index.
    runner.execute("git reset --hard", workspace)?;
    runner.execute(
        &format!(
            "git commit --allow-empty -m {}",
            shell_quote(&format!("Initial {} commit", config.branch))
        ),
        workspace,
    )?;
    runner.execute(
        &format!(
            "git push {} {}",
            shell_quote(&config.repository_path),
            shell_quote(&config.branch)
        ),
        workspace,
    )?;
    runner.execute("git fetch", workspace)?;

    sink.on_event(DeployEvent::BranchBootstrapped {
        branch: config.branch.clone(),
    });
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ports::{NoopEventSink, RunnerResult};
    use std::cell::RefCell;
    use std::path::Path;

    struct RecordingRunner {
        commands: RefCell<Vec<String>>,
    }

    impl RecordingRunner {
        fn new() -> Self {
            Self {
                commands: RefCell::new(Vec::new()),
            }
        }
    }

    impl CommandRunner for RecordingRunner {
        fn execute(&self, command: &str, _cwd: &Path) -> RunnerResult {
            self.commands.borrow_mut().push(command.to_string());
            Ok(String::new())
        }
    }

    #[test]
    fn missing_branch_is_a_config_error() {
        let runner = RecordingRunner::new();
        let config = DeployConfig::new("build", "").with_token("tok");

        let err = generate_branch(&config, &runner, &NoopEventSink).unwrap_err();

        assert!(matches!(err, WharfError::MissingBranch));
        assert!(runner.commands.borrow().is_empty());
    }

    #[test]
    fn bootstrap_sequence_creates_orphan_and_pushes() {
        let runner = RecordingRunner::new();
        let config = DeployConfig::new("build", "gh-pages")
            .with_repository_path("https://remote.invalid/site.git");

        generate_branch(&config, &runner, &NoopEventSink).unwrap();

        let commands = runner.commands.borrow();
        assert_eq!(
            commands.as_slice(),
            [
                "git checkout --progress --force main",
                "git checkout --orphan gh-pages",
                "git reset --hard",
                "git commit --allow-empty -m 'Initial gh-pages commit'",
                "git push https://remote.invalid/site.git gh-pages",
                "git fetch",
            ]
        );
    }
}
