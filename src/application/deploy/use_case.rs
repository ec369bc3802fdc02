//! Deploy use case
//!
//! The deployment state machine: check that the publishing branch exists on
//! the remote (bootstrapping it if not), stage its tip in an isolated
//! worktree, mirror the build output in under the clean/exclude rules, and
//! force-push a single fresh commit. The staging worktree keeps the primary
//! working tree and branch pointer untouched, so the base branch and the
//! publishing branch are materialized simultaneously.
//!
//! Teardown - unregistering the staging worktree, deleting the reserved
//! commit branch, and restoring the default branch - runs whether or not
//! the publish steps succeed.

use crate::application::bootstrap::generate_branch;
use crate::application::switch::switch_to_base_branch;
use crate::config::DeployConfig;
use crate::domain::ports::{shell_quote, CommandRunner, DeployEvent, DeployEventSink};
use crate::domain::value_objects::ExcludePatterns;
use crate::error::WharfResult;

use super::result::DeployStatus;

/// Fixed, process-reserved staging names. Plain literals keep the
/// self-exclusion check (folder == root) a simple name match.
pub const TEMP_DEPLOYMENT_DIR: &str = "wharf-temp-deployment-folder";
pub const TEMP_DEPLOYMENT_BRANCH: &str = "wharf-temp-deployment-branch";

/// Hosting-platform marker files a clean pass must never delete.
const PROTECTED_FILES: [&str; 2] = ["CNAME", ".nojekyll"];

/// Deploy use case - runs the orchestration sequence against a command
/// runner and reports progress through the event sink.
pub struct DeployUseCase<'a, R: CommandRunner + ?Sized> {
    config: &'a DeployConfig,
    runner: &'a R,
    sink: &'a dyn DeployEventSink,
}

impl<'a, R: CommandRunner + ?Sized> DeployUseCase<'a, R> {
    pub fn new(config: &'a DeployConfig, runner: &'a R, sink: &'a dyn DeployEventSink) -> Self {
        Self {
            config,
            runner,
            sink,
        }
    }

    /// Run the full deployment.
    ///
    /// Errors from the publish steps are returned only after teardown has
    /// executed; the caller's boundary reports them and marks the run failed.
    pub fn execute(&self) -> WharfResult<DeployStatus> {
        let outcome = self.run_to_publish();
        self.teardown();
        outcome
    }

    fn run_to_publish(&self) -> WharfResult<DeployStatus> {
        let config = self.config;
        let workspace = &config.workspace;

        // Presence on the remote is inferred from a non-empty head listing.
        let heads = self.runner.execute(
            &format!(
                "git ls-remote --heads {} {}",
                shell_quote(&config.repository_path),
                shell_quote(&config.branch)
            ),
            workspace,
        )?;
        let branch_exists = !heads.trim().is_empty();
        if !branch_exists && !config.is_test {
            generate_branch(config, self.runner, self.sink)?;
        }

        switch_to_base_branch(config, self.runner)?;
        // Fetch from the resolved path directly; origin may have been
        // reconfigured since the initializer's general fetch.
        self.runner.execute(
            &format!("git fetch {}", shell_quote(&config.repository_path)),
            workspace,
        )?;

        self.runner.execute(
            &format!(
                "git worktree add --checkout {} {}",
                TEMP_DEPLOYMENT_DIR,
                shell_quote(&format!("origin/{}", config.branch))
            ),
            workspace,
        )?;
        self.sink.on_event(DeployEvent::WorktreeStaged {
            directory: TEMP_DEPLOYMENT_DIR.to_string(),
        });

        let sync_command = self.build_sync_command();
        if config.debug {
            self.sink.log(&format!("Running: {}", sync_command));
        }
        self.runner.execute(&sync_command, workspace)?;
        self.sink.on_event(DeployEvent::Synchronized {
            folder: config.folder.clone(),
        });

        let staging = workspace.join(TEMP_DEPLOYMENT_DIR);
        let status = self.runner.execute("git status --porcelain", &staging)?;
        if status.trim().is_empty() && !config.is_test {
            self.sink.on_event(DeployEvent::NothingToCommit);
            return Ok(DeployStatus::Skipped);
        }

        self.runner.execute("git add --all .", &staging)?;
        // Commit on a reserved local branch, never directly on the
        // worktree's detached reference to the publishing branch.
        self.runner.execute(
            &format!("git checkout -b {}", TEMP_DEPLOYMENT_BRANCH),
            &staging,
        )?;
        self.runner.execute(
            &format!(
                "git commit -m {} --quiet",
                shell_quote(&self.commit_message())
            ),
            &staging,
        )?;

        self.runner.execute(
            &format!(
                "git push --force {} {}:{}",
                shell_quote(&config.repository_path),
                TEMP_DEPLOYMENT_BRANCH,
                shell_quote(&config.branch)
            ),
            &staging,
        )?;
        self.sink.on_event(DeployEvent::Pushed {
            branch: config.branch.clone(),
        });

        Ok(DeployStatus::Success)
    }

    /// Mirror the build output into the staging worktree.
    ///
    /// Additive by default; with the clean policy active, staged files
    /// missing from the source are deleted unless protected. `CNAME` and
    /// `.nojekyll` carry receiver-side protect filters so a clean never
    /// strips hosting-platform configuration, while a copy present in the
    /// build output still transfers; user patterns get the same treatment.
    /// The worktree's own metadata paths are never mirrored over, and when
    /// the build folder is the workspace root the staging directory
    /// excludes itself from the copy.
    fn build_sync_command(&self) -> String {
        let config = self.config;
        let mut command = format!(
            "rsync -q -av --checksum {}/. {}",
            shell_quote(&config.folder),
            shell_quote(&self.sync_destination())
        );

        if config.clean {
            command.push_str(" --delete");
            for file in PROTECTED_FILES {
                command.push_str(&format!(" --filter {}", shell_quote(&format!("P {}", file))));
            }
            let (patterns, warning) = match &config.clean_exclude {
                Some(raw) => ExcludePatterns::parse(raw),
                None => (ExcludePatterns::empty(), None),
            };
            if let Some(message) = warning {
                self.sink.on_event(DeployEvent::Warning { message });
            }
            for pattern in patterns.iter() {
                command.push_str(&format!(
                    " --filter {}",
                    shell_quote(&format!("P {}", pattern))
                ));
            }
        }

        command.push_str(" --exclude .ssh --exclude .git --exclude .github");
        if config.deploys_workspace_root() {
            command.push_str(&format!(" --exclude {}", TEMP_DEPLOYMENT_DIR));
        }
        command
    }

    fn sync_destination(&self) -> String {
        match &self.config.target_folder {
            Some(target) => format!("{}/{}", TEMP_DEPLOYMENT_DIR, target),
            None => TEMP_DEPLOYMENT_DIR.to_string(),
        }
    }

    fn commit_message(&self) -> String {
        let base = self.config.commit_message.clone().unwrap_or_else(|| {
            format!(
                "Deploying to {} from {}",
                self.config.branch,
                self.config.base_or_default_branch()
            )
        });
        match &self.config.commit_sha {
            Some(sha) => format!("{} - {}", base, sha),
            None => base,
        }
    }

    /// Guaranteed cleanup: unregister and remove the staging worktree,
    /// delete the reserved commit branch, and return the primary working
    /// tree to the default branch. Leaving the worktree registration or the
    /// temp branch behind would make the next run in the same workspace
    /// fail at stage time. Problems here are warnings, never errors.
    fn teardown(&self) {
        let workspace = &self.config.workspace;

        // `git worktree remove` drops the registration along with the
        // directory. It fails when the worktree was never added (or its
        // directory is already gone), so fall back to plain removal plus a
        // prune of stale registrations.
        if self
            .runner
            .execute(
                &format!("git worktree remove --force {}", TEMP_DEPLOYMENT_DIR),
                workspace,
            )
            .is_err()
        {
            let staging = workspace.join(TEMP_DEPLOYMENT_DIR);
            if staging.exists() {
                if let Err(e) = std::fs::remove_dir_all(&staging) {
                    self.sink.on_event(DeployEvent::Warning {
                        message: format!(
                            "failed to remove staging directory {}: {}",
                            staging.display(),
                            e
                        ),
                    });
                }
            }
            if self.runner.execute("git worktree prune", workspace).is_err() {
                self.sink.log("No stale worktree registrations to prune");
            }
        }

        // The reserved branch outlives its worktree; absence is normal on
        // skipped or early-failed runs.
        if self
            .runner
            .execute(
                &format!("git branch -D {}", TEMP_DEPLOYMENT_BRANCH),
                workspace,
            )
            .is_err()
        {
            self.sink.log("No temporary deployment branch to delete");
        }

        let checkout = format!(
            "git checkout --progress --force {}",
            shell_quote(&self.config.default_branch)
        );
        if let Err(e) = self.runner.execute(&checkout, workspace) {
            self.sink.on_event(DeployEvent::Warning {
                message: format!("failed to restore the default branch: {}", e),
            });
        }

        self.sink.on_event(DeployEvent::TornDown);
    }
}
