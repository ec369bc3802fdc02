//! Base-branch switching
//!
//! Shared by the bootstrapper and the orchestrator to return the primary
//! working tree to a known branch, discarding local modifications. Safe to
//! call repeatedly; checkout failures propagate to the caller's boundary.

use crate::config::DeployConfig;
use crate::domain::ports::{shell_quote, CommandRunner};
use crate::error::WharfResult;

/// Force-checkout the configured base branch, or the default branch when no
/// base is set. Returns the captured checkout output.
pub fn switch_to_base_branch<R: CommandRunner + ?Sized>(
    config: &DeployConfig,
    runner: &R,
) -> WharfResult<String> {
    let target = config.base_or_default_branch();
    let output = runner.execute(
        &format!("git checkout --progress --force {}", shell_quote(target)),
        &config.workspace,
    )?;
    Ok(output)
}
