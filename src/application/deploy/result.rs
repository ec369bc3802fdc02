//! Deploy result types

/// Completion signal for one deployment run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeployStatus {
    /// A fresh commit was force-pushed onto the publishing branch
    Success,
    /// The publishing branch already matched the build output; nothing pushed
    Skipped,
    /// The run failed; details were reported through the event sink
    Failed,
}

impl DeployStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            DeployStatus::Success => "success",
            DeployStatus::Skipped => "skipped",
            DeployStatus::Failed => "failed",
        }
    }
}

/// Outcome of one deployment run: the status flag plus a human-readable
/// status line for the job log.
#[derive(Debug, Clone)]
pub struct DeployResult {
    pub status: DeployStatus,
}

impl DeployResult {
    pub fn new(status: DeployStatus) -> Self {
        Self { status }
    }

    /// The run did not fail (a no-op deploy counts as success).
    pub fn is_success(&self) -> bool {
        !matches!(self.status, DeployStatus::Failed)
    }

    /// Human-readable status line.
    pub fn message(&self) -> &'static str {
        match self.status {
            DeployStatus::Success => "Completed deployment successfully",
            DeployStatus::Skipped => "There is nothing to commit - exiting early",
            DeployStatus::Failed => "Deployment failed - check the job log for details",
        }
    }
}
