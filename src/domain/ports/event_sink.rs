//! Deploy event port
//!
//! Provides an observable interface for deployment runs.
//! Enables progress narration, NDJSON event streams for CI, and a
//! fire-and-forget failure channel that marks the run failed without
//! halting the emitting function.

use serde::Serialize;

/// Event emitted during a deployment run
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum DeployEvent {
    /// Deployment run started
    Started { branch: String, folder: String },

    /// Progress narration
    Info { message: String },

    /// The publishing branch was created on the remote
    BranchBootstrapped { branch: String },

    /// The target branch tip was checked out into the staging worktree
    WorktreeStaged { directory: String },

    /// Build output was mirrored into the staging worktree
    Synchronized { folder: String },

    /// The staging worktree matches the build output already
    NothingToCommit,

    /// The fresh commit was force-pushed onto the publishing branch
    Pushed { branch: String },

    /// The staging worktree was removed and the default branch restored
    TornDown,

    /// Non-fatal problem; the run continues
    Warning { message: String },

    /// The run is marked failed
    Failed { message: String },

    /// Deployment run completed
    Completed { status: String, message: String },
}

/// Trait for receiving deploy events
///
/// Implementations can be:
/// - `ConsoleEventSink`: progress display in the job log
/// - `JsonEventSink`: NDJSON event stream for CI
/// - `NoopEventSink`: silent operation
pub trait DeployEventSink: Send + Sync {
    /// Handle a deploy event
    fn on_event(&self, event: DeployEvent);

    /// Mark the overall run as failed without halting the current function
    fn report_failure(&self, message: &str) {
        self.on_event(DeployEvent::Failed {
            message: message.to_string(),
        });
    }

    /// Progress narration
    fn log(&self, message: &str) {
        self.on_event(DeployEvent::Info {
            message: message.to_string(),
        });
    }
}

/// No-op event sink for silent operation
pub struct NoopEventSink;

impl DeployEventSink for NoopEventSink {
    fn on_event(&self, _event: DeployEvent) {
        // Do nothing
    }
}
