//! Wharf - publish build output to a git publishing branch
//!
//! Wharf deploys a built artifact directory (a static site, documentation,
//! compiled assets) to a dedicated publishing branch of a remote git
//! repository, the way pages hosting expects. It stages the branch in a
//! detached worktree, mirrors the build output into it, commits on a
//! reserved temporary branch, and force-pushes the result, restoring the
//! primary working tree afterwards whatever happened.

pub mod application;
pub mod cli;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;

// Re-exports for convenience
pub use application::deploy::{DeployResult, DeployStatus, DeployUseCase};
pub use application::pipeline::run;
pub use config::{resolve_repository_path, DeployConfig};
pub use domain::ports::{
    CommandRunner, DeployEvent, DeployEventSink, NoopEventSink, RunnerError, RunnerResult,
};
pub use domain::value_objects::{CleanExclude, ExcludePatterns};
pub use error::{WharfError, WharfResult};
pub use infrastructure::{ConsoleEventSink, JsonEventSink, ShellRunner};
