//! Error types for Wharf
//!
//! Uses `thiserror` for library errors. Configuration errors are detected
//! before any mutating git operation; command failures carry the captured
//! stderr of the failing process.

use thiserror::Error;

use crate::domain::ports::RunnerError;

/// Result type alias for Wharf operations
pub type WharfResult<T> = Result<T, WharfError>;

/// Main error type for Wharf operations
#[derive(Error, Debug)]
pub enum WharfError {
    /// No build output folder was configured
    #[error("no deployment folder was specified - set one with --folder")]
    MissingFolder,

    /// No credential mechanism was configured
    #[error("no deployment token was supplied - provide --token, --personal-token or --ssh")]
    MissingToken,

    /// No remote repository path could be resolved from the configuration
    #[error("no repository path was resolved - check --repository and the credential flags")]
    MissingRepositoryPath,

    /// The folder must be relative to the workspace root
    #[error("deployment folder '{folder}' must not be an absolute path")]
    AbsoluteFolderPath { folder: String },

    /// The folder must be a bare path, without a './' prefix
    #[error("deployment folder '{folder}' must not start with './' - use a bare path relative to the workspace root")]
    ExplicitRelativeFolderPath { folder: String },

    /// No publishing branch was configured
    #[error("no publishing branch was specified - set one with --branch")]
    MissingBranch,

    /// An external command failed
    #[error("command failed: {0}")]
    Command(#[from] RunnerError),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
