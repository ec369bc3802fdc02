//! Application Layer
//!
//! Use cases that orchestrate the deployment flow.
//! This layer:
//! - Depends on the domain layer (ports, value objects)
//! - Drives all side effects through the `CommandRunner` port
//! - Reports progress and failure through the `DeployEventSink` port
//!
//! ## Use Cases
//!
//! - `init` - prepare the workspace repository (identity, origin remote, fetch)
//! - `switch_to_base_branch` - return the working tree to the base/default branch
//! - `generate_branch` - bootstrap a missing publishing branch as an empty orphan
//! - `DeployUseCase` - the deployment state machine (stage, sync, commit, push, teardown)
//! - `pipeline::run` - the full run with its reporting boundary and completion signal

pub mod bootstrap;
pub mod deploy;
pub mod init;
pub mod pipeline;
pub mod switch;

pub use bootstrap::generate_branch;
pub use deploy::{DeployResult, DeployStatus, DeployUseCase};
pub use init::init;
pub use pipeline::run;
pub use switch::switch_to_base_branch;
