//! Deploy Module
//!
//! Orchestrates the deployment flow for Wharf.
//!
//! ## Structure
//!
//! - `result` - Result types (`DeployStatus`, `DeployResult`)
//! - `use_case` - Core state machine (`DeployUseCase`)
//!
//! ## Usage
//!
//! ```ignore
//! use wharf::application::deploy::DeployUseCase;
//!
//! let use_case = DeployUseCase::new(&config, &runner, &sink);
//! let status = use_case.execute()?;
//! ```

mod result;
mod use_case;

pub use result::{DeployResult, DeployStatus};
pub use use_case::{DeployUseCase, TEMP_DEPLOYMENT_BRANCH, TEMP_DEPLOYMENT_DIR};

#[cfg(test)]
mod tests;
