//! Domain Ports (Interfaces)
//!
//! These traits define the boundaries of the deployment core.
//! The infrastructure layer provides concrete implementations.

pub mod command_runner;
pub mod event_sink;

pub use command_runner::{shell_quote, CommandRunner, RunnerError, RunnerResult};
pub use event_sink::{DeployEvent, DeployEventSink, NoopEventSink};
