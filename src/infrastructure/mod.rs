//! Infrastructure Layer
//!
//! Concrete implementations of the domain ports: the system-shell command
//! runner and the console/JSON event sinks.

pub mod events;
pub mod shell;

pub use events::{ConsoleEventSink, JsonEventSink};
pub use shell::ShellRunner;
