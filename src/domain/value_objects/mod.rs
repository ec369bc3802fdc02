//! Immutable value types

pub mod exclude_patterns;

pub use exclude_patterns::{CleanExclude, ExcludePatterns};
