//! Domain Layer
//!
//! Pure types and interfaces the deployment core is written against.
//!
//! - `ports/` - capability traits (command execution, event reporting)
//! - `value_objects/` - immutable value types (clean-exclusion patterns)
//!
//! Nothing in this layer touches the file system, the network, or a
//! process environment directly.

pub mod ports;
pub mod value_objects;
