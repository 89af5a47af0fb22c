//! Network tool registry and tool implementations for agent runtimes.
//!
//! Exposes two operating-system network utilities — reading local interface
//! configuration and TCP port scanning — as named, schema-described tools an
//! external agent runtime can discover and invoke.

pub mod error;
pub mod executor;
pub mod net;
pub mod registry;
pub mod schema;
