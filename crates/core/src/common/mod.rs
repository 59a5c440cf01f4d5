//! Common types shared by every stage of the simulator.
//!
//! 1. **Access Kinds:** The read/write classification carried by each trace record.
//! 2. **Error Handling:** Parse, configuration, and run-level error types.

/// Memory access type definitions.
pub mod data;

/// Error types for parsing, configuration, and simulation runs.
pub mod error;

pub use data::AccessType;
pub use error::{ConfigError, ParseError, SimError};
