//! Simulation runs.
//!
//! Provides the run context that threads trace lines through the parser, decoder,
//! and evaluator, plus trace loading and the verbose per-access reporter.

/// Trace file opening.
pub mod loader;

/// Run context owning the cache and the order counter.
pub mod simulator;

/// Per-access verbose output.
pub mod verbose;

pub use simulator::Simulator;
pub use verbose::VerboseReporter;
