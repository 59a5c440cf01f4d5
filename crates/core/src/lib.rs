//! Trace-driven write-back cache simulator library.
//!
//! This crate replays recorded memory accesses against a single-level cache model:
//! 1. **Trace:** Parses `<instr>:<R|W> <addr> <bytes>` lines into ordered access records.
//! 2. **Cache:** Geometry-parameterized slot storage, address decoding, and LRU victim selection.
//! 3. **Evaluation:** Hit / clean-miss / dirty-miss classification with cycle and byte accounting.
//! 4. **Simulation:** Run context, trace loading, verbose per-access reporting, and summaries.

/// Common types (access kinds and error definitions).
pub mod common;
/// Simulator configuration (defaults, cache geometry inputs, verbose range).
pub mod config;
/// Cache model (geometry, slots, replacement policy, access evaluation).
pub mod cache;
/// Trace line parsing and access records.
pub mod trace;
/// Run context, trace loading, and verbose reporting.
pub mod sim;
/// Statistics collection and end-of-run summary.
pub mod stats;

/// Root configuration type; use `SimConfig::default()` or load from JSON.
pub use crate::config::SimConfig;
/// Cache model; owns slots, geometry, and statistics.
pub use crate::cache::Cache;
/// Top-level run context; construct with `Simulator::new`.
pub use crate::sim::Simulator;
