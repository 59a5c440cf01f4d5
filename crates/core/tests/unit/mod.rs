//! # Unit Components
//!
//! Tests for each stage of the simulator, from trace parsing through the
//! cache model to complete runs.

/// Cache model tests: geometry, replacement, and access evaluation.
pub mod cache;




/// Counter accumulation and summary rendering.
pub mod stats;
