//! Trace records and parsing.
//!
//! A trace is one access per line, `<hex instr addr>:<R|W> <hex mem addr> <decimal size>`,
//! for example `004005b4:R 7fffed50 4`. Each successfully parsed line becomes an
//! [`AccessRecord`] stamped with the next value of the run's order counter. The record is
//! then filled in by the address decoder and the cache evaluator before being reported.

/// Line parser owning the run-scoped order counter.
pub mod parser;

pub use parser::TraceParser;

use serde::Serialize;

use crate::cache::evaluate::AccessOutcome;
use crate::cache::geometry::DecodedAddress;
use crate::common::AccessType;

/// One memory access from the trace, progressively annotated as it flows through the model.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct AccessRecord {
    /// Zero-based position among successfully parsed lines of this run.
    pub order: u64,
    /// Address of the instruction that issued the access.
    pub instr_address: u64,
    /// Data address accessed.
    pub mem_address: u64,
    /// Number of bytes accessed.
    pub byte_count: u64,
    /// Load or store.
    pub access: AccessType,
    /// Tag / index / set number; filled by the address decoder.
    pub decoded: DecodedAddress,
    /// Classification and prior slot state; filled by the evaluator.
    pub outcome: Option<AccessOutcome>,
}

impl AccessRecord {
    /// Returns `true` once evaluated as a hit.
    pub fn is_hit(&self) -> bool {
        self.outcome.as_ref().is_some_and(AccessOutcome::is_hit)
    }
}
