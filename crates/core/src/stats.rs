//! Simulation statistics collection and reporting.
//!
//! This module tracks the counters of one run and derives its summary:
//! 1. **Traffic:** Loads, stores, and bytes moved between cache and memory.
//! 2. **Misses:** Read/write misses and the subset that forced a write-back.
//! 3. **Timing:** Cumulative read and write cycles.
//! 4. **Summary:** Totals and miss rate, with an explicit empty-run state.

use std::fmt;

use serde::Serialize;

use crate::cache::evaluate::AccessCase;
use crate::common::AccessType;

/// Running counters for one cache. All fields only ever increase.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct CacheStats {
    /// Loads evaluated.
    pub reads: u64,
    /// Stores evaluated.
    pub writes: u64,
    /// Loads that missed.
    pub read_misses: u64,
    /// Stores that missed.
    pub write_misses: u64,
    /// Load misses whose victim was dirty.
    pub dirty_read_misses: u64,
    /// Store misses whose victim was dirty.
    pub dirty_write_misses: u64,
    /// Bytes fetched from memory (one block per miss, including write-allocate fetches).
    pub bytes_read: u64,
    /// Bytes written back to memory (one block per dirty miss).
    pub bytes_written: u64,
    /// Cycles spent on loads.
    pub read_cycles: u64,
    /// Cycles spent on stores.
    pub write_cycles: u64,
}

impl CacheStats {
    /// Accounts one evaluated access.
    pub(crate) fn record(
        &mut self,
        access: AccessType,
        case: AccessCase,
        cycles: u64,
        block_size: u64,
    ) {
        let dirty = case == AccessCase::MissDirty;
        let miss = !case.is_hit();

        match access {
            AccessType::Read => {
                self.reads += 1;
                self.read_cycles += cycles;
                if miss {
                    self.read_misses += 1;
                }
                if dirty {
                    self.dirty_read_misses += 1;
                }
            }
            AccessType::Write => {
                self.writes += 1;
                self.write_cycles += cycles;
                if miss {
                    self.write_misses += 1;
                }
                if dirty {
                    self.dirty_write_misses += 1;
                }
            }
        }

        if miss {
            self.bytes_read += block_size;
        }
        if dirty {
            self.bytes_written += block_size;
        }
    }

    /// Loads plus stores.
    #[inline]
    pub const fn total_accesses(&self) -> u64 {
        self.reads + self.writes
    }

    /// Read plus write misses.
    #[inline]
    pub const fn total_misses(&self) -> u64 {
        self.read_misses + self.write_misses
    }

    /// Read plus write cycles.
    #[inline]
    pub const fn total_cycles(&self) -> u64 {
        self.read_cycles + self.write_cycles
    }

    /// `total_misses / total_accesses`, or `None` for a run with no accesses.
    pub fn miss_rate(&self) -> Option<f64> {
        let total = self.total_accesses();
        (total != 0).then(|| self.total_misses() as f64 / total as f64)
    }

    /// Derives the end-of-run summary.
    ///
    /// # Arguments
    ///
    /// * `associativity` - Ways per set, for the report label.
    /// * `size_kb` - Cache size in kilobytes, for the report label.
    pub fn summary(&self, associativity: u64, size_kb: u64) -> Summary {
        Summary {
            associativity,
            size_kb,
            loads: self.reads,
            stores: self.writes,
            total_accesses: self.total_accesses(),
            read_misses: self.read_misses,
            write_misses: self.write_misses,
            total_misses: self.total_misses(),
            dirty_read_misses: self.dirty_read_misses,
            dirty_write_misses: self.dirty_write_misses,
            bytes_read: self.bytes_read,
            bytes_written: self.bytes_written,
            read_time: self.read_cycles,
            write_time: self.write_cycles,
            total_time: self.total_cycles(),
            miss_rate: self.miss_rate(),
        }
    }
}

/// End-of-run report.
///
/// `Display` renders the plain-text report; `Serialize` exports the same fields.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Summary {
    /// Ways per set.
    pub associativity: u64,
    /// Cache size in kilobytes.
    pub size_kb: u64,
    /// Loads.
    pub loads: u64,
    /// Stores.
    pub stores: u64,
    /// Loads plus stores.
    pub total_accesses: u64,
    /// Load misses.
    pub read_misses: u64,
    /// Store misses.
    pub write_misses: u64,
    /// All misses.
    pub total_misses: u64,
    /// Load misses that wrote back a dirty victim.
    pub dirty_read_misses: u64,
    /// Store misses that wrote back a dirty victim.
    pub dirty_write_misses: u64,
    /// Bytes fetched from memory.
    pub bytes_read: u64,
    /// Bytes written back to memory.
    pub bytes_written: u64,
    /// Cycles spent on loads.
    pub read_time: u64,
    /// Cycles spent on stores.
    pub write_time: u64,
    /// All cycles.
    pub total_time: u64,
    /// Miss ratio; `None` when the trace held no accesses.
    pub miss_rate: Option<f64>,
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "{}-way, writeback, size = {}KB",
            self.associativity, self.size_kb
        )?;
        writeln!(
            f,
            "loads {} stores {} total {}",
            self.loads, self.stores, self.total_accesses
        )?;
        writeln!(
            f,
            "rmiss {} wmiss {} total {}",
            self.read_misses, self.write_misses, self.total_misses
        )?;
        writeln!(
            f,
            "dirty rmiss {} dirty wmiss {}",
            self.dirty_read_misses, self.dirty_write_misses
        )?;
        writeln!(
            f,
            "bytes read {} bytes written {}",
            self.bytes_read, self.bytes_written
        )?;
        writeln!(
            f,
            "read time {} write time {}",
            self.read_time, self.write_time
        )?;
        writeln!(f, "total time {}", self.total_time)?;
        match self.miss_rate {
            Some(rate) => write!(f, "miss rate {rate:.6}"),
            None => write!(f, "miss rate n/a (no accesses)"),
        }
    }
}
