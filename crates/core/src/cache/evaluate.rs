//! Access Evaluator.
//!
//! Classifies each access against the candidate slot and applies its effects:
//!
//! | Case | Code | Cycles | Traffic |
//! |------|------|--------|---------|
//! | Hit | `1` | `hit` | none |
//! | Clean miss | `2a` | `hit + penalty` | fetch one block |
//! | Dirty miss | `2b` | `hit + 2 * penalty` | write back one block, fetch one block |
//!
//! Writes always allocate and always leave the slot dirty. Read misses leave it clean.

use std::fmt;

use serde::Serialize;

use super::{Cache, CacheSlot, Candidate};
use crate::trace::AccessRecord;

/// Classification of one evaluated access.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum AccessCase {
    /// Valid slot with matching tag.
    Hit,
    /// Miss whose victim held no modified data.
    MissClean,
    /// Miss whose victim had to be written back first.
    MissDirty,
}

impl AccessCase {
    /// Short case code used in verbose output: `1`, `2a`, or `2b`.
    pub const fn code(self) -> &'static str {
        match self {
            Self::Hit => "1",
            Self::MissClean => "2a",
            Self::MissDirty => "2b",
        }
    }

    /// Returns `true` for [`AccessCase::Hit`].
    #[inline]
    pub const fn is_hit(self) -> bool {
        matches!(self, Self::Hit)
    }
}

impl fmt::Display for AccessCase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Copy of the examined slot taken before the access mutated it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct SlotSnapshot {
    /// Prior valid bit.
    pub valid: bool,
    /// Prior dirty bit.
    pub dirty: bool,
    /// Prior tag (meaningless when `valid` is false).
    pub tag: u64,
    /// Way within the set.
    pub block_id: u64,
    /// Prior LRU timestamp.
    pub last_used: u64,
}

impl From<&CacheSlot> for SlotSnapshot {
    fn from(slot: &CacheSlot) -> Self {
        Self {
            valid: slot.valid,
            dirty: slot.dirty,
            tag: slot.tag,
            block_id: slot.block_id,
            last_used: slot.last_used,
        }
    }
}

/// What the evaluator decided for one access.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct AccessOutcome {
    /// Hit, clean miss, or dirty miss.
    pub case: AccessCase,
    /// Slot state before mutation.
    pub prior: SlotSnapshot,
    /// Cycles charged.
    pub cycles: u64,
}

impl AccessOutcome {
    /// Returns `true` when the access hit.
    #[inline]
    pub const fn is_hit(&self) -> bool {
        self.case.is_hit()
    }
}

impl Cache {
    /// Evaluates one decoded access, mutating exactly one slot and the statistics.
    ///
    /// `record.decoded` must already be filled (see [`Cache::decode`]). The outcome,
    /// including a snapshot of the slot before mutation, is stored in `record.outcome`.
    ///
    /// # Returns
    ///
    /// The case the access was classified as.
    pub fn evaluate(&mut self, record: &mut AccessRecord) -> AccessCase {
        let tag = record.decoded.tag;
        let set_number = record.decoded.set_number;
        let candidate = self.find_candidate(set_number, tag);
        let is_write = record.access.is_write();

        let hit_latency = self.hit_latency;
        let miss_penalty = self.miss_penalty;
        let block_size = self.geometry.block_size;

        let slot = &mut self.set_mut(set_number)[candidate.way()];
        let prior = SlotSnapshot::from(&*slot);

        slot.last_used = record.order;

        let (case, cycles) = match candidate {
            Candidate::Hit(_) => {
                if is_write {
                    slot.dirty = true;
                }
                (AccessCase::Hit, hit_latency)
            }
            Candidate::Victim(_) => {
                let case = if slot.dirty {
                    tracing::debug!(
                        set = set_number,
                        block_id = slot.block_id,
                        evicted_tag = slot.tag,
                        "writing back dirty block"
                    );
                    AccessCase::MissDirty
                } else {
                    if slot.valid {
                        tracing::debug!(
                            set = set_number,
                            block_id = slot.block_id,
                            evicted_tag = slot.tag,
                            "evicting clean block"
                        );
                    }
                    AccessCase::MissClean
                };
                slot.valid = true;
                slot.tag = tag;
                slot.dirty = is_write;
                let transfers: u64 = if case == AccessCase::MissDirty { 2 } else { 1 };
                (case, hit_latency.saturating_add(transfers.saturating_mul(miss_penalty)))
            }
        };

        self.stats.record(record.access, case, cycles, block_size);

        tracing::trace!(
            order = record.order,
            access = %record.access,
            addr = record.mem_address,
            set = set_number,
            tag,
            case = case.code(),
            cycles,
            "access evaluated"
        );

        record.outcome = Some(AccessOutcome {
            case,
            prior,
            cycles,
        });
        case
    }
}
