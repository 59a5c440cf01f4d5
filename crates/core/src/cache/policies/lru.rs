//! Least Recently Used (LRU) Replacement Policy.
//!
//! An invalid slot is always preferred: the first one in block-id order is taken.
//! When the set is full, the slot with the smallest `last_used` order is evicted,
//! and ties go to the lowest block id.
//!
//! # Performance
//!
//! - **Time Complexity:** O(W) per miss, W = associativity
//! - **Space Complexity:** O(1) beyond the slots' own timestamps

use super::{CacheSlot, ReplacementPolicy};

/// LRU policy over per-slot `last_used` timestamps.
#[derive(Clone, Copy, Debug, Default)]
pub struct LruPolicy;

impl LruPolicy {
    /// Creates a new LRU policy.
    pub const fn new() -> Self {
        Self
    }
}

impl ReplacementPolicy for LruPolicy {
    fn select_victim(&self, set: &[CacheSlot]) -> usize {
        if let Some(empty) = set.iter().position(|slot| !slot.valid) {
            return empty;
        }
        // min_by_key keeps the first of equal minima.
        set.iter()
            .enumerate()
            .min_by_key(|(_, slot)| slot.last_used)
            .map_or(0, |(way, _)| way)
    }
}
