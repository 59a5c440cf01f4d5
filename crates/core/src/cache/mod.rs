//! Single-Level Write-Back Cache Model.
//!
//! This module implements a geometry-parameterized cache: direct-mapped is simply
//! the one-way case of the set-associative lookup. It owns:
//! 1. **Slots:** A flat array of [`CacheSlot`]s, sliced into sets by `set_number * ways`.
//! 2. **Lookup:** [`Cache::find_candidate`], which returns a hit or a victim within one set.
//! 3. **Statistics:** The run's [`CacheStats`], updated only by [`Cache::evaluate`].

/// Access classification and slot mutation (hit / clean miss / dirty miss).
pub mod evaluate;

/// Cache layout and address decoding.
pub mod geometry;

/// Victim selection policies.
pub mod policies;

use serde::Serialize;

use self::geometry::Geometry;
use self::policies::{LruPolicy, ReplacementPolicy};
use crate::common::ConfigError;
use crate::config::CacheConfig;
use crate::stats::{CacheStats, Summary};
use crate::trace::AccessRecord;

/// One cache line's bookkeeping. No data is stored; only state that drives timing.
///
/// Invariant: `dirty` implies `valid`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct CacheSlot {
    /// Holds a block.
    pub valid: bool,
    /// Holds modifications not yet written back.
    pub dirty: bool,
    /// Tag of the resident block.
    pub tag: u64,
    /// Order of the most recent access to this slot (LRU timestamp).
    pub last_used: u64,
    /// Position within its set.
    pub block_id: u64,
}

/// Result of searching one set for a tag.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Candidate {
    /// Way holding a valid block with the searched tag.
    Hit(usize),
    /// Way chosen for replacement: first empty, else least recently used.
    Victim(usize),
}

impl Candidate {
    /// Way within the set, for either variant.
    #[inline]
    pub const fn way(self) -> usize {
        match self {
            Self::Hit(way) | Self::Victim(way) => way,
        }
    }

    /// Returns `true` for [`Candidate::Hit`].
    #[inline]
    pub const fn is_hit(self) -> bool {
        matches!(self, Self::Hit(_))
    }
}

/// Cache model: geometry, slot storage, replacement policy, and statistics.
#[derive(Debug)]
pub struct Cache {
    geometry: Geometry,
    slots: Vec<CacheSlot>,
    policy: Box<dyn ReplacementPolicy>,
    stats: CacheStats,
    hit_latency: u64,
    miss_penalty: u64,
}

impl Cache {
    /// Creates an empty (all-invalid) cache with LRU replacement.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] if `config` does not describe a valid geometry.
    pub fn new(config: &CacheConfig) -> Result<Self, ConfigError> {
        Self::with_policy(config, Box::new(LruPolicy::new()))
    }

    /// Creates an empty cache with the given replacement policy.
    ///
    /// # Errors
    ///
    /// Same as [`Cache::new`].
    pub fn with_policy(
        config: &CacheConfig,
        policy: Box<dyn ReplacementPolicy>,
    ) -> Result<Self, ConfigError> {
        let geometry = Geometry::new(config)?;
        let ways = geometry.associativity;
        let slots = (0..geometry.num_blocks)
            .map(|i| CacheSlot {
                block_id: i % ways,
                ..CacheSlot::default()
            })
            .collect();

        tracing::info!(
            size_bytes = geometry.size_bytes,
            block_size = geometry.block_size,
            ways,
            blocks = geometry.num_blocks,
            offset_bits = geometry.offset_bits,
            index_bits = geometry.index_bits,
            "cache constructed"
        );

        Ok(Self {
            geometry,
            slots,
            policy,
            stats: CacheStats::default(),
            hit_latency: config.hit_latency,
            miss_penalty: config.miss_penalty,
        })
    }

    /// Fixed layout of this cache.
    #[inline]
    pub const fn geometry(&self) -> &Geometry {
        &self.geometry
    }

    /// Running counters.
    #[inline]
    pub const fn stats(&self) -> &CacheStats {
        &self.stats
    }

    /// Every slot, in set-major order.
    #[inline]
    pub fn slots(&self) -> &[CacheSlot] {
        &self.slots
    }

    /// The `associativity` slots of one set.
    ///
    /// `set_number` must come from [`Geometry::decode`] on this cache's geometry,
    /// which keeps `set_number * ways + ways <= num_blocks`.
    pub fn set(&self, set_number: u64) -> &[CacheSlot] {
        let base = self.geometry.set_base(set_number);
        &self.slots[base..base + self.geometry.associativity as usize]
    }

    fn set_mut(&mut self, set_number: u64) -> &mut [CacheSlot] {
        let base = self.geometry.set_base(set_number);
        let ways = self.geometry.associativity as usize;
        &mut self.slots[base..base + ways]
    }

    /// Fills `record.decoded` from its memory address.
    #[inline]
    pub fn decode(&self, record: &mut AccessRecord) {
        record.decoded = self.geometry.decode(record.mem_address);
    }

    /// Searches one set for `tag`.
    ///
    /// Ways are scanned in ascending block-id order and the first valid slot with a
    /// matching tag is a hit. Otherwise the replacement policy picks the victim.
    pub fn find_candidate(&self, set_number: u64, tag: u64) -> Candidate {
        let set = self.set(set_number);
        set.iter()
            .position(|slot| slot.valid && slot.tag == tag)
            .map_or_else(
                || Candidate::Victim(self.policy.select_victim(set)),
                Candidate::Hit,
            )
    }

    /// End-of-run summary labelled with this cache's size and associativity.
    pub fn summary(&self) -> Summary {
        self.stats.summary(
            self.geometry.associativity,
            self.geometry.size_bytes / crate::config::SIZE_FACTOR,
        )
    }
}
