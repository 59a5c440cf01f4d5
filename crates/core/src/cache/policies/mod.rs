//! Cache Replacement Policies.
//!
//! Selects the victim slot within a set after a lookup found no matching tag.
//! Recency is stored in the slots themselves (`last_used`), so policies are
//! stateless and only read the set they are handed.
//!
//! # Policies
//!
//! - `Lru`: Least Recently Used, empty slots first.

/// Least Recently Used replacement policy.
pub mod lru;

pub use lru::LruPolicy;

use super::CacheSlot;

/// Trait for cache replacement policies.
pub trait ReplacementPolicy: Send + Sync + std::fmt::Debug {
    /// Selects the way to fill or evict from a set with no matching tag.
    ///
    /// # Arguments
    ///
    /// * `set` - The slots of one set, in ascending block-id order. Never empty.
    ///
    /// # Returns
    ///
    /// The index of the victim way within `set`.
    fn select_victim(&self, set: &[CacheSlot]) -> usize;
}
