//! Cache Replacement Policy Tests.
//!
//! Exercises `LruPolicy::select_victim` on hand-built sets: empty slots first,
//! then the smallest `last_used`, with ties going to the lowest way.

use cachesim_core::cache::CacheSlot;
use cachesim_core::cache::policies::{LruPolicy, ReplacementPolicy};

/// Builds a set from `(valid, last_used)` pairs.
fn set(state: &[(bool, u64)]) -> Vec<CacheSlot> {
    state
        .iter()
        .enumerate()
        .map(|(way, &(valid, last_used))| CacheSlot {
            valid,
            last_used,
            tag: way as u64 + 100,
            block_id: way as u64,
            ..CacheSlot::default()
        })
        .collect()
}

#[test]
fn single_way_is_always_the_victim() {
    let policy = LruPolicy::new();
    assert_eq!(policy.select_victim(&set(&[(false, 0)])), 0);
    assert_eq!(policy.select_victim(&set(&[(true, 42)])), 0);
}

#[test]
fn empty_set_fills_way_zero_first() {
    let policy = LruPolicy::new();
    assert_eq!(policy.select_victim(&set(&[(false, 0); 4])), 0);
}

#[test]
fn first_invalid_way_wins_over_lru() {
    let policy = LruPolicy::new();
    // Way 0 is the oldest valid slot, but way 2 is empty.
    let slots = set(&[(true, 0), (true, 5), (false, 0), (false, 0)]);
    assert_eq!(policy.select_victim(&slots), 2);
}

#[test]
fn full_set_evicts_smallest_last_used() {
    let policy = LruPolicy::new();
    let slots = set(&[(true, 9), (true, 3), (true, 7), (true, 4)]);
    assert_eq!(policy.select_victim(&slots), 1);
}

#[test]
fn ties_go_to_lowest_way() {
    let policy = LruPolicy::new();
    let slots = set(&[(true, 8), (true, 2), (true, 2), (true, 2)]);
    assert_eq!(policy.select_victim(&slots), 1);
}

#[test]
fn all_equal_timestamps_pick_way_zero() {
    let policy = LruPolicy::new();
    let slots = set(&[(true, 0); 8]);
    assert_eq!(policy.select_victim(&slots), 0);
}

#[test]
fn dirty_bit_does_not_influence_choice() {
    let policy = LruPolicy::new();
    let mut slots = set(&[(true, 1), (true, 2)]);
    slots[0].dirty = true;
    assert_eq!(policy.select_victim(&slots), 0);
}
