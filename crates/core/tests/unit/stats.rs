//! Comprehensive tests for statistics accumulation and the run summary.

use cachesim_core::stats::{CacheStats, Summary};
use pretty_assertions::assert_eq;

use crate::common::{read, run_lines, simulator, write};

#[test]
fn test_stats_default() {
    let stats = CacheStats::default();
    assert_eq!(stats.reads, 0);
    assert_eq!(stats.writes, 0);
    assert_eq!(stats.total_accesses(), 0);
    assert_eq!(stats.total_misses(), 0);
    assert_eq!(stats.total_cycles(), 0);
    assert_eq!(stats.miss_rate(), None);
}

#[test]
fn test_empty_run_reports_no_accesses() {
    let sim = simulator(1, 1);
    let summary = sim.summary();
    assert_eq!(summary.total_accesses, 0);
    assert_eq!(summary.miss_rate, None);
    assert!(summary.to_string().ends_with("miss rate n/a (no accesses)"));
}

#[test]
fn test_derived_totals() {
    let stats = CacheStats {
        reads: 10,
        writes: 6,
        read_misses: 3,
        write_misses: 1,
        read_cycles: 400,
        write_cycles: 250,
        ..CacheStats::default()
    };
    assert_eq!(stats.total_accesses(), 16);
    assert_eq!(stats.total_misses(), 4);
    assert_eq!(stats.total_cycles(), 650);
    assert_eq!(stats.miss_rate(), Some(0.25));
}

#[test]
fn test_summary_copies_counters() {
    let mut sim = simulator(1, 1);
    let _ = run_lines(&mut sim, &[write(0x000), read(0x400), read(0x404), write(0x800)]);
    let summary = sim.summary();
    assert_eq!(
        summary,
        Summary {
            associativity: 1,
            size_kb: 1,
            loads: 2,
            stores: 2,
            total_accesses: 4,
            read_misses: 1,
            write_misses: 2,
            total_misses: 3,
            dirty_read_misses: 1,
            dirty_write_misses: 0,
            bytes_read: 48,
            bytes_written: 16,
            read_time: 161 + 1,
            write_time: 81 + 81,
            total_time: 324,
            miss_rate: Some(0.75),
        }
    );
}

#[test]
fn test_summary_display_layout() {
    let mut sim = simulator(1, 1);
    let _ = run_lines(&mut sim, &[read(0x00), read(0x10), read(0x00)]);
    let expected = "\
1-way, writeback, size = 1KB
loads 3 stores 0 total 3
rmiss 2 wmiss 0 total 2
dirty rmiss 0 dirty wmiss 0
bytes read 32 bytes written 0
read time 163 write time 0
total time 163
miss rate 0.666667";
    assert_eq!(sim.summary().to_string(), expected);
}

#[test]
fn test_summary_label_uses_geometry() {
    let sim = simulator(8, 4);
    assert!(sim.summary().to_string().starts_with("4-way, writeback, size = 8KB\n"));
}

#[test]
fn test_summary_serializes_to_json() {
    let mut sim = simulator(1, 2);
    let _ = run_lines(&mut sim, &[read(0x0), read(0x0)]);
    let value = serde_json::to_value(sim.summary()).unwrap();
    assert_eq!(value["associativity"], 2);
    assert_eq!(value["loads"], 2);
    assert_eq!(value["read_misses"], 1);
    assert_eq!(value["total_time"], 82);
    assert_eq!(value["miss_rate"], 0.5);
}

#[test]
fn test_empty_summary_serializes_null_miss_rate() {
    let sim = simulator(1, 1);
    let value = serde_json::to_value(sim.summary()).unwrap();
    assert!(value["miss_rate"].is_null());
}
