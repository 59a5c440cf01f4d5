//! # Verbose Reporter Tests
//!
//! Column layout, prior-state reporting, and inclusive range filtering.

use cachesim_core::config::VerboseRange;
use cachesim_core::sim::VerboseReporter;
use cachesim_core::sim::verbose::render;
use cachesim_core::trace::TraceParser;
use pretty_assertions::assert_eq;

use crate::common::{read, run_lines, simulator, write};

#[test]
fn test_render_cold_miss() {
    let mut sim = simulator(1, 1);
    let record = sim.step("004005b4:R 7fffed50 4").unwrap();
    assert_eq!(render(&record).unwrap(), "0 15 1ffffb 0 0 0 0 0 0 2a");
}

#[test]
fn test_render_hit_shows_prior_state() {
    let mut sim = simulator(1, 1);
    let records = run_lines(&mut sim, &[write(0x7fffed50), read(0x7fffed58)]);
    // valid=1, block 0, last used at order 0, tag 1ffffb, dirty=1, hit=1.
    assert_eq!(render(&records[1]).unwrap(), "1 15 1ffffb 1 0 0 1ffffb 1 1 1");
}

#[test]
fn test_render_dirty_miss() {
    let mut sim = simulator(1, 2);
    let records = run_lines(
        &mut sim,
        &[write(0x000), write(0x200), read(0x400), read(0x000)],
    );
    // Third access evicts way 0 (tag 0, dirty, last used 0).
    assert_eq!(render(&records[2]).unwrap(), "2 0 2 1 0 0 0 1 0 2b");
    // Fourth evicts way 1 (tag 1, dirty, last used 1).
    assert_eq!(render(&records[3]).unwrap(), "3 0 0 1 1 1 1 1 0 2b");
}

#[test]
fn test_render_prints_zero_tag_for_invalid_slot() {
    let mut sim = simulator(1, 1);
    let record = sim.step("0:W fffffff0 4").unwrap();
    let line = render(&record).unwrap();
    let columns: Vec<&str> = line.split(' ').collect();
    assert_eq!(columns[3], "0", "prior valid");
    assert_eq!(columns[6], "0", "prior tag");
}

#[test]
fn test_render_orders_are_decimal() {
    let mut sim = simulator(1, 1);
    let lines: Vec<String> = (0..12).map(|i| read(i * 0x10)).collect();
    let records = run_lines(&mut sim, &lines);
    assert!(render(&records[11]).unwrap().starts_with("11 b "));
}

#[test]
fn test_render_requires_evaluation() {
    let mut parser = TraceParser::new();
    let record = parser.parse_line("1:R 10 4").unwrap();
    assert_eq!(render(&record), None);
}

#[test]
fn test_reporter_filters_inclusive_range() {
    let mut sim = simulator(1, 1);
    let lines: Vec<String> = (0..6).map(|i| read(i * 0x10)).collect();
    let records = run_lines(&mut sim, &lines);

    let mut reporter = VerboseReporter::new(VerboseRange::new(2, 4).unwrap(), Vec::new());
    let written: Vec<bool> = records.iter().map(|r| reporter.report(r).unwrap()).collect();
    assert_eq!(written, [false, false, true, true, true, false]);
    assert_eq!(reporter.range(), VerboseRange { lo: 2, hi: 4 });

    let output = String::from_utf8(reporter.into_inner()).unwrap();
    let orders: Vec<&str> = output
        .lines()
        .map(|l| l.split(' ').next().unwrap())
        .collect();
    assert_eq!(orders, ["2", "3", "4"]);
}

#[test]
fn test_reporter_skips_unevaluated_records() {
    let mut parser = TraceParser::new();
    let record = parser.parse_line("1:R 10 4").unwrap();
    let mut reporter = VerboseReporter::new(VerboseRange::new(0, 10).unwrap(), Vec::new());
    assert!(!reporter.report(&record).unwrap());
    assert!(reporter.into_inner().is_empty());
}
