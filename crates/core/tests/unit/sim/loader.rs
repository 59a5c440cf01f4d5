//! # Trace Loading Tests

use std::io::BufRead;

use cachesim_core::common::SimError;
use cachesim_core::sim::loader;

use crate::common::temp_file;

#[test]
fn test_open_trace_reads_lines() {
    let file = temp_file("004005b4:R 7fffed50 4\n004005b8:W 7fffed54 4\n");
    let reader = loader::open_trace(file.path()).unwrap();
    let lines: Vec<String> = reader.lines().map(Result::unwrap).collect();
    assert_eq!(lines, ["004005b4:R 7fffed50 4", "004005b8:W 7fffed54 4"]);
}

#[test]
fn test_open_trace_missing_file() {
    let err = loader::open_trace("/nonexistent/trace.txt").unwrap_err();
    match &err {
        SimError::Io { path, .. } => assert_eq!(path.to_str(), Some("/nonexistent/trace.txt")),
        other => panic!("expected Io error, got {other:?}"),
    }
    let msg = err.to_string();
    assert!(msg.starts_with("failed to open: /nonexistent/trace.txt"), "{msg}");
}
