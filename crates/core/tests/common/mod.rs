//! Shared helpers for building caches, traces, and runs.

use std::io::Write;

use cachesim_core::common::AccessType;
use cachesim_core::config::{CacheConfig, SimConfig};
use cachesim_core::sim::Simulator;
use cachesim_core::trace::AccessRecord;
use tempfile::NamedTempFile;

/// Instruction address used for generated trace lines.
pub const INSTR: u64 = 0x0040_05b4;

/// Installs a test-writer subscriber once; later calls are no-ops.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_test_writer()
        .with_env_filter("cachesim_core=debug")
        .try_init();
}

/// Cache config with default block size (16) and timing (1 / 80).
pub fn cache_config(size_kb: u64, associativity: u64) -> CacheConfig {
    CacheConfig::new(size_kb, associativity)
}

/// Simulator over a cache of the given size and associativity.
pub fn simulator(size_kb: u64, associativity: u64) -> Simulator {
    init_tracing();
    let config = SimConfig {
        cache: cache_config(size_kb, associativity),
        verbose: None,
    };
    Simulator::new(&config).unwrap()
}

/// Formats one trace line.
pub fn line(access: AccessType, addr: u64) -> String {
    format!("{INSTR:08x}:{} {addr:08x} 4", access.letter())
}

/// Trace line for a 4-byte load.
pub fn read(addr: u64) -> String {
    line(AccessType::Read, addr)
}

/// Trace line for a 4-byte store.
pub fn write(addr: u64) -> String {
    line(AccessType::Write, addr)
}

/// Steps every line through `sim`, returning the evaluated records.
pub fn run_lines(sim: &mut Simulator, lines: &[String]) -> Vec<AccessRecord> {
    lines.iter().map(|l| sim.step(l).unwrap()).collect()
}

/// Writes `contents` to a temporary file that lives as long as the handle.
pub fn temp_file(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}
