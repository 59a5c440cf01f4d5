//! Configuration system for the cache simulator.
//!
//! This module defines the configuration structures used to parameterize a run:
//! 1. **Defaults:** Baseline cache constants (block size, latencies, miss penalty).
//! 2. **Structures:** Cache geometry inputs and the optional verbose reporting window.
//! 3. **Loading:** JSON deserialization from a config file; the CLI overrides individual fields.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::common::ConfigError;

/// Default configuration constants for the simulator.
mod defaults {
    /// Default cache size in kilobytes.
    pub const CACHE_SIZE_KB: u64 = 1;

    /// Bytes per kilobyte for `size_kb`.
    pub const SIZE_FACTOR: u64 = 1024;

    /// Default block (line) size in bytes.
    pub const BLOCK_SIZE: u64 = 16;

    /// Default associativity (1 way = direct-mapped).
    pub const ASSOCIATIVITY: u64 = 1;

    /// Cycles charged for any access that reaches the cache.
    pub const HIT_LATENCY: u64 = 1;

    /// Extra cycles for each block transfer to or from memory.
    ///
    /// A clean miss pays it once (fetch); a dirty miss pays it twice
    /// (write-back of the victim, then fetch).
    pub const MISS_PENALTY: u64 = 80;
}

pub use defaults::SIZE_FACTOR;

/// Cache geometry and timing parameters.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct CacheConfig {
    /// Total cache capacity in kilobytes (`size_kb * 1024` bytes).
    #[serde(default = "CacheConfig::default_size_kb")]
    pub size_kb: u64,

    /// Block size in bytes; must be a power of two.
    #[serde(default = "CacheConfig::default_block_size")]
    pub block_size: u64,

    /// Ways per set; 1 means direct-mapped.
    #[serde(default = "CacheConfig::default_associativity")]
    pub associativity: u64,

    /// Cycles for an access served by the cache.
    #[serde(default = "CacheConfig::default_hit_latency")]
    pub hit_latency: u64,

    /// Cycles per block moved between cache and memory.
    #[serde(default = "CacheConfig::default_miss_penalty")]
    pub miss_penalty: u64,
}

impl CacheConfig {
    fn default_size_kb() -> u64 {
        defaults::CACHE_SIZE_KB
    }

    fn default_block_size() -> u64 {
        defaults::BLOCK_SIZE
    }

    fn default_associativity() -> u64 {
        defaults::ASSOCIATIVITY
    }

    fn default_hit_latency() -> u64 {
        defaults::HIT_LATENCY
    }

    fn default_miss_penalty() -> u64 {
        defaults::MISS_PENALTY
    }

    /// Creates a config with the given size and associativity and default timing.
    pub fn new(size_kb: u64, associativity: u64) -> Self {
        Self {
            size_kb,
            associativity,
            ..Self::default()
        }
    }

    /// Total capacity in bytes.
    #[inline]
    pub const fn size_bytes(&self) -> u64 {
        self.size_kb.saturating_mul(SIZE_FACTOR)
    }
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            size_kb: defaults::CACHE_SIZE_KB,
            block_size: defaults::BLOCK_SIZE,
            associativity: defaults::ASSOCIATIVITY,
            hit_latency: defaults::HIT_LATENCY,
            miss_penalty: defaults::MISS_PENALTY,
        }
    }
}

/// Inclusive window of access orders reported in verbose mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
pub struct VerboseRange {
    /// First order reported.
    pub lo: u64,
    /// Last order reported.
    pub hi: u64,
}

impl VerboseRange {
    /// Creates a range.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvertedVerboseRange`] when `lo > hi`.
    pub fn new(lo: u64, hi: u64) -> Result<Self, ConfigError> {
        if lo > hi {
            return Err(ConfigError::InvertedVerboseRange { lo, hi });
        }
        Ok(Self { lo, hi })
    }

    /// Returns `true` when `order` lies within `[lo, hi]`.
    #[inline]
    pub const fn contains(&self, order: u64) -> bool {
        order >= self.lo && order <= self.hi
    }
}

/// Root configuration for a simulation run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct SimConfig {
    /// Cache geometry and timing.
    #[serde(default)]
    pub cache: CacheConfig,

    /// Optional verbose reporting window.
    #[serde(default)]
    pub verbose: Option<VerboseRange>,
}

impl SimConfig {
    /// Parses a configuration from a JSON string.
    ///
    /// # Errors
    ///
    /// Returns the `serde_json` error for malformed JSON or mistyped fields.
    pub fn from_json_str(text: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(text)
    }

    /// Loads a configuration from a JSON file.
    ///
    /// Missing fields fall back to their defaults, so `{}` is a valid config.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Read`] or [`ConfigError::Json`] tagged with `path`,
    /// or [`ConfigError::InvertedVerboseRange`] for a bad `verbose` window.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let mut config = Self::from_json_str(&text).map_err(|source| ConfigError::Json {
            path: path.to_path_buf(),
            source,
        })?;
        config.verbose = config
            .verbose
            .map(|range| VerboseRange::new(range.lo, range.hi))
            .transpose()?;
        Ok(config)
    }
}
