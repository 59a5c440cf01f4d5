//! Error definitions.
//!
//! This module defines every failure the simulator can report:
//! 1. **Parse Errors:** A trace line that does not match `<hex>:<R|W> <hex> <dec>`.
//! 2. **Configuration Errors:** Cache parameters that cannot describe a valid geometry.
//! 3. **Run Errors:** Trace I/O failures and parse failures tagged with their position.
//!
//! Every error is fatal to the run; the replay is deterministic, so nothing is retried.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Names of the fields in a trace line, used to pinpoint parse failures.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TraceField {
    /// Hexadecimal instruction address before the `:`.
    InstrAddress,
    /// `R` or `W` operation letter.
    Operation,
    /// Hexadecimal memory address.
    MemAddress,
    /// Decimal byte count.
    ByteCount,
}

impl std::fmt::Display for TraceField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::InstrAddress => "instruction address",
            Self::Operation => "operation",
            Self::MemAddress => "memory address",
            Self::ByteCount => "byte count",
        };
        f.write_str(name)
    }
}

/// A trace line that could not be turned into an access record.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// The `:` between instruction address and operation is absent.
    #[error("missing ':' after instruction address")]
    MissingSeparator,

    /// A required field is absent.
    #[error("missing {0}")]
    MissingField(TraceField),

    /// A hexadecimal field contains non-hex characters or overflows 64 bits.
    #[error("invalid {field} {value:?}: expected hexadecimal")]
    InvalidHex {
        /// Which field failed.
        field: TraceField,
        /// Raw text of the field.
        value: String,
    },

    /// The operation is neither `R` nor `W`.
    #[error("invalid operation {0:?}: expected 'R' or 'W'")]
    InvalidOperation(String),

    /// The byte count is not a decimal integer.
    #[error("invalid byte count {0:?}: expected decimal")]
    InvalidByteCount(String),

    /// The line is not valid UTF-8; the payload is the byte offset of the first bad byte.
    #[error("line is not valid UTF-8 (invalid byte at offset {0})")]
    InvalidEncoding(usize),

    /// Extra tokens follow the byte count.
    #[error("unexpected trailing input {0:?}")]
    TrailingInput(String),
}

/// Cache or run parameters that cannot be simulated.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Cache size of zero kilobytes.
    #[error("cache size must be greater than 0 KB")]
    ZeroCacheSize,

    /// Block size is zero or not a power of two.
    #[error("block size {0} must be a non-zero power of two")]
    InvalidBlockSize(u64),

    /// A single block does not fit in the cache.
    #[error("block size {block_size} exceeds cache size {cache_bytes} bytes")]
    BlockLargerThanCache {
        /// Configured block size in bytes.
        block_size: u64,
        /// Total cache size in bytes.
        cache_bytes: u64,
    },

    /// The block count would exceed what the slot array can hold.
    #[error("cache would need 2^{block_bits} blocks")]
    TooManyBlocks {
        /// `ceil(log2(size / block_size))`.
        block_bits: u32,
    },

    /// Associativity of zero.
    #[error("associativity must be at least 1")]
    ZeroAssociativity,

    /// More ways than the cache has blocks, leaving a negative index width.
    #[error("associativity {associativity} exceeds the {blocks} blocks in the cache")]
    AssociativityTooLarge {
        /// Requested ways per set.
        associativity: u64,
        /// Block count after power-of-two rounding.
        blocks: u64,
    },

    /// Verbose range with `lo > hi`.
    #[error("verbose range [{lo}, {hi}] is inverted")]
    InvertedVerboseRange {
        /// Lower bound.
        lo: u64,
        /// Upper bound.
        hi: u64,
    },

    /// Configuration file could not be read.
    #[error("failed to read config {}: {source}", path.display())]
    Read {
        /// Path of the config file.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// Configuration file is not valid JSON for [`SimConfig`](crate::config::SimConfig).
    #[error("failed to parse config {}: {source}", path.display())]
    Json {
        /// Path of the config file.
        path: PathBuf,
        /// Underlying deserialization error.
        #[source]
        source: serde_json::Error,
    },
}

/// Fatal error terminating a simulation run.
#[derive(Debug, Error)]
pub enum SimError {
    /// The trace file could not be opened.
    #[error("failed to open: {}: {source}", path.display())]
    Io {
        /// Path of the trace file.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// Reading from an already open trace failed.
    #[error("failed to read trace: {0}")]
    Read(#[from] io::Error),

    /// A trace line was malformed.
    #[error("line {line} (access {order}): {source}")]
    Parse {
        /// One-based line number in the trace.
        line: usize,
        /// Order the access would have received.
        order: u64,
        /// What was wrong with the line.
        #[source]
        source: ParseError,
    },

    /// Writing per-access output failed.
    #[error("failed to write report: {0}")]
    Output(#[source] io::Error),

    /// The cache configuration was rejected.
    #[error(transparent)]
    Config(#[from] ConfigError),
}
