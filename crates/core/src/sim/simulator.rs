//! Simulator: owns the cache and the parser for exactly one run.
//!
//! Lines are consumed strictly in order; each one is parsed, decoded, and
//! evaluated before the next is read. The order counter lives in the run's
//! [`TraceParser`], so two simulators never share or reset each other's counts.

use std::io::{self, BufRead};

use crate::cache::Cache;
use crate::common::{ConfigError, ParseError, SimError};
use crate::config::SimConfig;
use crate::stats::Summary;
use crate::trace::{AccessRecord, TraceParser};

/// Top-level run context: cache model plus order counter.
#[derive(Debug)]
pub struct Simulator {
    cache: Cache,
    parser: TraceParser,
}

impl Simulator {
    /// Creates a simulator with an empty cache built from `config.cache`.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] for an invalid cache geometry.
    pub fn new(config: &SimConfig) -> Result<Self, ConfigError> {
        Ok(Self::with_cache(Cache::new(&config.cache)?))
    }

    /// Creates a simulator around an existing cache.
    pub const fn with_cache(cache: Cache) -> Self {
        Self {
            cache,
            parser: TraceParser::new(),
        }
    }

    /// The cache model.
    pub const fn cache(&self) -> &Cache {
        &self.cache
    }

    /// Number of accesses evaluated so far.
    pub const fn accesses(&self) -> u64 {
        self.parser.next_order()
    }

    /// Parses, decodes, and evaluates one trace line.
    ///
    /// # Errors
    ///
    /// Returns the [`ParseError`] for a malformed line; the cache and the order
    /// counter are left untouched in that case.
    pub fn step(&mut self, line: &str) -> Result<AccessRecord, ParseError> {
        let mut record = self.parser.parse_line(line)?;
        self.cache.decode(&mut record);
        let _ = self.cache.evaluate(&mut record);
        Ok(record)
    }

    /// Replays every line of `reader`, handing each evaluated record to `observer`.
    ///
    /// Lines are split on `\n` and read as raw bytes, so a line that is not UTF-8
    /// is reported as a parse failure at its position. Blank lines are skipped
    /// without consuming an order. The first malformed line aborts the run.
    ///
    /// # Errors
    ///
    /// * [`SimError::Read`] if reading the trace fails at the I/O level.
    /// * [`SimError::Parse`] with the 1-based line number and pending order.
    /// * [`SimError::Output`] if `observer` fails.
    pub fn run<R, F>(&mut self, reader: R, mut observer: F) -> Result<Summary, SimError>
    where
        R: BufRead,
        F: FnMut(&AccessRecord) -> io::Result<()>,
    {
        for (idx, bytes) in reader.split(b'\n').enumerate() {
            let bytes = bytes?;
            let order = self.parser.next_order();
            let parse_error = |source| SimError::Parse {
                line: idx + 1,
                order,
                source,
            };
            let line = std::str::from_utf8(&bytes)
                .map_err(|e| parse_error(ParseError::InvalidEncoding(e.valid_up_to())))?;
            if line.trim().is_empty() {
                continue;
            }
            let record = self.step(line).map_err(parse_error)?;
            observer(&record).map_err(SimError::Output)?;
        }

        let summary = self.summary();
        tracing::info!(
            accesses = summary.total_accesses,
            misses = summary.total_misses,
            cycles = summary.total_time,
            "trace replay complete"
        );
        Ok(summary)
    }

    /// Summary of everything evaluated so far.
    pub fn summary(&self) -> Summary {
        self.cache.summary()
    }
}
