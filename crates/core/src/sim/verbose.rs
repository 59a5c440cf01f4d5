//! Verbose Reporter.
//!
//! Renders one line per evaluated access whose order falls in the configured window:
//!
//! ```text
//! order index tag valid block_id last_used prior_tag dirty hit case
//! ```
//!
//! `order` is decimal, the case code is `1`/`2a`/`2b`, and every other column is
//! lowercase hex. All slot columns describe the examined slot *before* the access;
//! `prior_tag` prints as 0 when that slot was invalid.

use std::io::{self, Write};

use crate::config::VerboseRange;
use crate::trace::AccessRecord;

/// Formats one evaluated record, or `None` if it has not been evaluated yet.
pub fn render(record: &AccessRecord) -> Option<String> {
    let outcome = record.outcome.as_ref()?;
    let prior = &outcome.prior;
    let prior_tag = if prior.valid { prior.tag } else { 0 };
    Some(format!(
        "{} {:x} {:x} {:x} {:x} {:x} {:x} {:x} {:x} {}",
        record.order,
        record.decoded.index,
        record.decoded.tag,
        u8::from(prior.valid),
        prior.block_id,
        prior.last_used,
        prior_tag,
        u8::from(prior.dirty),
        u8::from(outcome.is_hit()),
        outcome.case.code(),
    ))
}

/// Writes verbose lines for records inside an order window. Never mutates records.
#[derive(Debug)]
pub struct VerboseReporter<W: Write> {
    range: VerboseRange,
    out: W,
}

impl<W: Write> VerboseReporter<W> {
    /// Creates a reporter writing to `out`.
    pub const fn new(range: VerboseRange, out: W) -> Self {
        Self { range, out }
    }

    /// Configured window.
    pub const fn range(&self) -> VerboseRange {
        self.range
    }

    /// Writes `record` if its order is in range and it has been evaluated.
    ///
    /// # Returns
    ///
    /// Whether a line was written.
    ///
    /// # Errors
    ///
    /// Propagates write failures from the underlying writer.
    pub fn report(&mut self, record: &AccessRecord) -> io::Result<bool> {
        if !self.range.contains(record.order) {
            return Ok(false);
        }
        match render(record) {
            Some(line) => {
                writeln!(self.out, "{line}")?;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Consumes the reporter, returning the writer.
    pub fn into_inner(self) -> W {
        self.out
    }
}
