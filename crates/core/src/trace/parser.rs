//! Trace Line Parser.
//!
//! Splits a line into its four fields and validates each one. Parsing is strict:
//! a malformed line is reported with the field that failed rather than replayed
//! with partial or stale values.

use crate::cache::geometry::DecodedAddress;
use crate::common::error::TraceField;
use crate::common::{AccessType, ParseError};

use super::AccessRecord;

/// Fields of one trace line before an order is assigned.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TraceLine {
    /// Instruction address.
    pub instr_address: u64,
    /// Load or store.
    pub access: AccessType,
    /// Data address.
    pub mem_address: u64,
    /// Bytes accessed.
    pub byte_count: u64,
}

impl TraceLine {
    /// Parses `<hex>:<R|W> <hex> <dec>`; surrounding whitespace is ignored.
    ///
    /// # Errors
    ///
    /// Returns a [`ParseError`] naming the first field that is missing or malformed.
    pub fn parse(line: &str) -> Result<Self, ParseError> {
        let (instr, rest) = line
            .trim()
            .split_once(':')
            .ok_or(ParseError::MissingSeparator)?;
        let instr_address = parse_hex(TraceField::InstrAddress, instr.trim())?;

        let mut fields = rest.split_whitespace();

        let op = fields
            .next()
            .ok_or(ParseError::MissingField(TraceField::Operation))?;
        let access = single_char(op)
            .and_then(AccessType::from_letter)
            .ok_or_else(|| ParseError::InvalidOperation(op.to_string()))?;

        let mem = fields
            .next()
            .ok_or(ParseError::MissingField(TraceField::MemAddress))?;
        let mem_address = parse_hex(TraceField::MemAddress, mem)?;

        let size = fields
            .next()
            .ok_or(ParseError::MissingField(TraceField::ByteCount))?;
        let byte_count = parse_dec(size)?;

        if let Some(extra) = fields.next() {
            return Err(ParseError::TrailingInput(extra.to_string()));
        }

        Ok(Self {
            instr_address,
            access,
            mem_address,
            byte_count,
        })
    }
}

fn single_char(token: &str) -> Option<char> {
    let mut chars = token.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Some(c),
        _ => None,
    }
}

fn parse_hex(field: TraceField, text: &str) -> Result<u64, ParseError> {
    let digits = text
        .strip_prefix("0x")
        .or_else(|| text.strip_prefix("0X"))
        .unwrap_or(text);
    if digits.is_empty() {
        return Err(if text.is_empty() {
            ParseError::MissingField(field)
        } else {
            ParseError::InvalidHex {
                field,
                value: text.to_string(),
            }
        });
    }
    if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(ParseError::InvalidHex {
            field,
            value: text.to_string(),
        });
    }
    u64::from_str_radix(digits, 16).map_err(|_| ParseError::InvalidHex {
        field,
        value: text.to_string(),
    })
}

fn parse_dec(text: &str) -> Result<u64, ParseError> {
    if !text.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ParseError::InvalidByteCount(text.to_string()));
    }
    text.parse()
        .map_err(|_| ParseError::InvalidByteCount(text.to_string()))
}

/// Stateful parser for one run.
///
/// The order counter starts at 0 and advances once per successfully parsed line;
/// a failed parse leaves it untouched. Each run owns its own parser.
#[derive(Debug, Default)]
pub struct TraceParser {
    next_order: u64,
}

impl TraceParser {
    /// Creates a parser whose first record gets order 0.
    pub const fn new() -> Self {
        Self { next_order: 0 }
    }

    /// Order the next successfully parsed line will receive.
    #[inline]
    pub const fn next_order(&self) -> u64 {
        self.next_order
    }

    /// Parses one line into an access record and advances the order counter.
    ///
    /// The returned record has a zeroed [`DecodedAddress`] and no outcome yet.
    ///
    /// # Errors
    ///
    /// Propagates the [`ParseError`] from [`TraceLine::parse`].
    pub fn parse_line(&mut self, line: &str) -> Result<AccessRecord, ParseError> {
        let fields = TraceLine::parse(line)?;
        let order = self.next_order;
        self.next_order += 1;
        Ok(AccessRecord {
            order,
            instr_address: fields.instr_address,
            mem_address: fields.mem_address,
            byte_count: fields.byte_count,
            access: fields.access,
            decoded: DecodedAddress::default(),
            outcome: None,
        })
    }
}
