//! Memory Access Types.
//!
//! Classification of trace accesses. The cache only distinguishes loads from
//! stores: both allocate on miss, and only stores mark a block dirty.

use std::fmt;

use serde::Serialize;

/// Type of memory access operation recorded in a trace line.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum AccessType {
    /// Data read access (`R` in the trace).
    Read,

    /// Data write access (`W` in the trace).
    ///
    /// Write-allocate: a missing block is fetched before the partial write,
    /// and the slot is left dirty.
    Write,
}

impl AccessType {
    /// Maps a trace operation letter to an access type.
    ///
    /// Only the uppercase letters produced by the tracer are accepted.
    pub const fn from_letter(letter: char) -> Option<Self> {
        match letter {
            'R' => Some(Self::Read),
            'W' => Some(Self::Write),
            _ => None,
        }
    }

    /// Returns the trace letter for this access type.
    pub const fn letter(self) -> char {
        match self {
            Self::Read => 'R',
            Self::Write => 'W',
        }
    }

    /// Returns `true` for stores.
    #[inline]
    pub const fn is_write(self) -> bool {
        matches!(self, Self::Write)
    }
}

impl fmt::Display for AccessType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}
