//! Cache Geometry and Address Decoding.
//!
//! Derives the bit layout of a cache from its configuration and splits memory
//! addresses into tag, index, and set number.
//!
//! ```text
//!   | tag                | index (index_bits)         | offset (offset_bits) |
//!                        | set number | assoc_bits    |
//! ```
//!
//! The block count is rounded up to the next power of two when `size / block_size`
//! is not already one, so a 3 KB cache of 16-byte blocks is laid out as 256 blocks.

use serde::Serialize;

use crate::common::ConfigError;
use crate::config::CacheConfig;

/// Fixed cache layout derived from a [`CacheConfig`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Geometry {
    /// Total capacity in bytes as configured.
    pub size_bytes: u64,
    /// Block size in bytes.
    pub block_size: u64,
    /// Ways per set.
    pub associativity: u64,
    /// Number of slots (power of two).
    pub num_blocks: u64,
    /// Sets reachable by [`Geometry::decode`]: `2^(index_bits - assoc_bits)`, at least 1.
    ///
    /// `set_number` drops the low `assoc_bits` of the index, so associative layouts
    /// reach fewer sets than the index width alone suggests.
    pub num_sets: u64,
    /// `log2(block_size)`.
    pub offset_bits: u32,
    /// `ceil(log2(associativity))`; 0 when direct-mapped.
    pub assoc_bits: u32,
    /// `ceil(log2(size / block_size)) - assoc_bits`.
    pub index_bits: u32,
}

/// Address fields derived by [`Geometry::decode`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct DecodedAddress {
    /// Address bits above index and offset.
    pub tag: u64,
    /// The `index_bits` bits directly above the block offset.
    pub index: u64,
    /// `index >> assoc_bits`; selects the set searched.
    pub set_number: u64,
}

/// Upper bound on `log2(num_blocks)`.
///
/// The slot array is allocated up front, so this caps it at 16 Mi slots
/// (a 256 MB cache of 16-byte blocks).
pub const MAX_BLOCK_BITS: u32 = 24;

/// `ceil(log2(n))` for `n >= 1`.
#[inline]
const fn ceil_log2(n: u64) -> u32 {
    if n <= 1 { 0 } else { u64::BITS - (n - 1).leading_zeros() }
}

impl Geometry {
    /// Validates `config` and derives the cache layout.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] for a zero size, a block size that is zero or not a
    /// power of two, a block larger than the cache, or an associativity that is zero
    /// or exceeds the (rounded) block count, and for layouts needing more than
    /// `2^MAX_BLOCK_BITS` blocks.
    pub fn new(config: &CacheConfig) -> Result<Self, ConfigError> {
        if config.size_kb == 0 {
            return Err(ConfigError::ZeroCacheSize);
        }
        let block_size = config.block_size;
        if !block_size.is_power_of_two() {
            return Err(ConfigError::InvalidBlockSize(block_size));
        }
        let size_bytes = config.size_bytes();
        if block_size > size_bytes {
            return Err(ConfigError::BlockLargerThanCache {
                block_size,
                cache_bytes: size_bytes,
            });
        }
        let associativity = config.associativity;
        if associativity == 0 {
            return Err(ConfigError::ZeroAssociativity);
        }

        let block_bits = ceil_log2(size_bytes / block_size);
        if block_bits > MAX_BLOCK_BITS {
            return Err(ConfigError::TooManyBlocks { block_bits });
        }
        let num_blocks = 1u64 << block_bits;
        let assoc_bits = ceil_log2(associativity);
        if assoc_bits > block_bits {
            return Err(ConfigError::AssociativityTooLarge {
                associativity,
                blocks: num_blocks,
            });
        }
        let index_bits = block_bits - assoc_bits;

        Ok(Self {
            size_bytes,
            block_size,
            associativity,
            num_blocks,
            num_sets: 1u64 << index_bits.saturating_sub(assoc_bits),
            offset_bits: block_size.trailing_zeros(),
            assoc_bits,
            index_bits,
        })
    }

    /// Returns `true` for a one-way cache.
    #[inline]
    pub const fn is_direct_mapped(&self) -> bool {
        self.associativity == 1
    }

    /// Splits `mem_address` into tag, index, and set number.
    ///
    /// Pure function of the address and this geometry.
    #[inline]
    pub const fn decode(&self, mem_address: u64) -> DecodedAddress {
        let low_bits = self.index_bits + self.offset_bits;
        let tag = if low_bits >= u64::BITS {
            0
        } else {
            mem_address >> low_bits
        };
        let index_mask = (1u64 << self.index_bits) - 1;
        let index = (mem_address >> self.offset_bits) & index_mask;
        DecodedAddress {
            tag,
            index,
            set_number: index >> self.assoc_bits,
        }
    }

    /// First slot of `set_number` in the flat slot array.
    #[inline]
    pub const fn set_base(&self, set_number: u64) -> usize {
        (set_number * self.associativity) as usize
    }
}
