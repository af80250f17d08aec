//! Field extraction for packed XFS extent records.
//!
//! The 16 record bytes are read as one big-endian 128-bit word. Fields are
//! addressed by their position counted from the most significant bit of byte 0:
//!
//! ```text
//! Byte:   0          1-5         6          7-12        13         14-15
//! Bits:   FOOOOOOO   OOOOOOOO..  OOOOOOOS   SSSSSSSS..  SSSCCCCC   CCCCCCCC..
//! ```
//!
//! `F` is the extent flag, `O` the file block offset, `S` the starting block
//! number and `C` the block count.

use crate::extent_flag::ExtentFlag;
use crate::raw_record::RawRecord;
use byteorder::{BigEndian, ByteOrder};

/// A run of bits inside a record, counted from the most significant bit of byte 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BitRange {
    /// Position of the first (most significant) bit of the field.
    pub start: u32,
    /// Number of bits in the field, 1 to 64.
    pub width: u32,
}

impl BitRange {
    pub const fn new(start: u32, width: u32) -> Self {
        Self { start, width }
    }

    /// Position one past the last bit of the field.
    pub const fn end(&self) -> u32 {
        self.start + self.width
    }
}

/// Extent flag, 1 bit.
pub const FLAG: BitRange = BitRange::new(0, 1);
/// Logical file block offset, 54 bits.
pub const FILE_OFFSET: BitRange = BitRange::new(1, 54);
/// Starting filesystem block number, 52 bits.
pub const START_BLOCK: BitRange = BitRange::new(55, 52);
/// Number of blocks in the extent, 21 bits.
pub const BLOCK_COUNT: BitRange = BitRange::new(107, 21);

/// Every field of the record in on-disk order. Together they cover all 128 bits.
pub const LAYOUT: [BitRange; 4] = [FLAG, FILE_OFFSET, START_BLOCK, BLOCK_COUNT];

/// Reads `range.width` bits of `record` starting at `range.start`, returned right-aligned.
pub fn read_bits(record: &RawRecord, range: BitRange) -> u64 {
    debug_assert!((1..=64).contains(&range.width));
    debug_assert!(range.end() <= 128);

    let word = BigEndian::read_u128(record.as_bytes());
    let shift = 128 - range.end();
    let mask = u64::MAX >> (64 - range.width);
    (word >> shift) as u64 & mask
}

/// Returns [`ExtentFlag::Unwritten`] when the top bit of byte 0 is set.
pub fn get_flag(record: &RawRecord) -> ExtentFlag {
    ExtentFlag::from_bit(read_bits(record, FLAG) != 0)
}

/// Returns the logical block offset within the file where the extent begins.
pub fn get_file_boffset(record: &RawRecord) -> u64 {
    read_bits(record, FILE_OFFSET)
}

/// Returns the filesystem block number where the extent's data begins.
pub fn get_fsb_index(record: &RawRecord) -> u64 {
    read_bits(record, START_BLOCK)
}

/// Returns the number of blocks spanned by the extent.
pub fn get_fsb_count(record: &RawRecord) -> u32 {
    // 21 bits always fit.
    read_bits(record, BLOCK_COUNT) as u32
}
