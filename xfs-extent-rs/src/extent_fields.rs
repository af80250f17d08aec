use crate::extent_codec;
use crate::extent_flag::ExtentFlag;
use crate::raw_record::RawRecord;
use std::fmt;

/// The decoded view of a [`RawRecord`].
///
/// Holds a snapshot of the four logical fields. Decoding cannot fail: every
/// bit pattern is a valid extent.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ExtentFields {
    /// Whether the extent has been written.
    pub flag: ExtentFlag,
    /// Logical block offset within the file.
    pub file_offset: u64,
    /// Filesystem block number of the first block.
    pub start_block: u64,
    /// Number of blocks in the extent.
    pub block_count: u32,
}

impl ExtentFields {
    pub fn decode(record: &RawRecord) -> Self {
        Self {
            flag: extent_codec::get_flag(record),
            file_offset: extent_codec::get_file_boffset(record),
            start_block: extent_codec::get_fsb_index(record),
            block_count: extent_codec::get_fsb_count(record),
        }
    }
}

impl From<&RawRecord> for ExtentFields {
    fn from(record: &RawRecord) -> Self {
        Self::decode(record)
    }
}

/// Renders the four-line extent report.
impl fmt::Display for ExtentFields {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "flag: {}", self.flag)?;
        writeln!(f, "fileoffset: {}", self.file_offset)?;
        writeln!(f, "fsbindex: {}", self.start_block)?;
        write!(f, "block #: {}", self.block_count)
    }
}
