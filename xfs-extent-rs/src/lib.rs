//! # xfs-extent-rs
//!
//! `xfs-extent-rs` is a pure Rust decoder for the packed 128-bit extent records
//! found in XFS block maps.
//! It unpacks the extent flag, file block offset, starting block and block count
//! from the 16 on-disk bytes.
//!
//! ## Features
//! - Bit-exact decoding of the on-disk layout
//! - Hex text input (whitespace tolerant) and raw binary extent lists
//! - Decoding is infallible once a record holds its 16 bytes
//!
//! ## Usage
//! Add to your `Cargo.toml`:
//! ```toml
//! [dependencies]
//! xfs-extent-rs = "0.1"
//! ```
//!
//! ### Example: Decoding a Record
//! ```rust
//! use xfs_extent::{ExtentFields, ExtentFlag, HexDecoder};
//!
//! let record = HexDecoder::new("80000000 00000200 00000000 00600008")
//!     .decode_record()
//!     .unwrap();
//!
//! let fields = ExtentFields::decode(&record);
//! assert_eq!(fields.flag, ExtentFlag::Unwritten);
//! assert_eq!(fields.file_offset, 1);
//! assert_eq!(fields.start_block, 3);
//! assert_eq!(fields.block_count, 8);
//! ```

pub mod cli;
pub mod error;
pub mod ext;
pub mod extent_codec;
pub mod extent_fields;
pub mod extent_flag;
pub mod raw_record;
pub mod utility;

pub use error::XfsError;
pub use ext::io_ext::RecordReadExt;
pub use extent_fields::ExtentFields;
pub use extent_flag::ExtentFlag;
pub use raw_record::{RawRecord, RECORD_SIZE};
pub use utility::hex_decoder::HexDecoder;
