use crate::error::XfsError;
use std::ops::Index;

/// Size in bytes of a packed extent record.
pub const RECORD_SIZE: usize = 16;

/// A packed 128-bit XFS extent record, exactly as stored on disk.
///
/// The record is an immutable value: it can only be built from exactly
/// [`RECORD_SIZE`] bytes and exposes read-only access to them.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RawRecord([u8; RECORD_SIZE]);

impl RawRecord {
    /// Creates a record from a byte slice.
    ///
    /// # Errors
    ///
    /// Returns [`XfsError::InvalidLength`] if `bytes` is not exactly 16 bytes long.
    pub fn new(bytes: &[u8]) -> Result<Self, XfsError> {
        let data = <[u8; RECORD_SIZE]>::try_from(bytes)
            .map_err(|_| XfsError::InvalidLength(bytes.len()))?;
        Ok(Self(data))
    }

    /// Returns the raw record bytes.
    pub fn as_bytes(&self) -> &[u8; RECORD_SIZE] {
        &self.0
    }

    /// Consumes the record and returns its 16 bytes.
    pub fn into_bytes(self) -> [u8; RECORD_SIZE] {
        self.0
    }
}

impl From<[u8; RECORD_SIZE]> for RawRecord {
    fn from(bytes: [u8; RECORD_SIZE]) -> Self {
        Self(bytes)
    }
}

impl TryFrom<&[u8]> for RawRecord {
    type Error = XfsError;

    fn try_from(bytes: &[u8]) -> Result<Self, Self::Error> {
        Self::new(bytes)
    }
}

impl From<RawRecord> for [u8; RECORD_SIZE] {
    fn from(record: RawRecord) -> Self {
        record.0
    }
}

impl Index<usize> for RawRecord {
    type Output = u8;

    fn index(&self, index: usize) -> &u8 {
        &self.0[index]
    }
}

impl AsRef<[u8]> for RawRecord {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}
