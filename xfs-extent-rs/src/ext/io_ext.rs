use crate::error::XfsError;
use crate::raw_record::{RawRecord, RECORD_SIZE};
use std::io::{self, Read};

/// A trait that reads packed extent records from any `Read` type.
///
/// A short read is reported as [`XfsError::InvalidLength`] carrying the number of
/// bytes that were available, the same as for a short byte slice.
pub trait RecordReadExt: Read {
    /// Reads one 16-byte record and advances the stream.
    fn read_record(&mut self) -> Result<RawRecord, XfsError>;

    /// Reads records until the end of the stream.
    ///
    /// An empty stream yields no records; a trailing partial record is an error.
    fn read_records(&mut self) -> Result<Vec<RawRecord>, XfsError>;
}

impl<T> RecordReadExt for T
where
    T: Read,
{
    fn read_record(&mut self) -> Result<RawRecord, XfsError> {
        let mut buf = [0u8; RECORD_SIZE];
        match fill_record(self, &mut buf)? {
            RECORD_SIZE => Ok(RawRecord::from(buf)),
            partial => Err(XfsError::InvalidLength(partial)),
        }
    }

    fn read_records(&mut self) -> Result<Vec<RawRecord>, XfsError> {
        let mut records = Vec::new();
        let mut buf = [0u8; RECORD_SIZE];

        loop {
            match fill_record(self, &mut buf)? {
                0 => return Ok(records),
                RECORD_SIZE => records.push(RawRecord::from(buf)),
                partial => return Err(XfsError::InvalidLength(partial)),
            }
        }
    }
}

/// Reads until `buf` is full or the stream ends, returning the number of bytes read.
fn fill_record<R: Read + ?Sized>(
    reader: &mut R,
    buf: &mut [u8; RECORD_SIZE],
) -> io::Result<usize> {
    let mut filled = 0;
    while filled < RECORD_SIZE {
        match reader.read(&mut buf[filled..]) {
            Ok(0) => break,
            Ok(n) => filled += n,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        }
    }
    Ok(filled)
}
