/// Represents all possible errors that can occur while decoding XFS extent records.
///
/// Once a [`RawRecord`](crate::raw_record::RawRecord) exists, every field decode is
/// infallible; errors only arise while producing the 16 record bytes.
#[derive(Debug)]
pub enum XfsError {
    /// The supplied input does not hold exactly one 16-byte record.
    /// Carries the number of bytes (or hex digits, for text input) that were found.
    InvalidLength(usize),
    /// The hex text contained a character that is neither a hex digit nor whitespace.
    InvalidHex(String),
    /// Represents an error that occurs during I/O operations.
    Io(std::io::Error),
}

/// Provides a user-friendly string representation for each error variant in `XfsError`.
impl std::fmt::Display for XfsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            XfsError::InvalidLength(len) => write!(f, "Invalid record length: {len}"),
            XfsError::InvalidHex(err) => write!(f, "Invalid hex: {err}"),
            XfsError::Io(err) => write!(f, "I/O error: {err}"),
        }
    }
}

impl std::error::Error for XfsError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            XfsError::Io(err) => Some(err),
            _ => None,
        }
    }
}

/// Allows automatic conversion from `std::io::Error` to `XfsError`.
impl From<std::io::Error> for XfsError {
    fn from(error: std::io::Error) -> Self {
        XfsError::Io(error)
    }
}
