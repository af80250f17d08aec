use crate::error::XfsError;
use crate::raw_record::{RawRecord, RECORD_SIZE};

/// Decodes hexadecimal text into a fixed number of bytes.
///
/// Hex digits are case-insensitive and whitespace anywhere in the text is ignored,
/// so dumps like `"7f ff ff ff\n..."` decode the same as one packed string.
#[derive(Debug, Default)]
pub struct HexDecoder {
    text: String,
}

impl HexDecoder {
    /// Wraps `text` for decoding; nothing is validated until [`HexDecoder::decode`].
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    /// Decodes the text into exactly `N` bytes.
    ///
    /// # Errors
    ///
    /// * [`XfsError::InvalidHex`] if a character is neither a hex digit nor whitespace.
    /// * [`XfsError::InvalidLength`] if the number of hex digits is not `2 * N`.
    ///   The error carries the number of digits found.
    pub fn decode<const N: usize>(&self) -> Result<[u8; N], XfsError> {
        let mut digits = Vec::with_capacity(N * 2);
        for (index, c) in self.text.chars().enumerate() {
            if c.is_whitespace() {
                continue;
            }
            if !c.is_ascii_hexdigit() {
                return Err(XfsError::InvalidHex(format!(
                    "unexpected character {c:?} at position {index}"
                )));
            }
            digits.push(c as u8);
        }

        if digits.len() != N * 2 {
            return Err(XfsError::InvalidLength(digits.len()));
        }

        let mut result = [0u8; N];
        hex::decode_to_slice(&digits, &mut result)
            .map_err(|err| XfsError::InvalidHex(err.to_string()))?;
        Ok(result)
    }

    /// Decodes the text as a single 16-byte extent record.
    pub fn decode_record(&self) -> Result<RawRecord, XfsError> {
        self.decode::<RECORD_SIZE>().map(RawRecord::from)
    }
}
