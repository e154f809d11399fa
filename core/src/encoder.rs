//! UTF-32 to UTF-8 text encoding seam.
//!
//! A commit hands the host a UTF-8 string built from the pending code
//! points. Encoding cannot fail for valid `char` data, but the contract
//! keeps the failure path explicit so engines can define (and test) a
//! policy for a misbehaving encoder instead of inheriting a panic.

use thiserror::Error;

/// Encoding failure reported by a [`TextEncoder`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EncodeError {
    /// A code point had no valid UTF-8 representation.
    #[error("cannot encode U+{0:04X} as UTF-8")]
    InvalidCodePoint(u32),
}

/// Converts a sequence of code points into committed text.
pub trait TextEncoder {
    fn encode(&self, code_points: &[char]) -> Result<String, EncodeError>;
}

/// Straightforward collect-into-`String` encoder.
#[derive(Debug, Clone, Copy, Default)]
pub struct Utf8Encoder;

impl TextEncoder for Utf8Encoder {
    fn encode(&self, code_points: &[char]) -> Result<String, EncodeError> {
        Ok(code_points.iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_sinhala_sequence() {
        let text = Utf8Encoder
            .encode(&['\u{0D9A}', '\u{0DCF}'])
            .expect("encode");
        assert_eq!(text, "\u{0D9A}\u{0DCF}");
    }

    #[test]
    fn test_encode_empty_is_empty() {
        assert_eq!(Utf8Encoder.encode(&[]).expect("encode"), "");
    }
}
