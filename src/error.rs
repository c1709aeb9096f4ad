//! Error type shared by every parser in this crate.
//!
//! Each variant records the offset at which the failure was detected. The
//! `Display` form is the human-readable message that callers see.

use alloc::string::String;
use alloc::vec::Vec;
use thiserror::Error;

/// A failed parse, tagged with the offset where it was detected.
#[derive(Error, Clone, Debug, Eq, PartialEq)]
#[non_exhaustive]
pub enum ParseError {
    /// Not enough bytes remain for the requested read.
    #[error("{name}: Unexpected end of input")]
    UnexpectedEnd {
        /// Name of the parser that ran out of input
        name: &'static str,
        /// Offset where the read was attempted
        offset: usize,
    },

    /// A decoded value differs from the caller's expectation.
    #[error("{name}: Expected {expected} but got {actual}")]
    Mismatch {
        /// Name of the underlying primitive
        name: &'static str,
        /// The expected value, rendered
        expected: String,
        /// The decoded value, rendered
        actual: String,
        /// Offset after the consumed bytes
        offset: usize,
    },

    /// A decoded value falls outside an inclusive range.
    #[error("{name}: Expected a value in [{low}, {high}] at offset {offset} but got {actual}")]
    OutOfRange {
        /// Name of the range check
        name: &'static str,
        /// Lower bound, rendered
        low: String,
        /// Upper bound, rendered
        high: String,
        /// The decoded value, rendered
        actual: String,
        /// Offset where the value was read
        offset: usize,
    },

    /// A run of bytes differs from the expected byte sequence.
    #[error(
        "{name}: Expected 0x{} but got 0x{} at offset {offset}",
        hex::encode(.expected),
        hex::encode(.actual)
    )]
    BytesMismatch {
        /// Name of the parser
        name: &'static str,
        /// Expected bytes
        expected: Vec<u8>,
        /// Bytes found in the input
        actual: Vec<u8>,
        /// Offset where the comparison started
        offset: usize,
    },

    /// A null-terminated string had no data before its terminator.
    #[error("{name}: No data before null terminator")]
    EmptyString {
        /// Name of the parser
        name: &'static str,
        /// Offset after the terminator
        offset: usize,
    },

    /// Input remains where the end of input was expected.
    #[error("endOfInput: Expected end of input but got 0x{byte:02x} at offset {offset}")]
    TrailingInput {
        /// The first unconsumed byte
        byte: u8,
        /// Offset of that byte
        offset: usize,
    },

    /// An exception parser matched where it was not allowed to.
    #[error("anythingExcept: Matched {matched} from the exception parser at offset {offset}")]
    ExceptionMatched {
        /// The value the exception parser produced, rendered
        matched: String,
        /// Offset where the exception parser matched
        offset: usize,
    },

    /// A parse was started past the end of its input.
    #[error("Start offset {offset} is past the end of input ({len} bytes)")]
    OffsetOutOfBounds {
        /// Length of the input
        len: usize,
        /// The requested start offset
        offset: usize,
    },

    /// An expected string has a character that is not a single Latin-1 byte.
    #[error("{name}: Cannot match {ch:?} as a single Latin-1 byte")]
    NotLatin1 {
        /// Name of the parser
        name: &'static str,
        /// The offending character
        ch: char,
        /// Offset where the match was attempted
        offset: usize,
    },

    /// A failure raised by [`crate::fail`] or a caller-supplied parser.
    #[error("{message}")]
    Custom {
        /// The failure message
        message: String,
        /// Offset where the failure was raised
        offset: usize,
    },
}

impl ParseError {
    /// Creates a truncation error
    pub fn unexpected_end(name: &'static str, offset: usize) -> Self {
        Self::UnexpectedEnd { name, offset }
    }

    /// Creates a free-form error
    pub fn custom(message: impl Into<String>, offset: usize) -> Self {
        Self::Custom {
            message: message.into(),
            offset,
        }
    }

    /// The offset at which the failure was detected.
    pub fn offset(&self) -> usize {
        match *self {
            Self::UnexpectedEnd { offset, .. }
            | Self::Mismatch { offset, .. }
            | Self::OutOfRange { offset, .. }
            | Self::BytesMismatch { offset, .. }
            | Self::EmptyString { offset, .. }
            | Self::TrailingInput { offset, .. }
            | Self::ExceptionMatched { offset, .. }
            | Self::OffsetOutOfBounds { offset, .. }
            | Self::NotLatin1 { offset, .. }
            | Self::Custom { offset, .. } => offset,
        }
    }

    /// Returns true if the input ran out before the parser could finish.
    pub fn is_truncation(&self) -> bool {
        matches!(self, Self::UnexpectedEnd { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;
    use alloc::vec;

    #[test]
    fn test_error_display() {
        let err = ParseError::unexpected_end("u16LE", 3);
        assert_eq!(err.to_string(), "u16LE: Unexpected end of input");
        assert_eq!(err.offset(), 3);
        assert!(err.is_truncation());
    }

    #[test]
    fn test_bytes_mismatch_renders_hex() {
        let err = ParseError::BytesMismatch {
            name: "rawString",
            expected: vec![0x68, 0x69],
            actual: vec![0x68, 0xff],
            offset: 2,
        };
        assert_eq!(
            err.to_string(),
            "rawString: Expected 0x6869 but got 0x68ff at offset 2"
        );
        assert!(!err.is_truncation());
    }

    #[test]
    fn test_trailing_input_display() {
        let err = ParseError::TrailingInput { byte: 0x0a, offset: 7 };
        assert_eq!(
            err.to_string(),
            "endOfInput: Expected end of input but got 0x0a at offset 7"
        );
    }
}
