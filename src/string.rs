//! Fixed and null-terminated string primitives.
//!
//! Text is decoded as Latin-1: every byte maps to the `char` with the same
//! code point, so decoding never fails.

use alloc::string::String;
use alloc::vec::Vec;

use tracing::trace;

use crate::{Cursor, Map, ParseError, ParseState, Parser};

const RAW_STRING: &str = "rawString";
const NULL_TERMINATED_STRING: &str = "nullTerminatedString";

/// Decodes bytes as Latin-1 text.
pub fn latin1(bytes: &[u8]) -> String {
    bytes.iter().map(|&b| char::from(b)).collect()
}

/// See [`raw_string`].
#[derive(Clone, Debug)]
pub struct RawString {
    expected: Vec<u8>,
    unencodable: Option<char>,
}

impl<'a> Parser<'a> for RawString {
    type Output = String;

    fn apply(&self, input: Cursor<'a>) -> ParseState<'a, String> {
        if let Some(ch) = self.unencodable {
            return input.fail(ParseError::NotLatin1 {
                name: RAW_STRING,
                ch,
                offset: input.offset(),
            });
        }

        let expected = self.expected.as_slice();
        let Some((actual, next)) = input.take(expected.len()) else {
            return input.fail(ParseError::unexpected_end(RAW_STRING, input.offset()));
        };

        if actual == expected {
            next.succeed(latin1(actual))
        } else {
            input.fail(ParseError::BytesMismatch {
                name: RAW_STRING,
                expected: expected.to_vec(),
                actual: actual.to_vec(),
                offset: input.offset(),
            })
        }
    }
}

/// Matches `expected`, one Latin-1 byte per character, and produces it as text.
///
/// A mismatch is reported at the starting offset and consumes nothing. A
/// character above U+00FF cannot be matched; the parser then always fails.
pub fn raw_string(expected: &str) -> RawString {
    let mut bytes = Vec::with_capacity(expected.len());
    for ch in expected.chars() {
        match u8::try_from(ch) {
            Ok(b) => bytes.push(b),
            Err(_) => {
                return RawString {
                    expected: Vec::new(),
                    unencodable: Some(ch),
                }
            }
        }
    }

    RawString {
        expected: bytes,
        unencodable: None,
    }
}

/// See [`null_terminated_bytes`].
#[derive(Copy, Clone, Debug, Default)]
pub struct NullTerminated;

impl<'a> Parser<'a> for NullTerminated {
    type Output = Vec<u8>;

    fn apply(&self, input: Cursor<'a>) -> ParseState<'a, Vec<u8>> {
        let rest = input.remaining();
        match rest.iter().position(|&b| b == 0) {
            Some(0) => input.fail(ParseError::EmptyString {
                name: NULL_TERMINATED_STRING,
                offset: input.offset() + 1,
            }),
            Some(len) => {
                trace!(offset = input.offset(), len, "found null terminator");
                // The terminator is consumed but not kept.
                match input.take(len + 1) {
                    Some((bytes, next)) => next.succeed(bytes[..len].to_vec()),
                    None => input.fail(ParseError::unexpected_end(
                        NULL_TERMINATED_STRING,
                        input.offset(),
                    )),
                }
            }
            None => input.fail(ParseError::unexpected_end(
                NULL_TERMINATED_STRING,
                input.offset() + rest.len(),
            )),
        }
    }
}

/// Reads bytes up to a `0x00` terminator, consuming the terminator.
///
/// Fails if the input ends before a terminator, or if the terminator is the
/// first byte: an empty string is not accepted.
pub fn null_terminated_bytes() -> NullTerminated {
    NullTerminated
}

/// Like [`null_terminated_bytes`], decoding the bytes as Latin-1 text.
pub fn null_terminated_string() -> Map<NullTerminated, fn(Vec<u8>) -> String> {
    NullTerminated.map(latin1_owned as fn(Vec<u8>) -> String)
}

fn latin1_owned(bytes: Vec<u8>) -> String {
    latin1(&bytes)
}

/// Like [`null_terminated_bytes`], returning a `bstr::BString`.
#[cfg(feature = "bstr")]
pub fn null_terminated_bstr() -> Map<NullTerminated, fn(Vec<u8>) -> bstr::BString> {
    NullTerminated.map(bstr::BString::from as fn(Vec<u8>) -> bstr::BString)
}
