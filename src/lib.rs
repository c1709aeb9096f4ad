//! Composable decoders for fixed-format binary data.
//!
//! A decoder is a [`Parser`]: it reads from a [`Cursor`] over a byte slice and
//! returns a new [`ParseState`], either a value and the offset after it, or a
//! [`ParseError`] tagged with the offset where it was detected. Parsers never
//! modify the input, so any number of parses can share one buffer.
//!
//! The building blocks are:
//!
//! * fixed-width integers in both byte orders, such as [`u16_le`] and [`s32_be`];
//! * refinements that check a decoded integer, such as [`exact_u8`] and [`byte_in_range`];
//! * strings: [`raw_string`] and [`null_terminated_string`];
//! * scanning combinators: [`everything_until`], [`anything_except`] and [`end_of_input`].
//!
//! These are composed with the methods of [`Parser`] ([`Parser::then`],
//! [`Parser::chain`], [`Parser::or`], ...) and the free functions [`lookahead`],
//! [`many`] and [`sequence_of`].
//!
//! ```
//! use binary_combinators::{exact_u16_be, null_terminated_string, u32_le, Parser};
//!
//! let data = [0xca, 0xfe, b'h', b'i', 0x00, 0x2a, 0x00, 0x00, 0x00];
//! let header = exact_u16_be(0xcafe).then(null_terminated_string()).and(u32_le());
//!
//! let parsed = header.run(&data).unwrap();
//! assert_eq!(parsed.value, ("hi".to_string(), 42));
//! assert_eq!(parsed.offset, data.len());
//! ```
//!
//! Failures short-circuit: once a state has failed, every parser applied to it
//! returns that same failure without reading.

#![cfg_attr(not(any(feature = "std", test)), no_std)]
#![forbid(unsafe_code)]
#![forbid(unused_must_use)]
#![warn(missing_docs)]

extern crate alloc;

mod error;
mod int;
mod parser;
mod scan;
mod state;
mod string;
mod writer;


pub use error::ParseError;
pub use int::{
    byte_in_range, exact, exact_s16_be, exact_s16_le, exact_s32_be, exact_s32_le, exact_s8,
    exact_u16_be, exact_u16_le, exact_u32_be, exact_u32_le, exact_u8, in_range, s16_be, s16_le,
    s32_be, s32_le, s8, signed_byte_in_range, u16_be, u16_le, u32_be, u32_le, u8, Exact, InRange,
    Int, Wire,
};
pub use parser::{
    fail, from_fn, lookahead, many, sequence_of, succeed_with, And, Chain, Fail, FromFn,
    Lookahead, Many, Map, MapErr, Or, Parser, SequenceOf, Skip, SucceedWith, Then,
};
pub use scan::{
    anything_except, end_of_input, everything_until, AnythingExcept, EndOfInput, EverythingUntil,
};
pub use state::{Cursor, ParseState, Success};
#[cfg(feature = "bstr")]
pub use string::null_terminated_bstr;
pub use string::{
    latin1, null_terminated_bytes, null_terminated_string, raw_string, NullTerminated, RawString,
};
pub use writer::{BinaryWriter, WriterError};

/// Re-exported byte-order types, for naming wire formats with [`exact`], [`in_range`] and
/// [`BinaryWriter::write`].
pub use zerocopy::byteorder::{BE, I16, I32, LE, U16, U32};
