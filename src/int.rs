//! Fixed-width integer primitives and the refinements built on them.

use alloc::string::ToString;
use core::fmt::{Debug, Display};
use core::marker::PhantomData;

use zerocopy::byteorder::{BE, I16, I32, LE, U16, U32};
use zerocopy::{FromBytes, Immutable, IntoBytes};

use crate::{Cursor, ParseError, ParseState, Parser};

/// The in-buffer layout of a fixed-width integer.
///
/// Implemented for `u8`, `i8` and the `zerocopy` byte-order types, so that
/// `U16<LE>` and `U16<BE>` are distinct wire formats decoding to the same
/// native `u16`.
pub trait Wire: FromBytes + IntoBytes + Immutable + Sized {
    /// The decoded integer type.
    type Native: Copy + PartialEq + PartialOrd + Debug + Display;

    /// The name used in error messages, such as `u16LE`.
    const NAME: &'static str;

    /// Number of bytes this format occupies.
    const WIDTH: usize = core::mem::size_of::<Self>();

    /// Converts to the native integer.
    fn to_native(self) -> Self::Native;

    /// Converts from the native integer.
    fn from_native(value: Self::Native) -> Self;
}

impl Wire for u8 {
    type Native = u8;
    const NAME: &'static str = "u8";

    fn to_native(self) -> u8 {
        self
    }

    fn from_native(value: u8) -> Self {
        value
    }
}

impl Wire for i8 {
    type Native = i8;
    const NAME: &'static str = "s8";

    fn to_native(self) -> i8 {
        self
    }

    fn from_native(value: i8) -> Self {
        value
    }
}

macro_rules! byteorder_wire {
    ($($wire:ty => $native:ty, $name:literal;)*) => {
        $(
            impl Wire for $wire {
                type Native = $native;
                const NAME: &'static str = $name;

                fn to_native(self) -> $native {
                    self.get()
                }

                fn from_native(value: $native) -> Self {
                    Self::new(value)
                }
            }
        )*
    };
}

byteorder_wire! {
    U16<LE> => u16, "u16LE";
    U16<BE> => u16, "u16BE";
    I16<LE> => i16, "s16LE";
    I16<BE> => i16, "s16BE";
    U32<LE> => u32, "u32LE";
    U32<BE> => u32, "u32BE";
    I32<LE> => i32, "s32LE";
    I32<BE> => i32, "s32BE";
}

/// Reads one integer in the wire format `W`.
pub struct Int<W>(PhantomData<fn() -> W>);

impl<W> Int<W> {
    /// Constructor
    pub fn new() -> Self {
        Self(PhantomData)
    }
}

impl<W> Default for Int<W> {
    fn default() -> Self {
        Self::new()
    }
}

impl<W> Clone for Int<W> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<W> Copy for Int<W> {}

impl<W: Wire> Debug for Int<W> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(W::NAME)
    }
}

impl<'a, W: Wire> Parser<'a> for Int<W> {
    type Output = W::Native;

    #[inline(always)]
    fn apply(&self, input: Cursor<'a>) -> ParseState<'a, W::Native> {
        match input.take(W::WIDTH) {
            Some((bytes, next)) => match W::read_from_bytes(bytes) {
                Ok(wire) => next.succeed(wire.to_native()),
                Err(_) => input.fail(ParseError::unexpected_end(W::NAME, input.offset())),
            },
            None => input.fail(ParseError::unexpected_end(W::NAME, input.offset())),
        }
    }
}

/// Reads a `u8`.
pub fn u8() -> Int<u8> {
    Int::new()
}

/// Reads an `i8`.
pub fn s8() -> Int<i8> {
    Int::new()
}

/// Reads a `u16` in little-endian byte order.
pub fn u16_le() -> Int<U16<LE>> {
    Int::new()
}

/// Reads a `u16` in big-endian byte order.
pub fn u16_be() -> Int<U16<BE>> {
    Int::new()
}

/// Reads an `i16` in little-endian byte order.
pub fn s16_le() -> Int<I16<LE>> {
    Int::new()
}

/// Reads an `i16` in big-endian byte order.
pub fn s16_be() -> Int<I16<BE>> {
    Int::new()
}

/// Reads a `u32` in little-endian byte order.
pub fn u32_le() -> Int<U32<LE>> {
    Int::new()
}

/// Reads a `u32` in big-endian byte order.
pub fn u32_be() -> Int<U32<BE>> {
    Int::new()
}

/// Reads an `i32` in little-endian byte order.
pub fn s32_le() -> Int<I32<LE>> {
    Int::new()
}

/// Reads an `i32` in big-endian byte order.
pub fn s32_be() -> Int<I32<BE>> {
    Int::new()
}

/// Reads an integer and requires it to equal an expected value.
///
/// A mismatch is reported after the integer has been consumed; the cursor is
/// not rewound. Use [`Parser::or`] or [`crate::lookahead`] where backtracking
/// is wanted.
pub struct Exact<W: Wire> {
    expected: W::Native,
}

impl<W: Wire> Clone for Exact<W> {
    fn clone(&self) -> Self {
        Self {
            expected: self.expected,
        }
    }
}

impl<W: Wire> Debug for Exact<W> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Exact")
            .field("wire", &W::NAME)
            .field("expected", &self.expected)
            .finish()
    }
}

impl<'a, W: Wire> Parser<'a> for Exact<W> {
    type Output = W::Native;

    fn apply(&self, input: Cursor<'a>) -> ParseState<'a, W::Native> {
        Int::<W>::new().apply(input).and_then(|cursor, actual| {
            if actual == self.expected {
                cursor.succeed(actual)
            } else {
                cursor.fail(ParseError::Mismatch {
                    name: W::NAME,
                    expected: self.expected.to_string(),
                    actual: actual.to_string(),
                    offset: cursor.offset(),
                })
            }
        })
    }
}

/// Reads an integer in wire format `W` and requires it to equal `expected`.
pub fn exact<W: Wire>(expected: W::Native) -> Exact<W> {
    Exact { expected }
}

/// `u8` that must equal `expected`.
pub fn exact_u8(expected: u8) -> Exact<u8> {
    exact(expected)
}

/// `s8` that must equal `expected`.
pub fn exact_s8(expected: i8) -> Exact<i8> {
    exact(expected)
}

/// `u16LE` that must equal `expected`.
pub fn exact_u16_le(expected: u16) -> Exact<U16<LE>> {
    exact(expected)
}

/// `u16BE` that must equal `expected`.
pub fn exact_u16_be(expected: u16) -> Exact<U16<BE>> {
    exact(expected)
}

/// `s16LE` that must equal `expected`.
pub fn exact_s16_le(expected: i16) -> Exact<I16<LE>> {
    exact(expected)
}

/// `s16BE` that must equal `expected`.
pub fn exact_s16_be(expected: i16) -> Exact<I16<BE>> {
    exact(expected)
}

/// `u32LE` that must equal `expected`.
pub fn exact_u32_le(expected: u32) -> Exact<U32<LE>> {
    exact(expected)
}

/// `u32BE` that must equal `expected`.
pub fn exact_u32_be(expected: u32) -> Exact<U32<BE>> {
    exact(expected)
}

/// `s32LE` that must equal `expected`.
pub fn exact_s32_le(expected: i32) -> Exact<I32<LE>> {
    exact(expected)
}

/// `s32BE` that must equal `expected`.
pub fn exact_s32_be(expected: i32) -> Exact<I32<BE>> {
    exact(expected)
}

/// Reads an integer and requires it to lie within an inclusive range.
///
/// The failure is reported at the offset the integer was read from.
pub struct InRange<W: Wire> {
    name: &'static str,
    low: W::Native,
    high: W::Native,
}

impl<W: Wire> Clone for InRange<W> {
    fn clone(&self) -> Self {
        Self {
            name: self.name,
            low: self.low,
            high: self.high,
        }
    }
}

impl<W: Wire> Debug for InRange<W> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("InRange")
            .field("name", &self.name)
            .field("low", &self.low)
            .field("high", &self.high)
            .finish()
    }
}

impl<'a, W: Wire> Parser<'a> for InRange<W> {
    type Output = W::Native;

    fn apply(&self, input: Cursor<'a>) -> ParseState<'a, W::Native> {
        Int::<W>::new().apply(input).and_then(|cursor, actual| {
            if self.low <= actual && actual <= self.high {
                cursor.succeed(actual)
            } else {
                cursor.fail(ParseError::OutOfRange {
                    name: self.name,
                    low: self.low.to_string(),
                    high: self.high.to_string(),
                    actual: actual.to_string(),
                    offset: input.offset(),
                })
            }
        })
    }
}

/// Reads an integer in wire format `W` and requires `low <= value <= high`.
pub fn in_range<W: Wire>(low: W::Native, high: W::Native) -> InRange<W> {
    InRange {
        name: W::NAME,
        low,
        high,
    }
}

/// Reads an unsigned byte and requires `low <= value <= high`.
pub fn byte_in_range(low: u8, high: u8) -> InRange<u8> {
    InRange {
        name: "byteInRange",
        low,
        high,
    }
}

/// Reads a two's-complement signed byte and requires `low <= value <= high`.
pub fn signed_byte_in_range(low: i8, high: i8) -> InRange<i8> {
    InRange {
        name: "signedByteInRange",
        low,
        high,
    }
}
