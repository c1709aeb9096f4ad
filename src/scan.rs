//! Combinators that work across a run of bytes instead of a fixed width.

use alloc::format;
use alloc::vec::Vec;
use core::fmt::Debug;

use tracing::trace;

use crate::{Cursor, ParseError, ParseState, Parser};

/// See [`everything_until`].
#[derive(Clone, Debug)]
pub struct EverythingUntil<P>(P);

impl<'a, P: Parser<'a>> Parser<'a> for EverythingUntil<P> {
    type Output = Vec<u8>;

    fn apply(&self, input: Cursor<'a>) -> ParseState<'a, Vec<u8>> {
        let mut cursor = input;
        let mut collected = Vec::new();

        loop {
            if self.0.apply(cursor).is_ok() {
                trace!(offset = cursor.offset(), len = collected.len(), "stop parser matched");
                return cursor.succeed(collected);
            }

            match cursor.next_byte() {
                Some((byte, next)) => {
                    collected.push(byte);
                    cursor = next;
                }
                None => {
                    return cursor.fail(ParseError::unexpected_end(
                        "everythingUntil",
                        cursor.offset(),
                    ))
                }
            }
        }
    }
}

/// Collects raw bytes until `stop` would succeed.
///
/// `stop` is tried before each byte without consuming anything; the bytes it
/// matches are left in the input. Fails if the input ends first.
pub fn everything_until<'a, P: Parser<'a>>(stop: P) -> EverythingUntil<P> {
    EverythingUntil(stop)
}

/// See [`anything_except`].
#[derive(Clone, Debug)]
pub struct AnythingExcept<P>(P);

impl<'a, P> Parser<'a> for AnythingExcept<P>
where
    P: Parser<'a>,
    P::Output: Debug,
{
    type Output = u8;

    fn apply(&self, input: Cursor<'a>) -> ParseState<'a, u8> {
        if let Some(matched) = self.0.apply(input).value() {
            trace!(offset = input.offset(), "exception parser matched");
            return input.fail(ParseError::ExceptionMatched {
                matched: format!("{matched:?}"),
                offset: input.offset(),
            });
        }

        match input.next_byte() {
            Some((byte, next)) => next.succeed(byte),
            None => input.fail(ParseError::unexpected_end("anythingExcept", input.offset())),
        }
    }
}

/// Consumes one byte, unless `exception` would succeed at the current position.
pub fn anything_except<'a, P>(exception: P) -> AnythingExcept<P>
where
    P: Parser<'a>,
    P::Output: Debug,
{
    AnythingExcept(exception)
}

/// See [`end_of_input`].
#[derive(Copy, Clone, Debug, Default)]
pub struct EndOfInput;

impl<'a> Parser<'a> for EndOfInput {
    type Output = ();

    fn apply(&self, input: Cursor<'a>) -> ParseState<'a, ()> {
        match input.next_byte() {
            None => input.succeed(()),
            Some((byte, _)) => input.fail(ParseError::TrailingInput {
                byte,
                offset: input.offset(),
            }),
        }
    }
}

/// Succeeds, consuming nothing, only when no input remains.
pub fn end_of_input() -> EndOfInput {
    EndOfInput
}
