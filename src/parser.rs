//! The composition layer: the [`Parser`] trait and the combinators every
//! decoder in this crate is built from.

use alloc::string::String;
use alloc::vec::Vec;
use core::marker::PhantomData;

use tracing::{debug, trace};

use crate::{Cursor, ParseError, ParseState, Success};

/// A decoder over a byte source.
///
/// Implementors supply [`Parser::apply`], which reads from a cursor and
/// returns a new state. Everything else is provided.
pub trait Parser<'a> {
    /// The value produced on success.
    type Output;

    /// Runs this parser at `input`.
    fn apply(&self, input: Cursor<'a>) -> ParseState<'a, Self::Output>;

    /// Runs this parser on the state left by a previous parser.
    ///
    /// A failed state short-circuits: the same error comes back, at the same
    /// offset, and nothing is read.
    fn transform<U>(&self, state: ParseState<'a, U>) -> ParseState<'a, Self::Output>
    where
        Self: Sized,
    {
        state.and_then(|cursor, _| self.apply(cursor))
    }

    /// Runs this parser from the start of `data`.
    fn run(&self, data: &'a [u8]) -> Result<Success<Self::Output>, ParseError> {
        self.run_at(data, 0)
    }

    /// Runs this parser from `offset` within `data`.
    ///
    /// Fails without running the parser if `offset` is past the end of `data`.
    fn run_at(&self, data: &'a [u8], offset: usize) -> Result<Success<Self::Output>, ParseError> {
        trace!(len = data.len(), offset, "running parser");
        let result = Cursor::at(data, offset).and_then(|input| self.apply(input).into_result());
        if let Err(err) = &result {
            debug!(offset = err.offset(), %err, "parse failed");
        }
        result
    }

    /// Transforms the value of a successful parse.
    fn map<F, U>(self, f: F) -> Map<Self, F>
    where
        Self: Sized,
        F: Fn(Self::Output) -> U,
    {
        Map { parser: self, f }
    }

    /// Feeds the value of a successful parse into `f`, then runs the parser it returns.
    fn chain<F, P>(self, f: F) -> Chain<Self, F>
    where
        Self: Sized,
        F: Fn(Self::Output) -> P,
        P: Parser<'a>,
    {
        Chain { parser: self, f }
    }

    /// Runs `next` after this parser, keeping only the value of `next`.
    fn then<P>(self, next: P) -> Then<Self, P>
    where
        Self: Sized,
        P: Parser<'a>,
    {
        Then { first: self, second: next }
    }

    /// Runs `next` after this parser, keeping only the value of this parser.
    fn skip<P>(self, next: P) -> Skip<Self, P>
    where
        Self: Sized,
        P: Parser<'a>,
    {
        Skip { first: self, second: next }
    }

    /// Runs `next` after this parser, keeping both values.
    fn and<P>(self, next: P) -> And<Self, P>
    where
        Self: Sized,
        P: Parser<'a>,
    {
        And { first: self, second: next }
    }

    /// Tries this parser, and `other` at the same position if this one fails.
    fn or<P>(self, other: P) -> Or<Self, P>
    where
        Self: Sized,
        P: Parser<'a, Output = Self::Output>,
    {
        Or { first: self, second: other }
    }

    /// Rewrites the error of a failed parse.
    fn map_err<F>(self, f: F) -> MapErr<Self, F>
    where
        Self: Sized,
        F: Fn(ParseError) -> ParseError,
    {
        MapErr { parser: self, f }
    }
}

impl<'a, P: Parser<'a> + ?Sized> Parser<'a> for &P {
    type Output = P::Output;

    fn apply(&self, input: Cursor<'a>) -> ParseState<'a, Self::Output> {
        (**self).apply(input)
    }
}

impl<'a, P: Parser<'a> + ?Sized> Parser<'a> for alloc::boxed::Box<P> {
    type Output = P::Output;

    fn apply(&self, input: Cursor<'a>) -> ParseState<'a, Self::Output> {
        (**self).apply(input)
    }
}

/// See [`Parser::map`].
#[derive(Clone, Debug)]
pub struct Map<P, F> {
    parser: P,
    f: F,
}

impl<'a, P, F, U> Parser<'a> for Map<P, F>
where
    P: Parser<'a>,
    F: Fn(P::Output) -> U,
{
    type Output = U;

    fn apply(&self, input: Cursor<'a>) -> ParseState<'a, U> {
        self.parser.apply(input).map(&self.f)
    }
}

/// See [`Parser::chain`].
#[derive(Clone, Debug)]
pub struct Chain<P, F> {
    parser: P,
    f: F,
}

impl<'a, P, F, Q> Parser<'a> for Chain<P, F>
where
    P: Parser<'a>,
    F: Fn(P::Output) -> Q,
    Q: Parser<'a>,
{
    type Output = Q::Output;

    fn apply(&self, input: Cursor<'a>) -> ParseState<'a, Q::Output> {
        self.parser
            .apply(input)
            .and_then(|cursor, value| (self.f)(value).apply(cursor))
    }
}

/// See [`Parser::then`].
#[derive(Clone, Debug)]
pub struct Then<A, B> {
    first: A,
    second: B,
}

impl<'a, A: Parser<'a>, B: Parser<'a>> Parser<'a> for Then<A, B> {
    type Output = B::Output;

    fn apply(&self, input: Cursor<'a>) -> ParseState<'a, B::Output> {
        self.second.transform(self.first.apply(input))
    }
}

/// See [`Parser::skip`].
#[derive(Clone, Debug)]
pub struct Skip<A, B> {
    first: A,
    second: B,
}

impl<'a, A: Parser<'a>, B: Parser<'a>> Parser<'a> for Skip<A, B> {
    type Output = A::Output;

    fn apply(&self, input: Cursor<'a>) -> ParseState<'a, A::Output> {
        self.first
            .apply(input)
            .and_then(|cursor, value| self.second.apply(cursor).map(|_| value))
    }
}

/// See [`Parser::and`].
#[derive(Clone, Debug)]
pub struct And<A, B> {
    first: A,
    second: B,
}

impl<'a, A: Parser<'a>, B: Parser<'a>> Parser<'a> for And<A, B> {
    type Output = (A::Output, B::Output);

    fn apply(&self, input: Cursor<'a>) -> ParseState<'a, Self::Output> {
        self.first
            .apply(input)
            .and_then(|cursor, a| self.second.apply(cursor).map(|b| (a, b)))
    }
}

/// See [`Parser::or`].
#[derive(Clone, Debug)]
pub struct Or<A, B> {
    first: A,
    second: B,
}

impl<'a, A, B> Parser<'a> for Or<A, B>
where
    A: Parser<'a>,
    B: Parser<'a, Output = A::Output>,
{
    type Output = A::Output;

    fn apply(&self, input: Cursor<'a>) -> ParseState<'a, A::Output> {
        let state = self.first.apply(input);
        if state.is_ok() {
            state
        } else {
            self.second.apply(input)
        }
    }
}

/// See [`Parser::map_err`].
#[derive(Clone, Debug)]
pub struct MapErr<P, F> {
    parser: P,
    f: F,
}

impl<'a, P, F> Parser<'a> for MapErr<P, F>
where
    P: Parser<'a>,
    F: Fn(ParseError) -> ParseError,
{
    type Output = P::Output;

    fn apply(&self, input: Cursor<'a>) -> ParseState<'a, P::Output> {
        self.parser.apply(input).map_err(&self.f)
    }
}

/// A parser built from a state-transition function.
#[derive(Clone, Debug)]
pub struct FromFn<F>(F);

impl<'a, F, T> Parser<'a> for FromFn<F>
where
    F: Fn(Cursor<'a>) -> ParseState<'a, T>,
{
    type Output = T;

    fn apply(&self, input: Cursor<'a>) -> ParseState<'a, T> {
        (self.0)(input)
    }
}

/// Builds a parser from a function of the cursor.
pub fn from_fn<'a, F, T>(f: F) -> FromFn<F>
where
    F: Fn(Cursor<'a>) -> ParseState<'a, T>,
{
    FromFn(f)
}

/// See [`succeed_with`].
#[derive(Clone, Debug)]
pub struct SucceedWith<T>(T);

impl<'a, T: Clone> Parser<'a> for SucceedWith<T> {
    type Output = T;

    fn apply(&self, input: Cursor<'a>) -> ParseState<'a, T> {
        input.succeed(self.0.clone())
    }
}

/// A parser that consumes nothing and always succeeds with `value`.
pub fn succeed_with<T: Clone>(value: T) -> SucceedWith<T> {
    SucceedWith(value)
}

/// See [`fail`].
#[derive(Clone, Debug)]
pub struct Fail<T> {
    message: String,
    _output: PhantomData<fn() -> T>,
}

impl<'a, T> Parser<'a> for Fail<T> {
    type Output = T;

    fn apply(&self, input: Cursor<'a>) -> ParseState<'a, T> {
        input.fail(ParseError::custom(self.message.clone(), input.offset()))
    }
}

/// A parser that consumes nothing and always fails with `message`.
pub fn fail<T>(message: impl Into<String>) -> Fail<T> {
    Fail {
        message: message.into(),
        _output: PhantomData,
    }
}

/// See [`lookahead`].
#[derive(Clone, Debug)]
pub struct Lookahead<P>(P);

impl<'a, P: Parser<'a>> Parser<'a> for Lookahead<P> {
    type Output = P::Output;

    fn apply(&self, input: Cursor<'a>) -> ParseState<'a, P::Output> {
        self.0
            .apply(input)
            .and_then(|_, value| input.succeed(value))
    }
}

/// Runs `parser` without consuming input. Failures are reported as-is.
pub fn lookahead<'a, P: Parser<'a>>(parser: P) -> Lookahead<P> {
    Lookahead(parser)
}

/// See [`many`].
#[derive(Clone, Debug)]
pub struct Many<P>(P);

impl<'a, P: Parser<'a>> Parser<'a> for Many<P> {
    type Output = Vec<P::Output>;

    fn apply(&self, input: Cursor<'a>) -> ParseState<'a, Self::Output> {
        let mut cursor = input;
        let mut values = Vec::new();

        loop {
            let state = self.0.apply(cursor);
            let next = state.cursor();
            match state.into_result() {
                // A success that consumed nothing would repeat forever.
                Ok(success) if next.offset() > cursor.offset() => {
                    values.push(success.value);
                    cursor = next;
                }
                Ok(success) => {
                    values.push(success.value);
                    break;
                }
                Err(_) => break,
            }
        }

        cursor.succeed(values)
    }
}

/// Runs `parser` as many times as it succeeds, collecting the values. Never fails.
pub fn many<'a, P: Parser<'a>>(parser: P) -> Many<P> {
    Many(parser)
}

/// See [`sequence_of`].
#[derive(Clone, Debug)]
pub struct SequenceOf<P>(Vec<P>);

impl<'a, P: Parser<'a>> Parser<'a> for SequenceOf<P> {
    type Output = Vec<P::Output>;

    fn apply(&self, input: Cursor<'a>) -> ParseState<'a, Self::Output> {
        let mut state = input.succeed(Vec::with_capacity(self.0.len()));
        for parser in &self.0 {
            state = state.and_then(|cursor, mut values| {
                parser.apply(cursor).map(|value| {
                    values.push(value);
                    values
                })
            });
        }
        state
    }
}

/// Runs each parser in turn, collecting their values. Stops at the first failure.
pub fn sequence_of<'a, P: Parser<'a>>(parsers: impl IntoIterator<Item = P>) -> SequenceOf<P> {
    SequenceOf(parsers.into_iter().collect())
}
