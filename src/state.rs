use crate::ParseError;

/// A read position within a byte source.
///
/// A `Cursor` is a plain value: copying it and reading through the copy never
/// moves the original. Every parser receives a cursor and answers with a new
/// [`ParseState`], which is how look-ahead works without any extra machinery.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct Cursor<'a> {
    data: &'a [u8],
    offset: usize,
}

impl<'a> Cursor<'a> {
    /// Creates a cursor at the start of `data`.
    pub fn new(data: &'a [u8]) -> Self {
        Self { data, offset: 0 }
    }

    /// Creates a cursor at `offset` within `data`.
    ///
    /// `offset` may equal `data.len()`; anything past the end is rejected.
    pub fn at(data: &'a [u8], offset: usize) -> Result<Self, ParseError> {
        if offset > data.len() {
            return Err(ParseError::OffsetOutOfBounds {
                len: data.len(),
                offset,
            });
        }
        Ok(Self { data, offset })
    }

    /// The whole byte source, independent of the current offset.
    pub fn source(&self) -> &'a [u8] {
        self.data
    }

    /// The current offset.
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// The bytes from the current offset to the end of the source.
    pub fn remaining(&self) -> &'a [u8] {
        self.data.get(self.offset..).unwrap_or(&[])
    }

    /// Returns true if no bytes remain.
    pub fn is_at_end(&self) -> bool {
        self.remaining().is_empty()
    }

    /// Reads `len` bytes, returning them along with the cursor positioned after them.
    ///
    /// Returns `None` if fewer than `len` bytes remain.
    #[inline(always)]
    pub fn take(self, len: usize) -> Option<(&'a [u8], Cursor<'a>)> {
        let bytes = self.remaining().get(..len)?;
        Some((bytes, self.skip(len)))
    }

    /// Reads a single byte.
    #[inline(always)]
    pub fn next_byte(self) -> Option<(u8, Cursor<'a>)> {
        let byte = *self.remaining().first()?;
        Some((byte, self.skip(1)))
    }

    fn skip(self, len: usize) -> Self {
        Self {
            data: self.data,
            offset: self.offset + len,
        }
    }

    /// A successful state at this position.
    pub fn succeed<T>(self, value: T) -> ParseState<'a, T> {
        ParseState {
            source: self.data,
            offset: self.offset,
            result: Ok(value),
        }
    }

    /// A failed state. The state takes its offset from `error`.
    pub fn fail<T>(self, error: ParseError) -> ParseState<'a, T> {
        ParseState::failure(self.data, error)
    }
}

/// The outcome of one parser transition.
///
/// A state is either a success, carrying a value and the offset after it, or a
/// failure, carrying a [`ParseError`] and the offset where it was detected.
/// States are never updated in place; every parser returns a fresh one.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ParseState<'a, T> {
    source: &'a [u8],
    offset: usize,
    result: Result<T, ParseError>,
}

impl<'a> ParseState<'a, ()> {
    /// The initial state of a parse: offset 0, no value yet.
    pub fn new(source: &'a [u8]) -> Self {
        Cursor::new(source).succeed(())
    }
}

impl<'a, T> ParseState<'a, T> {
    pub(crate) fn failure(source: &'a [u8], error: ParseError) -> Self {
        Self {
            source,
            offset: error.offset(),
            result: Err(error),
        }
    }

    /// The byte source this state reads from.
    pub fn source(&self) -> &'a [u8] {
        self.source
    }

    /// The offset after the last successful read, or the offset of the failure.
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Returns true if this state is a success.
    pub fn is_ok(&self) -> bool {
        self.result.is_ok()
    }

    /// Returns true if this state is a failure.
    pub fn is_err(&self) -> bool {
        self.result.is_err()
    }

    /// The decoded value, if this state is a success.
    pub fn value(&self) -> Option<&T> {
        self.result.as_ref().ok()
    }

    /// The error, if this state is a failure.
    pub fn error(&self) -> Option<&ParseError> {
        self.result.as_ref().err()
    }

    /// The position of this state, whether it succeeded or not.
    pub fn cursor(&self) -> Cursor<'a> {
        Cursor {
            data: self.source,
            offset: self.offset,
        }
    }

    /// Feeds a successful value, and the cursor after it, into `f`.
    ///
    /// A failed state is passed through untouched.
    pub fn and_then<U>(
        self,
        f: impl FnOnce(Cursor<'a>, T) -> ParseState<'a, U>,
    ) -> ParseState<'a, U> {
        let cursor = self.cursor();
        match self.result {
            Ok(value) => f(cursor, value),
            Err(error) => ParseState::failure(self.source, error),
        }
    }

    /// Transforms a successful value. Failures pass through.
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> ParseState<'a, U> {
        ParseState {
            source: self.source,
            offset: self.offset,
            result: self.result.map(f),
        }
    }

    /// Transforms the error of a failed state. The offset follows the new error.
    pub fn map_err(self, f: impl FnOnce(ParseError) -> ParseError) -> Self {
        match self.result {
            Ok(_) => self,
            Err(error) => Self::failure(self.source, f(error)),
        }
    }

    /// Converts this state into the value/offset pair a caller inspects.
    pub fn into_result(self) -> Result<Success<T>, ParseError> {
        let offset = self.offset;
        self.result.map(|value| Success { value, offset })
    }
}

/// A completed, successful parse.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Success<T> {
    /// The decoded value.
    pub value: T,
    /// The offset just past the consumed input.
    pub offset: usize,
}
