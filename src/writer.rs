use thiserror::Error;
use zerocopy::byteorder::{BE, I16, I32, LE, U16, U32};

use alloc::vec::Vec;

use crate::Wire;

pub type Result<T> = core::result::Result<T, WriterError>;

/// Encodes values in the layouts the decoders in this crate read.
///
/// Every fixed-width primitive has a matching `write_*` method, so a buffer
/// built here decodes back to the values that went in.
#[derive(Clone, Debug, Default)]
pub struct BinaryWriter {
    /// The output data.
    pub out: Vec<u8>,
}

impl BinaryWriter {
    /// Creates a new, empty `BinaryWriter`.
    pub fn new() -> Self {
        Self { out: Vec::new() }
    }

    /// Creates a new `BinaryWriter` with the given capacity.
    pub fn with_capacity(len: usize) -> Self {
        Self {
            out: Vec::with_capacity(len),
        }
    }

    /// Extracts the inner buffer
    pub fn into_inner(self) -> Vec<u8> {
        self.out
    }

    /// Writes `bytes` to the output.
    pub fn write_bytes(&mut self, bytes: &[u8]) {
        self.out.extend_from_slice(bytes);
    }

    /// Writes `value` in the wire format `W`.
    pub fn write<W: Wire>(&mut self, value: W::Native) {
        self.write_bytes(W::from_native(value).as_bytes())
    }

    /// Writes a single `u8` value
    pub fn write_u8(&mut self, value: u8) {
        self.write::<u8>(value)
    }

    /// Writes a single `i8` value
    pub fn write_s8(&mut self, value: i8) {
        self.write::<i8>(value)
    }

    /// Writes a `u16` in little-endian byte order
    pub fn write_u16_le(&mut self, value: u16) {
        self.write::<U16<LE>>(value)
    }

    /// Writes a `u16` in big-endian byte order
    pub fn write_u16_be(&mut self, value: u16) {
        self.write::<U16<BE>>(value)
    }

    /// Writes an `i16` in little-endian byte order
    pub fn write_s16_le(&mut self, value: i16) {
        self.write::<I16<LE>>(value)
    }

    /// Writes an `i16` in big-endian byte order
    pub fn write_s16_be(&mut self, value: i16) {
        self.write::<I16<BE>>(value)
    }

    /// Writes a `u32` in little-endian byte order
    pub fn write_u32_le(&mut self, value: u32) {
        self.write::<U32<LE>>(value)
    }

    /// Writes a `u32` in big-endian byte order
    pub fn write_u32_be(&mut self, value: u32) {
        self.write::<U32<BE>>(value)
    }

    /// Writes an `i32` in little-endian byte order
    pub fn write_s32_le(&mut self, value: i32) {
        self.write::<I32<LE>>(value)
    }

    /// Writes an `i32` in big-endian byte order
    pub fn write_s32_be(&mut self, value: i32) {
        self.write::<I32<BE>>(value)
    }

    /// Writes `s` followed by a `0x00` terminator.
    ///
    /// `s` must be non-empty and must not contain `0x00`, otherwise the
    /// result could not be read back by `null_terminated_bytes`.
    pub fn write_null_terminated(&mut self, s: &[u8]) -> Result<()> {
        if s.is_empty() {
            return Err(WriterError::Empty);
        }
        if let Some(index) = s.iter().position(|&b| b == 0) {
            return Err(WriterError::InteriorNul { index });
        }
        self.write_bytes(s);
        self.write_u8(0);
        Ok(())
    }
}

/// Error type for some `write_*` functions of `BinaryWriter`.
#[derive(Error, Clone, Eq, PartialEq, Debug)]
pub enum WriterError {
    /// A null-terminated string had no content.
    #[error("cannot encode an empty null-terminated string")]
    Empty,

    /// A null-terminated string contained a `0x00` byte.
    #[error("null-terminated string contains 0x00 at index {index}")]
    InteriorNul {
        /// Position of the offending byte
        index: usize,
    },
}
