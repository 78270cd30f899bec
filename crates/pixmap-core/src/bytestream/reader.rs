/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use core::fmt::{Debug, Display, Formatter};

pub use cursor::ByteCursor;

mod cursor;
pub(crate) mod std_readers;

use crate::bytestream::ByteReaderTrait;

/// Errors from reading or writing bytes
pub enum ByteIoError {
    #[cfg(feature = "std")]
    StdIoError(std::io::Error),
    // requested, available
    NotEnoughBuffer(usize, usize),
    Generic(&'static str)
}

impl Display for ByteIoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        match self {
            #[cfg(feature = "std")]
            ByteIoError::StdIoError(err) => {
                write!(f, "Underlying I/O error {}", err)
            }
            ByteIoError::NotEnoughBuffer(expected, found) => {
                write!(
                    f,
                    "Not enough buffer to write {expected} bytes, buffer size is {found}"
                )
            }
            ByteIoError::Generic(err) => {
                write!(f, "Generic I/O error: {err}")
            }
        }
    }
}

impl Debug for ByteIoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        writeln!(f, "{}", self)
    }
}

#[cfg(feature = "std")]
impl From<std::io::Error> for ByteIoError {
    fn from(value: std::io::Error) -> Self {
        ByteIoError::StdIoError(value)
    }
}

impl From<&'static str> for ByteIoError {
    fn from(value: &'static str) -> Self {
        ByteIoError::Generic(value)
    }
}

/// A forward only reader with a single byte of look-ahead
///
/// Wraps anything implementing [`ByteReaderTrait`] and adds
/// peeking and endian aware reads on top of it.
pub struct ByteReader<T: ByteReaderTrait> {
    inner:    T,
    peeked:   Option<u8>,
    position: u64
}

impl<T: ByteReaderTrait> ByteReader<T> {
    pub fn new(source: T) -> ByteReader<T> {
        ByteReader {
            inner:    source,
            peeked:   None,
            position: 0
        }
    }
    /// Name of the underlying source
    pub fn name(&self) -> &'static str {
        self.inner.name()
    }

    /// Number of bytes consumed so far
    #[inline(always)]
    pub const fn position(&self) -> u64 {
        self.position
    }

    /// Return the next byte without consuming it, or `None` at eof
    #[inline]
    pub fn peek_u8(&mut self) -> Result<Option<u8>, ByteIoError> {
        if self.peeked.is_none() {
            self.peeked = self.inner.read_byte()?;
        }
        Ok(self.peeked)
    }

    /// Consume and return the next byte, or `None` at eof
    #[inline]
    pub fn read_u8(&mut self) -> Result<Option<u8>, ByteIoError> {
        let byte = match self.peeked.take() {
            Some(byte) => Some(byte),
            None => self.inner.read_byte()?
        };
        if byte.is_some() {
            self.position += 1;
        }
        Ok(byte)
    }

    /// Consume bytes while `func` returns true
    ///
    /// The first byte for which `func` returns false is left in the stream
    pub fn skip_until_false<F: Fn(u8) -> bool>(&mut self, func: F) -> Result<(), ByteIoError> {
        while let Some(byte) = self.peek_u8()? {
            if !(func)(byte) {
                break;
            }
            self.peeked = None;
            self.position += 1;
        }
        Ok(())
    }

    /// Fill as much of `buf` as the source allows
    ///
    /// Stops early only when the source is exhausted.
    ///
    /// # Returns
    /// - `Ok(usize)` Number of bytes written into `buf`, less than `buf.len()`
    ///   only at eof
    pub fn read_fill(&mut self, buf: &mut [u8]) -> Result<usize, ByteIoError> {
        if buf.is_empty() {
            return Ok(0);
        }
        let mut filled = 0;

        if let Some(byte) = self.peeked.take() {
            buf[0] = byte;
            filled = 1;
        }
        while filled < buf.len() {
            let read = self.inner.read_bytes(&mut buf[filled..])?;
            if read == 0 {
                break;
            }
            filled += read;
        }
        self.position += filled as u64;

        Ok(filled)
    }
}
