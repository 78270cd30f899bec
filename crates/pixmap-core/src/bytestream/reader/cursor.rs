/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use crate::bytestream::{ByteIoError, ByteReaderTrait};

/// An in-memory source of bytes
///
/// This is the preferred source when the whole image is already
/// in memory, it never fails and never copies the underlying buffer.
///
/// # Example
/// ```
/// use pixmap_core::bytestream::{ByteCursor, ByteReader};
/// let mut reader = ByteReader::new(ByteCursor::new(b"P6"));
/// assert_eq!(reader.read_u8().unwrap(), Some(b'P'));
/// ```
pub struct ByteCursor<T: AsRef<[u8]>> {
    stream:   T,
    position: usize
}

impl<T: AsRef<[u8]>> ByteCursor<T> {
    pub fn new(buffer: T) -> ByteCursor<T> {
        ByteCursor {
            stream:   buffer,
            position: 0
        }
    }
    /// Current offset into the buffer
    pub const fn position(&self) -> usize {
        self.position
    }
    /// Number of bytes not yet read
    pub fn remaining(&self) -> usize {
        self.stream.as_ref().len().saturating_sub(self.position)
    }
    /// Return the wrapped buffer
    pub fn into_inner(self) -> T {
        self.stream
    }
}

impl<T: AsRef<[u8]>> ByteReaderTrait for ByteCursor<T> {
    #[inline(always)]
    fn read_byte(&mut self) -> Result<Option<u8>, ByteIoError> {
        let byte = self.stream.as_ref().get(self.position).copied();
        if byte.is_some() {
            self.position += 1;
        }
        Ok(byte)
    }

    #[inline(always)]
    fn read_bytes(&mut self, buf: &mut [u8]) -> Result<usize, ByteIoError> {
        let stream = self.stream.as_ref();
        let start = core::cmp::min(self.position, stream.len());
        let end = core::cmp::min(start + buf.len(), stream.len());

        let slice = &stream[start..end];
        buf[..slice.len()].copy_from_slice(slice);

        self.position = end;

        Ok(end - start)
    }

    fn name(&self) -> &'static str {
        "ByteCursor<T>"
    }
}
