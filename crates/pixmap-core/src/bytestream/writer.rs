/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use crate::bytestream::{ByteIoError, ByteWriterTrait};

mod no_std_writer;
mod std_writer;

/// Encapsulates a simple Byte writer with
/// support for Endian aware writes
///
/// It keeps track of how many bytes went through it so encoders
/// can report the size of what they produced.
pub struct ByteWriter<T: ByteWriterTrait> {
    buffer:        T,
    bytes_written: usize
}

impl<T: ByteWriterTrait> ByteWriter<T> {
    /// Create a new writer for the sink
    pub fn new(data: T) -> ByteWriter<T> {
        ByteWriter {
            buffer:        data,
            bytes_written: 0
        }
    }
    /// Return the number of bytes the writer has written
    ///
    /// ```
    /// use pixmap_core::bytestream::ByteWriter;
    /// let mut sink = vec![];
    /// let mut stream = ByteWriter::new(&mut sink);
    /// stream.write_all(b"P6").unwrap();
    /// assert_eq!(stream.bytes_written(), 2);
    /// ```
    pub const fn bytes_written(&self) -> usize {
        self.bytes_written
    }

    /// Hint the sink about the number of bytes that will follow
    pub fn reserve(&mut self, additional: usize) -> Result<(), ByteIoError> {
        self.buffer.reserve_capacity(additional)
    }

    /// Write all of `buf` into the sink or error out
    pub fn write_all(&mut self, buf: &[u8]) -> Result<(), ByteIoError> {
        self.buffer.write_all_bytes(buf)?;
        self.bytes_written += buf.len();
        Ok(())
    }

    /// Flush the underlying sink
    pub fn flush(&mut self) -> Result<(), ByteIoError> {
        self.buffer.flush_bytes()
    }
}
