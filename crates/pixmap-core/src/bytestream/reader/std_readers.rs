/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

#![cfg(feature = "std")]

use std::io::{BufRead, BufReader, ErrorKind, Read, StdinLock};

use crate::bytestream::reader::ByteIoError;
use crate::bytestream::ByteReaderTrait;

fn read_byte_buffered<R: BufRead>(reader: &mut R) -> Result<Option<u8>, ByteIoError> {
    let first = loop {
        match reader.fill_buf() {
            Ok(buf) => break buf.first().copied(),
            Err(e) if e.kind() == ErrorKind::Interrupted => continue,
            Err(e) => return Err(ByteIoError::from(e))
        }
    };
    if first.is_some() {
        reader.consume(1);
    }
    Ok(first)
}

fn read_bytes_retrying<R: Read>(reader: &mut R, buf: &mut [u8]) -> Result<usize, ByteIoError> {
    loop {
        match reader.read(buf) {
            Ok(read) => return Ok(read),
            Err(e) if e.kind() == ErrorKind::Interrupted => continue,
            Err(e) => return Err(ByteIoError::from(e))
        }
    }
}

impl<T: Read> ByteReaderTrait for BufReader<T> {
    #[inline]
    fn read_byte(&mut self) -> Result<Option<u8>, ByteIoError> {
        read_byte_buffered(self)
    }

    fn read_bytes(&mut self, buf: &mut [u8]) -> Result<usize, ByteIoError> {
        read_bytes_retrying(self, buf)
    }

    fn name(&self) -> &'static str {
        "BufReader<T>"
    }
}

impl ByteReaderTrait for StdinLock<'_> {
    #[inline]
    fn read_byte(&mut self) -> Result<Option<u8>, ByteIoError> {
        read_byte_buffered(self)
    }

    fn read_bytes(&mut self, buf: &mut [u8]) -> Result<usize, ByteIoError> {
        read_bytes_retrying(self, buf)
    }

    fn name(&self) -> &'static str {
        "StdinLock"
    }
}
