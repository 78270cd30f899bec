/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */
//! Traits for reading and writing images in pixmap
//!
//!
//! This exposes the traits and implementations for readers
//! and writers in the pixmap family of decoders and encoders.

use crate::bytestream::reader::ByteIoError;

/// The de-facto Input trait implemented for readers.
///
/// This provides the basic functions needed for reading from
/// a forward only source. Nothing here requires the ability to seek,
/// so pipes and sockets can implement it as easily as in-memory buffers.
///
/// # Considerations
///
/// If you have an in memory buffer, use [`ByteCursor`](crate::bytestream::ByteCursor).
/// With the `std` feature the trait is also implemented for [`BufReader`](std::io::BufReader)
/// and [`StdinLock`](std::io::StdinLock).
pub trait ByteReaderTrait {
    /// Read a single byte from the source
    ///
    /// ## Returns
    ///  - `Ok(Some(byte))` - The next byte in the source
    ///  - `Ok(None)` - We are at the end of the source
    ///  - `Err()` - The underlying reader failed for a reason other than EOF
    fn read_byte(&mut self) -> Result<Option<u8>, ByteIoError>;

    /// Read bytes into `buf` returning how many bytes you have read or an error if one occurred
    ///
    /// This doesn't guarantee that buf will be filled with bytes, a return
    /// value of `0` for a non-empty `buf` means the source is exhausted.
    ///
    /// ## Arguments
    /// - `buf`: The buffer to fill with bytes
    ///
    /// ## Returns
    ///  - `Ok(usize)` - Actual bytes read into the buffer
    ///  - `Err()` - The error encountered when reading bytes for which we couldn't recover
    fn read_bytes(&mut self, buf: &mut [u8]) -> Result<usize, ByteIoError>;

    /// A human readable name of the implementation, used for logging
    fn name(&self) -> &'static str;
}

/// The writer trait implemented for pixmap encoders
///
/// Anything that implements this trait can be used as a sink
/// for writing encoded images
pub trait ByteWriterTrait {
    /// Write all bytes to the buffer or return an error if something occurred
    ///
    /// This will always write all bytes, if it can't fully write all bytes, it will
    /// error out
    fn write_all_bytes(&mut self, buf: &[u8]) -> Result<(), ByteIoError>;

    /// Ensure bytes are written to the sink.
    ///
    /// After this, the encoder should be able to guarantee that all buffered
    /// data was handed to the underlying device
    fn flush_bytes(&mut self) -> Result<(), ByteIoError>;

    /// A hint to tell the implementation how big of a size we expect the image to be
    /// An implementation like in memory `Vec` can use this to reserve additional memory to
    /// prevent reallocation when encoding
    ///
    /// This is just a hint, akin to calling `Vec::reserve` and should be treated as such.
    /// If your implementation doesn't support such, e.g file or mutable slices, it's okay to return
    /// `Ok(())`
    fn reserve_capacity(&mut self, size: usize) -> Result<(), ByteIoError>;
}
