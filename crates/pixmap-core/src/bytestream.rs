/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! A simple implementation of a bytestream reader
//! and writer.
//!
//! The reader never seeks, it keeps a single byte of look-ahead
//! which is enough for whitespace delimited formats and lets
//! decoders read from pipes such as stdin.
pub use reader::{ByteCursor, ByteIoError, ByteReader};
pub use traits::*;
pub use writer::ByteWriter;

mod reader;
mod traits;
mod writer;
