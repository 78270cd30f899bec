/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! A Portable Pixmap decoder and encoder
//!
//! Supports the two RGB flavours of the format
//! ```text
//! ╔═══════╤══════════════════════════════════════════════════════════════╗
//! ║ Magic │ Payload                                                      ║
//! ╠═══════╪══════════════════════════════════════════════════════════════╣
//! ║ P3    │ decimal ascii samples separated by whitespace                ║
//! ╟───────┼──────────────────────────────────────────────────────────────╢
//! ║ P6    │ raw samples, 1 byte if max value <= 255 else 2 bytes BE      ║
//! ╚═══════╧══════════════════════════════════════════════════════════════╝
//! ```
//! Both share a textual header `magic width height max_value`, with
//! tokens separated by ascii whitespace. Comments are not supported.
//!
//! Images are capped at 1920x1080 and a max value of 65536.
//!
//! # Example
//! ```
//! use pixmap_core::bytestream::ByteCursor;
//! use pixmap_ppm::{PpmDecoder, PpmEncoder};
//!
//! let mut decoder = PpmDecoder::new(ByteCursor::new(b"P3\n2 1\n255\n255 0 0 0 255 0"));
//! let mut image = decoder.decode().unwrap();
//!
//! image.invert();
//! assert_eq!(image.samples(), &[0, 255, 255, 255, 0, 255]);
//!
//! let bytes = PpmEncoder::new(&image).encode_to_vec();
//! assert!(bytes.starts_with(b"P3\n2 1\n255\n"));
//! ```
//!
//! # Features
//! - `std`: Read from std readers and write to std writers
//! - `log`: Log header information via the `log` crate
//! - `serde`: Serialize header information
#![cfg_attr(not(feature = "std"), no_std)]
extern crate alloc;

pub use pixmap_core;

pub use crate::decoder::*;
pub use crate::encoder::*;
pub use crate::errors::*;
pub use crate::image::*;

mod decoder;
mod encoder;
mod errors;
mod image;
pub mod invert;

/// Largest width an image may have
pub const PPM_MAX_WIDTH: usize = pixmap_core::options::DEFAULT_MAX_WIDTH;
/// Largest height an image may have
pub const PPM_MAX_HEIGHT: usize = pixmap_core::options::DEFAULT_MAX_HEIGHT;
/// Largest max value a header may declare
pub const PPM_MAX_VALUE: u32 = pixmap_core::options::DEFAULT_MAX_VALUE;
/// Number of samples per pixel, red green and blue
pub const PPM_CHANNELS: usize = 3;
