/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Core routines shared by all libraries
//!
//! This crate provides a set of core routines shared
//! by the decoders and encoders under the `pixmap` umbrella
//!
//! It currently contains
//!
//! - A seekless bytestream reader and a writer with endian aware reads and writes
//! - Bit depth information shared by images
//! - Image decoder options
//! - A logging shim which forwards to the `log` crate when enabled
//!
//! This library is `#[no_std]` with `alloc` needed for defining `Vec`
//! which we need for storing decoded bytes.
//!
//! # Features
//!  - `std`: Implements the bytestream traits for std readers and writers
//!     (`BufReader`, stdin, `BufWriter`, stdout)
//!
//!  - `log`: Route the logging macros in [`log`] to the `log` crate
//!
//!  - `serde`: Enables serializing of some of the data structures
//!     present in the crate
#![cfg_attr(not(feature = "std"), no_std)]
#![macro_use]
extern crate alloc;

pub mod bit_depth;
pub mod bytestream;
#[cfg(not(feature = "log"))]
pub mod log;
#[cfg(feature = "log")]
pub use log;
pub mod options;
pub mod serde;
