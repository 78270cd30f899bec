/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Errors possible when decoding, encoding or constructing images
use alloc::string::String;
use core::fmt::{Debug, Display, Formatter};

use pixmap_core::bytestream::ByteIoError;

/// Possible errors that may occur during decoding
///
/// Decoding stops at the first error, header fields are checked
/// in the order they appear in the file so the variant returned
/// always refers to the earliest malformed field.
pub enum PpmDecodeErrors {
    /// The first token is absent or is neither `P3` nor `P6`
    InvalidMagic(String),
    /// Width is missing, not a number or larger than the limit
    InvalidWidth(String),
    /// Height is missing, not a number or larger than the limit
    InvalidHeight(String),
    /// Max value is missing, not a number or larger than the limit
    InvalidMaxValue(String),
    /// The payload ended before all samples were read
    ///
    /// Both counts are in samples, not bytes
    TruncatedPayload { expected: usize, found: usize },
    /// A sample is larger than the max value declared in the header
    SampleOutOfRange {
        index:     usize,
        value:     u32,
        max_value: u32
    },
    /// A sample is within the max value but does not fit in 16 bits
    ///
    /// Only a max value of 65536 admits such a sample
    SampleTooWide { index: usize, value: u32 },
    /// `decode` was called again after the payload was consumed
    AlreadyDecoded,
    /// The underlying reader failed
    IoErrors(ByteIoError)
}

impl Display for PpmDecodeErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::InvalidMagic(reason) => {
                write!(f, "Invalid magic number, {reason}")
            }
            Self::InvalidWidth(reason) => {
                write!(f, "Invalid width, {reason}")
            }
            Self::InvalidHeight(reason) => {
                write!(f, "Invalid height, {reason}")
            }
            Self::InvalidMaxValue(reason) => {
                write!(f, "Invalid max color value, {reason}")
            }
            Self::TruncatedPayload { expected, found } => {
                write!(
                    f,
                    "Truncated payload, expected {expected} samples but found {found}"
                )
            }
            Self::SampleOutOfRange {
                index,
                value,
                max_value
            } => {
                write!(
                    f,
                    "Sample {index} has value {value} which is greater than max value {max_value}"
                )
            }
            Self::SampleTooWide { index, value } => {
                write!(
                    f,
                    "Sample {index} has value {value} which does not fit in 16 bits"
                )
            }
            Self::AlreadyDecoded => {
                write!(f, "Image was already decoded, the decoder can only be used once")
            }
            Self::IoErrors(err) => {
                write!(f, "I/O error {err}")
            }
        }
    }
}

impl Debug for PpmDecodeErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        writeln!(f, "{self}")
    }
}

impl From<ByteIoError> for PpmDecodeErrors {
    fn from(value: ByteIoError) -> Self {
        PpmDecodeErrors::IoErrors(value)
    }
}

/// Errors occurring during encoding
///
/// An image is always valid, so the only failure is
/// the sink refusing bytes
pub enum PpmEncodeErrors {
    IoErrors(ByteIoError)
}

impl Display for PpmEncodeErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        match self {
            PpmEncodeErrors::IoErrors(err) => {
                write!(f, "I/O error {err}")
            }
        }
    }
}

impl Debug for PpmEncodeErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        writeln!(f, "{self}")
    }
}

impl From<ByteIoError> for PpmEncodeErrors {
    fn from(value: ByteIoError) -> Self {
        PpmEncodeErrors::IoErrors(value)
    }
}

/// Errors from constructing an image out of raw parts
#[derive(Copy, Clone, Eq, PartialEq)]
pub enum PpmImageErrors {
    /// Width above the hard cap
    WidthTooLarge(usize),
    /// Height above the hard cap
    HeightTooLarge(usize),
    /// Max value above the hard cap
    MaxValueTooLarge(u32),
    /// Number of samples is not `width * height * 3`
    LengthMismatch { expected: usize, found: usize },
    /// A sample is larger than the max value
    SampleOutOfRange {
        index:     usize,
        value:     u16,
        max_value: u32
    }
}

impl Display for PpmImageErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::WidthTooLarge(width) => {
                write!(
                    f,
                    "Width {width} greater than max width {}",
                    crate::PPM_MAX_WIDTH
                )
            }
            Self::HeightTooLarge(height) => {
                write!(
                    f,
                    "Height {height} greater than max height {}",
                    crate::PPM_MAX_HEIGHT
                )
            }
            Self::MaxValueTooLarge(value) => {
                write!(
                    f,
                    "Max color value {value} greater than {}",
                    crate::PPM_MAX_VALUE
                )
            }
            Self::LengthMismatch { expected, found } => {
                write!(
                    f,
                    "Data length does not match image dimensions, expected {expected} samples but found {found}"
                )
            }
            Self::SampleOutOfRange {
                index,
                value,
                max_value
            } => {
                write!(
                    f,
                    "Sample {index} has value {value} which is greater than max value {max_value}"
                )
            }
        }
    }
}

impl Debug for PpmImageErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        writeln!(f, "{self}")
    }
}

#[cfg(feature = "std")]
impl std::error::Error for PpmDecodeErrors {}

#[cfg(feature = "std")]
impl std::error::Error for PpmEncodeErrors {}

#[cfg(feature = "std")]
impl std::error::Error for PpmImageErrors {}
