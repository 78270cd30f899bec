/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use alloc::vec::Vec;
use core::fmt::{Display, Formatter};

use pixmap_core::bit_depth::BitDepth;

use crate::errors::PpmImageErrors;
use crate::invert::invert;
use crate::{PPM_CHANNELS, PPM_MAX_HEIGHT, PPM_MAX_VALUE, PPM_MAX_WIDTH};

/// The payload encoding of a pixmap
///
/// The variant only decides how samples are serialized,
/// their numeric meaning is the same for both.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum PpmVariant {
    /// `P3`, samples are decimal ascii numbers
    #[default]
    Ascii,
    /// `P6`, samples are raw big endian bytes
    Binary
}

impl PpmVariant {
    /// The magic token identifying this variant in a header
    pub const fn magic(self) -> &'static str {
        match self {
            Self::Ascii => "P3",
            Self::Binary => "P6"
        }
    }

    /// Map a magic token to a variant
    pub fn from_magic(magic: &[u8]) -> Option<PpmVariant> {
        match magic {
            b"P3" => Some(Self::Ascii),
            b"P6" => Some(Self::Binary),
            _ => None
        }
    }
}

impl Display for PpmVariant {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", self.magic())
    }
}

/// Header fields of a pixmap
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct PpmHeader {
    pub variant:   PpmVariant,
    pub width:     usize,
    pub height:    usize,
    pub max_value: u32
}

impl PpmHeader {
    /// Bytes each sample takes in a binary payload
    pub const fn bit_depth(&self) -> BitDepth {
        BitDepth::from_max_value(self.max_value)
    }

    /// Number of samples the payload carries
    pub const fn sample_count(&self) -> usize {
        self.width * self.height * PPM_CHANNELS
    }
}

/// A decoded pixmap
///
/// Samples are stored interleaved as `RGBRGB...`, row by row,
/// with no padding between rows.
///
/// Every image satisfies
/// - `width <= 1920`, `height <= 1080`, `max_value <= 65536`
/// - `samples.len() == width * height * 3`
/// - every sample is at most `max_value`
///
/// An image is obtained either from [`PpmDecoder`](crate::PpmDecoder)
/// or from [`PpmImage::new`], both of which refuse to build an image
/// that breaks any of the above.
#[derive(Clone, Debug, Eq, PartialEq, Default)]
pub struct PpmImage {
    variant:   PpmVariant,
    width:     usize,
    height:    usize,
    max_value: u32,
    samples:   Vec<u16>
}

impl PpmImage {
    /// Create an image from its parts
    ///
    /// # Arguments
    /// - `variant`: Payload encoding used when the image is written out
    /// - `width`, `height`: Image dimensions in pixels
    /// - `max_value`: Largest value any sample may take
    /// - `samples`: Interleaved RGB samples, `width * height * 3` of them
    ///
    /// # Example
    /// ```
    /// use pixmap_ppm::{PpmImage, PpmVariant};
    /// let image = PpmImage::new(PpmVariant::Binary, 1, 1, 255, vec![1, 2, 3]).unwrap();
    /// assert_eq!(image.dimensions(), (1, 1));
    ///
    /// // too few samples
    /// assert!(PpmImage::new(PpmVariant::Binary, 2, 1, 255, vec![1, 2, 3]).is_err());
    /// ```
    pub fn new(
        variant: PpmVariant, width: usize, height: usize, max_value: u32, samples: Vec<u16>
    ) -> Result<PpmImage, PpmImageErrors> {
        if width > PPM_MAX_WIDTH {
            return Err(PpmImageErrors::WidthTooLarge(width));
        }
        if height > PPM_MAX_HEIGHT {
            return Err(PpmImageErrors::HeightTooLarge(height));
        }
        if max_value > PPM_MAX_VALUE {
            return Err(PpmImageErrors::MaxValueTooLarge(max_value));
        }
        let expected = width * height * PPM_CHANNELS;

        if samples.len() != expected {
            return Err(PpmImageErrors::LengthMismatch {
                expected,
                found: samples.len()
            });
        }
        if let Some((index, value)) = samples
            .iter()
            .enumerate()
            .find(|(_, x)| u32::from(**x) > max_value)
        {
            return Err(PpmImageErrors::SampleOutOfRange {
                index,
                value: *value,
                max_value
            });
        }

        Ok(PpmImage::from_parts_unchecked(
            variant, width, height, max_value, samples
        ))
    }

    /// Assemble an image whose parts were already validated
    pub(crate) fn from_parts_unchecked(
        variant: PpmVariant, width: usize, height: usize, max_value: u32, samples: Vec<u16>
    ) -> PpmImage {
        debug_assert_eq!(samples.len(), width * height * PPM_CHANNELS);

        PpmImage {
            variant,
            width,
            height,
            max_value,
            samples
        }
    }

    pub const fn variant(&self) -> PpmVariant {
        self.variant
    }

    /// Change the payload encoding used when this image is encoded
    pub fn set_variant(&mut self, variant: PpmVariant) {
        self.variant = variant;
    }

    pub const fn width(&self) -> usize {
        self.width
    }

    pub const fn height(&self) -> usize {
        self.height
    }

    /// Return `(width, height)`
    pub const fn dimensions(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    pub const fn max_value(&self) -> u32 {
        self.max_value
    }

    /// Number of bytes a sample occupies in a binary payload
    pub const fn bit_depth(&self) -> BitDepth {
        BitDepth::from_max_value(self.max_value)
    }

    /// Header fields describing this image
    pub const fn header(&self) -> PpmHeader {
        PpmHeader {
            variant:   self.variant,
            width:     self.width,
            height:    self.height,
            max_value: self.max_value
        }
    }

    pub fn samples(&self) -> &[u16] {
        &self.samples
    }

    /// Consume the image returning its samples
    pub fn into_samples(self) -> Vec<u16> {
        self.samples
    }

    /// Invert every sample in place
    ///
    /// Each sample `s` becomes `max_value - s`, dimensions, variant and max
    /// value are left untouched. Applying it twice gives back the original image.
    ///
    /// A max value of 65536 is the one exception. Samples are [`u16`], so no
    /// sample can be 65536 and the ceiling is 65535, `s` becomes `65535 - s`.
    pub fn invert(&mut self) {
        let ceiling = u16::try_from(self.max_value).unwrap_or(u16::MAX);
        invert(&mut self.samples, ceiling);
    }
}
