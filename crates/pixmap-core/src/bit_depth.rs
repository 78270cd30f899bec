/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Image bit depth, information and manipulations

/// The image bit depth.
///
/// Samples are always stored in a [`u16`], the bit depth
/// tells us how many bytes a single sample occupies when
/// it is serialized in binary form.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Default)]
pub enum BitDepth {
    /// Eight bit depth.
    ///
    /// Each sample fits in a single byte, i.e. the maximum
    /// sample value is at most 255.
    #[default]
    Eight,
    /// Sixteen bit depth
    ///
    /// Each sample occupies two bytes, serialized as big endian.
    Sixteen
}

impl BitDepth {
    /// Select the bit depth needed to represent samples whose
    /// largest value is `max_value`
    ///
    /// The choice depends only on the declared maximum, never on
    /// the values actually present in an image.
    ///
    /// # Example
    /// ```
    /// use pixmap_core::bit_depth::BitDepth;
    /// assert_eq!(BitDepth::from_max_value(255), BitDepth::Eight);
    /// assert_eq!(BitDepth::from_max_value(256), BitDepth::Sixteen);
    /// ```
    pub const fn from_max_value(max_value: u32) -> BitDepth {
        if max_value > 255 {
            BitDepth::Sixteen
        } else {
            BitDepth::Eight
        }
    }

    /// Get the number of bytes needed to store a single sample
    /// of this bit depth
    ///
    /// ```
    /// use pixmap_core::bit_depth::BitDepth;
    /// assert_eq!(BitDepth::Eight.size_of(), 1);
    /// assert_eq!(BitDepth::Sixteen.size_of(), 2);
    /// ```
    pub const fn size_of(self) -> usize {
        match self {
            Self::Eight => 1,
            Self::Sixteen => 2
        }
    }
}
