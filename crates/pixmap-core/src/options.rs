/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Decoder options
//!
//! This module exposes a struct for which all implemented
//! decoders get shared options for decoding
//!
//! The limits here exist to bound memory usage, a decoder
//! checks every header field against them before it allocates
//! anything for pixels.

/// Default maximum width, also the largest width any decoder accepts
pub const DEFAULT_MAX_WIDTH: usize = 1920;
/// Default maximum height, also the largest height any decoder accepts
pub const DEFAULT_MAX_HEIGHT: usize = 1080;
/// Default maximum per-channel sample value
pub const DEFAULT_MAX_VALUE: u32 = 65536;

/// Decoder options
///
/// Options are built with the setter chain, e.g
/// ```
/// use pixmap_core::options::DecoderOptions;
/// let options = DecoderOptions::default().set_max_width(640).set_max_height(480);
///
/// assert_eq!(options.max_width(), 640);
/// assert_eq!(options.max_height(), 480);
/// ```
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct DecoderOptions {
    /// Maximum width for which decoders will
    /// not try to decode images larger than
    /// the specified width.
    ///
    /// - Default value: 1920
    max_width:  usize,
    /// Maximum height for which decoders will not
    /// try to decode images larger than the
    /// specified height
    ///
    /// - Default value: 1080
    max_height: usize,
    /// Largest max value a header may declare
    ///
    /// - Default value: 65536
    max_value:  u32
}

impl Default for DecoderOptions {
    fn default() -> Self {
        DecoderOptions {
            max_width:  DEFAULT_MAX_WIDTH,
            max_height: DEFAULT_MAX_HEIGHT,
            max_value:  DEFAULT_MAX_VALUE
        }
    }
}

impl DecoderOptions {
    /// Get maximum width configured for which the decoder
    /// should not try to decode images greater than this width
    pub const fn max_width(&self) -> usize {
        self.max_width
    }

    /// Get maximum height configured for which the decoder should
    /// not try to decode images greater than this height
    pub const fn max_height(&self) -> usize {
        self.max_height
    }

    /// Get the largest max value the decoder accepts in a header
    pub const fn max_value(&self) -> u32 {
        self.max_value
    }

    /// Set maximum width for which the decoder should not try
    /// decoding images greater than that width
    ///
    /// The width can only be lowered, values above
    /// [`DEFAULT_MAX_WIDTH`] are clamped to it.
    ///
    /// # Arguments
    ///
    /// * `width`:  The maximum width allowed
    #[must_use]
    pub fn set_max_width(mut self, width: usize) -> Self {
        self.max_width = width.min(DEFAULT_MAX_WIDTH);
        self
    }

    /// Set maximum height for which the decoder should not try
    /// decoding images greater than that height
    ///
    /// Values above [`DEFAULT_MAX_HEIGHT`] are clamped to it.
    ///
    /// # Arguments
    ///
    /// * `height`: The maximum height allowed
    #[must_use]
    pub fn set_max_height(mut self, height: usize) -> Self {
        self.max_height = height.min(DEFAULT_MAX_HEIGHT);
        self
    }

    /// Set the largest max value a decoder accepts
    ///
    /// Values above [`DEFAULT_MAX_VALUE`] are clamped to it.
    #[must_use]
    pub fn set_max_value(mut self, value: u32) -> Self {
        self.max_value = value.min(DEFAULT_MAX_VALUE);
        self
    }
}
