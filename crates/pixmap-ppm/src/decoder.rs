/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use alloc::string::String;
use alloc::vec::Vec;
use alloc::{format, vec};

use pixmap_core::bit_depth::BitDepth;
use pixmap_core::bytestream::{ByteIoError, ByteReader, ByteReaderTrait};
use pixmap_core::log::{info, trace};
use pixmap_core::options::DecoderOptions;

use crate::errors::PpmDecodeErrors;
use crate::image::{PpmHeader, PpmImage, PpmVariant};
use crate::PPM_CHANNELS;

/// An instance of a PPM decoder
///
/// The decoder can decode P3 (ascii) and P6 (binary) formats.
///
/// It reads strictly forward, never seeking, so it can decode from pipes.
/// The header is validated field by field before any memory for samples is
/// allocated.
///
/// A decoder yields at most one image, calling [`decode`](Self::decode)
/// again returns [`PpmDecodeErrors::AlreadyDecoded`].
pub struct PpmDecoder<T: ByteReaderTrait> {
    width:           usize,
    height:          usize,
    max_value:       u32,
    variant:         PpmVariant,
    decoded_headers: bool,
    decoded_payload: bool,
    reader:          ByteReader<T>,
    options:         DecoderOptions
}

/// Reasons a numeric token could not be read
enum TokenError {
    /// Stream ended before a token started
    Missing,
    /// A byte that is neither a digit nor whitespace
    Malformed(u8),
    /// The number doesn't fit in a u64
    Overflow,
    Io(ByteIoError)
}

impl From<ByteIoError> for TokenError {
    fn from(value: ByteIoError) -> Self {
        TokenError::Io(value)
    }
}

impl TokenError {
    fn into_header_error(self, wrap: fn(String) -> PpmDecodeErrors) -> PpmDecodeErrors {
        match self {
            TokenError::Missing => {
                wrap(String::from("expected a number but reached end of stream"))
            }
            TokenError::Malformed(byte) => wrap(format!(
                "expected a digit but found `{}`",
                byte.escape_ascii()
            )),
            TokenError::Overflow => wrap(String::from("number is too large")),
            TokenError::Io(err) => PpmDecodeErrors::IoErrors(err)
        }
    }
}

impl<T: ByteReaderTrait> PpmDecoder<T> {
    /// Create a new ppm decoder with default options
    ///
    /// # Arguments
    /// - data: PPM encoded pixels
    ///
    /// # Example
    /// ```
    /// use pixmap_core::bytestream::ByteCursor;
    /// use pixmap_ppm::PpmDecoder;
    /// let mut decoder = PpmDecoder::new(ByteCursor::new(b"NOT VALID PPM"));
    ///
    /// assert!(decoder.decode().is_err());
    /// ```
    pub fn new(data: T) -> PpmDecoder<T> {
        PpmDecoder::new_with_options(data, DecoderOptions::default())
    }
    /// Create a new PPM decoder with the specified options
    ///
    /// Options can only make the decoder stricter, limits above
    /// 1920x1080 and a max value of 65536 are never accepted.
    ///
    /// # Arguments
    /// - data: PPM encoded data.
    /// - options: Modified options for the decoder
    ///
    /// # Example
    /// ```
    /// use pixmap_core::bytestream::ByteCursor;
    /// use pixmap_core::options::DecoderOptions;
    /// use pixmap_ppm::{PpmDecodeErrors, PpmDecoder};
    ///
    /// let options = DecoderOptions::default().set_max_width(1);
    /// let mut decoder = PpmDecoder::new_with_options(ByteCursor::new(b"P3 2 1 255"), options);
    ///
    /// assert!(matches!(decoder.decode(), Err(PpmDecodeErrors::InvalidWidth(_))));
    /// ```
    pub fn new_with_options(data: T, options: DecoderOptions) -> PpmDecoder<T> {
        PpmDecoder {
            width: 0,
            height: 0,
            max_value: 0,
            variant: PpmVariant::Ascii,
            decoded_headers: false,
            decoded_payload: false,
            reader: ByteReader::new(data),
            options
        }
    }

    /// Read PPM headers and store them in internal state
    ///
    /// Fields are read in file order, magic, width, height and max value,
    /// and the first one that fails determines the error.
    ///
    /// Calling this more than once is a no-op.
    pub fn decode_headers(&mut self) -> Result<(), PpmDecodeErrors> {
        if self.decoded_headers {
            return Ok(());
        }
        trace!("Reading headers from {}", self.reader.name());

        let variant = self.read_magic()?;
        trace!("Variant: {}", variant);

        let width = read_integer(&mut self.reader)
            .map_err(|e| e.into_header_error(PpmDecodeErrors::InvalidWidth))?;

        if width > self.options.max_width() as u64 {
            let msg = format!(
                "width {} greater than max width {}",
                width,
                self.options.max_width()
            );
            return Err(PpmDecodeErrors::InvalidWidth(msg));
        }

        let height = read_integer(&mut self.reader)
            .map_err(|e| e.into_header_error(PpmDecodeErrors::InvalidHeight))?;

        if height > self.options.max_height() as u64 {
            let msg = format!(
                "height {} greater than max height {}",
                height,
                self.options.max_height()
            );
            return Err(PpmDecodeErrors::InvalidHeight(msg));
        }
        trace!("Width: {}, height: {}", width, height);

        let max_value = read_integer(&mut self.reader)
            .map_err(|e| e.into_header_error(PpmDecodeErrors::InvalidMaxValue))?;

        if max_value > u64::from(self.options.max_value()) {
            let msg = format!(
                "max value {} greater than {}",
                max_value,
                self.options.max_value()
            );
            return Err(PpmDecodeErrors::InvalidMaxValue(msg));
        }
        trace!("Max value: {}", max_value);

        // all three were bounded above, the casts can't truncate
        self.variant = variant;
        self.width = width as usize;
        self.height = height as usize;
        self.max_value = max_value as u32;

        info!("Bit Depth: {:?}", self.bit_depth_inner());
        self.decoded_headers = true;

        Ok(())
    }

    fn read_magic(&mut self) -> Result<PpmVariant, PpmDecodeErrors> {
        skip_spaces(&mut self.reader)?;

        let mut magic = [0_u8; 2];
        let mut length = 0;

        while let Some(byte) = self.reader.peek_u8()? {
            if is_ppm_whitespace(byte) {
                break;
            }
            self.reader.read_u8()?;

            if length == magic.len() {
                // too long, no need to read the rest of it
                length += 1;
                break;
            }
            magic[length] = byte;
            length += 1;
        }
        if length == 0 {
            return Err(PpmDecodeErrors::InvalidMagic(String::from(
                "expected P3 or P6 but reached end of stream"
            )));
        }
        match PpmVariant::from_magic(&magic[..length.min(magic.len())]) {
            Some(variant) if length == magic.len() => Ok(variant),
            _ => {
                let mut found = String::from_utf8_lossy(&magic[..length.min(magic.len())])
                    .into_owned();
                if length > magic.len() {
                    found.push_str("...");
                }
                let msg = format!("expected P3 or P6 but found `{found}`");
                Err(PpmDecodeErrors::InvalidMagic(msg))
            }
        }
    }

    const fn bit_depth_inner(&self) -> BitDepth {
        BitDepth::from_max_value(self.max_value)
    }

    /// Return the header fields, or none if headers
    /// are not decoded
    pub const fn header(&self) -> Option<PpmHeader> {
        if self.decoded_headers {
            Some(PpmHeader {
                variant:   self.variant,
                width:     self.width,
                height:    self.height,
                max_value: self.max_value
            })
        } else {
            None
        }
    }

    /// Return the image bit depth or none if headers
    /// are not decoded
    ///
    /// This is [`BitDepth::Eight`] for a max value up to 255 and
    /// [`BitDepth::Sixteen`] above it
    pub const fn bit_depth(&self) -> Option<BitDepth> {
        if self.decoded_headers {
            Some(self.bit_depth_inner())
        } else {
            None
        }
    }

    /// Return the payload encoding or none if
    /// headers aren't decoded
    pub const fn variant(&self) -> Option<PpmVariant> {
        if self.decoded_headers {
            Some(self.variant)
        } else {
            None
        }
    }

    /// Return image dimensions or none if headers aren't decoded
    pub const fn dimensions(&self) -> Option<(usize, usize)> {
        if self.decoded_headers {
            Some((self.width, self.height))
        } else {
            None
        }
    }

    /// Return the declared max value or none if headers aren't decoded
    pub const fn max_value(&self) -> Option<u32> {
        if self.decoded_headers {
            Some(self.max_value)
        } else {
            None
        }
    }

    /// Return the number of samples the image will hold
    /// or none if headers aren't decoded
    pub const fn output_buffer_size(&self) -> Option<usize> {
        if self.decoded_headers {
            Some(self.width * self.height * PPM_CHANNELS)
        } else {
            None
        }
    }

    /// Decode a ppm encoded image
    ///
    /// Headers are decoded first if that was not done already.
    /// Bytes following the last sample are not read.
    ///
    /// The payload is read once, a second call fails with
    /// [`PpmDecodeErrors::AlreadyDecoded`] even if the first one failed.
    pub fn decode(&mut self) -> Result<PpmImage, PpmDecodeErrors> {
        if self.decoded_payload {
            return Err(PpmDecodeErrors::AlreadyDecoded);
        }
        self.decoded_payload = true;
        self.decode_headers()?;

        let expected = self.width * self.height * PPM_CHANNELS;

        let samples = match self.variant {
            PpmVariant::Ascii => self.decode_ascii_samples(expected)?,
            PpmVariant::Binary => self.decode_binary_samples(expected)?
        };

        Ok(PpmImage::from_parts_unchecked(
            self.variant,
            self.width,
            self.height,
            self.max_value,
            samples
        ))
    }

    fn check_sample(&self, index: usize, value: u64) -> Result<u16, PpmDecodeErrors> {
        if value > u64::from(self.max_value) {
            return Err(PpmDecodeErrors::SampleOutOfRange {
                index,
                value: u32::try_from(value).unwrap_or(u32::MAX),
                max_value: self.max_value
            });
        }
        // max value is at most 65536, so value fits a u32 here
        u16::try_from(value).map_err(|_| PpmDecodeErrors::SampleTooWide {
            index,
            value: value as u32
        })
    }

    fn decode_ascii_samples(&mut self, expected: usize) -> Result<Vec<u16>, PpmDecodeErrors> {
        let mut samples = Vec::with_capacity(expected);

        for index in 0..expected {
            match read_integer(&mut self.reader) {
                Ok(value) => samples.push(self.check_sample(index, value)?),
                Err(TokenError::Overflow) => {
                    return Err(PpmDecodeErrors::SampleOutOfRange {
                        index,
                        value: u32::MAX,
                        max_value: self.max_value
                    });
                }
                Err(TokenError::Missing | TokenError::Malformed(_)) => {
                    return Err(PpmDecodeErrors::TruncatedPayload {
                        expected,
                        found: index
                    });
                }
                Err(TokenError::Io(err)) => return Err(PpmDecodeErrors::IoErrors(err))
            }
        }
        Ok(samples)
    }

    fn decode_binary_samples(&mut self, expected: usize) -> Result<Vec<u16>, PpmDecodeErrors> {
        // header tokens end at whitespace or eof, this discards exactly
        // the one byte separating the header from the samples
        self.reader.read_u8()?;

        let depth = self.bit_depth_inner();
        let mut raw = vec![0_u8; expected * depth.size_of()];

        let read = self.reader.read_fill(&mut raw)?;
        let found = read / depth.size_of();

        let mut samples = Vec::with_capacity(found);

        match depth {
            BitDepth::Eight => {
                for (index, byte) in raw[..found].iter().enumerate() {
                    samples.push(self.check_sample(index, u64::from(*byte))?);
                }
            }
            BitDepth::Sixteen => {
                // 16 bit ppm is written in big-endian
                for (index, pair) in raw[..found * 2].chunks_exact(2).enumerate() {
                    let value = u16::from_be_bytes([pair[0], pair[1]]);
                    samples.push(self.check_sample(index, u64::from(value))?);
                }
            }
        }
        if found != expected {
            return Err(PpmDecodeErrors::TruncatedPayload { expected, found });
        }
        Ok(samples)
    }
}

/// Whitespace that separates header tokens and ascii samples
const fn is_ppm_whitespace(byte: u8) -> bool {
    matches!(byte, b' ' | b'\t' | b'\n' | b'\r' | 0x0B | 0x0C)
}

fn skip_spaces<T: ByteReaderTrait>(reader: &mut ByteReader<T>) -> Result<(), ByteIoError> {
    reader.skip_until_false(is_ppm_whitespace)
}

/// Read a whitespace delimited unsigned decimal number
///
/// Leading whitespace is skipped, the delimiter after the
/// number is left in the stream.
fn read_integer<T: ByteReaderTrait>(reader: &mut ByteReader<T>) -> Result<u64, TokenError> {
    skip_spaces(reader)?;

    let mut value = 0_u64;
    let mut digits = 0_usize;

    while let Some(byte) = reader.peek_u8()? {
        if is_ppm_whitespace(byte) {
            break;
        }
        if !byte.is_ascii_digit() {
            return Err(TokenError::Malformed(byte));
        }
        reader.read_u8()?;

        value = value
            .checked_mul(10)
            .and_then(|x| x.checked_add(u64::from(byte - b'0')))
            .ok_or(TokenError::Overflow)?;
        digits += 1;
    }
    if digits == 0 {
        return Err(TokenError::Missing);
    }
    Ok(value)
}
