/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use alloc::format;
use alloc::vec::Vec;

use pixmap_core::bit_depth::BitDepth;
use pixmap_core::bytestream::{ByteWriter, ByteWriterTrait};
use pixmap_core::log::trace;

use crate::errors::PpmEncodeErrors;
use crate::image::{PpmImage, PpmVariant};
use crate::PPM_CHANNELS;

/// A PPM encoder
///
/// Writes an image in the variant it carries, `P3` images are
/// written as ascii, `P6` images as raw bytes.
///
/// # Example
/// ```
/// use pixmap_ppm::{PpmEncoder, PpmImage, PpmVariant};
///
/// let image = PpmImage::new(PpmVariant::Binary, 1, 1, 300, vec![1, 2, 300]).unwrap();
/// let bytes = PpmEncoder::new(&image).encode_to_vec();
///
/// assert_eq!(bytes, b"P6\n1 1\n300\n\x00\x01\x00\x02\x01\x2C");
/// ```
pub struct PpmEncoder<'a> {
    image: &'a PpmImage
}

impl<'a> PpmEncoder<'a> {
    /// Create a new encoder which will encode `image`
    pub fn new(image: &'a PpmImage) -> PpmEncoder<'a> {
        PpmEncoder { image }
    }

    fn header(&self) -> Vec<u8> {
        let image = self.image;

        format!(
            "{}\n{} {}\n{}\n",
            image.variant(),
            image.width(),
            image.height(),
            image.max_value()
        )
        .into_bytes()
    }

    /// Upper bound of the encoded size, used to size output buffers
    fn estimated_size(&self) -> usize {
        let samples = self.image.samples().len();

        let per_sample = match self.image.variant() {
            PpmVariant::Binary => self.image.bit_depth().size_of(),
            // five digits at most plus a separator
            PpmVariant::Ascii => 6
        };
        32 + samples * per_sample
    }

    /// Append the encoded form of one image row to `out`
    fn encode_row(&self, row: &[u16], out: &mut Vec<u8>) {
        match self.image.variant() {
            PpmVariant::Ascii => {
                for (pos, sample) in row.iter().enumerate() {
                    if pos != 0 {
                        out.push(b' ');
                    }
                    push_decimal(*sample, out);
                }
                out.push(b'\n');
            }
            PpmVariant::Binary => match self.image.bit_depth() {
                BitDepth::Eight => {
                    // samples are at most max value, which is at most 255 here
                    out.extend(row.iter().map(|x| *x as u8));
                }
                BitDepth::Sixteen => {
                    out.extend(row.iter().flat_map(|x| x.to_be_bytes()));
                }
            }
        }
    }

    fn rows(&self) -> impl Iterator<Item = &'a [u16]> {
        let image = self.image;
        let row_len = image.width() * PPM_CHANNELS;
        // a zero width image has no samples and no rows
        let samples = if row_len == 0 { &[][..] } else { image.samples() };
        samples.chunks_exact(row_len.max(1))
    }

    /// Encode the image into a newly allocated vector
    ///
    /// This cannot fail, every [`PpmImage`] is valid by construction
    pub fn encode_to_vec(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(self.estimated_size());

        out.extend_from_slice(&self.header());

        for row in self.rows() {
            self.encode_row(row, &mut out);
        }
        out
    }

    /// Encode the image into `sink`
    ///
    /// Rows are encoded one at a time so the full encoded image
    /// is never held in memory.
    ///
    /// # Returns
    /// - `Ok(usize)`: Number of bytes written into the sink
    /// - `Err`: The sink refused the bytes
    pub fn encode<T: ByteWriterTrait>(&self, sink: T) -> Result<usize, PpmEncodeErrors> {
        trace!(
            "Encoding {}x{} image as {} with max value {}",
            self.image.width(),
            self.image.height(),
            self.image.variant(),
            self.image.max_value()
        );
        let mut writer = ByteWriter::new(sink);

        writer.reserve(self.estimated_size())?;
        writer.write_all(&self.header())?;

        let mut row_bytes = Vec::new();

        for row in self.rows() {
            row_bytes.clear();
            self.encode_row(row, &mut row_bytes);
            writer.write_all(&row_bytes)?;
        }
        writer.flush()?;

        Ok(writer.bytes_written())
    }
}

/// Write `value` in decimal without going through the formatter
fn push_decimal(value: u16, out: &mut Vec<u8>) {
    let mut digits = [0_u8; 5];
    let mut start = digits.len();
    let mut value = value;

    loop {
        start -= 1;
        digits[start] = b'0' + (value % 10) as u8;
        value /= 10;

        if value == 0 {
            break;
        }
    }
    out.extend_from_slice(&digits[start..]);
}
