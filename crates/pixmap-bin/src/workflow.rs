/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::fs::File;
use std::io::{stdin, stdout, BufReader, BufWriter};
use std::path::Path;

use log::{debug, info};
use pixmap_core::bytestream::{ByteReaderTrait, ByteWriterTrait};
use pixmap_core::options::DecoderOptions;
use pixmap_ppm::{PpmDecoder, PpmEncoder, PpmImage};

use crate::cmd_parsers::get_decoder_options;
use crate::cmd_parsers::global_options::CmdOptions;
use crate::errors::BinErrors;

/// Decode, optionally invert and encode one image
pub(crate) fn create_and_exec_workflow_from_cmd(cmd_opts: &CmdOptions) -> Result<(), BinErrors> {
    info!("Creating workflow from input");

    if let (Some(input), Some(output)) = (&cmd_opts.input, &cmd_opts.output) {
        verify_file_paths(input, output)?;
    }
    let options = get_decoder_options(cmd_opts);

    let mut image = match &cmd_opts.input {
        Some(path) => {
            debug!("Reading image from {:?}", path);
            decode_image(BufReader::new(File::open(path)?), options)?
        }
        None => {
            debug!("Reading image from stdin");
            decode_image(stdin().lock(), options)?
        }
    };

    if cmd_opts.invert {
        debug!("Inverting image");
        image.invert();
    }

    // the output is only created once decoding succeeded
    let written = match &cmd_opts.output {
        Some(path) => {
            debug!("Writing image to {:?}", path);
            encode_image(&image, BufWriter::new(File::create(path)?))?
        }
        None => {
            debug!("Writing image to stdout");
            encode_image(&image, stdout().lock())?
        }
    };
    info!("Wrote {} bytes", written);

    Ok(())
}

pub(crate) fn decode_image<T: ByteReaderTrait>(
    source: T, options: DecoderOptions
) -> Result<PpmImage, BinErrors> {
    let mut decoder = PpmDecoder::new_with_options(source, options);
    let image = decoder.decode()?;

    let (width, height) = image.dimensions();
    info!(
        "Decoded {} image of {}x{} with max value {}",
        image.variant(),
        width,
        height,
        image.max_value()
    );
    Ok(image)
}

pub(crate) fn encode_image<T: ByteWriterTrait>(
    image: &PpmImage, sink: T
) -> Result<usize, BinErrors> {
    Ok(PpmEncoder::new(image).encode(sink)?)
}

fn verify_file_paths(input: &Path, output: &Path) -> Result<(), BinErrors> {
    if input == output {
        return Err(BinErrors::GenericString(format!(
            "Cannot use {:?} as both input and output",
            input
        )));
    }
    if !input.is_file() {
        return Err(BinErrors::GenericString(format!(
            "Path {:?} is not a file",
            input
        )));
    }
    Ok(())
}
