/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::fs::File;
use std::io::{stdin, BufReader};

use pixmap_core::bytestream::ByteReaderTrait;
use pixmap_core::options::DecoderOptions;
use pixmap_ppm::{PpmDecoder, PpmHeader};

use crate::cmd_parsers::get_decoder_options;
use crate::cmd_parsers::global_options::CmdOptions;
use crate::errors::BinErrors;
use crate::serde::Metadata;

/// Read image headers, and print them as json to standard output.
pub fn probe_input_file(cmd_opts: &CmdOptions) -> Result<(), BinErrors> {
    let options = get_decoder_options(cmd_opts);

    let (name, header) = match &cmd_opts.input {
        Some(path) => {
            let file = BufReader::new(File::open(path)?);
            (path.to_string_lossy().into_owned(), read_header(file, options)?)
        }
        None => (String::from("-"), read_header(stdin().lock(), options)?)
    };
    let metadata = Metadata::new(name, header);

    println!("{}", serde_json::to_string_pretty(&metadata)?);

    Ok(())
}

fn read_header<T: ByteReaderTrait>(
    source: T, options: DecoderOptions
) -> Result<PpmHeader, BinErrors> {
    let mut decoder = PpmDecoder::new_with_options(source, options);
    decoder.decode_headers()?;

    decoder
        .header()
        .ok_or_else(|| BinErrors::GenericString(String::from("Headers were not decoded")))
}
