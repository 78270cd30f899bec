/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::fs::{read, File};
use std::io::BufReader;
use std::path::{Path, PathBuf};

use pixmap_core::bytestream::ByteCursor;
use pixmap_core::options::DecoderOptions;
use pixmap_ppm::{PpmDecoder, PpmEncoder, PpmImage};

use crate::{sample_path, sample_sum, TestEntry};

pub fn ppm_path() -> PathBuf {
    sample_path().join("test-images/ppm")
}

fn read_entries() -> Vec<TestEntry> {
    let file = Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/ppm.json");

    let json_file = read(file).unwrap();

    serde_json::from_slice(&json_file).unwrap()
}

/// Compare a decoded image against what the manifest expects,
/// returning a description of the first difference
fn check_image(entry: &TestEntry, image: &PpmImage) -> Result<(), String> {
    if let Some(err) = entry.error {
        return Err(format!("Expected {:?} but the image decoded", err));
    }
    let (width, height) = image.dimensions();

    if Some(image.variant()) != entry.variant.map(|x| x.to_variant()) {
        return Err(format!("Variant mismatch, found {}", image.variant()));
    }
    if Some(width) != entry.width || Some(height) != entry.height {
        return Err(format!("Dimension mismatch, found {width}x{height}"));
    }
    if Some(image.max_value()) != entry.max_value {
        return Err(format!("Max value mismatch, found {}", image.max_value()));
    }
    let sum = sample_sum(image.samples());

    if Some(sum) != entry.sample_sum {
        return Err(format!("Sample sum mismatch, found {sum}"));
    }
    if !image.samples().starts_with(&entry.first_samples) {
        return Err(format!(
            "First samples mismatch, found {:?}",
            &image.samples()[..image.samples().len().min(6)]
        ));
    }
    Ok(())
}

#[test]
#[allow(clippy::uninlined_format_args)]
fn test_ppm() {
    let paths = read_entries();

    let default_path = ppm_path();
    let mut error = false;
    let mut files = Vec::new();

    for path in &paths {
        let file_name = default_path.join(&path.name);

        // load file
        let file_contents = ByteCursor::new(read(&file_name).unwrap());

        let options = DecoderOptions::default();

        let mut decoder = PpmDecoder::new_with_options(file_contents, options);

        let result = match decoder.decode() {
            Ok(image) => check_image(path, &image),
            Err(err) => match path.error {
                Some(expected) if expected.matches(&err) => Ok(()),
                _ => Err(format!("Unexpected error {err}"))
            }
        };

        if let Err(reason) = result {
            error = true;
            files.push(path.to_owned());
            // report error
            let err = format!(
                "Mismatch for file {:?}\n{}\nConfig:{:#?}",
                file_name, reason, path
            );
            eprintln!("{}\n", err);
        }
    }
    if error {
        panic!("Errors found during test decoding\n {:#?}", files);
    }
}

/// Decoding through a buffered file reader gives the same image
/// as decoding from memory
#[test]
fn test_ppm_from_file_reader() {
    let default_path = ppm_path();

    for path in read_entries().iter().filter(|x| x.error.is_none()) {
        let file_name = default_path.join(&path.name);

        let from_memory = PpmDecoder::new(ByteCursor::new(read(&file_name).unwrap()))
            .decode()
            .unwrap();

        let reader = BufReader::new(File::open(&file_name).unwrap());
        let from_file = PpmDecoder::new(reader).decode().unwrap();

        assert_eq!(from_memory, from_file, "{:?}", file_name);
    }
}

/// Every valid file survives invert, encode, decode, invert
#[test]
fn test_ppm_reencode() {
    let default_path = ppm_path();

    for path in read_entries().iter().filter(|x| x.error.is_none()) {
        let file_name = default_path.join(&path.name);

        let original = PpmDecoder::new(ByteCursor::new(read(&file_name).unwrap()))
            .decode()
            .unwrap();

        let mut inverted = original.clone();
        inverted.invert();

        let bytes = PpmEncoder::new(&inverted).encode_to_vec();
        let mut decoded = PpmDecoder::new(ByteCursor::new(bytes)).decode().unwrap();

        assert_eq!(decoded, inverted, "{:?}", file_name);

        decoded.invert();
        assert_eq!(decoded, original, "{:?}", file_name);
    }
}
