/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Randomized encode and decode tests

use nanorand::{Rng, WyRand};
use pixmap_core::bytestream::ByteCursor;
use pixmap_ppm::{PpmDecodeErrors, PpmDecoder, PpmEncoder, PpmImage, PpmVariant};

fn random_image(rand: &mut WyRand, variant: PpmVariant, max_value: u32) -> PpmImage {
    let width = rand.generate_range(0_usize..=17);
    let height = rand.generate_range(0_usize..=9);
    let ceiling = max_value.min(u32::from(u16::MAX)) as u16;

    let samples = (0..width * height * 3)
        .map(|_| rand.generate_range(0_u16..=ceiling))
        .collect();

    PpmImage::new(variant, width, height, max_value, samples).unwrap()
}

fn round_trip(image: &PpmImage) -> PpmImage {
    let bytes = PpmEncoder::new(image).encode_to_vec();
    PpmDecoder::new(ByteCursor::new(&bytes)).decode().unwrap()
}

#[test]
fn random_round_trips() {
    let mut rand = WyRand::new_seed(0x5050_4d33);

    for variant in [PpmVariant::Ascii, PpmVariant::Binary] {
        for max_value in [0, 1, 9, 10, 254, 255, 256, 1000, 65535, 65536] {
            for _ in 0..8 {
                let image = random_image(&mut rand, variant, max_value);
                assert_eq!(round_trip(&image), image, "{variant} {max_value}");
            }
        }
    }
}

#[test]
fn random_max_values_round_trip() {
    let mut rand = WyRand::new_seed(42);

    for _ in 0..64 {
        let max_value = rand.generate_range(0_u32..=65536);
        let variant = if rand.generate_range(0_u8..2) == 0 {
            PpmVariant::Binary
        } else {
            PpmVariant::Ascii
        };
        let image = random_image(&mut rand, variant, max_value);
        assert_eq!(round_trip(&image), image);
    }
}

#[test]
fn switching_variant_keeps_samples() {
    let mut rand = WyRand::new_seed(7);
    let mut image = random_image(&mut rand, PpmVariant::Ascii, 4095);
    let ascii = round_trip(&image);

    image.set_variant(PpmVariant::Binary);
    let binary = round_trip(&image);

    assert_eq!(ascii.samples(), binary.samples());
    assert_eq!(binary.variant(), PpmVariant::Binary);
}

#[test]
fn invert_is_self_inverse() {
    let mut rand = WyRand::new_seed(1337);

    for max_value in [0, 1, 255, 256, 65535, 65536] {
        let original = random_image(&mut rand, PpmVariant::Binary, max_value);
        let mut image = original.clone();

        image.invert();
        assert!(image
            .samples()
            .iter()
            .all(|x| u32::from(*x) <= image.max_value()));

        image.invert();
        assert_eq!(image, original);
    }
}

#[test]
fn inverted_image_round_trips() {
    let mut rand = WyRand::new_seed(99);
    let mut image = random_image(&mut rand, PpmVariant::Ascii, 300);

    image.invert();
    assert_eq!(round_trip(&image), image);
}

/// `s == max_value` is accepted, `s == max_value + 1` is not
#[test]
fn sample_boundaries() {
    for max_value in [0_u32, 1, 100, 254, 255, 256, 65534, 65535] {
        let ascii = format!("P3 1 1 {max_value} 0 0 {max_value}");
        let image = PpmDecoder::new(ByteCursor::new(ascii.as_bytes()))
            .decode()
            .unwrap();
        assert_eq!(image.samples()[2] as u32, max_value);

        let over = max_value + 1;
        let ascii = format!("P3 1 1 {max_value} 0 {over} 0");
        let err = PpmDecoder::new(ByteCursor::new(ascii.as_bytes()))
            .decode()
            .unwrap_err();
        assert!(
            matches!(err, PpmDecodeErrors::SampleOutOfRange { index: 1, value, .. } if value == over),
            "{err}"
        );
    }
}

/// With a max value of 65536 the largest sample that decodes is 65535,
/// a sample of exactly 65536 is within range but can't be stored
#[test]
fn widest_max_value_boundaries() {
    let image = PpmDecoder::new(ByteCursor::new(b"P3 1 1 65536 0 0 65535"))
        .decode()
        .unwrap();
    assert_eq!(image.max_value(), 65536);
    assert_eq!(image.samples(), &[0, 0, 65535]);

    let err = PpmDecoder::new(ByteCursor::new(b"P3 1 1 65536 0 0 65536"))
        .decode()
        .unwrap_err();
    assert!(
        matches!(
            err,
            PpmDecodeErrors::SampleTooWide {
                index: 2,
                value: 65536
            }
        ),
        "{err}"
    );

    let err = PpmDecoder::new(ByteCursor::new(b"P3 1 1 65536 0 65537 0"))
        .decode()
        .unwrap_err();
    assert!(
        matches!(
            err,
            PpmDecodeErrors::SampleOutOfRange {
                index:     1,
                value:     65537,
                max_value: 65536
            }
        ),
        "{err}"
    );
}

#[test]
fn binary_sample_boundaries() {
    // one byte samples
    let image = PpmDecoder::new(ByteCursor::new(b"P6 1 1 200\n\x00\x00\xC8"))
        .decode()
        .unwrap();
    assert_eq!(image.samples(), &[0, 0, 200]);

    let err = PpmDecoder::new(ByteCursor::new(b"P6 1 1 200\n\x00\x00\xC9"))
        .decode()
        .unwrap_err();
    assert!(matches!(
        err,
        PpmDecodeErrors::SampleOutOfRange { index: 2, value: 201, .. }
    ));

    // two byte samples
    let image = PpmDecoder::new(ByteCursor::new(b"P6 1 1 1000\n\x03\xE8\x00\x00\x00\x00"))
        .decode()
        .unwrap();
    assert_eq!(image.samples(), &[1000, 0, 0]);

    let err = PpmDecoder::new(ByteCursor::new(b"P6 1 1 1000\n\x03\xE9\x00\x00\x00\x00"))
        .decode()
        .unwrap_err();
    assert!(matches!(
        err,
        PpmDecodeErrors::SampleOutOfRange { index: 0, value: 1001, .. }
    ));
}

#[test]
fn binary_sample_width_follows_max_value() {
    let eight = PpmImage::new(PpmVariant::Binary, 2, 2, 255, vec![255; 12]).unwrap();
    let sixteen = PpmImage::new(PpmVariant::Binary, 2, 2, 256, vec![255; 12]).unwrap();

    let header_len = "P6\n2 2\n255\n".len();

    assert_eq!(PpmEncoder::new(&eight).encode_to_vec().len(), header_len + 12);
    assert_eq!(
        PpmEncoder::new(&sixteen).encode_to_vec().len(),
        header_len + 24
    );
    assert_eq!(round_trip(&eight), eight);
    assert_eq!(round_trip(&sixteen), sixteen);
}
