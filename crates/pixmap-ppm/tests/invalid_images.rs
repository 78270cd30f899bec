/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use pixmap_core::bytestream::ByteCursor;
use pixmap_core::options::DecoderOptions;
use pixmap_ppm::{PpmDecodeErrors, PpmDecoder};

fn decode_err(data: &[u8]) -> PpmDecodeErrors {
    PpmDecoder::new(ByteCursor::new(data))
        .decode()
        .unwrap_err()
}

#[test]
fn bad_magic_wins_over_short_payload() {
    let err = decode_err(b"P5\n2 2\n255\n1");
    assert!(matches!(err, PpmDecodeErrors::InvalidMagic(_)));
}

#[test]
fn bad_width_wins_over_bad_height() {
    let err = decode_err(b"P3\n2000 2000\n255\n");
    assert!(matches!(err, PpmDecodeErrors::InvalidWidth(_)));
}

#[test]
fn missing_fields() {
    assert!(matches!(decode_err(b""), PpmDecodeErrors::InvalidMagic(_)));
    assert!(matches!(decode_err(b"P3"), PpmDecodeErrors::InvalidWidth(_)));
    assert!(matches!(decode_err(b"P3 1"), PpmDecodeErrors::InvalidHeight(_)));
    assert!(matches!(
        decode_err(b"P3 1 1\n"),
        PpmDecodeErrors::InvalidMaxValue(_)
    ));
}

#[test]
fn signed_and_fractional_fields() {
    assert!(matches!(
        decode_err(b"P3 -1 1 255"),
        PpmDecodeErrors::InvalidWidth(_)
    ));
    assert!(matches!(
        decode_err(b"P3 1 1.5 255"),
        PpmDecodeErrors::InvalidHeight(_)
    ));
    assert!(matches!(
        decode_err(b"P3 1 1 0x10"),
        PpmDecodeErrors::InvalidMaxValue(_)
    ));
}

#[test]
fn header_caps() {
    assert!(matches!(
        decode_err(b"P3 1 1081 255"),
        PpmDecodeErrors::InvalidHeight(_)
    ));
    assert!(matches!(
        decode_err(b"P6 1 1 65537"),
        PpmDecodeErrors::InvalidMaxValue(_)
    ));
    assert!(matches!(
        decode_err(b"P6 1 1 99999999999999999999999999"),
        PpmDecodeErrors::InvalidMaxValue(_)
    ));
}

#[test]
fn caps_themselves_are_accepted() {
    let mut decoder = PpmDecoder::new(ByteCursor::new(b"P6 1920 1080 65536\n"));
    decoder.decode_headers().unwrap();

    assert_eq!(decoder.dimensions(), Some((1920, 1080)));
    assert_eq!(decoder.max_value(), Some(65536));
}

#[test]
fn options_lower_the_caps() {
    let options = DecoderOptions::default()
        .set_max_width(4)
        .set_max_height(4)
        .set_max_value(255);

    let decode = |data: &'static [u8]| {
        PpmDecoder::new_with_options(ByteCursor::new(data), options)
            .decode()
            .unwrap_err()
    };

    assert!(matches!(decode(b"P3 5 1 1"), PpmDecodeErrors::InvalidWidth(_)));
    assert!(matches!(decode(b"P3 1 5 1"), PpmDecodeErrors::InvalidHeight(_)));
    assert!(matches!(
        decode(b"P3 1 1 256"),
        PpmDecodeErrors::InvalidMaxValue(_)
    ));
}

#[test]
fn options_cannot_raise_the_caps() {
    let options = DecoderOptions::default().set_max_width(usize::MAX);
    let err = PpmDecoder::new_with_options(ByteCursor::new(b"P3 1921 1 1"), options)
        .decode()
        .unwrap_err();

    assert!(matches!(err, PpmDecodeErrors::InvalidWidth(_)));
}

#[test]
fn ascii_truncated() {
    let err = decode_err(b"P3 2 1 255 1 2 3 4");
    assert!(matches!(
        err,
        PpmDecodeErrors::TruncatedPayload {
            expected: 6,
            found:    4
        }
    ));
}

#[test]
fn binary_eight_bit_truncated() {
    let err = decode_err(b"P6 2 1 255\n\x01\x02\x03");
    assert!(matches!(
        err,
        PpmDecodeErrors::TruncatedPayload {
            expected: 6,
            found:    3
        }
    ));
}

#[test]
fn binary_sixteen_bit_out_of_range() {
    // 0x0101 = 257 > 256
    let err = decode_err(b"P6 1 1 256\n\x01\x00\x01\x01\x00\x00");
    assert!(matches!(
        err,
        PpmDecodeErrors::SampleOutOfRange {
            index:     1,
            value:     257,
            max_value: 256
        }
    ));
}

#[test]
fn error_messages_are_readable() {
    let err = decode_err(b"P7 1 1 1");
    let message = format!("{err}");

    assert!(message.contains("P3 or P6"), "{message}");
    assert!(message.contains("P7"), "{message}");

    let err = decode_err(b"P3 1 1 255 1 2");
    assert_eq!(
        format!("{err}"),
        "Truncated payload, expected 3 samples but found 2"
    );
}
