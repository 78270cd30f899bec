/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

#![allow(unused_imports, unused)]

use std::path::{Path, PathBuf};

use pixmap_ppm::{PpmDecodeErrors, PpmVariant};
use serde::Deserialize;

mod ppm;

#[derive(Copy, Clone, Debug, Deserialize, Eq, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum JsonVariant {
    Ascii,
    Binary
}

impl JsonVariant {
    pub fn to_variant(self) -> PpmVariant {
        match self {
            Self::Ascii => PpmVariant::Ascii,
            Self::Binary => PpmVariant::Binary
        }
    }
}

/// Names of the decode error variants a manifest entry may expect
#[derive(Copy, Clone, Debug, Deserialize, Eq, PartialEq)]
pub enum JsonError {
    InvalidMagic,
    InvalidWidth,
    InvalidHeight,
    InvalidMaxValue,
    TruncatedPayload,
    SampleOutOfRange
}

impl JsonError {
    pub fn matches(self, err: &PpmDecodeErrors) -> bool {
        matches!(
            (self, err),
            (Self::InvalidMagic, PpmDecodeErrors::InvalidMagic(_))
                | (Self::InvalidWidth, PpmDecodeErrors::InvalidWidth(_))
                | (Self::InvalidHeight, PpmDecodeErrors::InvalidHeight(_))
                | (Self::InvalidMaxValue, PpmDecodeErrors::InvalidMaxValue(_))
                | (Self::TruncatedPayload, PpmDecodeErrors::TruncatedPayload { .. })
                | (Self::SampleOutOfRange, PpmDecodeErrors::SampleOutOfRange { .. })
        )
    }
}

#[derive(Clone, Deserialize, Debug)]
pub struct TestEntry {
    pub name:          String,
    pub variant:       Option<JsonVariant>,
    pub width:         Option<usize>,
    pub height:        Option<usize>,
    pub max_value:     Option<u32>,
    pub sample_sum:    Option<u64>,
    #[serde(default)]
    pub first_samples: Vec<u16>,
    pub error:         Option<JsonError>,
    pub comment:       Option<String>
}

pub fn sample_path() -> PathBuf {
    let path = Path::new(env!("CARGO_MANIFEST_DIR"));
    // get parent path
    path.parent().unwrap().to_owned()
}

fn sample_sum(samples: &[u16]) -> u64 {
    samples.iter().map(|x| u64::from(*x)).sum()
}
