/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::fmt::{Debug, Display, Formatter};

use pixmap_ppm::{PpmDecodeErrors, PpmEncodeErrors};

/// Everything that can stop the command line tool
pub enum BinErrors {
    DecodeErrors(PpmDecodeErrors),
    EncodeErrors(PpmEncodeErrors),
    IoErrors(std::io::Error),
    GenericString(String)
}

impl Display for BinErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DecodeErrors(err) => write!(f, "{err}"),
            Self::EncodeErrors(err) => write!(f, "{err}"),
            Self::IoErrors(err) => write!(f, "{err}"),
            Self::GenericString(err) => write!(f, "{err}")
        }
    }
}

impl Debug for BinErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "{self}")
    }
}

impl From<PpmDecodeErrors> for BinErrors {
    fn from(value: PpmDecodeErrors) -> Self {
        BinErrors::DecodeErrors(value)
    }
}

impl From<PpmEncodeErrors> for BinErrors {
    fn from(value: PpmEncodeErrors) -> Self {
        BinErrors::EncodeErrors(value)
    }
}

impl From<std::io::Error> for BinErrors {
    fn from(value: std::io::Error) -> Self {
        BinErrors::IoErrors(value)
    }
}

impl From<serde_json::Error> for BinErrors {
    fn from(value: serde_json::Error) -> Self {
        BinErrors::GenericString(value.to_string())
    }
}
