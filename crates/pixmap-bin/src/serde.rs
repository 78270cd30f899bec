/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use pixmap_ppm::PpmHeader;
use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};

pub struct Metadata {
    file:   String,
    header: PpmHeader
}

impl Metadata {
    pub fn new(file: String, header: PpmHeader) -> Metadata {
        Metadata { file, header }
    }
}

impl Serialize for Metadata {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer
    {
        let mut state = serializer.serialize_struct("Metadata", 4)?;

        state.serialize_field("file", &self.file)?;
        state.serialize_field("header", &self.header)?;
        state.serialize_field("bit_depth", &self.header.bit_depth())?;
        state.serialize_field("sample_count", &self.header.sample_count())?;

        state.end()
    }
}
