/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use nanorand::{Rng, WyRand};
use pixmap_ppm::{PpmImage, PpmVariant, PPM_MAX_HEIGHT, PPM_MAX_WIDTH};

/// Create a noisy image of the largest allowed size
///
/// Noise keeps ascii samples at their widest, which is the
/// slow path for the ascii codec.
pub fn synthetic_image(variant: PpmVariant, max_value: u16) -> PpmImage {
    let mut rand = WyRand::new_seed(0xCAFE);

    let samples = (0..PPM_MAX_WIDTH * PPM_MAX_HEIGHT * 3)
        .map(|_| rand.generate_range(0..=max_value))
        .collect();

    PpmImage::new(
        variant,
        PPM_MAX_WIDTH,
        PPM_MAX_HEIGHT,
        u32::from(max_value),
        samples
    )
    .unwrap()
}
