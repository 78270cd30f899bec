/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Color inversion

///Invert samples
///
/// The formula for inverting a sample
///  is `sample = max_value - sample`
///
/// Samples above `max_value` saturate to zero, they cannot occur in
/// a valid [`PpmImage`](crate::PpmImage).
pub fn invert(in_image: &mut [u16], max_value: u16) {
    in_image
        .iter_mut()
        .for_each(|x| *x = max_value.saturating_sub(*x));
}

#[cfg(test)]
mod tests {
    use crate::invert::invert;

    #[test]
    fn test_invert_8_bit_range() {
        let mut samples = [255, 0, 0, 0, 255, 0];
        invert(&mut samples, 255);
        assert_eq!(samples, [0, 255, 255, 255, 0, 255]);
    }

    #[test]
    fn test_invert_zero_max() {
        let mut samples = [0; 6];
        invert(&mut samples, 0);
        assert_eq!(samples, [0; 6]);
    }
}
