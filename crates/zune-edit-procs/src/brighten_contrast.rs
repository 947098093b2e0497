/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Linear brightness and contrast adjustment
//!
//! Every sample is transformed as
//! ```text
//! s' = saturate(round(alpha * s + beta))
//! ```
//! where halfway values round to the nearest even integer.
//! `alpha` controls the contrast and `beta` the brightness.
//!
//! Since a sample can only take 256 values, the transform is evaluated once per
//! value into a lookup table and the image is mapped through it.
use log::trace;

use crate::buffer::ImageBuffer;

/// Build the lookup table for a given `alpha` and `beta`
///
/// Values are rounded half to even and saturated to `0..=255`, a `NaN`
/// result maps to zero.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn brighten_contrast_lut(alpha: f64, beta: i32) -> [u8; 256] {
    let mut lut = [0_u8; 256];

    for (value, out) in (0_u8..=255).zip(lut.iter_mut()) {
        let adjusted = (alpha * f64::from(value) + f64::from(beta)).round_ties_even();
        // float to int casts saturate and map NaN to zero
        *out = adjusted.clamp(0.0, 255.0) as u8;
    }
    lut
}

/// Apply `alpha * s + beta` to every sample of every channel
///
/// Expected ranges are `alpha` in `[1.0, 3.0]` and `beta` in `[0, 100]`, but any value
/// is accepted, the output is always saturated.
///
/// # Example
/// ```
/// use zune_edit_procs::brighten_contrast::brighten_contrast;
/// use zune_edit_procs::buffer::ImageBuffer;
///
/// let image = ImageBuffer::fill(100, 10, 10, 3).unwrap();
/// let brighter = brighten_contrast(&image, 1.5, 20);
/// assert!(brighter.data().iter().all(|x| *x == 170));
/// ```
pub fn brighten_contrast(image: &ImageBuffer, alpha: f64, beta: i32) -> ImageBuffer {
    trace!("Adjusting brightness/contrast with alpha={alpha} beta={beta}");

    let lut = brighten_contrast_lut(alpha, beta);
    let data = image.data().iter().map(|x| lut[usize::from(*x)]).collect();

    ImageBuffer::from_raw_parts(image.width(), image.height(), image.channels(), data)
}

#[cfg(test)]
mod tests {
    use nanorand::Rng;

    use crate::brighten_contrast::{brighten_contrast, brighten_contrast_lut};
    use crate::buffer::ImageBuffer;

    fn random_image(width: usize, height: usize, channels: usize) -> ImageBuffer {
        let mut data = vec![0_u8; width * height * channels];
        nanorand::WyRand::new_seed(0xdead).fill(&mut data);
        ImageBuffer::new(width, height, channels, data).unwrap()
    }

    #[test]
    fn identity_transform() {
        for channels in 1..=4 {
            let image = random_image(23, 19, channels);
            assert_eq!(brighten_contrast(&image, 1.0, 0), image);
        }
    }

    #[test]
    fn output_is_saturated() {
        let lut = brighten_contrast_lut(5.0, 300);
        assert!(lut.iter().all(|x| *x == 255));

        let lut = brighten_contrast_lut(-2.0, -10);
        assert!(lut.iter().all(|x| *x == 0));

        let lut = brighten_contrast_lut(f64::NAN, 0);
        assert!(lut.iter().all(|x| *x == 0));
    }

    #[test]
    fn all_channels_are_adjusted() {
        // single channel buffers must not be treated as three channel ones
        let gray = random_image(10, 10, 1);
        let out = brighten_contrast(&gray, 2.0, 10);

        assert_eq!(out.channels(), 1);
        assert_eq!(out.dimensions(), (10, 10));

        for (before, after) in gray.data().iter().zip(out.data()) {
            let expected = (u32::from(*before) * 2 + 10).min(255);
            assert_eq!(u32::from(*after), expected);
        }
    }

    #[test]
    fn rounds_half_to_even() {
        let lut = brighten_contrast_lut(1.5, 0);
        // 4.5, 7.5 and 3.0
        assert_eq!(lut[3], 4);
        assert_eq!(lut[5], 8);
        assert_eq!(lut[2], 3);

        let lut = brighten_contrast_lut(0.5, 0);
        // 0.5, 1.0, 1.5, 2.0, 2.5
        assert_eq!(&lut[1..6], &[0, 1, 2, 2, 2]);
    }
}
