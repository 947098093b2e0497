/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Convert an image to grayscale
//!
//! Luma is calculated as
//! ```text
//! Y = 0.2989 * R + 0.5870 * G + 0.1140 * B
//! ```
//! carried out in fixed point.
//!
//! The output always contains a single channel, alpha channels are dropped.
use log::trace;

use crate::buffer::ImageBuffer;

/// Convert interleaved RGB(A) pixels into luma
///
/// `stride` is the number of samples per pixel, only the first three are read
#[allow(clippy::cast_possible_truncation)]
pub fn rgb_to_grayscale(pixels: &[u8], stride: usize, out: &mut [u8]) {
    let r_coef = (0.2989 * 32768.0 + 0.5) as u32;
    let g_coef = (0.5870 * 32768.0 + 0.5) as u32;
    let b_coef = (0.1140 * 32768.0 + 0.5) as u32;

    for (pixel, g_out) in pixels.chunks_exact(stride).zip(out.iter_mut()) {
        // Multiply input elements by 64 for improved accuracy.
        let r = u32::from(pixel[0]) * 64;
        let g = u32::from(pixel[1]) * 64;
        let b = u32::from(pixel[2]) * 64;

        let g1 = ((r * r_coef) + (1 << 14)) >> 15;
        let g2 = ((g * g_coef) + (1 << 14)) >> 15;
        let g3 = ((b * b_coef) + (1 << 14)) >> 15;

        let g = (g1 + g2 + g3 + 32) / 64;

        *g_out = g.min(255) as u8;
    }
}

/// Return a single channel luma version of `image`
///
/// - Luma images are copied
/// - Luma + alpha images keep the luma channel
/// - RGB and RGBA images are converted with [`rgb_to_grayscale`]
pub fn grayscale(image: &ImageBuffer) -> ImageBuffer {
    let (width, height) = image.dimensions();
    let channels = image.channels();

    trace!("Converting {channels} channel image to grayscale");

    let mut out = vec![0_u8; width * height];

    if channels >= 3 {
        rgb_to_grayscale(image.data(), channels, &mut out);
    } else {
        for (pixel, g_out) in image.data().chunks_exact(channels).zip(out.iter_mut()) {
            *g_out = pixel[0];
        }
    }
    ImageBuffer::from_raw_parts(width, height, 1, out)
}

#[cfg(test)]
mod tests {
    use nanorand::Rng;

    use crate::buffer::ImageBuffer;
    use crate::grayscale::grayscale;

    #[test]
    fn output_is_single_channel() {
        let mut rng = nanorand::WyRand::new_seed(0x5eed);

        for channels in 1..=4 {
            let width = rng.generate_range(1_usize..=64);
            let height = rng.generate_range(1_usize..=64);
            let mut data = vec![0_u8; width * height * channels];
            rng.fill(&mut data);

            let image = ImageBuffer::new(width, height, channels, data).unwrap();
            let gray = grayscale(&image);

            assert_eq!(gray.channels(), 1);
            assert_eq!(gray.dimensions(), (width, height));
        }
    }

    #[test]
    fn extremes_map_to_extremes() {
        let white = ImageBuffer::fill(255, 8, 8, 3).unwrap();
        let black = ImageBuffer::fill(0, 8, 8, 4).unwrap();

        assert!(grayscale(&white).data().iter().all(|x| *x == 255));
        assert!(grayscale(&black).data().iter().all(|x| *x == 0));
    }

    #[test]
    fn green_is_brighter_than_blue() {
        let image = ImageBuffer::from_fn(2, 1, 3, |x, _, pix| {
            if x == 0 {
                pix[1] = 200;
            } else {
                pix[2] = 200;
            }
        })
        .unwrap();
        let gray = grayscale(&image);

        // 0.587 * 200 and 0.114 * 200
        assert!((i32::from(gray.data()[0]) - 117).abs() <= 1);
        assert!((i32::from(gray.data()[1]) - 23).abs() <= 1);
    }

    #[test]
    fn luma_alpha_keeps_luma() {
        let image = ImageBuffer::from_fn(4, 4, 2, |x, y, pix| {
            pix[0] = (x + y * 4) as u8;
            pix[1] = 255;
        })
        .unwrap();
        let gray = grayscale(&image);
        assert_eq!(gray.data(), (0..16).collect::<Vec<u8>>().as_slice());
    }
}
