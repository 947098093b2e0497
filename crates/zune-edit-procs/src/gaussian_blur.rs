/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Gaussian blur
//!
//! The 2D gaussian is separable, so the image is filtered with a 1D kernel
//! horizontally then vertically, which is `O(k)` per pixel instead of `O(k^2)`.
//!
//! Borders are mirrored with [`PadMethod::Reflect101`].
//!
//! When no sigma is given it's derived from the kernel size as
//! ```text
//! sigma = 0.3 * ((ksize - 1) * 0.5 - 1) + 0.8
//! ```
use log::trace;

use crate::buffer::ImageBuffer;
use crate::errors::ProcErrors;
use crate::pad::{pad, PadMethod};

/// Sigma used when a caller passes a non positive one
#[allow(clippy::cast_precision_loss)]
pub fn auto_sigma(kernel_size: usize) -> f32 {
    0.3 * ((kernel_size as f32 - 1.0) * 0.5 - 1.0) + 0.8
}

/// Create a normalized 1D gaussian kernel of `kernel_size` taps
#[allow(clippy::cast_precision_loss)]
pub fn gaussian_kernel(kernel_size: usize, sigma: f32) -> Vec<f32> {
    let radius = (kernel_size / 2) as f32;
    let scale = -0.5 / (sigma * sigma);

    let mut weights: Vec<f32> = (0..kernel_size)
        .map(|i| {
            let x = i as f32 - radius;
            (x * x * scale).exp()
        })
        .collect();

    let sum: f32 = weights.iter().sum();
    weights.iter_mut().for_each(|w| *w /= sum);

    weights
}

/// Blur a single channel
///
/// `kernel` must have an odd length
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn gaussian_blur_channel(
    in_channel: &[u8], out_channel: &mut [u8], width: usize, height: usize, kernel: &[f32]
) {
    let radius = kernel.len() / 2;
    let padded = pad(in_channel, width, height, radius, radius, PadMethod::Reflect101);
    let padded_width = width + 2 * radius;
    let padded_height = height + 2 * radius;

    // horizontal pass, keeps the padded rows for the vertical pass
    let mut scratch = vec![0.0_f32; width * padded_height];

    for (in_row, out_row) in padded
        .chunks_exact(padded_width)
        .zip(scratch.chunks_exact_mut(width))
    {
        for (x, out) in out_row.iter_mut().enumerate() {
            *out = in_row[x..x + kernel.len()]
                .iter()
                .zip(kernel)
                .map(|(pix, weight)| f32::from(*pix) * weight)
                .sum();
        }
    }

    // vertical pass
    for (y, out_row) in out_channel.chunks_exact_mut(width).take(height).enumerate() {
        for (x, out) in out_row.iter_mut().enumerate() {
            let sum: f32 = kernel
                .iter()
                .enumerate()
                .map(|(k, weight)| scratch[(y + k) * width + x] * weight)
                .sum();

            *out = sum.round().clamp(0.0, 255.0) as u8;
        }
    }
}

/// Blur every channel of `image` with a `kernel_size x kernel_size` gaussian
///
/// # Arguments
/// - kernel_size: Taps of the kernel in each direction, must be odd
/// - sigma: Standard deviation, values `<= 0` are replaced by [`auto_sigma`]
///
/// # Errors
/// [`ProcErrors::InvalidParameter`] if `kernel_size` is even or zero
pub fn gaussian_blur(
    image: &ImageBuffer, kernel_size: usize, sigma: f32
) -> Result<ImageBuffer, ProcErrors> {
    if kernel_size % 2 == 0 {
        return Err(ProcErrors::InvalidParameter(format!(
            "Gaussian kernel size must be odd, found {kernel_size}"
        )));
    }
    let sigma = if sigma > 0.0 {
        sigma
    } else {
        auto_sigma(kernel_size)
    };
    trace!("Gaussian blur with kernel size {kernel_size} and sigma {sigma}");

    let (width, height) = image.dimensions();
    let kernel = gaussian_kernel(kernel_size, sigma);

    let planes = image
        .to_planes()
        .iter()
        .map(|plane| {
            let mut out = vec![0_u8; width * height];
            gaussian_blur_channel(plane, &mut out, width, height, &kernel);
            out
        })
        .collect::<Vec<Vec<u8>>>();

    Ok(ImageBuffer::from_planes(&planes, width, height))
}
