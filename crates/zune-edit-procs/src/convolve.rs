/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! 3x3 convolution on images
//!
//! Every channel is convolved on its own, border pixels are created
//! with [`PadMethod::Replicate`].
//!
//! The intermediate calculations are carried in `f32`, results are rounded
//! and saturated to `0..=255`.
use log::trace;

use crate::buffer::ImageBuffer;
use crate::pad::{pad, PadMethod};

/// Kernel used by the sharpen filter
#[rustfmt::skip]
pub const SHARPEN_KERNEL: [f32; 9] = [
     0.0, -1.0,  0.0,
    -1.0,  5.0, -1.0,
     0.0, -1.0,  0.0
];

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn convolve_3x3_inner(in_array: &[u8; 9], weights: &[f32; 9], scale: f32) -> u8 {
    let sum = in_array
        .iter()
        .zip(weights)
        .map(|(x, weight)| f32::from(*x) * weight)
        .sum::<f32>()
        * scale;

    sum.round().clamp(0.0, 255.0) as u8
}

/// Convolve a single channel with a 3x3 matrix
///
/// # Arguments
/// - in_channel: Input pixels, `width*height` long
/// - out_channel: Output pixels, `width*height` long
/// - weights: Row major 3x3 kernel
/// - scale: Multiplied with the weighted sum before saturating
pub fn convolve_3x3(
    in_channel: &[u8], out_channel: &mut [u8], width: usize, height: usize, weights: &[f32; 9],
    scale: f32
) {
    let padded_input = pad(in_channel, width, height, 1, 1, PadMethod::Replicate);
    let padded_width = width + 2;

    for (y, out_row) in out_channel.chunks_exact_mut(width).take(height).enumerate() {
        for (x, out) in out_row.iter_mut().enumerate() {
            let mut neighbourhood = [0_u8; 9];

            for (row, window) in neighbourhood.chunks_exact_mut(3).enumerate() {
                let start = (y + row) * padded_width + x;
                window.copy_from_slice(&padded_input[start..start + 3]);
            }
            *out = convolve_3x3_inner(&neighbourhood, weights, scale);
        }
    }
}

/// Convolve every channel of `image` with a 3x3 kernel
pub fn convolve(image: &ImageBuffer, weights: &[f32; 9]) -> ImageBuffer {
    let (width, height) = image.dimensions();

    trace!("Running 3x3 convolution with weights {weights:?}");

    let planes = image
        .to_planes()
        .iter()
        .map(|plane| {
            let mut out = vec![0_u8; width * height];
            convolve_3x3(plane, &mut out, width, height, weights, 1.0);
            out
        })
        .collect::<Vec<Vec<u8>>>();

    ImageBuffer::from_planes(&planes, width, height)
}

/// Sharpen an image with [`SHARPEN_KERNEL`]
pub fn sharpen(image: &ImageBuffer) -> ImageBuffer {
    convolve(image, &SHARPEN_KERNEL)
}
