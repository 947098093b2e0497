/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

/// Source coordinate and weight of the next sample for every output coordinate
///
/// Pixel centres are aligned, i.e output pixel `i` samples the source at
/// `(i + 0.5) * ratio - 0.5`, clamped to the source edges.
#[allow(
    clippy::cast_precision_loss,
    clippy::cast_sign_loss,
    clippy::cast_possible_truncation
)]
fn sample_positions(in_len: usize, out_len: usize) -> Vec<(usize, usize, f32)> {
    let ratio = in_len as f32 / out_len as f32;
    let last = (in_len - 1) as f32;

    (0..out_len)
        .map(|i| {
            let pos = ((i as f32 + 0.5) * ratio - 0.5).clamp(0.0, last);
            let p0 = pos.floor() as usize;
            let p1 = (p0 + 1).min(in_len - 1);

            (p0, p1, pos - p0 as f32)
        })
        .collect()
}

/// Bilinear interpolation of a single channel, this interpolates a single channel, but not an image
#[allow(clippy::cast_sign_loss, clippy::cast_possible_truncation)]
pub fn bilinear_impl(
    in_channel: &[u8], out_channel: &mut [u8], in_width: usize, in_height: usize,
    out_width: usize, out_height: usize
) {
    let xs = sample_positions(in_width, out_width);
    let ys = sample_positions(in_height, out_height);

    for (out_row, (y0, y1, b)) in out_channel.chunks_exact_mut(out_width).zip(ys) {
        let row0 = &in_channel[y0 * in_width..(y0 + 1) * in_width];
        let row1 = &in_channel[y1 * in_width..(y1 + 1) * in_width];

        for (out, (x0, x1, a)) in out_row.iter_mut().zip(&xs) {
            let p00 = f32::from(row0[*x0]);
            let p10 = f32::from(row0[*x1]);
            let p01 = f32::from(row1[*x0]);
            let p11 = f32::from(row1[*x1]);

            let interpolated_pixel = p00 * (1.0 - a) * (1.0 - b)
                + p10 * a * (1.0 - b)
                + p01 * (1.0 - a) * b
                + p11 * a * b;

            *out = interpolated_pixel.round().clamp(0.0, 255.0) as u8;
        }
    }
}
