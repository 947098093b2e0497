/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Methods used for duplicating pixels around the border
//!
//! Kernels that look at a neighbourhood need values for pixels
//! that fall outside the image, this module creates them.

/// Padding method to use
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum PadMethod {
    /// Create a border that duplicates the current pixel
    /// at the original image border to the new border
    ///
    /// ```text
    ///  a,b,c
    ///  d,e,f
    /// ```
    /// Becomes
    /// ```text
    ///   a,b,c
    /// a a,b,c c
    /// d d,e,f f
    ///   d,e,f
    /// ```
    Replicate,
    /// Mirror pixels around the border without repeating the edge pixel
    ///
    /// ```text
    /// f e d c b | a b c d e f g h | g f e d c
    /// ```
    Reflect101
}

impl PadMethod {
    /// Map a possibly out of range coordinate into `0..len`
    #[allow(clippy::cast_possible_wrap, clippy::cast_sign_loss)]
    pub fn map_index(self, index: isize, len: usize) -> usize {
        let last = len as isize - 1;

        match self {
            PadMethod::Replicate => index.clamp(0, last) as usize,
            PadMethod::Reflect101 => {
                if last == 0 {
                    return 0;
                }
                let period = 2 * last;
                let index = index.rem_euclid(period);

                if index > last {
                    (period - index) as usize
                } else {
                    index as usize
                }
            }
        }
    }
}

/// Pad pixels creating a buffer around actual pixels
///
/// This is mainly useful for convolutions and anything that
/// has conditions for edge pixels
///
///```text
///    padded width ──────────────────────────────►
/// │ ┌─────────────────────────────────────┐
/// │ │          PADDING                    │
/// │ │     ┌────────────────────┐          │
/// │ │     │                    │          │
/// │ │     │   IMAGE            │          │
/// │ │     │                    │          │
/// │ │     └────────────────────┘          │
/// │ │                                     │
/// ▼ └─────────────────────────────────────┘
/// ```
///
/// # Arguments
///  - pixels: Un-padded pixels of a single channel
///  - width: Width of raw pixels
///  - height : Height of raw pixels
///  - pad_x: Number of columns added to the left and to the right
///  - pad_y: Number of rows added to the top and to the bottom
///  - method: Method to use for pad pixels.
///
/// # Returns:
///  - A vec of `(width + 2*pad_x) * (height + 2*pad_y)` pixels
#[allow(clippy::cast_possible_wrap)]
pub fn pad<T: Copy + Default>(
    pixels: &[T], width: usize, height: usize, pad_x: usize, pad_y: usize, method: PadMethod
) -> Vec<T> {
    let padded_w = width + pad_x * 2;
    let padded_h = height + pad_y * 2;

    let mut out_pixels = vec![T::default(); padded_w * padded_h];

    for (y, out_row) in out_pixels.chunks_exact_mut(padded_w).enumerate() {
        let in_y = method.map_index(y as isize - pad_y as isize, height);
        let in_row = &pixels[in_y * width..(in_y + 1) * width];

        // middle is a straight copy, only the borders need mapping
        out_row[pad_x..pad_x + width].copy_from_slice(in_row);

        for x in (0..pad_x).chain(pad_x + width..padded_w) {
            out_row[x] = in_row[method.map_index(x as isize - pad_x as isize, width)];
        }
    }
    out_pixels
}

#[cfg(test)]
mod tests {
    use crate::pad::{pad, PadMethod};

    #[test]
    fn replicate_border() {
        let pixels = [1_u8, 2, 3, 4, 5, 6];
        let padded = pad(&pixels, 3, 2, 1, 1, PadMethod::Replicate);

        #[rustfmt::skip]
        let expected = [
            1, 1, 2, 3, 3,
            1, 1, 2, 3, 3,
            4, 4, 5, 6, 6,
            4, 4, 5, 6, 6
        ];
        assert_eq!(padded, expected);
    }

    #[test]
    fn reflect_101_indices() {
        let m = PadMethod::Reflect101;
        // a b c d | c b a
        assert_eq!(m.map_index(-1, 4), 1);
        assert_eq!(m.map_index(-3, 4), 3);
        assert_eq!(m.map_index(4, 4), 2);
        assert_eq!(m.map_index(6, 4), 0);
        // kernel far wider than the image still lands inside
        assert!((-40..40).all(|i| m.map_index(i, 3) < 3));
        assert_eq!(m.map_index(-7, 1), 0);
    }
}
