/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Crop an image
//!
//!  # Algorithm
//!
//! We can take cropping as a copy of a sub-image
//!
//! ```text
//!    width ──────────────────────────────►
//! │ ┌─────────────────────────────────────┐
//! │ │                                     │
//! │ │   (x,y)     out width               │
//! │ │     ┌────────────────────┐          │
//! │ │   o │                    │          │
//! │ │   u │                    │          │
//! │ │   t │  CROPPED IMAGE     │          │
//! │ │   h │                    │          │
//! │ │     └────────────────────┘          │
//! │ │                                     │
//! ▼ └─────────────────────────────────────┘
//! ```
//! So a crop is a row by row memory copy starting from (x,y).
//!
//! The region is checked against the source before anything is copied, and the
//! result never shares storage with the source.
use log::trace;

use crate::buffer::ImageBuffer;
use crate::errors::ProcErrors;

/// A rectangular region in pixel coordinates
///
/// Fields are signed so that whatever a user typed can be represented
/// and rejected, instead of wrapping around.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct Rect {
    pub x:      i64,
    pub y:      i64,
    pub width:  i64,
    pub height: i64
}

impl Rect {
    pub const fn new(x: i64, y: i64, width: i64, height: i64) -> Rect {
        Rect {
            x,
            y,
            width,
            height
        }
    }

    /// Check that the region lies inside a `width x height` image
    ///
    /// Returns the region as `(x, y, width, height)` in `usize`
    ///
    /// # Errors
    /// - [`ProcErrors::InvalidParameter`] for an empty or negative sized region
    /// - [`ProcErrors::OutOfBounds`] if any part falls outside the image
    pub fn fit_inside(
        &self, width: usize, height: usize
    ) -> Result<(usize, usize, usize, usize), ProcErrors> {
        if self.width <= 0 || self.height <= 0 {
            return Err(ProcErrors::InvalidParameter(format!(
                "Crop width and height must be positive, found {}x{}",
                self.width, self.height
            )));
        }
        let out_of_bounds = || ProcErrors::OutOfBounds {
            rect: *self,
            width,
            height
        };

        let fits = |start: i64, extent: i64, limit: usize| -> Option<(usize, usize)> {
            let start = usize::try_from(start).ok()?;
            let extent = usize::try_from(extent).ok()?;
            let end = start.checked_add(extent)?;

            (end <= limit).then_some((start, extent))
        };

        let (x, out_width) = fits(self.x, self.width, width).ok_or_else(out_of_bounds)?;
        let (y, out_height) = fits(self.y, self.height, height).ok_or_else(out_of_bounds)?;

        Ok((x, y, out_width, out_height))
    }
}

/// Copy a region out of interleaved samples
///
/// # Arguments
/// - in_channel: Interleaved source samples
/// - in_stride: Samples per row of the source, i.e `width * channels`
/// - out_channel: Destination, `out_stride * out_height` long
/// - out_stride: Samples per row of the destination
/// - x_offset: Offset of the first copied sample in each row, i.e `x * channels`
/// - y: First row to copy
pub fn crop<T: Copy>(
    in_channel: &[T], in_stride: usize, out_channel: &mut [T], out_stride: usize,
    out_height: usize, x_offset: usize, y: usize
) {
    for (out_row, in_row) in out_channel
        .chunks_exact_mut(out_stride)
        .zip(in_channel.chunks_exact(in_stride).skip(y).take(out_height))
    {
        out_row.copy_from_slice(&in_row[x_offset..x_offset + out_stride]);
    }
}

/// Crop `region` out of `image`
///
/// # Errors
/// See [`Rect::fit_inside`], on error nothing is allocated and the source is untouched
pub fn crop_image(image: &ImageBuffer, region: Rect) -> Result<ImageBuffer, ProcErrors> {
    let (width, height) = image.dimensions();
    let channels = image.channels();
    let (x, y, out_width, out_height) = region.fit_inside(width, height)?;

    trace!("Cropping {out_width}x{out_height} region at ({x},{y}) from {width}x{height} image");

    let mut out = vec![0_u8; out_width * out_height * channels];

    crop(
        image.data(),
        width * channels,
        &mut out,
        out_width * channels,
        out_height,
        x * channels,
        y
    );
    Ok(ImageBuffer::from_raw_parts(out_width, out_height, channels, out))
}
