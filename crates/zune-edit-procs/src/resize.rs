/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Resize an image to new dimensions
use log::trace;

use crate::buffer::{try_zeroed, ImageBuffer};
use crate::errors::ProcErrors;

mod bilinear;

/// Largest width or height a resize may produce
pub const MAX_DIMENSION: usize = 1 << 14;

#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub enum ResizeMethod {
    #[default]
    Bilinear
}

/// Resize a single channel
///
/// # Arguments
/// - in_image: A contiguous slice of a single channel of an image
/// - out_image: Where we will store the new resized pixels
/// - method: The resizing method to use
/// - in_width: `in_image`'s width
/// - in_height:  `in_image`'s height.
/// - out_width: The expected width
/// - out_height: The expected height.
/// # Panics
/// - `in_width*in_height` do not match `in_image.len()`.
/// - `out_width*out_height` do not match `out_image.len()`.
pub fn resize_channel(
    in_image: &[u8], out_image: &mut [u8], method: ResizeMethod, in_width: usize,
    in_height: usize, out_width: usize, out_height: usize
) {
    assert_eq!(in_image.len(), in_width * in_height);
    assert_eq!(out_image.len(), out_width * out_height);

    match method {
        ResizeMethod::Bilinear => {
            bilinear::bilinear_impl(
                in_image, out_image, in_width, in_height, out_width, out_height
            );
        }
    }
}

/// Resize `image` to `width x height` using `method`
///
/// # Errors
/// [`ProcErrors::InvalidParameter`] if either dimension is zero, negative, larger
/// than [`MAX_DIMENSION`] or the output couldn't be allocated
pub fn resize_with(
    image: &ImageBuffer, width: i64, height: i64, method: ResizeMethod
) -> Result<ImageBuffer, ProcErrors> {
    let invalid = || {
        ProcErrors::InvalidParameter(format!(
            "Resize dimensions must be positive, found {width}x{height}"
        ))
    };
    let out_width = usize::try_from(width)
        .ok()
        .filter(|w| *w > 0)
        .ok_or_else(invalid)?;
    let out_height = usize::try_from(height)
        .ok()
        .filter(|h| *h > 0)
        .ok_or_else(invalid)?;

    if out_width > MAX_DIMENSION || out_height > MAX_DIMENSION {
        return Err(ProcErrors::InvalidParameter(format!(
            "Resize dimensions {width}x{height} exceed the maximum of {MAX_DIMENSION}x{MAX_DIMENSION}"
        )));
    }
    let (in_width, in_height) = image.dimensions();

    trace!("Resizing {in_width}x{in_height} image to {out_width}x{out_height} with {method:?}");

    let mut planes = Vec::with_capacity(image.channels());

    for plane in image.to_planes() {
        let mut out = try_zeroed(out_width * out_height)?;
        resize_channel(
            &plane, &mut out, method, in_width, in_height, out_width, out_height
        );
        planes.push(out);
    }

    ImageBuffer::try_from_planes(&planes, out_width, out_height)
}

/// Resize `image` to `width x height` with bilinear interpolation
///
/// # Errors
/// See [`resize_with`]
pub fn resize(image: &ImageBuffer, width: i64, height: i64) -> Result<ImageBuffer, ProcErrors> {
    resize_with(image, width, height, ResizeMethod::Bilinear)
}

#[cfg(test)]
mod tests {
    use nanorand::Rng;

    use crate::buffer::ImageBuffer;
    use crate::errors::ProcErrors;
    use crate::resize::{resize, MAX_DIMENSION};

    #[test]
    fn output_has_requested_dimensions() {
        let mut rng = nanorand::WyRand::new_seed(99);
        let image = ImageBuffer::fill(40, 37, 23, 3).unwrap();

        for _ in 0..25 {
            let w = rng.generate_range(1_i64..=120);
            let h = rng.generate_range(1_i64..=120);
            let out = resize(&image, w, h).unwrap();

            assert_eq!(out.dimensions(), (w as usize, h as usize));
            assert_eq!(out.channels(), 3);
            // flat images stay flat whatever the scale
            assert!(out.data().iter().all(|x| *x == 40));
        }
    }

    #[test]
    fn same_size_is_identity() {
        let mut data = vec![0_u8; 16 * 9 * 4];
        nanorand::WyRand::new_seed(5).fill(&mut data);
        let image = ImageBuffer::new(16, 9, 4, data).unwrap();

        assert_eq!(resize(&image, 16, 9).unwrap(), image);
    }

    #[test]
    fn upscale_interpolates_between_neighbours() {
        let image = ImageBuffer::from_fn(2, 1, 1, |x, _, pix| pix[0] = (x * 100) as u8).unwrap();
        let out = resize(&image, 4, 1).unwrap();

        // samples at -0.25, 0.25, 0.75, 1.25 clamped to the edges
        assert_eq!(out.data(), &[0, 25, 75, 100]);
    }

    #[test]
    fn round_trip_is_lossy_but_shaped() {
        let mut data = vec![0_u8; 30 * 30];
        nanorand::WyRand::new_seed(1).fill(&mut data);
        let image = ImageBuffer::new(30, 30, 1, data).unwrap();

        let small = resize(&image, 7, 11).unwrap();
        let back = resize(&small, 30, 30).unwrap();
        assert_eq!(back.dimensions(), image.dimensions());
    }

    #[test]
    fn non_positive_dimensions_are_rejected() {
        let image = ImageBuffer::fill(0, 10, 10, 1).unwrap();

        for (w, h) in [(0, 10), (10, 0), (-3, 10), (10, -1), (i64::MIN, i64::MIN)] {
            assert!(matches!(
                resize(&image, w, h),
                Err(ProcErrors::InvalidParameter(_))
            ));
        }
        assert!(matches!(
            resize(&image, i64::MAX, i64::MAX),
            Err(ProcErrors::InvalidParameter(_))
        ));
    }

    #[test]
    fn oversized_dimensions_are_rejected() {
        let image = ImageBuffer::fill(1, 10, 10, 3).unwrap();

        for (w, h) in [
            (1 << 20, 1 << 20),
            (MAX_DIMENSION as i64 + 1, 10),
            (10, MAX_DIMENSION as i64 + 1)
        ] {
            assert!(matches!(
                resize(&image, w, h),
                Err(ProcErrors::InvalidParameter(_))
            ));
        }
        let tall = resize(&image, 1, MAX_DIMENSION as i64).unwrap();
        assert_eq!(tall.dimensions(), (1, MAX_DIMENSION));
    }
}
