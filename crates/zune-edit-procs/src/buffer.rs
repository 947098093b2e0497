/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! An owned, interleaved 8-bit image
//!
//! Samples are stored row by row, with every pixel holding `channels`
//! consecutive samples, i.e an RGB image is laid out as `[R,G,B,R,G,B...]`
use crate::errors::ProcErrors;

/// Largest channel count a buffer may carry (RGBA)
pub const MAX_CHANNELS: usize = 4;

/// A decoded image
///
/// The buffer is always well formed, the constructors refuse
/// zero sized images and sample arrays that don't match the dimensions.
#[derive(Clone, PartialEq, Eq)]
pub struct ImageBuffer {
    width:    usize,
    height:   usize,
    channels: usize,
    data:     Vec<u8>
}

/// Number of samples a `width x height x channels` image needs
///
/// Returns `None` if the dimensions cannot describe a buffer.
fn checked_len(width: usize, height: usize, channels: usize) -> Option<usize> {
    if width == 0 || height == 0 || channels == 0 || channels > MAX_CHANNELS {
        return None;
    }
    width.checked_mul(height)?.checked_mul(channels)
}

/// Reserve exactly `additional` samples in `data`
///
/// # Errors
/// [`ProcErrors::InvalidParameter`] if the allocator refused
pub(crate) fn try_reserve(data: &mut Vec<u8>, additional: usize) -> Result<(), ProcErrors> {
    data.try_reserve_exact(additional).map_err(|e| {
        ProcErrors::InvalidParameter(format!("Cannot allocate {additional} samples, {e}"))
    })
}

/// A zeroed sample array of `len` samples, without aborting on allocation failure
///
/// # Errors
/// See [`try_reserve`]
pub(crate) fn try_zeroed(len: usize) -> Result<Vec<u8>, ProcErrors> {
    let mut data = Vec::new();
    try_reserve(&mut data, len)?;
    data.resize(len, 0);
    Ok(data)
}

impl ImageBuffer {
    /// Create a new buffer from interleaved samples
    ///
    /// # Errors
    /// - [`ProcErrors::InvalidDimensions`] if any dimension is zero, channels
    ///   are more than [`MAX_CHANNELS`] or the size overflows a `usize`
    /// - [`ProcErrors::LengthMismatch`] if `data.len()` isn't `width*height*channels`
    pub fn new(
        width: usize, height: usize, channels: usize, data: Vec<u8>
    ) -> Result<ImageBuffer, ProcErrors> {
        let expected = checked_len(width, height, channels)
            .ok_or(ProcErrors::InvalidDimensions(width, height, channels))?;

        if expected != data.len() {
            return Err(ProcErrors::LengthMismatch(expected, data.len()));
        }
        Ok(ImageBuffer {
            width,
            height,
            channels,
            data
        })
    }

    /// Create a buffer where every sample is `value`
    ///
    /// # Errors
    /// See [`ImageBuffer::new`]
    pub fn fill(
        value: u8, width: usize, height: usize, channels: usize
    ) -> Result<ImageBuffer, ProcErrors> {
        let length = checked_len(width, height, channels)
            .ok_or(ProcErrors::InvalidDimensions(width, height, channels))?;

        ImageBuffer::new(width, height, channels, vec![value; length])
    }

    /// Create a buffer by calling `func` for every pixel
    ///
    /// `func` receives `(x, y, pixel)` where `pixel` has `channels` samples
    /// initialized to zero.
    ///
    /// # Example
    /// ```
    /// use zune_edit_procs::buffer::ImageBuffer;
    /// // horizontal gradient
    /// let image = ImageBuffer::from_fn(256, 10, 1, |x, _, pix| pix[0] = x as u8).unwrap();
    /// assert_eq!(image.pixel(200, 3), &[200]);
    /// ```
    ///
    /// # Errors
    /// See [`ImageBuffer::new`]
    pub fn from_fn<F>(
        width: usize, height: usize, channels: usize, mut func: F
    ) -> Result<ImageBuffer, ProcErrors>
    where
        F: FnMut(usize, usize, &mut [u8])
    {
        let mut image = ImageBuffer::fill(0, width, height, channels)?;

        for (y, row) in image.data.chunks_exact_mut(width * channels).enumerate() {
            for (x, pixel) in row.chunks_exact_mut(channels).enumerate() {
                func(x, y, pixel);
            }
        }
        Ok(image)
    }

    /// Split an interleaved buffer into one plane per channel
    pub(crate) fn to_planes(&self) -> Vec<Vec<u8>> {
        let mut planes = vec![Vec::with_capacity(self.width * self.height); self.channels];

        for pixel in self.data.chunks_exact(self.channels) {
            for (plane, sample) in planes.iter_mut().zip(pixel) {
                plane.push(*sample);
            }
        }
        planes
    }

    /// Interleave planes produced by a kernel back into a buffer
    ///
    /// Every plane must hold `width * height` samples.
    pub(crate) fn from_planes(planes: &[Vec<u8>], width: usize, height: usize) -> ImageBuffer {
        debug_assert!(planes.iter().all(|p| p.len() == width * height));

        let mut data = Vec::with_capacity(width * height * planes.len());

        for i in 0..width * height {
            data.extend(planes.iter().map(|plane| plane[i]));
        }
        ImageBuffer::from_raw_parts(width, height, planes.len(), data)
    }

    /// Like [`ImageBuffer::from_planes`] but reports a failed allocation
    /// instead of aborting
    ///
    /// # Errors
    /// [`ProcErrors::InvalidParameter`] if the output couldn't be allocated
    pub(crate) fn try_from_planes(
        planes: &[Vec<u8>], width: usize, height: usize
    ) -> Result<ImageBuffer, ProcErrors> {
        debug_assert!(planes.iter().all(|p| p.len() == width * height));

        let mut data = Vec::new();
        try_reserve(&mut data, width * height * planes.len())?;

        for i in 0..width * height {
            data.extend(planes.iter().map(|plane| plane[i]));
        }
        Ok(ImageBuffer::from_raw_parts(width, height, planes.len(), data))
    }

    /// Wrap samples whose shape was derived from an existing buffer
    pub(crate) fn from_raw_parts(
        width: usize, height: usize, channels: usize, data: Vec<u8>
    ) -> ImageBuffer {
        debug_assert_eq!(checked_len(width, height, channels), Some(data.len()));

        ImageBuffer {
            width,
            height,
            channels,
            data
        }
    }

    pub const fn width(&self) -> usize {
        self.width
    }

    pub const fn height(&self) -> usize {
        self.height
    }

    /// Get image dimensions as a tuple of (width,height)
    pub const fn dimensions(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    /// Number of samples per pixel
    pub const fn channels(&self) -> usize {
        self.channels
    }

    /// Raw interleaved samples
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Consume the buffer returning the raw interleaved samples
    pub fn into_data(self) -> Vec<u8> {
        self.data
    }

    /// Samples for the pixel at `(x,y)`
    ///
    /// # Panics
    /// If `(x,y)` lies outside the image
    pub fn pixel(&self, x: usize, y: usize) -> &[u8] {
        assert!(
            x < self.width && y < self.height,
            "Pixel ({x},{y}) outside a {}x{} image",
            self.width,
            self.height
        );
        let start = (y * self.width + x) * self.channels;

        &self.data[start..start + self.channels]
    }
}

impl std::fmt::Debug for ImageBuffer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // the samples are far too noisy to print
        f.debug_struct("ImageBuffer")
            .field("width", &self.width)
            .field("height", &self.height)
            .field("channels", &self.channels)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use crate::buffer::{try_zeroed, ImageBuffer};
    use crate::errors::ProcErrors;

    #[test]
    fn rejects_zero_and_wide_buffers() {
        assert!(matches!(
            ImageBuffer::fill(0, 0, 10, 3),
            Err(ProcErrors::InvalidDimensions(0, 10, 3))
        ));
        assert!(matches!(
            ImageBuffer::fill(0, 10, 10, 5),
            Err(ProcErrors::InvalidDimensions(10, 10, 5))
        ));
        assert!(matches!(
            ImageBuffer::fill(0, usize::MAX, 2, 1),
            Err(ProcErrors::InvalidDimensions(..))
        ));
    }

    #[test]
    fn rejects_wrong_lengths() {
        assert!(matches!(
            ImageBuffer::new(4, 4, 3, vec![0; 47]),
            Err(ProcErrors::LengthMismatch(48, 47))
        ));
    }

    #[test]
    fn planes_round_trip() {
        let image = ImageBuffer::from_fn(7, 5, 3, |x, y, pix| {
            pix[0] = x as u8;
            pix[1] = y as u8;
            pix[2] = (x * y) as u8;
        })
        .unwrap();

        let planes = image.to_planes();
        assert_eq!(planes.len(), 3);
        assert_eq!(planes[1][2 * 7 + 4], 2);

        let back = ImageBuffer::from_planes(&planes, 7, 5);
        assert_eq!(back, image);
    }

    #[test]
    fn fallible_allocation() {
        assert_eq!(try_zeroed(12).unwrap(), vec![0; 12]);
        assert!(matches!(
            try_zeroed(usize::MAX),
            Err(ProcErrors::InvalidParameter(_))
        ));

        let image = ImageBuffer::fill(3, 4, 2, 2).unwrap();
        let back = ImageBuffer::try_from_planes(&image.to_planes(), 4, 2).unwrap();
        assert_eq!(back, image);
    }

    #[test]
    fn pixel_lookup() {
        let image = ImageBuffer::from_fn(3, 2, 2, |x, y, pix| {
            pix[0] = (y * 3 + x) as u8;
            pix[1] = 9;
        })
        .unwrap();
        assert_eq!(image.pixel(2, 1), &[5, 9]);
        assert_eq!(image.data().len(), 12);
    }
}
