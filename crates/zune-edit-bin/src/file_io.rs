/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Loading and saving images
//!
//! Decoding and encoding is left to `zune-image`, this module only moves
//! pixels between a [`zune_image::image::Image`] and an [`ImageBuffer`].
use std::path::Path;

use log::{debug, info};
use zune_core::colorspace::ColorSpace;
use zune_core::options::DecoderOptions;
use zune_edit_procs::buffer::ImageBuffer;
use zune_image::image::Image;

use crate::errors::EditErrors;

/// Where the session reads its image from and writes it to
pub trait ImageIo {
    /// Decode the image at `path`
    ///
    /// # Errors
    /// [`EditErrors::LoadFailure`] if the path can't be read or decoded
    fn load(&mut self, path: &str) -> Result<ImageBuffer, EditErrors>;

    /// Encode `image` to `path`, the format is chosen from the extension
    ///
    /// # Errors
    /// [`EditErrors::SaveFailure`] if there is no encoder or writing fails
    fn save(&mut self, image: &ImageBuffer, path: &str) -> Result<(), EditErrors>;
}

/// Colorspace matching a buffer's channel count
pub fn colorspace_for(channels: usize) -> ColorSpace {
    match channels {
        1 => ColorSpace::Luma,
        2 => ColorSpace::LumaA,
        3 => ColorSpace::RGB,
        // buffers carry at most four channels
        _ => ColorSpace::RGBA
    }
}

/// Convert the first frame of a decoded image to 8 bit samples
///
/// # Errors
/// [`EditErrors::LoadFailure`] for colorspaces other than Luma, LumaA, RGB and RGBA
pub fn image_to_buffer(image: &Image) -> Result<ImageBuffer, EditErrors> {
    let (width, height) = image.dimensions();

    let channels = match image.colorspace() {
        ColorSpace::Luma => 1,
        ColorSpace::LumaA => 2,
        ColorSpace::RGB => 3,
        ColorSpace::RGBA => 4,
        other => {
            return Err(EditErrors::LoadFailure(format!(
                "Unsupported colorspace {other:?}"
            )))
        }
    };
    if image.depth() != zune_core::bit_depth::BitDepth::Eight {
        debug!("Converting {:?} image to 8 bits", image.depth());
    }
    let frame = image
        .flatten_to_u8()
        .into_iter()
        .next()
        .ok_or_else(|| EditErrors::LoadFailure("Image contains no frames".to_string()))?;

    ImageBuffer::new(width, height, channels, frame)
        .map_err(|e| EditErrors::LoadFailure(e.to_string()))
}

/// Wrap a buffer in a `zune-image` image ready to be encoded
pub fn buffer_to_image(buffer: &ImageBuffer) -> Image {
    let (width, height) = buffer.dimensions();

    Image::from_u8(buffer.data(), width, height, colorspace_for(buffer.channels()))
}

/// Encode `buffer` to `path` using the encoder implied by the extension
///
/// # Errors
/// [`EditErrors::SaveFailure`] with the reason reported by the encoder
pub fn save_buffer<P: AsRef<Path>>(buffer: &ImageBuffer, path: P) -> Result<(), EditErrors> {
    buffer_to_image(buffer)
        .save(path.as_ref())
        .map_err(|e| EditErrors::SaveFailure(format!("{:?}: {e:?}", path.as_ref())))
}

/// Files on disk, decoded and encoded by `zune-image`
#[derive(Default)]
pub struct ZuneFileIo {
    options: DecoderOptions
}

impl ZuneFileIo {
    pub fn new(options: DecoderOptions) -> ZuneFileIo {
        ZuneFileIo { options }
    }
}

impl ImageIo for ZuneFileIo {
    fn load(&mut self, path: &str) -> Result<ImageBuffer, EditErrors> {
        let image = Image::open_with_options(path, self.options)
            .map_err(|e| EditErrors::LoadFailure(format!("{path}: {e:?}")))?;

        let buffer = image_to_buffer(&image)?;
        info!("Loaded {path} as {buffer:?}");

        Ok(buffer)
    }

    fn save(&mut self, image: &ImageBuffer, path: &str) -> Result<(), EditErrors> {
        save_buffer(image, path)?;
        info!("Saved {image:?} to {path}");

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use zune_core::colorspace::ColorSpace;
    use zune_edit_procs::buffer::ImageBuffer;
    use zune_image::image::Image;

    use crate::file_io::{buffer_to_image, colorspace_for, image_to_buffer};

    #[test]
    fn channels_map_to_colorspaces() {
        for channels in 1..=4 {
            assert_eq!(colorspace_for(channels).num_components(), channels);
        }
    }

    #[test]
    fn buffers_survive_conversion() {
        for channels in 1..=4 {
            let buffer = ImageBuffer::from_fn(13, 7, channels, |x, y, pix| {
                for (c, p) in pix.iter_mut().enumerate() {
                    *p = (x * 11 + y * 3 + c * 50) as u8;
                }
            })
            .unwrap();
            let image = buffer_to_image(&buffer);

            assert_eq!(image.dimensions(), (13, 7));
            assert_eq!(image_to_buffer(&image).unwrap(), buffer);
        }
    }

    #[test]
    fn unsupported_colorspaces_are_load_failures() {
        let image = Image::from_u8(&[0; 4 * 4 * 4], 4, 4, ColorSpace::CMYK);
        assert!(image_to_buffer(&image).is_err());
    }
}
