/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Named filters that can be chosen at runtime
use std::fmt::{Display, Formatter};
use std::str::FromStr;

use log::debug;

use crate::buffer::ImageBuffer;
use crate::convolve::sharpen;
use crate::errors::ProcErrors;
use crate::gaussian_blur::gaussian_blur;
use crate::grayscale::grayscale;

/// Kernel size used by [`Filter::Blur`]
pub const BLUR_KERNEL_SIZE: usize = 15;

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Filter {
    /// Convert to a single luma channel
    Grayscale,
    /// 15x15 gaussian blur with a sigma derived from the kernel size
    Blur,
    /// 3x3 sharpening convolution
    Sharpen
}

impl Filter {
    pub const ALL: [Filter; 3] = [Filter::Grayscale, Filter::Blur, Filter::Sharpen];

    pub const fn name(self) -> &'static str {
        match self {
            Filter::Grayscale => "grayscale",
            Filter::Blur => "blur",
            Filter::Sharpen => "sharpen"
        }
    }

    /// Run the filter, returning a new image
    ///
    /// # Errors
    /// Never for the built in kernel sizes, the signature leaves room
    /// for filters that take parameters
    pub fn apply(self, image: &ImageBuffer) -> Result<ImageBuffer, ProcErrors> {
        debug!("Applying {} filter to {image:?}", self.name());

        match self {
            Filter::Grayscale => Ok(grayscale(image)),
            Filter::Blur => gaussian_blur(image, BLUR_KERNEL_SIZE, 0.0),
            Filter::Sharpen => Ok(sharpen(image))
        }
    }
}

impl FromStr for Filter {
    type Err = ProcErrors;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim();

        Filter::ALL
            .into_iter()
            .find(|filter| filter.name() == name)
            .ok_or_else(|| ProcErrors::UnknownFilter(name.to_string()))
    }
}

impl Display for Filter {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
