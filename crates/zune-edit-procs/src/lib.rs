/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Image editing operations for zune-edit
//!
//! Every operation borrows an [`ImageBuffer`](buffer::ImageBuffer) and
//! returns a freshly allocated one, the source is never modified.
//!
//! Multi-channel operations split the buffer into planes, run a single channel
//! kernel per plane and interleave the result back.
//!
//! # Example
//! ```
//! use zune_edit_procs::buffer::ImageBuffer;
//! use zune_edit_procs::filter::Filter;
//! use zune_edit_procs::resize::resize;
//!
//! let image = ImageBuffer::fill(128, 100, 100, 3).unwrap();
//! let gray = Filter::Grayscale.apply(&image).unwrap();
//! let small = resize(&gray, 50, 50).unwrap();
//!
//! assert_eq!(small.dimensions(), (50, 50));
//! assert_eq!(small.channels(), 1);
//! ```
#![warn(
    clippy::correctness,
    clippy::perf,
    clippy::pedantic,
    clippy::inline_always,
    clippy::missing_errors_doc,
    clippy::panic
)]
#![allow(
    clippy::needless_return,
    clippy::similar_names,
    clippy::inline_always,
    clippy::must_use_candidate,
    clippy::module_name_repetitions
)]

pub mod brighten_contrast;
pub mod buffer;
pub mod convolve;
pub mod crop;
pub mod errors;
pub mod filter;
pub mod gaussian_blur;
pub mod grayscale;
pub mod pad;
pub mod resize;
