/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Errors possible during image operations
use std::fmt::{Debug, Display, Formatter};

use crate::crop::Rect;

/// All errors an operation can return
pub enum ProcErrors {
    /// Width, height or channel count cannot describe a buffer
    ///
    /// Arguments are (width, height, channels)
    InvalidDimensions(usize, usize, usize),
    /// Sample array length doesn't match the dimensions
    ///
    /// Arguments are (expected, found)
    LengthMismatch(usize, usize),
    /// A region lies outside the image
    OutOfBounds {
        rect:   Rect,
        width:  usize,
        height: usize
    },
    /// An operation parameter was rejected
    InvalidParameter(String),
    /// Filter name not recognised
    UnknownFilter(String)
}

impl Debug for ProcErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidDimensions(width, height, channels) => {
                write!(
                    f,
                    "Invalid image dimensions, width={width}, height={height}, channels={channels}"
                )
            }
            Self::LengthMismatch(expected, found) => {
                write!(
                    f,
                    "Length mismatch, expected {expected} samples but found {found}"
                )
            }
            Self::OutOfBounds {
                rect,
                width,
                height
            } => {
                write!(
                    f,
                    "Region x={} y={} width={} height={} does not fit inside a {width}x{height} image",
                    rect.x, rect.y, rect.width, rect.height
                )
            }
            Self::InvalidParameter(reason) => {
                write!(f, "Invalid parameter: {reason}")
            }
            Self::UnknownFilter(name) => {
                write!(f, "Unknown filter {name:?}")
            }
        }
    }
}

impl Display for ProcErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{self:?}")
    }
}

impl std::error::Error for ProcErrors {}
