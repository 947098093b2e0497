/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Errors that can occur during an editing session
//!
//! Only [`EditErrors::LoadFailure`] and [`EditErrors::Io`] end a session, everything
//! else is reported and the menu is shown again.
use std::fmt::{Debug, Display, Formatter};

use zune_edit_procs::errors::ProcErrors;

pub enum EditErrors {
    /// The initial image could not be read or decoded
    LoadFailure(String),
    /// Menu selector outside of `1..=6`
    InvalidChoice(i64),
    /// A token could not be parsed as the expected type
    InvalidInput(String),
    /// Filter name not one of grayscale, blur or sharpen
    InvalidFilterName(String),
    /// Crop region doesn't fit inside the image
    OutOfBounds(String),
    /// Operation parameter rejected, e.g a zero resize width
    InvalidParameter(String),
    /// The image could not be encoded or written
    SaveFailure(String),
    /// The image could not be shown
    DisplayFailure(String),
    /// Input stream was closed
    EndOfInput,
    /// Reading prompts or writing messages failed
    Io(std::io::Error)
}

impl EditErrors {
    /// Whether the session can carry on after this error
    pub const fn is_recoverable(&self) -> bool {
        !matches!(
            self,
            EditErrors::LoadFailure(_) | EditErrors::Io(_) | EditErrors::EndOfInput
        )
    }
}

impl Debug for EditErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::LoadFailure(reason) => write!(f, "Could not load image: {reason}"),
            Self::InvalidChoice(choice) => write!(f, "Invalid menu choice {choice}"),
            Self::InvalidInput(reason) => write!(f, "Invalid input: {reason}"),
            Self::InvalidFilterName(name) => write!(f, "Invalid filter type {name:?}"),
            Self::OutOfBounds(reason) => write!(f, "Crop region out of bounds: {reason}"),
            Self::InvalidParameter(reason) => write!(f, "Invalid parameter: {reason}"),
            Self::SaveFailure(reason) => write!(f, "Could not save image: {reason}"),
            Self::DisplayFailure(reason) => write!(f, "Could not display image: {reason}"),
            Self::EndOfInput => write!(f, "End of input"),
            Self::Io(err) => write!(f, "I/O error: {err}")
        }
    }
}

impl Display for EditErrors {
    /// The short message shown to the user
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::LoadFailure(_) => write!(f, "Could not load image!"),
            Self::InvalidChoice(_) => write!(f, "Invalid choice!"),
            Self::InvalidFilterName(_) => write!(f, "Invalid filter type!"),
            Self::InvalidInput(reason) => write!(f, "Invalid input: {reason}"),
            Self::OutOfBounds(reason) => write!(f, "Crop region out of bounds: {reason}"),
            Self::InvalidParameter(reason) => write!(f, "Invalid parameter: {reason}"),
            Self::SaveFailure(reason) => write!(f, "Could not save image: {reason}"),
            Self::DisplayFailure(reason) => write!(f, "Could not display image: {reason}"),
            Self::EndOfInput => write!(f, "End of input"),
            Self::Io(err) => write!(f, "I/O error: {err}")
        }
    }
}

impl std::error::Error for EditErrors {}

impl From<std::io::Error> for EditErrors {
    fn from(value: std::io::Error) -> Self {
        EditErrors::Io(value)
    }
}

impl From<ProcErrors> for EditErrors {
    fn from(value: ProcErrors) -> Self {
        match value {
            ProcErrors::UnknownFilter(name) => EditErrors::InvalidFilterName(name),
            ProcErrors::OutOfBounds { .. } => EditErrors::OutOfBounds(value.to_string()),
            ProcErrors::InvalidParameter(reason) => EditErrors::InvalidParameter(reason),
            ProcErrors::InvalidDimensions(..) | ProcErrors::LengthMismatch(..) => {
                EditErrors::InvalidParameter(value.to_string())
            }
        }
    }
}
