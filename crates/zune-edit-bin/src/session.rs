/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! The interactive editing session
//!
//! Once loaded, a session owns exactly one image. Every menu choice borrows it,
//! runs an operation that produces a new image and replaces the old one,
//! so the previous image is dropped and never aliased.
//!
//! ```text
//!  AwaitingLoad ──load ok──► Ready ──6 / end of input──► Exited
//!       │                    │  ▲                          ▲
//!       │                    └──┘ 1..5, recoverable errors │
//!       └──────────── load failed, Err(LoadFailure) ───────┘
//! ```
use std::io::{BufRead, Write};

use log::{debug, info, warn};
use zune_edit_procs::brighten_contrast::brighten_contrast;
use zune_edit_procs::buffer::ImageBuffer;
use zune_edit_procs::crop::{crop_image, Rect};
use zune_edit_procs::filter::Filter;
use zune_edit_procs::resize::resize;

use crate::errors::EditErrors;
use crate::file_io::ImageIo;
use crate::prompt::Prompter;
use crate::show_gui::ImageViewer;

pub const ORIGINAL_WINDOW: &str = "Original Image";

const DISMISS_PROMPT: &str = "Press Enter to close the image...";

const MENU: &str = "\nChoose an option:
1. Apply filter (grayscale, blur, sharpen)
2. Adjust brightness/contrast
3. Crop image
4. Resize image
5. Save image
6. Exit
";

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum SessionState {
    /// No image yet, the next step prompts for one and loads it
    AwaitingLoad,
    /// An image is loaded and the menu is being served
    Ready,
    /// The user asked to exit or input ended
    Exited
}

/// Entries of the main menu
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum MenuChoice {
    Filter,
    BrightnessContrast,
    Crop,
    Resize,
    Save,
    Exit
}

impl MenuChoice {
    /// Map a selector typed by the user to a menu entry
    ///
    /// # Errors
    /// [`EditErrors::InvalidChoice`] for anything outside `1..=6`
    pub fn from_selector(selector: i64) -> Result<MenuChoice, EditErrors> {
        match selector {
            1 => Ok(MenuChoice::Filter),
            2 => Ok(MenuChoice::BrightnessContrast),
            3 => Ok(MenuChoice::Crop),
            4 => Ok(MenuChoice::Resize),
            5 => Ok(MenuChoice::Save),
            6 => Ok(MenuChoice::Exit),
            _ => Err(EditErrors::InvalidChoice(selector))
        }
    }

    /// Viewport the result of this entry is shown in
    pub const fn window_name(self) -> Option<&'static str> {
        match self {
            MenuChoice::Filter => Some("Filtered Image"),
            MenuChoice::BrightnessContrast => Some("Brightness/Contrast Adjusted Image"),
            MenuChoice::Crop => Some("Cropped Image"),
            MenuChoice::Resize => Some("Resized Image"),
            MenuChoice::Save | MenuChoice::Exit => None
        }
    }
}

fn prompt<W: Write>(out: &mut W, text: &str) -> Result<(), EditErrors> {
    write!(out, "{text}")?;
    out.flush()?;
    Ok(())
}

fn loaded(image: Option<&ImageBuffer>) -> Result<&ImageBuffer, EditErrors> {
    image.ok_or_else(|| EditErrors::LoadFailure("No image has been loaded".to_string()))
}

pub struct Session<R: BufRead, W: Write, I: ImageIo, V: ImageViewer> {
    prompter:     Prompter<R>,
    out:          W,
    io:           I,
    viewer:       V,
    initial_path: Option<String>,
    image:        Option<ImageBuffer>,
    state:        SessionState
}

impl<R: BufRead, W: Write, I: ImageIo, V: ImageViewer> Session<R, W, I, V> {
    /// Create a session waiting for its image
    ///
    /// If `path` is `None` the user is asked for one when the session runs.
    pub fn new(
        input: R, out: W, io: I, viewer: V, path: Option<&str>
    ) -> Session<R, W, I, V> {
        Session {
            prompter: Prompter::new(input),
            out,
            io,
            viewer,
            initial_path: path.map(str::to_string),
            image: None,
            state: SessionState::AwaitingLoad
        }
    }

    /// Create a session and load its image
    ///
    /// # Errors
    /// [`EditErrors::LoadFailure`] if no image could be loaded, the session
    /// cannot continue without one.
    pub fn start(
        input: R, out: W, io: I, viewer: V, path: Option<&str>
    ) -> Result<Session<R, W, I, V>, EditErrors> {
        let mut session = Session::new(input, out, io, viewer, path);
        session.step()?;

        Ok(session)
    }

    /// Load the image if needed, then serve the menu until the user exits
    ///
    /// # Errors
    /// [`EditErrors::LoadFailure`] if the image couldn't be loaded, or an error
    /// writing to the output. Operation errors are reported to the user and the
    /// menu is shown again
    pub fn run(&mut self) -> Result<(), EditErrors> {
        while self.state != SessionState::Exited {
            self.step()?;
        }
        info!("Session ended");
        Ok(())
    }

    /// Advance the session by one step, returning the state afterwards
    ///
    /// A step is either loading the image or a single menu iteration.
    ///
    /// # Errors
    /// See [`Session::run`]
    pub fn step(&mut self) -> Result<SessionState, EditErrors> {
        match self.state {
            SessionState::AwaitingLoad => self.load()?,
            SessionState::Ready => self.menu_iteration()?,
            SessionState::Exited => {}
        }
        Ok(self.state)
    }

    fn load(&mut self) -> Result<(), EditErrors> {
        let path = match self.initial_path.take() {
            Some(path) => path,
            None => {
                prompt(&mut self.out, "Enter the path to the image: ")?;

                match self.prompter.next_token() {
                    Ok(path) => path,
                    Err(e @ EditErrors::Io(_)) => return Err(e),
                    Err(e) => {
                        self.state = SessionState::Exited;
                        return Err(EditErrors::LoadFailure(format!("No image path given, {e}")));
                    }
                }
            }
        };

        match self.io.load(&path) {
            Ok(image) => {
                self.image = Some(image);
                self.state = SessionState::Ready;
                self.show(ORIGINAL_WINDOW)
            }
            Err(e) => {
                self.state = SessionState::Exited;
                writeln!(self.out, "Could not load image!")?;

                Err(match e {
                    EditErrors::LoadFailure(_) => e,
                    other => EditErrors::LoadFailure(format!("{path}: {other}"))
                })
            }
        }
    }

    fn menu_iteration(&mut self) -> Result<(), EditErrors> {
        match self.serve_menu() {
            Ok(()) => {}
            Err(EditErrors::EndOfInput) => {
                info!("Input closed, exiting");
                self.state = SessionState::Exited;
            }
            Err(e) if !e.is_recoverable() => return Err(e),
            Err(e) => {
                if matches!(e, EditErrors::InvalidInput(_)) {
                    self.prompter.discard_pending();
                }
                warn!("{e:?}");
                writeln!(self.out, "{e}")?;
            }
        }
        Ok(())
    }

    fn serve_menu(&mut self) -> Result<(), EditErrors> {
        prompt(&mut self.out, MENU)?;

        let selector = self.prompter.next_value::<i64>("a menu choice")?;
        let choice = MenuChoice::from_selector(selector)?;

        debug!("Menu choice {choice:?}");

        self.execute(choice)
    }

    /// Run `choice`, reading its parameters from the input
    ///
    /// # Errors
    /// Any error produced while reading parameters or running the operation,
    /// the current image is left untouched when one occurs.
    /// [`EditErrors::LoadFailure`] if no image has been loaded yet
    pub fn execute(&mut self, choice: MenuChoice) -> Result<(), EditErrors> {
        let new_image = match choice {
            MenuChoice::Filter => {
                prompt(&mut self.out, "Enter filter type (grayscale, blur, sharpen): ")?;
                let filter = self.prompter.next_token()?.parse::<Filter>()?;

                filter.apply(loaded(self.image.as_ref())?)?
            }
            MenuChoice::BrightnessContrast => {
                prompt(&mut self.out, "Enter alpha (contrast) [1.0-3.0]: ")?;
                let alpha = self.prompter.next_value::<f64>("a decimal alpha")?;

                prompt(&mut self.out, "Enter beta (brightness) [0-100]: ")?;
                let beta = self.prompter.next_value::<i32>("an integer beta")?;

                brighten_contrast(loaded(self.image.as_ref())?, alpha, beta)
            }
            MenuChoice::Crop => {
                prompt(&mut self.out, "Enter crop region x y width height: ")?;
                let mut region = [0_i64; 4];

                for value in &mut region {
                    *value = self.prompter.next_value::<i64>("an integer coordinate")?;
                }
                let [x, y, width, height] = region;

                crop_image(loaded(self.image.as_ref())?, Rect::new(x, y, width, height))?
            }
            MenuChoice::Resize => {
                prompt(&mut self.out, "Enter new width and height: ")?;
                let width = self.prompter.next_value::<i64>("an integer width")?;
                let height = self.prompter.next_value::<i64>("an integer height")?;

                resize(loaded(self.image.as_ref())?, width, height)?
            }
            MenuChoice::Save => {
                prompt(&mut self.out, "Enter the path to save the image: ")?;
                let path = self.prompter.next_token()?;

                let image = loaded(self.image.as_ref())?;
                self.io.save(image, &path)?;
                writeln!(self.out, "Image saved successfully!")?;

                return Ok(());
            }
            MenuChoice::Exit => {
                self.state = SessionState::Exited;
                return Ok(());
            }
        };

        self.image = Some(new_image);

        if let Some(window_name) = choice.window_name() {
            self.show(window_name)?;
        }
        Ok(())
    }

    fn show(&mut self, window_name: &str) -> Result<(), EditErrors> {
        let Some(image) = &self.image else {
            return Ok(());
        };
        match self.viewer.show(image, window_name) {
            Ok(()) if self.viewer.needs_dismissal() => {
                prompt(&mut self.out, DISMISS_PROMPT)?;
                self.prompter.wait_for_line()?;
            }
            Ok(()) => {}
            // a viewer failing is not a reason to lose the user's edits
            Err(e) => warn!("{e:?}")
        }
        self.viewer.dismiss();
        Ok(())
    }

    /// The current image, `None` until one has been loaded
    pub fn image(&self) -> Option<&ImageBuffer> {
        self.image.as_ref()
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn io(&self) -> &I {
        &self.io
    }

    pub fn viewer(&self) -> &V {
        &self.viewer
    }

    /// Where prompts and messages were written to
    pub fn output(&self) -> &W {
        &self.out
    }
}
