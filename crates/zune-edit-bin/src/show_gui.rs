/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Showing images to the user
use std::env::temp_dir;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::process::Command;
use std::time::UNIX_EPOCH;

use log::{info, trace, warn};
use zune_edit_procs::buffer::ImageBuffer;

use crate::errors::EditErrors;
use crate::file_io::save_buffer;

/// A place where the session shows the current image after every change
pub trait ImageViewer {
    /// Show `image` in a viewport called `window_name`
    ///
    /// # Errors
    /// [`EditErrors::DisplayFailure`] if the image couldn't be shown
    fn show(&mut self, image: &ImageBuffer, window_name: &str) -> Result<(), EditErrors>;

    /// Whether [`ImageViewer::show`] returns while the image is still on screen
    ///
    /// When true the caller waits for the user to confirm they are done
    /// before carrying on.
    fn needs_dismissal(&self) -> bool {
        false
    }

    /// The user is done with the last shown image, release anything held for it
    fn dismiss(&mut self) {}
}

/// A preview written to disk, removed when dropped
struct PreviewFile {
    path: PathBuf
}

impl Drop for PreviewFile {
    fn drop(&mut self) {
        match std::fs::remove_file(&self.path) {
            Ok(()) => trace!("Removed preview {:?}", self.path),
            Err(e) if e.kind() == ErrorKind::NotFound => {}
            Err(e) => warn!("Could not remove preview {:?}: {e}", self.path)
        }
    }
}

/// Opens every image in the system's default image viewer
///
/// The image is written as a png into the temporary directory, named after the
/// viewport, and handed to the platform opener. The file lives until the image
/// is dismissed, the next image is shown or the viewer is dropped.
///
/// On macOS the opener waits for the viewer to quit, elsewhere it returns
/// immediately and [`ImageViewer::needs_dismissal`] asks the caller to wait.
#[derive(Default)]
pub struct DefaultAppViewer {
    directory: Option<PathBuf>,
    preview:   Option<PreviewFile>
}

impl DefaultAppViewer {
    pub fn new() -> DefaultAppViewer {
        DefaultAppViewer::default()
    }

    /// Write previews into `directory` instead of the temporary directory
    pub fn with_directory(directory: PathBuf) -> DefaultAppViewer {
        DefaultAppViewer {
            directory: Some(directory),
            preview:   None
        }
    }

    /// Path of the preview written for `window_name`
    pub fn preview_path(&self, window_name: &str) -> Result<PathBuf, EditErrors> {
        let time = std::time::SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map_err(|e| EditErrors::DisplayFailure(e.to_string()))?
            .as_millis();

        let name: String = window_name
            .chars()
            .map(|c| if c.is_ascii_alphanumeric() { c } else { '_' })
            .collect();

        let mut path = self.directory.clone().unwrap_or_else(temp_dir);
        path.push(format!("zune-edit-{name}-{time}.png"));

        Ok(path)
    }
}

#[cfg(target_os = "windows")]
fn opener_command(path: &Path) -> Command {
    let mut command = Command::new("cmd");
    command.args(["/C", "start", ""]).arg(path);
    command
}

#[cfg(target_os = "macos")]
fn opener_command(path: &Path) -> Command {
    // -W waits until the application showing the file quits
    let mut command = Command::new("open");
    command.arg("-W").arg(path);
    command
}

#[cfg(not(any(target_os = "windows", target_os = "macos")))]
fn opener_command(path: &Path) -> Command {
    let mut command = Command::new("xdg-open");
    command.arg(path);
    command
}

impl ImageViewer for DefaultAppViewer {
    fn show(&mut self, image: &ImageBuffer, window_name: &str) -> Result<(), EditErrors> {
        // only one preview is ever on disk
        self.preview = None;

        let preview = PreviewFile {
            path: self.preview_path(window_name)?
        };

        save_buffer(image, &preview.path)
            .map_err(|e| EditErrors::DisplayFailure(format!("{e:?}")))?;
        trace!("Wrote preview for {window_name:?} to {:?}", preview.path);

        let status = opener_command(&preview.path)
            .status()
            .map_err(|e| EditErrors::DisplayFailure(format!("Could not run opener: {e}")))?;

        if !status.success() {
            return Err(EditErrors::DisplayFailure(format!(
                "Opener exited with {status}"
            )));
        }
        info!("Showing {window_name}");
        self.preview = Some(preview);

        Ok(())
    }

    fn needs_dismissal(&self) -> bool {
        !cfg!(target_os = "macos")
    }

    fn dismiss(&mut self) {
        self.preview = None;
    }
}

/// Headless viewer, only logs what would have been shown
#[derive(Default)]
pub struct LogViewer;

impl ImageViewer for LogViewer {
    fn show(&mut self, image: &ImageBuffer, window_name: &str) -> Result<(), EditErrors> {
        info!("{window_name}: {image:?}");
        Ok(())
    }
}
