/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Interactive image editor
//!
//! Loads one image, then serves a menu of operations on it until
//! the user exits.
use std::io::{stdin, stdout};
use std::process::exit;

use log::error;

use crate::cmd_parsers::global_options::CmdOptions;
use crate::errors::EditErrors;
use crate::file_io::ZuneFileIo;
use crate::session::Session;
use crate::show_gui::{DefaultAppViewer, ImageViewer, LogViewer};

mod cmd_args;
mod cmd_parsers;
pub mod errors;
pub mod file_io;
pub mod prompt;
pub mod session;
pub mod show_gui;

fn run_session<V: ImageViewer>(options: &CmdOptions, viewer: V) -> Result<(), EditErrors> {
    let io = ZuneFileIo::new(options.decoder_options());

    Session::new(
        stdin().lock(),
        stdout().lock(),
        io,
        viewer,
        options.input.as_deref()
    )
    .run()
}

pub fn main() {
    let cmd = cmd_args::create_cmd_args();
    let options = cmd.get_matches();

    cmd_parsers::global_options::setup_logger(&options);

    let parsed_opts = cmd_parsers::global_options::parse_options(&options);

    let result = if parsed_opts.view {
        run_session(&parsed_opts, DefaultAppViewer::new())
    } else {
        run_session(&parsed_opts, LogViewer)
    };

    if let Err(reason) = result {
        error!("Could not complete session, reason {reason:?}");
        exit(-1);
    }
}
