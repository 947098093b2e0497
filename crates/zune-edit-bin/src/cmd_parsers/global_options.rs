/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use clap::ArgMatches;
use log::{info, Level};
use zune_core::options::DecoderOptions;

use crate::cmd_args::DEFAULT_MAX_DIMENSION;

#[derive(Debug, Clone)]
pub struct CmdOptions {
    pub input:      Option<String>,
    pub view:       bool,
    pub max_width:  usize,
    pub max_height: usize
}

impl CmdOptions {
    pub fn new() -> CmdOptions {
        CmdOptions {
            input:      None,
            view:       true,
            max_width:  DEFAULT_MAX_DIMENSION,
            max_height: DEFAULT_MAX_DIMENSION
        }
    }

    pub fn decoder_options(&self) -> DecoderOptions {
        DecoderOptions::default()
            .set_max_width(self.max_width)
            .set_max_height(self.max_height)
    }
}

pub fn parse_options(options: &ArgMatches) -> CmdOptions {
    let mut cmd_options = CmdOptions::new();

    if let Some(input) = options.get_one::<String>("input") {
        info!("Editing {input}");
        cmd_options.input = Some(input.clone());
    }
    if options.get_flag("no-view") {
        info!("Results will not be opened in a viewer");
        cmd_options.view = false;
    }
    if let Some(width) = options.get_one::<usize>("max-width") {
        cmd_options.max_width = *width;
    }
    if let Some(height) = options.get_one::<usize>("max-height") {
        cmd_options.max_height = *height;
    }
    cmd_options
}

/// Set up logging options
pub fn setup_logger(options: &ArgMatches) {
    let log_level;

    if options.get_flag("debug") {
        log_level = Level::Debug;
    } else if options.get_flag("trace") {
        log_level = Level::Trace;
    } else if options.get_flag("warn") {
        log_level = Level::Warn
    } else if options.get_flag("info") {
        log_level = Level::Info;
    } else {
        log_level = Level::Warn;
    }

    if let Err(e) = simple_logger::init_with_level(log_level) {
        eprintln!("Could not initialize logger: {e}");
        return;
    }

    info!("Initialized logger");
    info!("Log level :{}", log_level);
}
