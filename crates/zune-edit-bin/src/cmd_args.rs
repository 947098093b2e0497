/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use clap::{value_parser, Arg, ArgAction, Command};
use zune_edit_procs::resize::MAX_DIMENSION;

/// Largest image dimension accepted by default when decoding
///
/// Same as the largest size a resize may produce
pub const DEFAULT_MAX_DIMENSION: usize = MAX_DIMENSION;

#[rustfmt::skip]
pub fn create_cmd_args() -> Command {
    Command::new("zune-edit")
        .about("Interactive image editor, load an image and apply filters, brightness/contrast, crops and resizes from a menu")
        .arg(Arg::new("input")
            .short('i')
            .long("input")
            .help("Image to edit, prompted for when absent"))
        .arg(Arg::new("no-view")
            .long("no-view")
            .action(ArgAction::SetTrue)
            .help("Don't open results in the default image viewer, only log them"))
        .arg(Arg::new("max-width")
            .long("max-width")
            .help_heading("ADVANCED")
            .help(format!("Maximum width of images allowed when decoding [default: {DEFAULT_MAX_DIMENSION}]"))
            .value_parser(value_parser!(usize)))
        .arg(Arg::new("max-height")
            .long("max-height")
            .help_heading("ADVANCED")
            .help(format!("Maximum height of images allowed when decoding [default: {DEFAULT_MAX_DIMENSION}]"))
            .value_parser(value_parser!(usize)))
        .arg(Arg::new("debug")
            .long("debug")
            .action(ArgAction::SetTrue)
            .help_heading("LOGGING")
            .help("Display debug information and higher"))
        .arg(Arg::new("trace")
            .long("trace")
            .action(ArgAction::SetTrue)
            .help_heading("LOGGING")
            .help("Display very verbose information"))
        .arg(Arg::new("warn")
            .long("warn")
            .action(ArgAction::SetTrue)
            .help_heading("LOGGING")
            .help("Display warnings and errors"))
        .arg(Arg::new("info")
            .long("info")
            .action(ArgAction::SetTrue)
            .help_heading("LOGGING")
            .help("Display information about the session"))
}
