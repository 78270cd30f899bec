/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use clap::{value_parser, Arg, ArgAction, Command};

#[rustfmt::skip]
pub fn create_cmd_args() -> Command {
    Command::new("pixmap")
        .about("Decode a PPM image, invert its colors and encode it again")
        .arg(Arg::new("in")
            .short('i')
            .long("input")
            .help("Input file to read data from, stdin if absent")
            .value_parser(value_parser!(std::path::PathBuf)))
        .arg(Arg::new("out")
            .short('o')
            .long("output")
            .help("Output file to write the data to, stdout if absent")
            .value_parser(value_parser!(std::path::PathBuf)))
        .arg(Arg::new("no-invert")
            .long("no-invert")
            .action(ArgAction::SetTrue)
            .help_heading("OPERATIONS")
            .help("Re-encode the image without inverting it"))
        .arg(Arg::new("probe")
            .long("probe")
            .action(ArgAction::SetTrue)
            .help_heading("OPERATIONS")
            .help("Print image headers as json and exit")
            .conflicts_with_all(["out", "no-invert"]))
        .arg(Arg::new("max-width")
            .long("max-width")
            .help_heading("ADVANCED")
            .help("Maximum width of images allowed")
            .long_help("Refuse images wider than this, values above 1920 are treated as 1920")
            .default_value("1920")
            .value_parser(value_parser!(usize)))
        .arg(Arg::new("max-height")
            .long("max-height")
            .help_heading("ADVANCED")
            .help("Maximum height of images allowed")
            .long_help("Refuse images taller than this, values above 1080 are treated as 1080")
            .default_value("1080")
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
            .help("Display information about the decoding options"))
}
