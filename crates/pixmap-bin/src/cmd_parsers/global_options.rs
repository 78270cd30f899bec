/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::path::PathBuf;

use clap::ArgMatches;
use log::{info, Level};
use pixmap_ppm::{PPM_MAX_HEIGHT, PPM_MAX_WIDTH};

#[derive(Debug, Clone)]
pub struct CmdOptions {
    pub input:      Option<PathBuf>,
    pub output:     Option<PathBuf>,
    pub invert:     bool,
    pub probe:      bool,
    pub max_width:  usize,
    pub max_height: usize
}

impl CmdOptions {
    pub fn new() -> CmdOptions {
        CmdOptions {
            input:      None,
            output:     None,
            invert:     true,
            probe:      false,
            max_width:  PPM_MAX_WIDTH,
            max_height: PPM_MAX_HEIGHT
        }
    }
}

pub fn parse_options(options: &ArgMatches) -> CmdOptions {
    let mut cmd_options = CmdOptions::new();

    cmd_options.input = options.get_one::<PathBuf>("in").cloned();
    cmd_options.output = options.get_one::<PathBuf>("out").cloned();

    if options.get_flag("no-invert") {
        info!("Not inverting image");
        cmd_options.invert = false;
    }
    if options.get_flag("probe") {
        info!("Probing image headers");
        cmd_options.probe = true;
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

    if let Err(err) = simple_logger::init_with_level(log_level) {
        eprintln!("[ERR] Could not initialize logger, {err}");
        return;
    }

    info!("Initialized logger");
    info!("Log level :{}", log_level);
}
