/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::io::Write;
use std::process::exit;

use crate::errors::BinErrors;
use crate::probe_files::probe_input_file;
use crate::workflow::create_and_exec_workflow_from_cmd;

mod cmd_args;
mod cmd_parsers;
mod errors;
mod probe_files;
mod serde;
mod workflow;

pub fn main() {
    let cmd = cmd_args::create_cmd_args();
    let options = cmd.get_matches();

    cmd_parsers::global_options::setup_logger(&options);

    let parsed_opts = cmd_parsers::global_options::parse_options(&options);

    let result = if parsed_opts.probe {
        probe_input_file(&parsed_opts)
    } else {
        create_and_exec_workflow_from_cmd(&parsed_opts)
    };

    if let Err(err) = result {
        // stdout may be carrying the encoded image
        let _ = report_error(&err, &mut std::io::stderr().lock());
        exit(1);
    }
}

fn report_error<W: Write>(err: &BinErrors, sink: &mut W) -> std::io::Result<()> {
    writeln!(sink, "[ERR] {err}")?;
    sink.flush()
}
