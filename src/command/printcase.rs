extern crate clap;
extern crate termcolor;

use crate::{
    print::{open_case_file, print_section},
    write::{check, Failed},
};
use clap::{value_parser, Arg, ArgAction, ArgMatches, Command};
use egor::{resolve, Config, MetaData};
use std::{env, io::Write};
use termcolor::{Color, StandardStream};

pub fn command() -> Command<'static> {
    Command::new("printcase")
        .visible_alias("pc")
        .about("Print input and/or output of a given test case")
        .arg(
            Arg::new("test_id")
                .help("Id of the test case")
                .value_parser(value_parser!(String))
                .required(true),
        )
        .arg(
            Arg::new("input-only")
                .long("input-only")
                .help("Print the input only of the test case")
                .action(ArgAction::SetTrue)
                .conflicts_with("output-only"),
        )
        .arg(
            Arg::new("output-only")
                .long("output-only")
                .help("Print the output only of the test case")
                .action(ArgAction::SetTrue),
        )
}

pub fn run(stdout: &mut StandardStream, matches: &ArgMatches) -> Result<(), Failed> {
    let input_only = matches.get_flag("input-only");
    let output_only = matches.get_flag("output-only");
    let raw = matches
        .get_one::<String>("test_id")
        .map(String::as_str)
        .unwrap_or_default();
    let id: i64 = raw.parse().map_err(|e| {
        write_error!(stdout, "Error", "Cannot parse test id {:?}, a number required: {}", raw, e);
        Failed
    })?;
    let cwd = env::current_dir().map_err(|e| {
        write_error!(stdout, "Error", "Failed to get working directory: {}", e);
        Failed
    })?;

    let config = check(
        stdout,
        "Failed to load egor configuration",
        Config::load_or_create_default(),
    )?;
    let meta = check(
        stdout,
        "Failed to load egor metadata",
        MetaData::from_path(&cwd.join(&config.config_file_name)),
    )?;
    let case = check(stdout, "Could not find test case", resolve(&meta, id))?;

    // Open everything up front so a missing file stops the command before any output.
    let input = if output_only {
        None
    } else {
        Some(open_case_file(stdout, "input", &case.input_path)?)
    };
    let output = if input_only || !case.has_output() {
        None
    } else {
        Some(open_case_file(stdout, "output", &case.output_path)?)
    };

    if let Some(file) = input {
        print_section(stdout, "Input", file)?;
    }
    if let Some(file) = output {
        print_section(stdout, "Output", file)?;
    } else if !input_only {
        write_info!(stdout, "Info", "Test case {} has no expected output", case.id);
    }
    Ok(())
}
