extern crate clap;
extern crate termcolor;

use crate::write::{check, Failed};
use clap::{value_parser, Arg, ArgMatches, Command};
use egor::Config;
use std::io::Write;
use termcolor::{Color, StandardStream};

pub fn command() -> Command<'static> {
    Command::new("config")
        .about("Read egor configuration")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(
            Command::new("get")
                .about("Print the value of a configuration key")
                .arg(
                    Arg::new("key")
                        .help("One of server.port, lang.default, author")
                        .value_parser(value_parser!(String))
                        .required(true),
                ),
        )
        .subcommand(Command::new("path").about("Print the configuration file location"))
}

fn print_value(stdout: &mut StandardStream, value: &str) -> Result<(), Failed> {
    writeln!(stdout, "{}", value).map_err(|e| {
        write_error!(stdout, "Error", "Failed to write output: {}", e);
        Failed
    })
}

pub fn run(stdout: &mut StandardStream, matches: &ArgMatches) -> Result<(), Failed> {
    match matches.subcommand() {
        Some(("get", sub)) => {
            let key = sub
                .get_one::<String>("key")
                .map(String::as_str)
                .unwrap_or_default();
            let config = check(
                stdout,
                "Failed to load egor configuration",
                Config::load_or_create_default(),
            )?;
            let value = check(stdout, "Failed to read configuration", config.get_value(key))?;
            print_value(stdout, &value)
        }
        Some(("path", _)) => {
            let path = check(
                stdout,
                "Failed to locate egor configuration",
                Config::location(),
            )?;
            print_value(stdout, &path.display().to_string())
        }
        _ => {
            write_error!(stdout, "Error", "config: missing subcommand");
            Err(Failed)
        }
    }
}
