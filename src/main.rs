extern crate clap;
extern crate log;
extern crate pretty_env_logger;
extern crate termcolor;

use clap::{crate_description, crate_name, Command};
use log::debug;
use pretty_env_logger::init_timed;
use std::{io::Write, process};
use termcolor::{Color, ColorChoice, StandardStream, WriteColor};

#[macro_use]
mod color;
mod command {
    pub mod config;
    pub mod printcase;
}
mod print;
mod write;

fn main() {
    init_timed();
    let mut stdout = StandardStream::stdout(ColorChoice::Auto);
    let app = Command::new(crate_name!())
        .about(crate_description!())
        .version(get_version!("version"))
        .long_version(get_version!("long_version"))
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(command::printcase::command())
        .subcommand(command::config::command())
        .get_matches();
    let result = match app.subcommand() {
        Some(("printcase", m)) => command::printcase::run(&mut stdout, m),
        Some(("config", m)) => command::config::run(&mut stdout, m),
        Some((unknown, _)) => {
            write_error!(&mut stdout, "Error", r#"egor: unknown command "{}""#, unknown);
            Err(write::Failed)
        }
        None => Err(write::Failed),
    };
    let _ = stdout.reset();
    if let Err(e) = result {
        debug!("Command failed: {:?}", e);
        process::exit(1);
    }
}
