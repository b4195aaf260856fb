extern crate termcolor;

use crate::{
    color::{reset_fg, set_fg},
    write::Failed,
};
use std::{
    fs::File,
    io::{self, BufRead, BufReader, Write},
};
use termcolor::{Color, StandardStream};

pub fn open_case_file(stdout: &mut StandardStream, kind: &str, path: &str) -> Result<File, Failed> {
    File::open(path).map_err(|e| {
        write_error!(stdout, "Error", "Failed to read test case {} {}: {}", kind, path, e);
        Failed
    })
}

fn stream(stdout: &mut StandardStream, title: &str, file: File) -> io::Result<()> {
    set_fg(stdout, Color::Green);
    writeln!(stdout, "{}:", title)?;
    reset_fg(stdout);
    for line in BufReader::new(file).lines() {
        writeln!(stdout, "{}", line?)?;
    }
    stdout.flush()
}

pub fn print_section(stdout: &mut StandardStream, title: &str, file: File) -> Result<(), Failed> {
    stream(stdout, title, file).map_err(|e| {
        write_error!(stdout, "Error", "Failed to print {}: {}", title.to_lowercase(), e);
        Failed
    })
}
