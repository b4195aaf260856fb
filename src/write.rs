extern crate termcolor;

use egor::error::Error;
use std::io::Write;
use termcolor::{Color, StandardStream};

/// The command already reported why it stopped.
#[derive(Debug)]
pub struct Failed;

pub fn check<T, E: Error>(
    stdout: &mut StandardStream,
    context: &str,
    result: Result<T, E>,
) -> Result<T, Failed> {
    result.map_err(|e| {
        write_error!(stdout, "Error", "{}: {}", context, e);
        Failed
    })
}
