extern crate termcolor;

use termcolor::{Color, ColorSpec, StandardStream, WriteColor};

macro_rules! get_version {
    ($file:expr) => {
        concat!(
            env!("CARGO_PKG_VERSION"),
            " ",
            include_str!(concat!(env!("OUT_DIR"), "/", $file))
        )
    };
}

// Console write failures are ignored here; the command's exit status reports the outcome.
pub fn set_fg(stdout: &mut StandardStream, color: Color) {
    let _ = stdout.set_color(ColorSpec::new().set_fg(Some(color)).set_intense(true));
}
pub fn reset_fg(stdout: &mut StandardStream) {
    let _ = stdout.set_color(ColorSpec::new().set_fg(None).set_intense(true));
}

macro_rules! write_color {
    ($dest:expr, $color:expr,$typ:expr,  $($arg:tt)*) => { {
        $crate::color::set_fg($dest, $color);
        let _ = write!($dest,"{:>7}: ", $typ);
        $crate::color::reset_fg($dest);
        let _ = writeln!($dest, $($arg)*);
    }
    };
}

macro_rules! write_error {
    ($dest:expr,$typ:expr, $($arg:tt)*) => {
        write_color!($dest, Color::Red, $typ, $($arg)*);
    };
}

macro_rules! write_info {
    ($dest:expr,$typ:expr, $($arg:tt)*) => {
        write_color!($dest, Color::Blue, $typ, $($arg)*);
    };
}
