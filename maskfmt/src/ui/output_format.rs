// maskfmt/src/ui/output_format.rs
//! Status messages on stderr, colored when the stream is a terminal.

use owo_colors::{AnsiColors, OwoColorize};
use std::io::{self, Write};

fn print_message<W: Write>(
    writer: &mut W,
    label: &str,
    color: AnsiColors,
    msg: &str,
    supports_color: bool,
) -> io::Result<()> {
    if supports_color {
        writeln!(writer, "{} {}", label.color(color).bold(), msg)
    } else {
        writeln!(writer, "{} {}", label, msg)
    }
}

pub fn print_warn_message<W: Write>(writer: &mut W, msg: &str, supports_color: bool) -> io::Result<()> {
    print_message(writer, "[warn]", AnsiColors::Yellow, msg, supports_color)
}

pub fn print_error_message<W: Write>(writer: &mut W, msg: &str, supports_color: bool) -> io::Result<()> {
    print_message(writer, "[error]", AnsiColors::Red, msg, supports_color)
}
