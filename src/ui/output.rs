//! ui::output
//!
//! Output formatting and display.
//!
//! # Design
//!
//! Writers are passed in rather than hard-wired to stdout, and write errors
//! are returned to the caller. A closed stdout ends the run with an error
//! instead of a panic.

use std::fmt::Display;
use std::io::{self, Write};

/// Print a line.
pub fn print<W: Write>(out: &mut W, message: impl Display) -> io::Result<()> {
    writeln!(out, "{}", message)
}

/// Print a sequence of lines in order, stopping at the first write error.
pub fn print_lines<W: Write, T: Display>(out: &mut W, lines: &[T]) -> io::Result<()> {
    for line in lines {
        print(out, line)?;
    }
    Ok(())
}

/// Print an error message to stderr (always shown).
pub fn error(message: impl Display) {
    eprintln!("error: {}", message);
}
