//! Terminal boundary: line input, screen clearing and text output.
//!
//! The session talks to the user only through [`Console`], so tests can drive
//! it with scripted input and inspect the transcript.

mod stdio;

use std::io;

pub use stdio::StdConsole;

pub trait Console {
    /// Read one line of input with the line ending stripped.
    ///
    /// Blocks until a line is available. Returns `Ok(None)` at end of input.
    fn read_line(&mut self) -> io::Result<Option<String>>;

    /// Clear the visible screen. May be a no-op.
    fn clear_screen(&mut self) -> io::Result<()>;

    /// Write `text` followed by a newline.
    fn write_line(&mut self, text: &str) -> io::Result<()>;

    /// Write `text` without a newline and flush, for prompts.
    fn write(&mut self, text: &str) -> io::Result<()>;
}

/// Remove a trailing `\n` or `\r\n`.
pub fn strip_line_ending(line: &mut String) {
    if line.ends_with('\n') {
        line.pop();
        if line.ends_with('\r') {
            line.pop();
        }
    }
}
