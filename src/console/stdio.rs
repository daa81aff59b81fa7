use std::io::{self, BufRead, IsTerminal, Stdin, Stdout, Write};

use crossterm::cursor::MoveTo;
use crossterm::terminal::{Clear as TermClear, ClearType};
use crossterm::ExecutableCommand;

use super::{strip_line_ending, Console};

/// Console over the process stdin/stdout.
pub struct StdConsole {
    stdin: Stdin,
    stdout: Stdout,
    clear_enabled: bool,
}

impl StdConsole {
    /// `clear_screen` only has an effect when enabled here and stdout is a
    /// terminal; escape codes are never written into a pipe.
    pub fn new(clear_screen: bool) -> Self {
        let stdout = io::stdout();
        let clear_enabled = clear_screen && stdout.is_terminal();
        Self {
            stdin: io::stdin(),
            stdout,
            clear_enabled,
        }
    }
}

impl Console for StdConsole {
    /// Bytes that are not valid UTF-8 are replaced with U+FFFD rather than
    /// failing the read.
    fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut buf = Vec::new();
        let read = self.stdin.lock().read_until(b'\n', &mut buf)?;
        if read == 0 {
            return Ok(None);
        }
        let mut line = String::from_utf8_lossy(&buf).into_owned();
        strip_line_ending(&mut line);
        Ok(Some(line))
    }

    fn clear_screen(&mut self) -> io::Result<()> {
        if !self.clear_enabled {
            return Ok(());
        }
        self.stdout.execute(TermClear(ClearType::All))?;
        self.stdout.execute(MoveTo(0, 0))?;
        Ok(())
    }

    fn write_line(&mut self, text: &str) -> io::Result<()> {
        writeln!(self.stdout, "{}", text)
    }

    fn write(&mut self, text: &str) -> io::Result<()> {
        self.stdout.write_all(text.as_bytes())?;
        self.stdout.flush()
    }
}
