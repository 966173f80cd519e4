use crate::error::SessionError;
use crossterm::{
    cursor::MoveTo,
    queue,
    terminal::{Clear, ClearType},
};
use std::io::{BufRead, Write};

/// Line-oriented terminal. Generic over the streams so a whole session can run
/// against in-memory buffers.
pub struct Console<R, W> {
    input: R,
    output: W,
    clear_screen: bool,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W, clear_screen: bool) -> Self {
        Self {
            input,
            output,
            clear_screen,
        }
    }

    /// Prints `message` without a newline and reads one line. The line
    /// terminator is dropped, nothing else is trimmed. Invalid UTF-8 is
    /// replaced with U+FFFD.
    pub fn prompt(&mut self, message: &str) -> Result<String, SessionError> {
        write!(self.output, "{}", message)?;
        self.output.flush()?;

        let mut raw = Vec::new();
        if self.input.read_until(b'\n', &mut raw)? == 0 {
            return Err(SessionError::Closed);
        }
        if raw.last() == Some(&b'\n') {
            raw.pop();
            if raw.last() == Some(&b'\r') {
                raw.pop();
            }
        }
        Ok(String::from_utf8_lossy(&raw).into_owned())
    }

    pub fn say(&mut self, message: impl std::fmt::Display) -> Result<(), SessionError> {
        writeln!(self.output, "{}", message)?;
        Ok(())
    }

    pub fn clear(&mut self) -> Result<(), SessionError> {
        if self.clear_screen {
            queue!(self.output, Clear(ClearType::All), MoveTo(0, 0))?;
            self.output.flush()?;
        }
        Ok(())
    }

    pub fn into_output(self) -> W {
        self.output
    }
}
