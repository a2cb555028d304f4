//! ANSI terminal surface.
//!
//! Drawing goes through crossterm commands, which emit the plain VT escape
//! sequences (`ESC[?25l`, `ESC[<row>;<col>H`, `ESC[K`, ...). The cursor row is
//! read back with a raw-mode `ESC[6n` query.

mod cursor;
mod raw;
mod signal;

pub use cursor::{discard_pending, parse_response, query_row, read_response, FALLBACK_ROW};
pub use raw::RawModeGuard;
pub use signal::install_interrupt_handler;

use std::fs::File;
use std::io::{self, IsTerminal, Read, Stdout, Write};
use std::os::fd::AsFd;

use crossterm::cursor::{Hide, MoveTo, Show};
use crossterm::queue;
use crossterm::style::Print;
use crossterm::terminal::{self, Clear, ClearType};
use log::warn;

use crate::core::Surface;
use crate::error::BreatheError;

/// Fail with `BreatheError::NotATerminal` unless `input` is a terminal.
///
/// # Errors
///
/// Returns `BreatheError::NotATerminal` for pipes, files and `/dev/null`.
pub fn ensure_interactive<T: IsTerminal>(input: &T) -> Result<(), BreatheError> {
    if input.is_terminal() {
        Ok(())
    } else {
        Err(BreatheError::NotATerminal)
    }
}

/// [`Surface`] writing escape sequences to `output` and reading terminal
/// answers from `input`.
///
/// If the cursor is still hidden when the terminal is dropped, it is shown
/// again.
pub struct AnsiTerminal<W: Write, R: Read + AsFd> {
    output: W,
    input: R,
    cursor_hidden: bool,
}

impl AnsiTerminal<Stdout, File> {
    /// Terminal on standard output, answering on standard input.
    ///
    /// Standard input is duplicated into an unbuffered handle so that the
    /// cursor report is read byte by byte.
    ///
    /// # Errors
    ///
    /// Returns an error if standard input cannot be duplicated.
    pub fn stdio() -> Result<Self, BreatheError> {
        let input = File::from(io::stdin().as_fd().try_clone_to_owned()?);
        Ok(Self::new(io::stdout(), input))
    }
}

impl<W: Write, R: Read + AsFd> AnsiTerminal<W, R> {
    /// Wrap an output and an input stream.
    pub const fn new(output: W, input: R) -> Self {
        Self {
            output,
            input,
            cursor_hidden: false,
        }
    }
}

impl<W: Write, R: Read + AsFd> Surface for AnsiTerminal<W, R> {
    fn columns(&mut self) -> Result<u16, BreatheError> {
        let (columns, _rows) = terminal::size()?;
        Ok(columns)
    }

    fn cursor_row(&mut self) -> Result<u16, BreatheError> {
        query_row(&mut self.output, &mut self.input)
    }

    fn hide_cursor(&mut self) -> Result<(), BreatheError> {
        queue!(self.output, Hide)?;
        self.output.flush()?;
        self.cursor_hidden = true;
        Ok(())
    }

    fn show_cursor(&mut self) -> Result<(), BreatheError> {
        queue!(self.output, Show)?;
        self.output.flush()?;
        self.cursor_hidden = false;
        Ok(())
    }

    fn draw(&mut self, column: u16, row: u16, glyph: char) -> Result<(), BreatheError> {
        // crossterm counts from zero, the terminal from one.
        queue!(
            self.output,
            MoveTo(column.saturating_sub(1), row.saturating_sub(1)),
            Print(glyph)
        )?;
        self.output.flush()?;
        Ok(())
    }

    fn erase_line(&mut self) -> Result<(), BreatheError> {
        queue!(self.output, Print('\r'), Clear(ClearType::UntilNewLine))?;
        self.output.flush()?;
        Ok(())
    }
}

impl<W: Write, R: Read + AsFd> Drop for AnsiTerminal<W, R> {
    fn drop(&mut self) {
        if self.cursor_hidden {
            if let Err(e) = self.show_cursor() {
                warn!("failed to restore cursor: {e}");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::os::unix::net::UnixStream;

    fn terminal() -> AnsiTerminal<Vec<u8>, UnixStream> {
        let (_tty, input) = UnixStream::pair().unwrap();
        AnsiTerminal::new(Vec::new(), input)
    }

    fn written(terminal: &AnsiTerminal<Vec<u8>, UnixStream>) -> String {
        String::from_utf8(terminal.output.clone()).unwrap()
    }

    #[test]
    fn test_cursor_visibility_sequences() {
        let mut term = terminal();
        term.hide_cursor().unwrap();
        term.show_cursor().unwrap();
        assert_eq!(written(&term), "\x1b[?25l\x1b[?25h");
    }

    #[test]
    fn test_draw_uses_one_based_addressing() {
        let mut term = terminal();
        term.draw(1, 1, '*').unwrap();
        term.draw(80, 24, ' ').unwrap();
        assert_eq!(written(&term), "\x1b[1;1H*\x1b[24;80H ");
    }

    #[test]
    fn test_erase_line_sequence() {
        let mut term = terminal();
        term.erase_line().unwrap();
        assert_eq!(written(&term), "\r\x1b[K");
    }

    #[test]
    fn test_drop_shows_hidden_cursor() {
        struct Shared(std::rc::Rc<std::cell::RefCell<Vec<u8>>>);
        impl Write for Shared {
            fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
                self.0.borrow_mut().extend_from_slice(buf);
                Ok(buf.len())
            }
            fn flush(&mut self) -> io::Result<()> {
                Ok(())
            }
        }

        let bytes = std::rc::Rc::new(std::cell::RefCell::new(Vec::new()));
        let (_tty, input) = UnixStream::pair().unwrap();
        {
            let mut term = AnsiTerminal::new(Shared(bytes.clone()), input);
            term.hide_cursor().unwrap();
        }
        assert_eq!(&*bytes.borrow(), b"\x1b[?25l\x1b[?25h");
    }

    #[test]
    fn test_non_terminal_input_rejected() {
        let devnull = File::open("/dev/null").unwrap();
        assert!(matches!(
            ensure_interactive(&devnull),
            Err(BreatheError::NotATerminal)
        ));
    }
}
