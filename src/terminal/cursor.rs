//! Cursor position query (`ESC[6n`).

use std::io::{ErrorKind, Read, Write};
use std::os::fd::AsFd;

use log::debug;
use nix::errno::Errno;
use nix::poll::{poll, PollFd, PollFlags};
use nix::sys::signal::{raise, Signal};
use nix::sys::termios::{tcflush, FlushArg};
use once_cell::sync::Lazy;
use regex::bytes::Regex;

use crate::error::BreatheError;
use crate::terminal::RawModeGuard;

/// Request the terminal to report the cursor position.
pub const QUERY: &[u8] = b"\x1b[6n";

/// Byte a raw-mode terminal sends for Ctrl+C.
pub const CTRL_C: u8 = 0x03;

/// Row used when the terminal answer cannot be understood.
pub const FALLBACK_ROW: u16 = 1;

/// Longest report, counted from its `ESC [`, before giving up on the `R`.
pub const MAX_RESPONSE_LEN: usize = 32;

/// Most bytes of other input skipped while waiting for the report to start.
pub const MAX_STRAY_LEN: usize = 256;

const REPORT_START: &[u8] = b"\x1b[";

/// How long to wait for each byte of the answer, in milliseconds.
pub const RESPONSE_TIMEOUT_MS: u16 = 500;

static POSITION_PATTERN: Lazy<Regex> = Lazy::new(|| {
    // ESC [ row ; col R, possibly preceded by stray input
    Regex::new(r"\x1b\[(\d+);(\d+)R$").unwrap_or_else(|e| panic!("Invalid position regex: {e}"))
});

/// Parse a cursor position report into `(row, column)`.
#[must_use]
pub fn parse_response(response: &[u8]) -> Option<(u16, u16)> {
    let caps = POSITION_PATTERN.captures(response)?;
    let row = std::str::from_utf8(caps.get(1)?.as_bytes()).ok()?.parse().ok()?;
    let column = std::str::from_utf8(caps.get(2)?.as_bytes()).ok()?.parse().ok()?;
    Some((row, column))
}

/// Drop input that is waiting to be read, such as keys typed during a sweep.
///
/// # Errors
///
/// Returns an error if `input` is not a terminal.
pub fn discard_pending<F: AsFd>(input: F) -> Result<(), BreatheError> {
    tcflush(input, FlushArg::TCIFLUSH)?;
    Ok(())
}

/// Read an answer from `input` up to and including the `R` that ends the
/// report.
///
/// Only an `R` after the last `ESC [` ends the read, so keys typed before
/// the report arrives are skipped over; every byte read is returned. Stops
/// early, returning what was read so far, when no byte arrives within
/// `timeout_ms`, when the input closes, when a signal interrupts the wait,
/// after [`MAX_STRAY_LEN`] bytes with no report started, or after
/// [`MAX_RESPONSE_LEN`] bytes of report.
///
/// # Errors
///
/// Returns an error if polling or reading fails for another reason.
pub fn read_response<R: Read + AsFd>(input: &mut R, timeout_ms: u16) -> Result<Vec<u8>, BreatheError> {
    let mut response = Vec::new();
    let mut report_start = None;
    let mut byte = [0u8; 1];

    loop {
        let full = match report_start {
            Some(start) => response.len() - start >= MAX_RESPONSE_LEN,
            None => response.len() >= MAX_STRAY_LEN,
        };
        if full {
            break;
        }

        let ready = {
            let mut fds = [PollFd::new(input.as_fd(), PollFlags::POLLIN)];
            match poll(&mut fds, timeout_ms) {
                Ok(n) => n > 0,
                Err(Errno::EINTR) => break,
                Err(e) => return Err(e.into()),
            }
        };
        if !ready {
            break;
        }

        match input.read(&mut byte) {
            Ok(0) => break,
            Ok(_) => {
                response.push(byte[0]);
                if response.ends_with(REPORT_START) {
                    report_start = Some(response.len() - REPORT_START.len());
                } else if byte[0] == b'R' && report_start.is_some() {
                    break;
                }
            }
            Err(e) if e.kind() == ErrorKind::Interrupted => break,
            Err(e) => return Err(e.into()),
        }
    }

    Ok(response)
}

/// Ask the terminal which row the cursor is on.
///
/// The query is written to `output` and the answer read from `input` with the
/// terminal in raw mode; the previous mode is restored before returning, on
/// every path. Input typed before the query is discarded first. An unreadable
/// answer yields [`FALLBACK_ROW`]. A Ctrl+C typed while the answer was awaited
/// is re-raised as `SIGINT`.
///
/// # Errors
///
/// Returns an error if raw mode cannot be entered or the terminal cannot be
/// written or read.
pub fn query_row<W: Write, R: Read + AsFd>(output: &mut W, input: &mut R) -> Result<u16, BreatheError> {
    let response = {
        let _raw = RawModeGuard::acquire()?;
        if let Err(e) = discard_pending(input.as_fd()) {
            debug!("could not discard pending input: {e}");
        }
        output.write_all(QUERY)?;
        output.flush()?;
        read_response(input, RESPONSE_TIMEOUT_MS)?
    };

    // Raw mode turns Ctrl+C into a plain byte; deliver it as the signal.
    if response.contains(&CTRL_C) {
        raise(Signal::SIGINT)?;
    }

    Ok(match parse_response(&response) {
        Some((row, _)) => row.max(1),
        None => {
            debug!("unreadable cursor report {response:?}, using row {FALLBACK_ROW}");
            FALLBACK_ROW
        }
    })
}
