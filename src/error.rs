//! Error types for breathe.

use thiserror::Error;

/// Errors that can occur while running a breathing session.
#[derive(Debug, Error)]
pub enum BreatheError {
    /// Standard input is not an interactive terminal.
    #[error("standard input is not an interactive terminal")]
    NotATerminal,

    /// Reading from or writing to the terminal failed.
    #[error("terminal I/O failed: {0}")]
    Terminal(#[from] std::io::Error),

    /// Installing a signal handler or polling the terminal failed.
    #[error("system call failed: {0}")]
    Signal(#[from] nix::errno::Errno),

    /// The terminal reports zero columns, so there is no line to sweep.
    #[error("terminal has zero columns")]
    ZeroWidth,

    /// A column index was outside `0..=columns`.
    #[error("column {column} is outside a {columns}-column line")]
    ColumnOutOfRange {
        /// Requested column.
        column: u16,
        /// Terminal width.
        columns: u16,
    },

    /// A duration was negative, zero where that is not allowed, or not finite.
    #[error("invalid {what} duration: {value}")]
    InvalidDuration {
        /// Which duration was rejected.
        what: &'static str,
        /// The rejected value.
        value: f64,
    },
}
