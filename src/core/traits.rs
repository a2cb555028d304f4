//! Seams between the animation engine and the outside world.
//!
//! The cycle driver and session loop only talk to the terminal through
//! [`Surface`] and to time through [`Clock`], so both can be replaced by
//! virtual implementations in tests.

use std::time::{Duration, Instant};

use crate::core::Interrupt;
use crate::error::BreatheError;

/// Width of the terminal and the row the marker is drawn on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Geometry {
    /// Number of columns, always at least one.
    pub columns: u16,
    /// 1-based row of the marker.
    pub row: u16,
}

impl Geometry {
    /// Create a geometry, rejecting a zero-width terminal.
    ///
    /// # Errors
    ///
    /// Returns `BreatheError::ZeroWidth` if `columns` is zero.
    pub const fn new(columns: u16, row: u16) -> Result<Self, BreatheError> {
        if columns == 0 {
            return Err(BreatheError::ZeroWidth);
        }
        Ok(Self { columns, row })
    }

    /// Sample the geometry used for one cycle: width first, then row.
    ///
    /// # Errors
    ///
    /// Returns an error if the terminal cannot be queried or has zero columns.
    pub fn sample<S: Surface + ?Sized>(surface: &mut S) -> Result<Self, BreatheError> {
        let columns = surface.columns()?;
        let row = surface.cursor_row()?;
        Self::new(columns, row)
    }
}

/// A terminal the marker can be drawn on.
///
/// Columns and rows are 1-based, matching the ANSI cursor addressing.
#[cfg_attr(test, mockall::automock)]
pub trait Surface {
    /// Current terminal width in columns.
    fn columns(&mut self) -> Result<u16, BreatheError>;

    /// Row the cursor currently sits on.
    fn cursor_row(&mut self) -> Result<u16, BreatheError>;

    /// Hide the cursor.
    fn hide_cursor(&mut self) -> Result<(), BreatheError>;

    /// Show the cursor.
    fn show_cursor(&mut self) -> Result<(), BreatheError>;

    /// Write `glyph` at (`column`, `row`).
    fn draw(&mut self, column: u16, row: u16, glyph: char) -> Result<(), BreatheError>;

    /// Erase the line the cursor is on and return to its first column.
    fn erase_line(&mut self) -> Result<(), BreatheError>;
}

/// Why a [`Clock::pause`] returned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Wake {
    /// The full duration elapsed.
    Elapsed,
    /// The interrupt was raised before the duration elapsed.
    Interrupted,
}

/// Monotonic time source with an interruptible sleep.
pub trait Clock {
    /// Current monotonic time.
    fn now(&self) -> Instant;

    /// Block for `duration`, returning early once `interrupt` is raised.
    ///
    /// A zero duration must still report a pending interrupt.
    fn pause(&self, duration: Duration, interrupt: &Interrupt) -> Wake;
}
