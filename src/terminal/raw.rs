//! Scoped raw mode.

use crossterm::terminal::{disable_raw_mode, enable_raw_mode, is_raw_mode_enabled};
use log::warn;

use crate::error::BreatheError;

/// Keeps the terminal in raw mode until dropped.
///
/// Dropping restores the mode that was active when the guard was acquired, so
/// the terminal is never left raw even if the code holding the guard fails.
#[derive(Debug)]
pub struct RawModeGuard {
    restore: bool,
}

impl RawModeGuard {
    /// Switch the terminal to raw mode (no echo, no line buffering).
    ///
    /// If raw mode is already on, the guard leaves it on when dropped.
    ///
    /// # Errors
    ///
    /// Returns an error if the terminal attributes cannot be read or set.
    pub fn acquire() -> Result<Self, BreatheError> {
        if is_raw_mode_enabled()? {
            return Ok(Self { restore: false });
        }
        enable_raw_mode()?;
        Ok(Self { restore: true })
    }
}

impl Drop for RawModeGuard {
    fn drop(&mut self) {
        if self.restore {
            if let Err(e) = disable_raw_mode() {
                warn!("failed to leave raw mode: {e}");
            }
        }
    }
}
