//! Session parameters.
//!
//! The only knobs are the three durations taken from the command line.

use std::time::Duration;

use crate::cli::args::Cli;
use crate::error::BreatheError;

/// Default inhale duration in seconds.
pub const DEFAULT_INHALE_SECONDS: f64 = 5.5;

/// Default exhale duration in seconds.
pub const DEFAULT_EXHALE_SECONDS: f64 = 5.5;

/// Default session duration in minutes.
pub const DEFAULT_SESSION_MINUTES: f64 = 2.0;

/// Validated durations for one session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionParams {
    /// Time for the marker to sweep left to right.
    pub inhale: Duration,
    /// Time for the marker to sweep back.
    pub exhale: Duration,
    /// Budget after which no new cycle starts.
    pub session: Duration,
}

impl SessionParams {
    /// Build parameters from seconds, seconds and minutes.
    ///
    /// # Errors
    ///
    /// Returns `BreatheError::InvalidDuration` if a phase is not strictly
    /// positive, if the session is negative, or if any value is not finite.
    pub fn new(
        inhale_seconds: f64,
        exhale_seconds: f64,
        session_minutes: f64,
    ) -> Result<Self, BreatheError> {
        Ok(Self {
            inhale: phase("inhale", inhale_seconds)?,
            exhale: phase("exhale", exhale_seconds)?,
            session: Duration::try_from_secs_f64(session_minutes * 60.0)
                .map_err(|_| invalid("session", session_minutes))?,
        })
    }

    /// Nominal length of one inhale + exhale cycle.
    #[must_use]
    pub fn cycle(&self) -> Duration {
        self.inhale.saturating_add(self.exhale)
    }
}

impl Default for SessionParams {
    fn default() -> Self {
        Self {
            inhale: Duration::from_secs_f64(DEFAULT_INHALE_SECONDS),
            exhale: Duration::from_secs_f64(DEFAULT_EXHALE_SECONDS),
            session: Duration::from_secs_f64(DEFAULT_SESSION_MINUTES * 60.0),
        }
    }
}

impl TryFrom<&Cli> for SessionParams {
    type Error = BreatheError;

    fn try_from(cli: &Cli) -> Result<Self, Self::Error> {
        Self::new(cli.inhale, cli.exhale, cli.session)
    }
}

fn phase(what: &'static str, value: f64) -> Result<Duration, BreatheError> {
    match Duration::try_from_secs_f64(value) {
        Ok(duration) if !duration.is_zero() => Ok(duration),
        _ => Err(invalid(what, value)),
    }
}

fn invalid(what: &'static str, value: f64) -> BreatheError {
    BreatheError::InvalidDuration { what, value }
}
