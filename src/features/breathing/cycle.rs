//! One inhale + exhale sweep of the marker.

use std::time::Duration;

use log::debug;

use crate::core::{Clock, Geometry, Interrupt, Surface, Wake};
use crate::error::BreatheError;
use crate::features::breathing::CycleSchedule;

/// Glyph drawn at the marker position.
pub const MARKER: char = '*';

/// Glyph used to erase the marker.
pub const BLANK: char = ' ';

/// Result of driving one cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CycleOutcome {
    /// Every frame was drawn.
    Completed(CycleStats),
    /// The interrupt was raised mid-sweep.
    Interrupted,
}

/// Timing figures for a completed cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CycleStats {
    /// Frames drawn.
    pub frames: usize,
    /// Frames whose slot had already passed once they were drawn.
    pub overruns: usize,
    /// Time from the anchor to the last erase.
    pub elapsed: Duration,
}

/// Drives the marker through one cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CycleDriver {
    inhale: Duration,
    exhale: Duration,
}

impl CycleDriver {
    /// Create a driver for the given phase durations.
    #[must_use]
    pub const fn new(inhale: Duration, exhale: Duration) -> Self {
        Self { inhale, exhale }
    }

    /// Nominal length of one cycle.
    #[must_use]
    pub fn period(&self) -> Duration {
        self.inhale.saturating_add(self.exhale)
    }

    /// Sweep the marker out and back once.
    ///
    /// Every wait is measured from a single anchor taken before the first
    /// frame, so drawing cost never accumulates into drift. A frame drawn
    /// after its slot is followed immediately by the next one; no column is
    /// skipped.
    ///
    /// # Errors
    ///
    /// Returns an error if the terminal cannot be queried or written, or if
    /// it has zero columns.
    pub fn run<S, C>(
        &self,
        surface: &mut S,
        clock: &C,
        interrupt: &Interrupt,
    ) -> Result<CycleOutcome, BreatheError>
    where
        S: Surface + ?Sized,
        C: Clock + ?Sized,
    {
        let geometry = Geometry::sample(&mut *surface)?;
        let schedule = CycleSchedule::build(geometry.columns, self.inhale, self.exhale)?;
        debug!(
            "cycle: {} columns on row {}, {} frames over {:?}",
            geometry.columns,
            geometry.row,
            schedule.len(),
            schedule.span()
        );

        let anchor = clock.now();
        let mut overruns = 0;
        for frame in schedule.frames() {
            surface.draw(frame.column, geometry.row, MARKER)?;

            let elapsed = clock.now().saturating_duration_since(anchor);
            if elapsed > frame.at {
                overruns += 1;
            }
            let remaining = frame.at.saturating_sub(elapsed);
            if clock.pause(remaining, interrupt) == Wake::Interrupted {
                debug!("cycle interrupted at column {}", frame.column);
                return Ok(CycleOutcome::Interrupted);
            }

            surface.draw(frame.column, geometry.row, BLANK)?;
        }

        let stats = CycleStats {
            frames: schedule.len(),
            overruns,
            elapsed: clock.now().saturating_duration_since(anchor),
        };
        debug!(
            "cycle done in {:?} ({} of {} frames late)",
            stats.elapsed, stats.overruns, stats.frames
        );
        Ok(CycleOutcome::Completed(stats))
    }
}
