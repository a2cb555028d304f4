//! Column-to-time schedule for one breathing cycle.

use std::time::Duration;

use crate::core::time_at_pos;
use crate::error::BreatheError;

/// The marker visits `column` at `at` after cycle start.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Frame {
    /// 1-based column.
    pub column: u16,
    /// Offset from the cycle anchor.
    pub at: Duration,
}

/// Every frame of one inhale sweep followed by one exhale sweep.
///
/// Frame times are non-decreasing, so the schedule can be walked in order
/// against a single clock anchor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CycleSchedule {
    frames: Vec<Frame>,
}

impl CycleSchedule {
    /// Build the schedule for a `columns`-wide line.
    ///
    /// The inhale sweep visits `1..=columns` over `inhale`. The exhale sweep
    /// then visits `columns..=1` over `exhale`, its k-th frame eased the same
    /// way as the k-th inhale frame.
    ///
    /// # Errors
    ///
    /// Returns an error if `columns` is zero or either phase is empty.
    pub fn build(columns: u16, inhale: Duration, exhale: Duration) -> Result<Self, BreatheError> {
        let inhale_secs = inhale.as_secs_f64();
        let exhale_secs = exhale.as_secs_f64();

        let mut frames = Vec::with_capacity(2 * usize::from(columns));
        for column in 1..=columns {
            let at = time_at_pos(columns, inhale_secs, column, 0.0)?;
            frames.push(Frame {
                column,
                at: offset(at)?,
            });
        }
        for step in 1..=columns {
            let at = time_at_pos(columns, exhale_secs, step, inhale_secs)?;
            frames.push(Frame {
                column: columns - step + 1,
                at: offset(at)?,
            });
        }

        if frames.is_empty() {
            return Err(BreatheError::ZeroWidth);
        }
        Ok(Self { frames })
    }

    /// Frames in the order they are drawn.
    #[must_use]
    pub fn frames(&self) -> &[Frame] {
        &self.frames
    }

    /// Number of frames.
    #[must_use]
    pub fn len(&self) -> usize {
        self.frames.len()
    }

    /// Whether the schedule has no frames.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    /// Time of the last frame, i.e. the nominal cycle length.
    #[must_use]
    pub fn span(&self) -> Duration {
        self.frames.last().map_or(Duration::ZERO, |frame| frame.at)
    }
}

fn offset(seconds: f64) -> Result<Duration, BreatheError> {
    Duration::try_from_secs_f64(seconds).map_err(|_| BreatheError::InvalidDuration {
        what: "frame",
        value: seconds,
    })
}
