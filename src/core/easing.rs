//! Half-cosine easing for the sweeping marker.
//!
//! The marker position over one phase follows
//! `x(t) = 0.5 * columns * (1 - cos(π * (t - t0) / Δt))`,
//! which starts and ends at rest. Solving for `t` gives the time at which the
//! marker reaches a given column:
//! `t = t0 + Δt * acos(1 - 2 * x / columns) / π`.

use std::f64::consts::PI;

use crate::error::BreatheError;

/// Time (in seconds from cycle start) at which the marker reaches `column`.
///
/// `duration` is the length of the phase in seconds and `time_offset` the
/// phase start relative to cycle start. `column` must lie in `0..=columns`.
///
/// # Errors
///
/// Returns `BreatheError::ZeroWidth` when `columns` is zero,
/// `BreatheError::ColumnOutOfRange` when `column > columns`, and
/// `BreatheError::InvalidDuration` when `duration` is not a positive finite
/// number.
pub fn time_at_pos(
    columns: u16,
    duration: f64,
    column: u16,
    time_offset: f64,
) -> Result<f64, BreatheError> {
    if columns == 0 {
        return Err(BreatheError::ZeroWidth);
    }
    if column > columns {
        return Err(BreatheError::ColumnOutOfRange { column, columns });
    }
    if !duration.is_finite() || duration <= 0.0 {
        return Err(BreatheError::InvalidDuration {
            what: "phase",
            value: duration,
        });
    }

    // Rounding can push the endpoints a hair outside the acos domain.
    let cosine = (1.0 - 2.0 * f64::from(column) / f64::from(columns)).clamp(-1.0, 1.0);
    Ok(time_offset + duration * cosine.acos() / PI)
}

/// Marker position (in columns) `elapsed` seconds into a phase of `duration`.
#[must_use]
pub fn position_at_time(columns: u16, duration: f64, elapsed: f64) -> f64 {
    0.5 * f64::from(columns) * (1.0 - (PI * elapsed / duration).cos())
}
