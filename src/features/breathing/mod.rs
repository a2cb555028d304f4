//! Guided breathing sessions.
//!
//! A marker sweeps the terminal line from left to right while the user
//! breathes in and comes back while they breathe out:
//! - Per-column schedule from the half-cosine easing
//! - Cycle driver pacing redraws against a monotonic anchor
//! - Session loop with budget, interrupt handling and cleanup

pub mod cycle;
pub mod report;
pub mod schedule;
pub mod session;

pub use cycle::{CycleDriver, CycleOutcome, CycleStats, BLANK, MARKER};
pub use report::{format_duration, SessionEnd, SessionReport};
pub use schedule::{CycleSchedule, Frame};
pub use session::Session;
