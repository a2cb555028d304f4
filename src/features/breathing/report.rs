//! End-of-session summary.

use std::fmt;
use std::time::Duration;

/// How a session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEnd {
    /// The session budget elapsed.
    Completed,
    /// The user interrupted the session.
    Interrupted,
}

/// What happened during a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionReport {
    /// How the session ended.
    pub end: SessionEnd,
    /// Cycles that ran to completion.
    pub cycles: u32,
    /// Time from the first cycle to the end of the last one.
    pub elapsed: Duration,
}

impl SessionReport {
    /// Whether the session ran its full budget.
    #[must_use]
    pub fn is_completed(&self) -> bool {
        self.end == SessionEnd::Completed
    }
}

impl fmt::Display for SessionReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let heading = match self.end {
            SessionEnd::Completed => "Session finished!",
            SessionEnd::Interrupted => "Session interrupted.",
        };
        write!(
            f,
            "{heading} {} breath{} in {}",
            self.cycles,
            if self.cycles == 1 { "" } else { "s" },
            format_duration(self.elapsed)
        )
    }
}

/// Format a duration as a human-readable string.
#[must_use]
pub fn format_duration(d: Duration) -> String {
    let d = chrono::Duration::from_std(d).unwrap_or(chrono::Duration::MAX);
    let total_minutes = d.num_minutes();

    if total_minutes < 1 {
        let seconds = d.num_seconds();
        return format!("{} second{}", seconds, if seconds == 1 { "" } else { "s" });
    }

    let minutes = total_minutes;
    let seconds = d.num_seconds() % 60;
    if seconds > 0 {
        format!(
            "{} minute{}, {} second{}",
            minutes,
            if minutes == 1 { "" } else { "s" },
            seconds,
            if seconds == 1 { "" } else { "s" }
        )
    } else {
        format!("{} minute{}", minutes, if minutes == 1 { "" } else { "s" })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_duration() {
        assert_eq!(format_duration(Duration::from_secs(0)), "0 seconds");
        assert_eq!(format_duration(Duration::from_secs(1)), "1 second");
        assert_eq!(format_duration(Duration::from_secs(45)), "45 seconds");
        assert_eq!(format_duration(Duration::from_secs(60)), "1 minute");
        assert_eq!(format_duration(Duration::from_secs(132)), "2 minutes, 12 seconds");
        assert_eq!(format_duration(Duration::from_secs(61)), "1 minute, 1 second");
    }

    #[test]
    fn test_format_duration_drops_fractions() {
        assert_eq!(format_duration(Duration::from_millis(121_900)), "2 minutes, 1 second");
    }

    #[test]
    fn test_completed_report() {
        let report = SessionReport {
            end: SessionEnd::Completed,
            cycles: 11,
            elapsed: Duration::from_secs(121),
        };
        assert!(report.is_completed());
        assert_eq!(
            report.to_string(),
            "Session finished! 11 breaths in 2 minutes, 1 second"
        );
    }

    #[test]
    fn test_interrupted_report() {
        let report = SessionReport {
            end: SessionEnd::Interrupted,
            cycles: 1,
            elapsed: Duration::from_secs(20),
        };
        assert!(!report.is_completed());
        assert_eq!(report.to_string(), "Session interrupted. 1 breath in 20 seconds");
    }
}
