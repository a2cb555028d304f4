//! Repeats breathing cycles until the session budget is spent.

use log::{debug, info};

use crate::config::SessionParams;
use crate::core::{Clock, Interrupt, Surface};
use crate::error::BreatheError;
use crate::features::breathing::{CycleDriver, CycleOutcome, SessionEnd, SessionReport};

/// A breathing session bound to a terminal and a clock.
pub struct Session<'a, S: Surface + ?Sized, C: Clock + ?Sized> {
    surface: &'a mut S,
    clock: &'a C,
    interrupt: Interrupt,
    params: SessionParams,
}

impl<'a, S: Surface + ?Sized, C: Clock + ?Sized> Session<'a, S, C> {
    /// Create a session. Nothing is drawn until [`Session::run`].
    pub fn new(surface: &'a mut S, clock: &'a C, interrupt: Interrupt, params: SessionParams) -> Self {
        Self {
            surface,
            clock,
            interrupt,
            params,
        }
    }

    /// Hide the cursor, breathe until the budget elapses or the interrupt is
    /// raised, then erase the line and show the cursor again.
    ///
    /// The budget is checked before each cycle and is inclusive, so a cycle
    /// that starts in time always runs to its end. A zero budget gives exactly
    /// one cycle.
    ///
    /// The terminal is restored on every path, including errors.
    ///
    /// # Errors
    ///
    /// Returns an error if the terminal cannot be queried or written.
    pub fn run(mut self) -> Result<SessionReport, BreatheError> {
        info!(
            "starting session: inhale {:?}, exhale {:?}, budget {:?}",
            self.params.inhale, self.params.exhale, self.params.session
        );

        let outcome = self
            .surface
            .hide_cursor()
            .and_then(|()| self.breathe());
        let restored = self.restore();

        let report = outcome?;
        restored?;
        debug!("session over: {report:?}");
        Ok(report)
    }

    fn breathe(&mut self) -> Result<SessionReport, BreatheError> {
        let driver = CycleDriver::new(self.params.inhale, self.params.exhale);
        let start = self.clock.now();
        let mut cycles = 0;

        let end = loop {
            let elapsed = self.clock.now().saturating_duration_since(start);
            if elapsed > self.params.session {
                break SessionEnd::Completed;
            }
            if self.interrupt.is_raised() {
                break SessionEnd::Interrupted;
            }
            match driver.run(&mut *self.surface, self.clock, &self.interrupt)? {
                CycleOutcome::Completed(_) => cycles += 1,
                CycleOutcome::Interrupted => break SessionEnd::Interrupted,
            }
        };

        Ok(SessionReport {
            end,
            cycles,
            elapsed: self.clock.now().saturating_duration_since(start),
        })
    }

    /// Erase the marker line and show the cursor. Safe to call repeatedly.
    fn restore(&mut self) -> Result<(), BreatheError> {
        let erased = self.surface.erase_line();
        let shown = self.surface.show_cursor();
        erased.and(shown)
    }
}
