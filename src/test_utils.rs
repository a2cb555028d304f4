//! Virtual time and a recording terminal for driver and session tests.

use std::cell::{Cell, RefCell};
use std::rc::Rc;
use std::time::{Duration, Instant};

use crate::core::{Clock, Interrupt, Surface, Wake};
use crate::error::BreatheError;

/// Clock whose time only moves when something sleeps or charges a cost.
#[derive(Debug)]
pub struct VirtualClock {
    origin: Instant,
    elapsed: Cell<Duration>,
    pauses: RefCell<Vec<Duration>>,
}

impl VirtualClock {
    pub fn new() -> Rc<Self> {
        Rc::new(Self {
            origin: Instant::now(),
            elapsed: Cell::new(Duration::ZERO),
            pauses: RefCell::new(Vec::new()),
        })
    }

    /// Move time forward without sleeping.
    pub fn advance(&self, by: Duration) {
        self.elapsed.set(self.elapsed.get() + by);
    }

    /// Total virtual time since creation.
    pub fn elapsed(&self) -> Duration {
        self.elapsed.get()
    }

    /// Every pause requested so far.
    pub fn pauses(&self) -> Vec<Duration> {
        self.pauses.borrow().clone()
    }
}

impl Clock for VirtualClock {
    fn now(&self) -> Instant {
        self.origin + self.elapsed.get()
    }

    fn pause(&self, duration: Duration, interrupt: &Interrupt) -> Wake {
        if interrupt.is_raised() {
            return Wake::Interrupted;
        }
        self.pauses.borrow_mut().push(duration);
        self.advance(duration);
        Wake::Elapsed
    }
}

/// Terminal operation seen by [`RecordingSurface`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Op {
    HideCursor,
    ShowCursor,
    Draw { column: u16, row: u16, glyph: char },
    EraseLine,
}

/// Surface that records every operation and can simulate slow rendering.
#[derive(Debug)]
pub struct RecordingSurface {
    pub ops: Vec<Op>,
    columns: u16,
    row: u16,
    clock: Rc<VirtualClock>,
    draw_cost: Duration,
    interrupt_after: Option<(usize, Interrupt)>,
    draws: usize,
}

impl RecordingSurface {
    pub fn new(columns: u16, row: u16, clock: Rc<VirtualClock>) -> Self {
        Self {
            ops: Vec::new(),
            columns,
            row,
            clock,
            draw_cost: Duration::ZERO,
            interrupt_after: None,
            draws: 0,
        }
    }

    /// Charge `cost` of virtual time to every draw call.
    pub fn with_draw_cost(mut self, cost: Duration) -> Self {
        self.draw_cost = cost;
        self
    }

    /// Raise `interrupt` once `draws` draw calls have happened.
    pub fn with_interrupt_after(mut self, draws: usize, interrupt: Interrupt) -> Self {
        self.interrupt_after = Some((draws, interrupt));
        self
    }

    /// Glyphs drawn so far, in order.
    pub fn drawn(&self) -> Vec<(u16, char)> {
        self.ops
            .iter()
            .filter_map(|op| match op {
                Op::Draw { column, glyph, .. } => Some((*column, *glyph)),
                _ => None,
            })
            .collect()
    }

    /// Whether the cursor is visible after the recorded operations.
    pub fn cursor_visible(&self) -> bool {
        !matches!(
            self.ops
                .iter()
                .rev()
                .find(|op| matches!(op, Op::HideCursor | Op::ShowCursor)),
            Some(Op::HideCursor)
        )
    }
}

impl Surface for RecordingSurface {
    fn columns(&mut self) -> Result<u16, BreatheError> {
        Ok(self.columns)
    }

    fn cursor_row(&mut self) -> Result<u16, BreatheError> {
        Ok(self.row)
    }

    fn hide_cursor(&mut self) -> Result<(), BreatheError> {
        self.ops.push(Op::HideCursor);
        Ok(())
    }

    fn show_cursor(&mut self) -> Result<(), BreatheError> {
        self.ops.push(Op::ShowCursor);
        Ok(())
    }

    fn draw(&mut self, column: u16, row: u16, glyph: char) -> Result<(), BreatheError> {
        self.ops.push(Op::Draw { column, row, glyph });
        self.clock.advance(self.draw_cost);
        self.draws += 1;
        if let Some((after, interrupt)) = &self.interrupt_after {
            if self.draws >= *after {
                interrupt.raise();
            }
        }
        Ok(())
    }

    fn erase_line(&mut self) -> Result<(), BreatheError> {
        self.ops.push(Op::EraseLine);
        Ok(())
    }
}
