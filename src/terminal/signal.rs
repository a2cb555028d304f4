//! Turns SIGINT and SIGTERM into a raised [`Interrupt`].

use std::ffi::c_int;

use nix::sys::signal::{sigaction, SaFlags, SigAction, SigHandler, SigSet, Signal};
use once_cell::sync::OnceCell;

use crate::core::Interrupt;
use crate::error::BreatheError;

/// Signals that stop a session.
pub const STOP_SIGNALS: [Signal; 2] = [Signal::SIGINT, Signal::SIGTERM];

static INTERRUPT: OnceCell<Interrupt> = OnceCell::new();

extern "C" fn on_stop_signal(_: c_int) {
    if let Some(interrupt) = INTERRUPT.get() {
        interrupt.raise();
    }
}

/// Install the stop-signal handlers and return the flag they raise.
///
/// Installing more than once is harmless and returns the same flag. The
/// handlers do not restart interrupted system calls, so a pending cursor
/// query gives up as soon as a signal arrives.
///
/// # Errors
///
/// Returns an error if a handler cannot be installed.
pub fn install_interrupt_handler() -> Result<Interrupt, BreatheError> {
    let interrupt = INTERRUPT.get_or_init(Interrupt::new).clone();
    let action = SigAction::new(
        SigHandler::Handler(on_stop_signal),
        SaFlags::empty(),
        SigSet::empty(),
    );

    for signal in STOP_SIGNALS {
        // SAFETY: the handler only performs an atomic store through a value
        // initialized before the handler is installed.
        #[allow(unsafe_code)]
        unsafe {
            sigaction(signal, &action)?;
        }
    }

    Ok(interrupt)
}
