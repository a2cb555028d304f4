//! breathe - Cardiac coherence breathing in the terminal
//!
//! A marker sweeps the current terminal line with a half-cosine ease: breathe
//! in while it travels right, breathe out while it comes back. Redraws are
//! paced against a monotonic anchor per cycle so the rhythm does not drift.

#![deny(unsafe_code)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod features;
pub mod terminal;

#[cfg(test)]
mod test_utils;

pub use cli::Cli;
pub use config::SessionParams;
pub use error::BreatheError;
pub use features::breathing::{Session, SessionEnd, SessionReport};
