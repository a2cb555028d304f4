//! Feature implementations for breathe.
//!
//! - Breathing: eased marker sweeps, cycle pacing and the session loop

pub mod breathing;
