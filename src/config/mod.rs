//! Configuration for breathe.
//!
//! There is no configuration file; the session is described entirely by the
//! three durations given on the command line.

mod params;

pub use params::{
    SessionParams, DEFAULT_EXHALE_SECONDS, DEFAULT_INHALE_SECONDS, DEFAULT_SESSION_MINUTES,
};
