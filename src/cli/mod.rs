//! Command-line interface for breathe.

pub mod args;

pub use args::Cli;
