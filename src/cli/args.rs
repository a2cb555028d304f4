use clap::Parser;

use crate::config::{DEFAULT_EXHALE_SECONDS, DEFAULT_INHALE_SECONDS, DEFAULT_SESSION_MINUTES};

#[derive(Parser, Debug)]
#[command(name = "breathe")]
#[command(about = "Cardiac coherence breathing exercise from the comfort of your terminal")]
#[command(long_about = "breathe - Cardiac coherence breathing in your terminal

Feeling stressed out? Start breathe and follow along.

Breathe in calmly and evenly as the marker sweeps the terminal from the left
to the right, breathe out as the marker comes back to the left hand side.
Repeat. A five minute session will have a long lasting calming effect.

The marker eases in and out like a pendulum rather than moving at constant
speed. Press Ctrl+C at any time to stop.

EXAMPLES:
  breathe                   5.5s in, 5.5s out, for 2 minutes
  breathe -t 5              A five minute session
  breathe -i 4 -o 6         Shorter inhale, longer exhale")]
#[command(version)]
pub struct Cli {
    /// Breathe in duration in seconds
    #[arg(
        short = 'i',
        value_name = "SECONDS",
        default_value_t = DEFAULT_INHALE_SECONDS,
        value_parser = positive_seconds
    )]
    pub inhale: f64,

    /// Breathe out duration in seconds
    #[arg(
        short = 'o',
        value_name = "SECONDS",
        default_value_t = DEFAULT_EXHALE_SECONDS,
        value_parser = positive_seconds
    )]
    pub exhale: f64,

    /// Session duration in minutes
    ///
    /// No new breath starts once this much time has passed; the breath in
    /// progress always finishes.
    #[arg(
        short = 't',
        value_name = "MINUTES",
        default_value_t = DEFAULT_SESSION_MINUTES,
        value_parser = non_negative_minutes
    )]
    pub session: f64,
}

fn parse_finite(s: &str) -> Result<f64, String> {
    let value: f64 = s
        .trim()
        .parse()
        .map_err(|_| format!("'{s}' is not a number"))?;
    if value.is_finite() {
        Ok(value)
    } else {
        Err(format!("'{s}' is not a finite number"))
    }
}

fn positive_seconds(s: &str) -> Result<f64, String> {
    let value = parse_finite(s)?;
    if value > 0.0 {
        Ok(value)
    } else {
        Err("duration must be greater than zero".to_string())
    }
}

fn non_negative_minutes(s: &str) -> Result<f64, String> {
    let value = parse_finite(s)?;
    if value >= 0.0 {
        Ok(value)
    } else {
        Err("duration cannot be negative".to_string())
    }
}
