use std::io::{self, Write};

use anyhow::{Context, Result};
use clap::Parser;
use colored::Colorize;

use breathe::core::SystemClock;
use breathe::terminal::{self, AnsiTerminal};
use breathe::{Cli, Session, SessionParams, SessionReport};

fn main() {
    // Off unless RUST_LOG asks for it; log lines would break the marker line.
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("off")).init();

    // Before argument parsing: without a terminal nothing is printed, not
    // even usage errors or help.
    if let Err(e) = terminal::ensure_interactive(&io::stdin()) {
        log::debug!("refusing to start: {e}");
        std::process::exit(1);
    }

    let cli = Cli::parse();
    let code = finish(run(&cli), &mut io::stdout(), &mut io::stderr());
    std::process::exit(code);
}

fn run(cli: &Cli) -> Result<SessionReport> {
    let params = SessionParams::try_from(cli).context("invalid session parameters")?;
    let interrupt =
        terminal::install_interrupt_handler().context("failed to install signal handlers")?;
    let mut surface = AnsiTerminal::stdio().context("failed to open the terminal")?;

    let report = Session::new(&mut surface, &SystemClock, interrupt, params)
        .run()
        .context("breathing session failed")?;
    log::info!("{report}");
    Ok(report)
}

/// Print the outcome of a session and return the exit status.
///
/// A completed session prints its summary, an interrupted one prints nothing.
/// Both exit with 0.
fn finish(outcome: Result<SessionReport>, out: &mut impl Write, err: &mut impl Write) -> i32 {
    match outcome {
        Ok(report) => {
            if report.is_completed() {
                // Nowhere left to report a failed write.
                let _ = writeln!(out, "{}", report.to_string().green());
            }
            0
        }
        Err(e) => {
            let _ = writeln!(err, "{}: {:#}", "error".red().bold(), e);
            1
        }
    }
}
