//! pocket-calc: four-function keypad calculator
//!
//! Starts the terminal calculator, or runs a key script headless with
//! `--keys`. See `pocket-calc --help`.

use std::io;
use std::process::ExitCode;

use clap::Parser;
use pocket_calc::cli::{run_batch, Cli, RunMode};
use pocket_calc::error::AppResult;
use pocket_calc::logging;

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> AppResult<()> {
    let cli = Cli::parse();
    logging::init(cli.log_level(), &cli.log_sink())?;

    match cli.mode() {
        RunMode::Batch { script } => {
            run_batch(&script, cli.format, &mut io::stdout(), &mut io::stderr())
        }
        RunMode::Interactive => run_interactive(),
    }
}

#[cfg(feature = "tui")]
fn run_interactive() -> AppResult<()> {
    pocket_calc::tui::run()
}

#[cfg(not(feature = "tui"))]
fn run_interactive() -> AppResult<()> {
    Err(pocket_calc::error::AppError::InteractiveUnavailable)
}
