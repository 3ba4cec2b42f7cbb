//! Command-line surface and batch mode
//!
//! ## Usage
//!
//! ```bash
//! pocket-calc                          # Interactive terminal calculator
//! pocket-calc --keys "12+7="           # Run keys headless, print the display
//! pocket-calc --keys "5/0=" --format json
//! pocket-calc --log-file calc.log -vv  # Debug log of every transition
//! ```

use std::io::Write;
use std::path::PathBuf;

use clap::{ArgAction, Parser, ValueEnum};
use serde::Serialize;
use tracing::Level;

use crate::driver::{CalculatorDriver, HeadlessDriver};
use crate::error::AppResult;
use crate::input::Script;

/// Four-function keypad calculator
#[derive(Debug, Parser)]
#[command(name = "pocket-calc", version, about)]
pub struct Cli {
    /// Run a key script without the terminal UI and print the final display.
    /// Characters are keys; `Enter`, `Escape` and `Backspace` are named keys.
    #[arg(short, long, value_name = "SCRIPT", allow_hyphen_values = true)]
    pub keys: Option<String>,

    /// Output format for batch mode
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Write logs to this file
    #[arg(long, value_name = "PATH", env = "POCKET_CALC_LOG")]
    pub log_file: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

/// Batch output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Upper display line, then lower display line
    #[default]
    Text,
    /// One JSON object with both lines and the alerts
    Json,
}

/// What the binary should do
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunMode {
    /// Interactive terminal UI
    Interactive,
    /// Headless run of a key script
    Batch {
        /// Script source
        script: String,
    },
}

/// Where log output goes
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogSink {
    /// Append to a file
    File(PathBuf),
    /// Standard error
    Stderr,
    /// Logging disabled
    Off,
}

impl Cli {
    /// Selects the run mode from the arguments
    #[must_use]
    pub fn mode(&self) -> RunMode {
        match &self.keys {
            Some(script) => RunMode::Batch {
                script: script.clone(),
            },
            None => RunMode::Interactive,
        }
    }

    /// Maximum level logged when `RUST_LOG` is unset
    #[must_use]
    pub fn log_level(&self) -> Level {
        match self.verbose {
            0 => Level::WARN,
            1 => Level::INFO,
            _ => Level::DEBUG,
        }
    }

    /// Log destination
    ///
    /// The terminal UI owns the screen, so without a log file interactive
    /// sessions do not log at all.
    #[must_use]
    pub fn log_sink(&self) -> LogSink {
        match (&self.log_file, self.mode()) {
            (Some(path), _) => LogSink::File(path.clone()),
            (None, RunMode::Batch { .. }) => LogSink::Stderr,
            (None, RunMode::Interactive) => LogSink::Off,
        }
    }
}

#[derive(Serialize)]
struct BatchReport<'a> {
    previous: &'a str,
    current: &'a str,
    alerts: &'a [String],
}

/// Runs a key script headless and writes the final display
///
/// Alerts go to `err` as `alert: <message>` lines in text mode and into the
/// `alerts` array in JSON mode.
pub fn run_batch(
    source: &str,
    format: OutputFormat,
    out: &mut impl Write,
    err: &mut impl Write,
) -> AppResult<()> {
    let script = Script::parse(source)?;
    tracing::info!(actions = script.len(), "running batch script");

    let mut driver = HeadlessDriver::new();
    driver.press_script(&script);
    let display = driver.display();
    let alerts = driver.alerts();

    match format {
        OutputFormat::Text => {
            for alert in &alerts {
                writeln!(err, "alert: {alert}")?;
            }
            writeln!(out, "{}", display.previous)?;
            writeln!(out, "{}", display.current)?;
        }
        OutputFormat::Json => {
            let report = BatchReport {
                previous: &display.previous,
                current: &display.current,
                alerts: &alerts,
            };
            serde_json::to_writer(&mut *out, &report)?;
            writeln!(out)?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AppError;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("pocket-calc").chain(args.iter().copied())).unwrap()
    }

    fn batch(source: &str, format: OutputFormat) -> (AppResult<()>, String, String) {
        let mut out = Vec::new();
        let mut err = Vec::new();
        let result = run_batch(source, format, &mut out, &mut err);
        (
            result,
            String::from_utf8(out).unwrap(),
            String::from_utf8(err).unwrap(),
        )
    }

    // ===== Argument tests =====

    #[test]
    fn test_no_args_is_interactive() {
        let cli = parse(&[]);
        assert_eq!(cli.mode(), RunMode::Interactive);
        assert_eq!(cli.format, OutputFormat::Text);
        assert_eq!(cli.log_sink(), LogSink::Off);
    }

    #[test]
    fn test_keys_is_batch() {
        let cli = parse(&["--keys", "1+1="]);
        assert_eq!(
            cli.mode(),
            RunMode::Batch {
                script: "1+1=".into()
            }
        );
        assert_eq!(cli.log_sink(), LogSink::Stderr);
    }

    #[test]
    fn test_keys_may_start_with_subtract() {
        let cli = parse(&["--keys", "-5="]);
        assert_eq!(
            cli.mode(),
            RunMode::Batch {
                script: "-5=".into()
            }
        );
        let cli = parse(&["-k", "-5="]);
        assert_eq!(cli.keys.as_deref(), Some("-5="));
    }

    #[test]
    fn test_log_file_wins() {
        let cli = parse(&["-k", "1", "--log-file", "calc.log"]);
        assert_eq!(cli.log_sink(), LogSink::File(PathBuf::from("calc.log")));
    }

    #[test]
    fn test_verbosity_levels() {
        assert_eq!(parse(&[]).log_level(), Level::WARN);
        assert_eq!(parse(&["-v"]).log_level(), Level::INFO);
        assert_eq!(parse(&["-vv"]).log_level(), Level::DEBUG);
        assert_eq!(parse(&["-vvvv"]).log_level(), Level::DEBUG);
    }

    #[test]
    fn test_json_format_flag() {
        assert_eq!(parse(&["--format", "json"]).format, OutputFormat::Json);
    }

    #[test]
    fn test_unknown_format_rejected() {
        assert!(Cli::try_parse_from(["pocket-calc", "--format", "xml"]).is_err());
    }

    // ===== Batch tests =====

    #[test]
    fn test_batch_text_output() {
        let (result, out, err) = batch("1+1=", OutputFormat::Text);
        assert!(result.is_ok());
        assert_eq!(out, "\n2\n");
        assert!(err.is_empty());
    }

    #[test]
    fn test_batch_pending_operation() {
        let (_, out, _) = batch("12*", OutputFormat::Text);
        assert_eq!(out, "12 ×\n12\n");
    }

    #[test]
    fn test_batch_alert_on_stderr() {
        let (result, out, err) = batch("5/0=", OutputFormat::Text);
        assert!(result.is_ok());
        assert_eq!(out, "\n0\n");
        assert_eq!(err, "alert: Division by zero is not allowed!\n");
    }

    #[test]
    fn test_batch_large_result_rounded() {
        let (_, out, _) = batch("50000000.1+0.2=", OutputFormat::Text);
        assert_eq!(out, "\n50000000.3\n");
    }

    #[test]
    fn test_batch_json_output() {
        let (_, out, err) = batch("0.1+0.2=", OutputFormat::Json);
        assert_eq!(out, "{\"previous\":\"\",\"current\":\"0.3\",\"alerts\":[]}\n");
        assert!(err.is_empty());
    }

    #[test]
    fn test_batch_json_alerts() {
        let (_, out, _) = batch("5/0=", OutputFormat::Json);
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value["alerts"][0], "Division by zero is not allowed!");
        assert_eq!(value["current"], "0");
    }

    #[test]
    fn test_batch_invalid_script() {
        let (result, out, _) = batch("1+x", OutputFormat::Text);
        assert!(matches!(result, Err(AppError::Script(_))));
        assert!(out.is_empty());
    }
}
