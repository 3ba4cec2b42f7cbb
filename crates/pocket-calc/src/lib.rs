//! pocket-calc - Four-function keypad calculator
//!
//! The calculator is a small state machine over two operand strings and a
//! pending operator. Keys are fed in one at a time and the two-line display
//! is re-rendered after each one, the way a pocket calculator behaves.
//!
//! Operations evaluate left to right with no precedence: `2 + 3 ×` shows
//! `5 ×` before the second operand is typed.
//!
//! # Example
//!
//! ```rust
//! use pocket_calc::prelude::*;
//!
//! let mut calc = Calculator::new();
//! for action in Script::parse("0.1+0.2=").unwrap() {
//!     calc.dispatch(action).unwrap();
//! }
//! assert_eq!(calc.display().current, "0.3");
//!
//! // Division by zero resets the calculator and is reported once
//! let mut calc = Calculator::new();
//! let mut notifier = RecordingNotifier::new();
//! for action in Script::parse("5/0=").unwrap() {
//!     calc.dispatch_with(action, &mut notifier);
//! }
//! assert_eq!(notifier.messages(), ["Division by zero is not allowed!"]);
//! assert!(calc.state().is_clear());
//! ```

#![cfg_attr(
    test,
    allow(
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::panic,
        clippy::float_cmp
    )
)]
#![deny(missing_docs)]
#![deny(missing_debug_implementations)]

pub mod calculator;
pub mod cli;
pub mod core;
pub mod display;
pub mod driver;
pub mod error;
pub mod input;
pub mod logging;

#[cfg(feature = "tui")]
pub mod tui;

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::calculator::Calculator;
    pub use crate::core::number::{format_number, parse_operand, round_result};
    pub use crate::core::{CalcError, CalcResult, CalculatorState, Digit, Operation};
    pub use crate::display::{DisplayLines, Notifier, RecordingNotifier};
    pub use crate::driver::{CalculatorDriver, HeadlessDriver};
    pub use crate::error::{AppError, AppResult};
    pub use crate::input::{Action, Script, ScriptError};

    #[cfg(feature = "tui")]
    pub use crate::driver::TuiDriver;
}
