//! Calculator controller: one owned state, one dispatch point
//!
//! Every user action enters through [`Calculator::dispatch`], so transitions
//! never overlap.

use tracing::info;

use crate::core::{CalcResult, CalculatorState};
use crate::display::{DisplayLines, Notifier};
use crate::input::Action;

/// Owns a [`CalculatorState`] and routes actions to its transitions
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Calculator {
    state: CalculatorState,
}

impl Calculator {
    /// Creates a calculator in the cleared state
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Read-only view of the state
    #[must_use]
    pub fn state(&self) -> &CalculatorState {
        &self.state
    }

    /// Current display lines
    #[must_use]
    pub fn display(&self) -> DisplayLines {
        DisplayLines::render(&self.state)
    }

    /// Applies one action
    ///
    /// An `Err` means the state has already been reset and the user must be
    /// told; see [`Calculator::dispatch_with`].
    pub fn dispatch(&mut self, action: Action) -> CalcResult<()> {
        match action {
            Action::Digit(digit) => self.state.append_digit(digit),
            Action::DecimalPoint => self.state.append_decimal_point(),
            Action::Operator(op) => return self.state.choose_operation(op),
            Action::Equals => return self.state.calculate_result(),
            Action::Clear => self.state.clear(),
            Action::Delete => self.state.delete_last_digit(),
        }
        Ok(())
    }

    /// Applies one action and routes a failure to the notifier
    ///
    /// The notifier is called at most once per action.
    pub fn dispatch_with(&mut self, action: Action, notifier: &mut dyn Notifier) {
        if let Err(err) = self.dispatch(action) {
            info!(?action, "notifying user: {err}");
            notifier.notify(&err.to_string());
        }
    }

    /// Resets to the cleared state
    pub fn reset(&mut self) {
        self.state.clear();
    }
}
