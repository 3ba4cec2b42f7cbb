//! Calculator state and its transitions
//!
//! The four fields are the whole machine; there is no separate enumeration
//! of named states. Every transition runs to completion and leaves the
//! operand invariants intact:
//!
//! - `current_operand` is never empty
//! - it holds at most one decimal point
//! - it has no redundant leading zero except the `"0"` sentinel

use serde::Serialize;
use tracing::{debug, info, warn};

use crate::core::number::{format_number, parse_operand, round_result};
use crate::core::{CalcResult, Digit, Operation};

/// Operand/operator state of the calculator
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CalculatorState {
    current_operand: String,
    previous_operand: String,
    operation: Option<Operation>,
    awaiting_new_operand: bool,
}

impl Default for CalculatorState {
    fn default() -> Self {
        Self::new()
    }
}

impl CalculatorState {
    /// Text of the cleared display
    pub const ZERO: &'static str = "0";

    /// Creates the cleared state `("0", "", None, false)`
    #[must_use]
    pub fn new() -> Self {
        Self {
            current_operand: Self::ZERO.to_string(),
            previous_operand: String::new(),
            operation: None,
            awaiting_new_operand: false,
        }
    }

    /// Text of the operand being entered or the last result
    #[must_use]
    pub fn current_operand(&self) -> &str {
        &self.current_operand
    }

    /// Text of the operand captured when the pending operator was chosen
    #[must_use]
    pub fn previous_operand(&self) -> &str {
        &self.previous_operand
    }

    /// The pending operation, if any
    #[must_use]
    pub fn operation(&self) -> Option<Operation> {
        self.operation
    }

    /// True when the next digit starts a fresh operand
    #[must_use]
    pub fn is_awaiting_new_operand(&self) -> bool {
        self.awaiting_new_operand
    }

    /// True when the state equals the cleared state
    #[must_use]
    pub fn is_clear(&self) -> bool {
        *self == Self::new()
    }

    /// Appends a digit to the current operand
    pub fn append_digit(&mut self, digit: Digit) {
        if self.awaiting_new_operand {
            self.current_operand = digit.to_string();
            self.awaiting_new_operand = false;
        } else if self.current_operand == Self::ZERO {
            self.current_operand = digit.to_string();
        } else {
            self.current_operand.push(digit.to_char());
        }
        self.trace("append_digit");
    }

    /// Appends a decimal point unless the operand already has one
    pub fn append_decimal_point(&mut self) {
        if self.awaiting_new_operand {
            self.current_operand = "0.".to_string();
            self.awaiting_new_operand = false;
        } else if !self.current_operand.contains('.') {
            self.current_operand.push('.');
        }
        self.trace("append_decimal_point");
    }

    /// Selects the operator applied to the next operand
    ///
    /// A pending computation is folded first when a second operand has been
    /// typed since the last operator. Choosing operators back to back only
    /// replaces the operator.
    ///
    /// If the fold divides by zero the state is reset, the operator is then
    /// chosen on `"0"`, and the error is returned so the caller can notify
    /// the user.
    pub fn choose_operation(&mut self, operation: Operation) -> CalcResult<()> {
        if self.current_operand.is_empty() && self.previous_operand.is_empty() {
            return Ok(());
        }

        let folded = if !self.previous_operand.is_empty() && !self.awaiting_new_operand {
            self.calculate_result()
        } else {
            Ok(())
        };

        self.previous_operand = self.current_operand.clone();
        self.operation = Some(operation);
        self.awaiting_new_operand = true;
        self.trace("choose_operation");

        folded
    }

    /// Applies the pending operation to the two operands
    ///
    /// Missing or unparsable operands and a missing operation leave the state
    /// untouched. Division by zero resets the state and returns
    /// [`CalcError::DivisionByZero`](crate::core::CalcError::DivisionByZero).
    pub fn calculate_result(&mut self) -> CalcResult<()> {
        let (Some(lhs), Some(rhs)) = (
            parse_operand(&self.previous_operand),
            parse_operand(&self.current_operand),
        ) else {
            return Ok(());
        };
        let Some(operation) = self.operation else {
            return Ok(());
        };

        let raw = match operation.apply(lhs, rhs) {
            Ok(value) => value,
            Err(err) => {
                info!(lhs, rhs, %operation, "{err}");
                self.clear();
                return Err(err);
            }
        };

        if !raw.is_finite() {
            warn!(lhs, rhs, %operation, "result is not finite, calculation ignored");
            return Ok(());
        }

        self.current_operand = format_number(round_result(raw));
        self.previous_operand.clear();
        self.operation = None;
        self.awaiting_new_operand = true;
        self.trace("calculate_result");
        Ok(())
    }

    /// Resets to the cleared state
    pub fn clear(&mut self) {
        *self = Self::new();
        self.trace("clear");
    }

    /// Removes the last character of the current operand
    ///
    /// Does nothing right after an operator or result.
    pub fn delete_last_digit(&mut self) {
        if self.awaiting_new_operand {
            return;
        }
        if self.current_operand.chars().count() <= 1 {
            self.current_operand = Self::ZERO.to_string();
        } else {
            self.current_operand.pop();
            if self.current_operand == "-" {
                self.current_operand = Self::ZERO.to_string();
            }
        }
        self.trace("delete_last_digit");
    }

    fn trace(&self, transition: &'static str) {
        debug!(
            transition,
            current = %self.current_operand,
            previous = %self.previous_operand,
            operation = ?self.operation,
            awaiting = self.awaiting_new_operand,
        );
    }
}
