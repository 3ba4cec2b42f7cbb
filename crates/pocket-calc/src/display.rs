//! Display and notification collaborators
//!
//! The core never draws anything. After each transition the frontend asks
//! for [`DisplayLines`] and writes them to its surface; division by zero is
//! handed to a [`Notifier`].

use serde::Serialize;

use crate::core::CalculatorState;

/// The two text lines of the calculator display
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct DisplayLines {
    /// Upper line: captured operand and pending operator symbol
    pub previous: String,
    /// Lower line: operand being entered or the last result
    pub current: String,
}

impl DisplayLines {
    /// Renders a state
    ///
    /// With an operation pending the upper line reads `"{previous} {symbol}"`,
    /// otherwise it is the previous operand alone (empty before any operator).
    #[must_use]
    pub fn render(state: &CalculatorState) -> Self {
        let previous = match state.operation() {
            Some(op) => format!("{} {}", state.previous_operand(), op.symbol()),
            None => state.previous_operand().to_string(),
        };
        Self {
            previous,
            current: state.current_operand().to_string(),
        }
    }
}

impl From<&CalculatorState> for DisplayLines {
    fn from(state: &CalculatorState) -> Self {
        Self::render(state)
    }
}

/// Receives user-facing alerts
///
/// Called synchronously; the implementation must keep further input from
/// reaching the calculator until the user has seen the message.
pub trait Notifier {
    /// Shows a message to the user
    fn notify(&mut self, message: &str);
}

impl<F: FnMut(&str)> Notifier for F {
    fn notify(&mut self, message: &str) {
        self(message);
    }
}

/// Notifier that keeps every message, for headless runs and tests
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordingNotifier {
    messages: Vec<String>,
}

impl RecordingNotifier {
    /// Creates an empty recorder
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Messages received so far, oldest first
    #[must_use]
    pub fn messages(&self) -> &[String] {
        &self.messages
    }

    /// Forgets all messages
    pub fn clear(&mut self) {
        self.messages.clear();
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&mut self, message: &str) {
        self.messages.push(message.to_string());
    }
}
