//! Calculator core: operand/operator state machine
//!
//! Everything here is pure state and arithmetic. Rendering, key mapping and
//! user notification live with the collaborators in [`crate::display`],
//! [`crate::input`] and [`crate::tui`].

pub mod number;
mod operations;
mod state;

pub use operations::{Digit, Operation};
pub use state::CalculatorState;

use thiserror::Error;

/// Result type for calculator operations
pub type CalcResult<T> = Result<T, CalcError>;

/// Calculator error types
///
/// The message is the text shown to the user when the error is signalled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CalcError {
    /// Division by zero attempted
    #[error("Division by zero is not allowed!")]
    DivisionByZero,
}
