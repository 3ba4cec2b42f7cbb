//! Input collaborator: user gestures to calculator actions
//!
//! Key names follow the browser `KeyboardEvent.key` convention (`"Enter"`,
//! `"Escape"`, `"Backspace"`, single characters otherwise). Keys outside the
//! calculator set map to `None` and are left for the host to handle.

use thiserror::Error;

use crate::core::{Digit, Operation};

/// One discrete user action, mapped to exactly one transition
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    /// Append a digit
    Digit(Digit),
    /// Append a decimal point
    DecimalPoint,
    /// Choose an operator
    Operator(Operation),
    /// Evaluate the pending operation
    Equals,
    /// Reset to the initial state
    Clear,
    /// Remove the last character
    Delete,
}

impl Action {
    /// Maps a single character key
    #[must_use]
    pub fn from_char(c: char) -> Option<Self> {
        if let Some(digit) = Digit::from_char(c) {
            return Some(Self::Digit(digit));
        }
        if let Some(op) = Operation::from_key(c) {
            return Some(Self::Operator(op));
        }
        match c {
            '.' => Some(Self::DecimalPoint),
            '=' => Some(Self::Equals),
            _ => None,
        }
    }

    /// Maps a key name such as `"7"`, `"Enter"` or `"Backspace"`
    #[must_use]
    pub fn from_key_name(key: &str) -> Option<Self> {
        match key {
            "Enter" => Some(Self::Equals),
            "Escape" => Some(Self::Clear),
            "Backspace" => Some(Self::Delete),
            _ => {
                let mut chars = key.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) => Self::from_char(c),
                    _ => None,
                }
            }
        }
    }

    /// Label shown on the matching keypad button
    #[must_use]
    pub fn label(&self) -> String {
        match self {
            Self::Digit(d) => d.to_string(),
            Self::DecimalPoint => ".".to_string(),
            Self::Operator(op) => op.symbol().to_string(),
            Self::Equals => "=".to_string(),
            Self::Clear => "C".to_string(),
            Self::Delete => "⌫".to_string(),
        }
    }
}

/// Key names that stand for a whole token in a script
const NAMED_KEYS: [&str; 3] = ["Enter", "Escape", "Backspace"];

/// Error produced while parsing a key script
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScriptError {
    /// A character that no calculator key produces
    #[error("unknown key '{key}' at position {position}")]
    UnknownKey {
        /// The offending character
        key: char,
        /// Character offset in the script
        position: usize,
    },
}

/// A parsed sequence of actions for batch mode
///
/// Tokens are separated by whitespace. A token equal to a named key
/// (`Enter`, `Escape`, `Backspace`) is that key; any other token is read one
/// character at a time, so `"12+7= Backspace"` is seven actions.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Script {
    actions: Vec<Action>,
}

impl Script {
    /// Parses a script
    pub fn parse(source: &str) -> Result<Self, ScriptError> {
        let mut actions = Vec::new();
        let mut token = String::new();
        let mut token_start = 0;

        for (position, c) in source.chars().enumerate().chain([(usize::MAX, ' ')]) {
            if !c.is_whitespace() {
                if token.is_empty() {
                    token_start = position;
                }
                token.push(c);
                continue;
            }
            if token.is_empty() {
                continue;
            }
            Self::push_token(&token, token_start, &mut actions)?;
            token.clear();
        }

        Ok(Self { actions })
    }

    fn push_token(
        token: &str,
        start: usize,
        actions: &mut Vec<Action>,
    ) -> Result<(), ScriptError> {
        if NAMED_KEYS.contains(&token) {
            if let Some(action) = Action::from_key_name(token) {
                actions.push(action);
            }
            return Ok(());
        }
        for (offset, key) in token.chars().enumerate() {
            let action = Action::from_char(key).ok_or(ScriptError::UnknownKey {
                key,
                position: start + offset,
            })?;
            actions.push(action);
        }
        Ok(())
    }

    /// The parsed actions in order
    #[must_use]
    pub fn actions(&self) -> &[Action] {
        &self.actions
    }

    /// Number of actions
    #[must_use]
    pub fn len(&self) -> usize {
        self.actions.len()
    }

    /// True when the script has no actions
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }
}

impl IntoIterator for Script {
    type Item = Action;
    type IntoIter = std::vec::IntoIter<Action>;

    fn into_iter(self) -> Self::IntoIter {
        self.actions.into_iter()
    }
}
