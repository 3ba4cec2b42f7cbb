//! TUI Application State
//!
//! Wraps the [`Calculator`] controller with what only the terminal needs:
//! keypad highlight, the modal alert and the quit flag.

use ratatui::layout::Rect;
use tracing::debug;

use super::input::KeyAction;
use super::keypad::Keypad;
use crate::calculator::Calculator;
use crate::core::CalculatorState;
use crate::display::DisplayLines;
use crate::input::Action;

/// Calculator application state
#[derive(Debug, Default)]
pub struct CalculatorApp {
    /// Calculator controller
    calculator: Calculator,
    /// Clickable keypad
    keypad: Keypad,
    /// Alert waiting for acknowledgement; blocks all calculator input
    alert: Option<String>,
    /// Whether the app should quit
    should_quit: bool,
}

impl CalculatorApp {
    /// Creates a new calculator app in the cleared state
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Read-only view of the calculator state
    #[must_use]
    pub fn state(&self) -> &CalculatorState {
        self.calculator.state()
    }

    /// Current display lines
    #[must_use]
    pub fn display(&self) -> DisplayLines {
        self.calculator.display()
    }

    /// Returns the keypad
    #[must_use]
    pub fn keypad(&self) -> &Keypad {
        &self.keypad
    }

    /// Returns the pending alert message
    #[must_use]
    pub fn alert(&self) -> Option<&str> {
        self.alert.as_deref()
    }

    /// Returns whether the app should quit
    #[must_use]
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Sets the quit flag
    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// Delivers a calculator action unless an alert is pending
    pub fn press(&mut self, action: Action) {
        if self.alert.is_some() {
            debug!(?action, "input blocked by pending alert");
            return;
        }
        self.keypad.highlight(action);
        let alert = &mut self.alert;
        self.calculator
            .dispatch_with(action, &mut |message: &str| *alert = Some(message.to_string()));
    }

    /// Closes the pending alert
    pub fn acknowledge_alert(&mut self) {
        if self.alert.take().is_some() {
            self.keypad.release_all();
        }
    }

    /// Handles a mapped key
    ///
    /// With an alert showing, `Enter`, `Esc` and space only acknowledge it.
    pub fn handle_key_action(&mut self, action: KeyAction) {
        match action {
            KeyAction::Quit => self.quit(),
            KeyAction::Calc(Action::Equals | Action::Clear) | KeyAction::Dismiss
                if self.alert.is_some() =>
            {
                self.acknowledge_alert();
            }
            KeyAction::Calc(action) => self.press(action),
            KeyAction::Dismiss | KeyAction::None => {}
        }
    }

    /// Handles a mouse click at terminal cell `(x, y)`
    ///
    /// Any click acknowledges a pending alert; otherwise a click on a keypad
    /// button presses it.
    pub fn click(&mut self, keypad_area: Rect, x: u16, y: u16) {
        if self.alert.is_some() {
            self.acknowledge_alert();
            return;
        }
        if let Some(action) = self.keypad.hit_test(keypad_area, x, y) {
            self.press(action);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Digit, Operation};
    use crate::input::Script;

    fn press_keys(app: &mut CalculatorApp, keys: &str) {
        for action in Script::parse(keys).unwrap() {
            app.handle_key_action(KeyAction::Calc(action));
        }
    }

    fn keypad_area() -> Rect {
        Rect::new(0, 0, 22, 12)
    }

    // ===== Constructor tests =====

    #[test]
    fn test_app_new() {
        let app = CalculatorApp::new();
        assert!(app.state().is_clear());
        assert!(app.alert().is_none());
        assert!(!app.should_quit());
        assert!(app.keypad().pressed().is_none());
    }

    // ===== Action tests =====

    #[test]
    fn test_press_updates_display() {
        let mut app = CalculatorApp::new();
        press_keys(&mut app, "12+");
        let display = app.display();
        assert_eq!(display.previous, "12 +");
        assert_eq!(display.current, "12");
    }

    #[test]
    fn test_press_highlights_button() {
        let mut app = CalculatorApp::new();
        app.press(Action::Operator(Operation::Multiply));
        assert_eq!(
            app.keypad().pressed().map(|b| b.action),
            Some(Action::Operator(Operation::Multiply))
        );
    }

    #[test]
    fn test_division_by_zero_raises_alert() {
        let mut app = CalculatorApp::new();
        press_keys(&mut app, "5/0=");
        assert_eq!(app.alert(), Some("Division by zero is not allowed!"));
        assert!(app.state().is_clear());
    }

    #[test]
    fn test_alert_blocks_input() {
        let mut app = CalculatorApp::new();
        press_keys(&mut app, "5/0=");
        app.press(Action::Digit(Digit::new(7).unwrap()));
        assert_eq!(app.display().current, "0");
        assert!(app.alert().is_some());
    }

    #[test]
    fn test_enter_acknowledges_alert() {
        let mut app = CalculatorApp::new();
        press_keys(&mut app, "5/0=");
        app.handle_key_action(KeyAction::Calc(Action::Equals));
        assert!(app.alert().is_none());
        press_keys(&mut app, "7");
        assert_eq!(app.display().current, "7");
    }

    #[test]
    fn test_dismiss_acknowledges_alert() {
        let mut app = CalculatorApp::new();
        press_keys(&mut app, "5/0=");
        app.handle_key_action(KeyAction::Dismiss);
        assert!(app.alert().is_none());
        assert!(app.keypad().pressed().is_none());
    }

    #[test]
    fn test_dismiss_without_alert_is_noop() {
        let mut app = CalculatorApp::new();
        press_keys(&mut app, "4");
        app.handle_key_action(KeyAction::Dismiss);
        assert_eq!(app.display().current, "4");
    }

    #[test]
    fn test_enter_without_alert_evaluates() {
        let mut app = CalculatorApp::new();
        press_keys(&mut app, "6*7");
        app.handle_key_action(KeyAction::Calc(Action::Equals));
        assert_eq!(app.display().current, "42");
    }

    // ===== Mouse tests =====

    #[test]
    fn test_click_presses_button() {
        let mut app = CalculatorApp::new();
        // Row 1 (7 8 9 −), column 0
        app.click(keypad_area(), 1, 3);
        assert_eq!(app.display().current, "7");
    }

    #[test]
    fn test_click_outside_keypad_ignored() {
        let mut app = CalculatorApp::new();
        app.click(keypad_area(), 50, 50);
        assert!(app.state().is_clear());
    }

    #[test]
    fn test_click_acknowledges_alert() {
        let mut app = CalculatorApp::new();
        press_keys(&mut app, "5/0=");
        app.click(keypad_area(), 1, 3);
        assert!(app.alert().is_none());
        assert_eq!(app.display().current, "0");
    }

    // ===== Quit tests =====

    #[test]
    fn test_quit() {
        let mut app = CalculatorApp::new();
        app.handle_key_action(KeyAction::Quit);
        assert!(app.should_quit());
    }

    #[test]
    fn test_quit_while_alert_pending() {
        let mut app = CalculatorApp::new();
        press_keys(&mut app, "1/0=");
        app.handle_key_action(KeyAction::Quit);
        assert!(app.should_quit());
    }

    #[test]
    fn test_none_is_ignored() {
        let mut app = CalculatorApp::new();
        app.handle_key_action(KeyAction::None);
        assert!(app.state().is_clear());
    }
}
