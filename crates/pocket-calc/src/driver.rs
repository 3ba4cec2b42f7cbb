//! Unified Calculator Driver
//!
//! Scenario logic is written once against [`CalculatorDriver`] and runs on
//! every frontend: the headless controller used by batch mode and the
//! terminal app.

use crate::calculator::Calculator;
use crate::display::{DisplayLines, RecordingNotifier};
use crate::input::{Action, Script};

/// Abstract driver trait for calculator interactions
///
/// # Example
///
/// ```rust
/// use pocket_calc::driver::{CalculatorDriver, HeadlessDriver};
/// use pocket_calc::input::Script;
///
/// fn verify_sum<D: CalculatorDriver>(driver: &mut D) {
///     driver.press_script(&Script::parse("0.1+0.2=").unwrap());
///     assert_eq!(driver.display().current, "0.3");
/// }
///
/// verify_sum(&mut HeadlessDriver::new());
/// ```
pub trait CalculatorDriver {
    /// Delivers one action, acknowledging any alert it raises
    fn press(&mut self, action: Action);

    /// Current display lines
    fn display(&self) -> DisplayLines;

    /// Alerts raised so far, oldest first
    fn alerts(&self) -> Vec<String>;

    /// Resets the calculator and forgets alerts
    fn clear(&mut self);

    /// Delivers every action of a script in order
    fn press_script(&mut self, script: &Script) {
        for action in script.actions() {
            self.press(*action);
        }
    }
}

/// Driver over the bare [`Calculator`] controller
#[derive(Debug, Default)]
pub struct HeadlessDriver {
    calculator: Calculator,
    notifier: RecordingNotifier,
}

impl HeadlessDriver {
    /// Creates a driver around a cleared calculator
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a reference to the underlying calculator
    #[must_use]
    pub fn calculator(&self) -> &Calculator {
        &self.calculator
    }
}

impl CalculatorDriver for HeadlessDriver {
    fn press(&mut self, action: Action) {
        self.calculator.dispatch_with(action, &mut self.notifier);
    }

    fn display(&self) -> DisplayLines {
        self.calculator.display()
    }

    fn alerts(&self) -> Vec<String> {
        self.notifier.messages().to_vec()
    }

    fn clear(&mut self) {
        self.calculator.reset();
        self.notifier.clear();
    }
}

/// TUI Driver implementation
#[cfg(feature = "tui")]
pub mod tui_driver {
    use super::{Action, CalculatorDriver, DisplayLines};
    use crate::tui::CalculatorApp;

    /// Driver over the terminal app
    ///
    /// Plays the user's part for modal alerts: each one is recorded and
    /// acknowledged before the next action is delivered.
    #[derive(Debug, Default)]
    pub struct TuiDriver {
        app: CalculatorApp,
        alerts: Vec<String>,
    }

    impl TuiDriver {
        /// Creates a new TUI driver
        #[must_use]
        pub fn new() -> Self {
            Self::default()
        }

        /// Returns a reference to the underlying app
        #[must_use]
        pub fn app(&self) -> &CalculatorApp {
            &self.app
        }
    }

    impl CalculatorDriver for TuiDriver {
        fn press(&mut self, action: Action) {
            self.app.press(action);
            if let Some(alert) = self.app.alert() {
                self.alerts.push(alert.to_string());
                self.app.acknowledge_alert();
            }
        }

        fn display(&self) -> DisplayLines {
            self.app.display()
        }

        fn alerts(&self) -> Vec<String> {
            self.alerts.clone()
        }

        fn clear(&mut self) {
            self.app.press(Action::Clear);
            self.alerts.clear();
        }
    }
}

#[cfg(feature = "tui")]
pub use tui_driver::TuiDriver;

#[cfg(test)]
mod tests {
    use super::*;

    fn press_keys<D: CalculatorDriver>(driver: &mut D, keys: &str) {
        driver.press_script(&Script::parse(keys).unwrap());
    }

    fn verify_chained_operations<D: CalculatorDriver>(driver: &mut D) {
        press_keys(driver, "2+3*");
        assert_eq!(driver.display().previous, "5 ×");
        press_keys(driver, "4=");
        assert_eq!(driver.display().current, "20");
    }

    fn verify_division_by_zero<D: CalculatorDriver>(driver: &mut D) {
        press_keys(driver, "5/0=");
        assert_eq!(driver.alerts(), vec!["Division by zero is not allowed!"]);
        assert_eq!(driver.display(), DisplayLines::render(&Default::default()));
        press_keys(driver, "7");
        assert_eq!(driver.display().current, "7");
    }

    fn verify_clear<D: CalculatorDriver>(driver: &mut D) {
        press_keys(driver, "5/0= 9+");
        driver.clear();
        assert!(driver.alerts().is_empty());
        assert_eq!(driver.display().current, "0");
        assert_eq!(driver.display().previous, "");
    }

    #[test]
    fn test_headless_chained_operations() {
        verify_chained_operations(&mut HeadlessDriver::new());
    }

    #[test]
    fn test_headless_division_by_zero() {
        verify_division_by_zero(&mut HeadlessDriver::new());
    }

    #[test]
    fn test_headless_clear() {
        verify_clear(&mut HeadlessDriver::new());
    }

    #[test]
    fn test_headless_exposes_calculator() {
        let mut driver = HeadlessDriver::new();
        press_keys(&mut driver, "8");
        assert_eq!(driver.calculator().state().current_operand(), "8");
    }

    #[cfg(feature = "tui")]
    #[test]
    fn test_tui_chained_operations() {
        verify_chained_operations(&mut TuiDriver::new());
    }

    #[cfg(feature = "tui")]
    #[test]
    fn test_tui_division_by_zero() {
        let mut driver = TuiDriver::new();
        verify_division_by_zero(&mut driver);
        assert!(driver.app().alert().is_none());
    }

    #[cfg(feature = "tui")]
    #[test]
    fn test_tui_clear() {
        verify_clear(&mut TuiDriver::new());
    }
}
