//! TUI rendering
//!
//! Layout: display and keypad stacked on the left, help on the right, and
//! the alert drawn over everything while it is pending.

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, Paragraph, Widget},
    Frame,
};

use super::app::CalculatorApp;
use super::keypad::KeypadWidget;

/// Renders the calculator UI to the frame
pub fn render(app: &CalculatorApp, frame: &mut Frame) {
    let area = frame.area();
    frame.render_widget(CalculatorUI::new(app), area);
}

/// Screen regions of the calculator UI
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UiLayout {
    /// Two-line display panel
    pub display: Rect,
    /// Clickable keypad
    pub keypad: Rect,
    /// Help sidebar
    pub help: Rect,
}

impl UiLayout {
    /// Splits the full terminal area
    #[must_use]
    pub fn new(area: Rect) -> Self {
        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .margin(1)
            .constraints([
                Constraint::Min(26),    // Display + keypad
                Constraint::Length(24), // Help sidebar
            ])
            .split(area);

        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(4), // Display
                Constraint::Min(12),   // Keypad
            ])
            .split(columns[0]);

        Self {
            display: rows[0],
            keypad: rows[1],
            help: columns[1],
        }
    }
}

/// Calculator UI widget
#[derive(Debug)]
pub struct CalculatorUI<'a> {
    app: &'a CalculatorApp,
}

impl<'a> CalculatorUI<'a> {
    /// Creates a new calculator UI widget
    #[must_use]
    pub fn new(app: &'a CalculatorApp) -> Self {
        Self { app }
    }

    /// Renders the two display lines, right aligned like a pocket calculator
    fn render_display(&self, area: Rect, buf: &mut Buffer) {
        let lines = self.app.display();

        let text = vec![
            Line::from(Span::styled(
                lines.previous,
                Style::default().fg(Color::DarkGray),
            )),
            Line::from(Span::styled(
                lines.current,
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            )),
        ];

        Paragraph::new(text)
            .alignment(Alignment::Right)
            .block(
                Block::default()
                    .title(" Display ")
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::Yellow)),
            )
            .render(area, buf);
    }

    /// Renders the help sidebar
    fn render_help(&self, area: Rect, buf: &mut Buffer) {
        let shortcuts: Vec<ListItem> = HELP_SHORTCUTS
            .iter()
            .map(|(key, desc)| {
                ListItem::new(Line::from(vec![
                    Span::styled(format!("{:>9}", key), Style::default().fg(Color::Yellow)),
                    Span::raw(" "),
                    Span::styled(*desc, Style::default().fg(Color::Gray)),
                ]))
            })
            .collect();

        List::new(shortcuts)
            .block(
                Block::default()
                    .title(" Help ")
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::DarkGray)),
            )
            .render(area, buf);
    }

    /// Renders the alert popup centred over `area`
    fn render_alert(message: &str, area: Rect, buf: &mut Buffer) {
        let popup = centered(area, ALERT_WIDTH, ALERT_HEIGHT);
        Clear.render(popup, buf);

        let text = vec![
            Line::from(Span::styled(
                message.to_string(),
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            )),
            Line::raw(""),
            Line::from(Span::styled(
                ALERT_HINT,
                Style::default().fg(Color::Gray),
            )),
        ];

        Paragraph::new(text)
            .alignment(Alignment::Center)
            .block(
                Block::default()
                    .title(" Alert ")
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::Red)),
            )
            .render(popup, buf);
    }
}

impl Widget for CalculatorUI<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Block::default()
            .title(TITLE)
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::White))
            .render(area, buf);

        let layout = UiLayout::new(area);
        self.render_display(layout.display, buf);
        KeypadWidget::new(self.app.keypad()).render(layout.keypad, buf);
        self.render_help(layout.help, buf);

        if let Some(message) = self.app.alert() {
            Self::render_alert(message, area, buf);
        }
    }
}

/// A `width` x `height` rectangle centred in `area`, clipped to it
fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

/// Window title
pub const TITLE: &str = " pocket-calc ";

/// Keyboard shortcuts shown in the sidebar
pub const HELP_SHORTCUTS: &[(&str, &str)] = &[
    ("0-9 .", "Enter number"),
    ("+ - * /", "Operator"),
    ("= Enter", "Equals"),
    ("Esc", "Clear"),
    ("Backspace", "Delete"),
    ("Click", "Press button"),
    ("Ctrl+C", "Quit"),
];

/// Second line of the alert popup
pub const ALERT_HINT: &str = "Press Enter to continue";

const ALERT_WIDTH: u16 = 40;
const ALERT_HEIGHT: u16 = 5;
