//! TUI rendering
//!
//! One vertical panel: the right-aligned display, a status line for the
//! pending operation, the keypad grid, and a key help footer.

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::Span,
    widgets::{Block, Borders, Paragraph, Widget},
    Frame,
};

use super::app::CalculatorApp;
use crate::keypad::{Button, ButtonClass, Keypad};

/// Key bindings shown in the footer
const HELP_LINE: &str = " q quit · c clear · n sign · % percent · = equals ";

/// Renders the calculator UI to the frame
pub fn render(app: &CalculatorApp, frame: &mut Frame) {
    frame.render_widget(CalculatorUi::new(app), frame.area());
}

/// Computes the keypad interior for a given frame area
///
/// A pure function of the frame size, so mouse events can be hit-tested
/// against the same rectangle the renderer used.
#[must_use]
pub fn keypad_area(area: Rect) -> Rect {
    let chunks = layout(area);
    inner(chunks[2])
}

/// Splits the frame into display, status, keypad, and help rows
fn layout(area: Rect) -> Vec<Rect> {
    Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(3),  // Display
            Constraint::Length(1),  // Status
            Constraint::Min(11),    // Keypad
            Constraint::Length(1),  // Help
        ])
        .split(area)
        .to_vec()
}

/// Shrinks a rect by its one-cell border
fn inner(area: Rect) -> Rect {
    Rect {
        x: area.x.saturating_add(1),
        y: area.y.saturating_add(1),
        width: area.width.saturating_sub(2),
        height: area.height.saturating_sub(2),
    }
}

/// Calculator UI widget
#[derive(Debug)]
pub struct CalculatorUi<'a> {
    app: &'a CalculatorApp,
}

impl<'a> CalculatorUi<'a> {
    /// Creates a new calculator UI widget
    #[must_use]
    pub fn new(app: &'a CalculatorApp) -> Self {
        Self { app }
    }
}

impl Widget for CalculatorUi<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let chunks = layout(area);

        let display = Paragraph::new(self.app.display())
            .alignment(Alignment::Right)
            .style(Style::default().add_modifier(Modifier::BOLD))
            .block(
                Block::default()
                    .title(" Sumadora ")
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::Cyan)),
            );
        display.render(chunks[0], buf);

        let status = Paragraph::new(self.app.status())
            .alignment(Alignment::Right)
            .style(Style::default().fg(Color::DarkGray));
        status.render(chunks[1], buf);

        KeypadWidget::new(self.app.keypad()).render(chunks[2], buf);

        let help = Paragraph::new(Span::styled(
            HELP_LINE,
            Style::default().fg(Color::DarkGray),
        ));
        help.render(chunks[3], buf);
    }
}

/// Keypad widget for rendering
#[derive(Debug)]
pub struct KeypadWidget<'a> {
    keypad: &'a Keypad,
}

impl<'a> KeypadWidget<'a> {
    /// Creates a new keypad widget
    #[must_use]
    pub fn new(keypad: &'a Keypad) -> Self {
        Self { keypad }
    }

    /// Style for one button, by press state and visual class
    fn button_style(button: &Button) -> Style {
        if button.pressed {
            return Style::default()
                .fg(Color::Black)
                .bg(Color::Yellow)
                .add_modifier(Modifier::BOLD);
        }
        match button.kind.class() {
            ButtonClass::Digit => Style::default().fg(Color::White),
            ButtonClass::Action => Style::default().fg(Color::Yellow),
            ButtonClass::Function => Style::default().fg(Color::Cyan),
        }
    }
}

impl Widget for KeypadWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Block::default()
            .title(" Keypad ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan))
            .render(area, buf);

        let inner = inner(area);
        let rows = self.keypad.row_count() as u16;
        if inner.width < Keypad::COLS as u16 || inner.height < rows {
            return; // Too small to render
        }

        let cell_w = inner.width / Keypad::COLS as u16;
        let cell_h = inner.height / rows;

        for row in 0..self.keypad.row_count() {
            for (start, button) in self.keypad.row_cells(row) {
                let x = inner.x + start as u16 * cell_w;
                let y = inner.y + row as u16 * cell_h;
                let width = button.span as u16 * cell_w;

                let label = format!("[{}]", button.kind.label());
                let label_width = label.chars().count() as u16;
                let label_x = x + width.saturating_sub(label_width) / 2;
                let label_y = y + cell_h / 2;

                if label_y < inner.y + inner.height && label_x < inner.x + inner.width {
                    buf.set_span(
                        label_x,
                        label_y,
                        &Span::styled(label, Self::button_style(button)),
                        width,
                    );
                }
            }
        }
    }
}
