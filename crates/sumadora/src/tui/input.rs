//! Keyboard input handling
//!
//! Terminal keys act solely as activators for the on-screen buttons, plus
//! a quit chord for the session itself. Keys with no pictured button are
//! ignored.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::keypad::ButtonKind;

/// Actions triggered by keyboard input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    /// Activate an on-screen button
    Press(ButtonKind),
    /// Quit the application
    Quit,
    /// No action (ignored input)
    None,
}

/// Input handler that maps key events to button activations
#[derive(Debug, Default)]
pub struct InputHandler;

impl InputHandler {
    /// Creates a new input handler
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Maps a key event to an action
    #[must_use]
    pub fn handle_key(&self, event: KeyEvent) -> KeyAction {
        let KeyEvent {
            code, modifiers, ..
        } = event;

        if modifiers.contains(KeyModifiers::CONTROL) {
            return match code {
                KeyCode::Char('c' | 'q') => KeyAction::Quit,
                _ => KeyAction::None,
            };
        }

        match code {
            KeyCode::Char('q') => KeyAction::Quit,
            KeyCode::Char(ch) => {
                ButtonKind::from_char(ch).map_or(KeyAction::None, KeyAction::Press)
            }
            KeyCode::Enter => KeyAction::Press(ButtonKind::Equals),
            KeyCode::Esc => KeyAction::Press(ButtonKind::Clear),
            _ => KeyAction::None,
        }
    }
}
