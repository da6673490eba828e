use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::game::{Direction, InputEvent};

/// Maps terminal key presses onto game input
pub struct InputHandler;

impl InputHandler {
    pub fn new() -> Self {
        Self
    }

    pub fn handle_key_event(&self, key: KeyEvent) -> Option<InputEvent> {
        // Handle Ctrl+C
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            return Some(InputEvent::Quit);
        }

        let event = match key.code {
            KeyCode::Up | KeyCode::Char('w') | KeyCode::Char('W') => Direction::Up.into(),
            KeyCode::Down | KeyCode::Char('s') | KeyCode::Char('S') => Direction::Down.into(),
            KeyCode::Left | KeyCode::Char('a') | KeyCode::Char('A') => Direction::Left.into(),
            KeyCode::Right | KeyCode::Char('d') | KeyCode::Char('D') => Direction::Right.into(),

            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => InputEvent::Quit,

            _ => return None,
        };

        Some(event)
    }
}

impl Default for InputHandler {
    fn default() -> Self {
        Self::new()
    }
}
