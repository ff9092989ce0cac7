use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::game::Direction;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    Turn(Direction),
    /// Start a new game, replacing the current one
    Start,
    /// Tear down the current game
    Stop,
    Quit,
    None,
}

pub struct InputHandler;

impl InputHandler {
    pub fn new() -> Self {
        Self
    }

    pub fn handle_key_event(&self, key: KeyEvent) -> KeyAction {
        // Handle Ctrl+C
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            return KeyAction::Quit;
        }

        match key.code {
            // Movement - Arrow keys
            KeyCode::Up => KeyAction::Turn(Direction::Up),
            KeyCode::Down => KeyAction::Turn(Direction::Down),
            KeyCode::Left => KeyAction::Turn(Direction::Left),
            KeyCode::Right => KeyAction::Turn(Direction::Right),

            // Movement - WASD
            KeyCode::Char(c) if c.eq_ignore_ascii_case(&'w') => KeyAction::Turn(Direction::Up),
            KeyCode::Char(c) if c.eq_ignore_ascii_case(&'s') => KeyAction::Turn(Direction::Down),
            KeyCode::Char(c) if c.eq_ignore_ascii_case(&'a') => KeyAction::Turn(Direction::Left),
            KeyCode::Char(c) if c.eq_ignore_ascii_case(&'d') => KeyAction::Turn(Direction::Right),

            // Controls
            KeyCode::Char('r') | KeyCode::Char('R') | KeyCode::Enter => KeyAction::Start,
            KeyCode::Char('x') | KeyCode::Char('X') | KeyCode::Char(' ') => KeyAction::Stop,
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => KeyAction::Quit,

            _ => KeyAction::None,
        }
    }
}

impl Default for InputHandler {
    fn default() -> Self {
        Self::new()
    }
}
