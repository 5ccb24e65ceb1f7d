//! High-level input service.
//!
//! Consumes raw events, runs them through the calculator key bindings, and yields
//! domain-level `InputAction`s that the application loop consumes.

use crate::engine::{Command, Token};
use crate::error::Result;
use crate::input::raw::{RawInputCollector, RawInputEvent};
use ratatui::crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use std::time::Duration;

/// High-level input actions emitted by the key bindings/service.
#[derive(Debug, Clone, PartialEq)]
pub enum InputAction {
    /// A calculator token to feed into the engine
    Token(Token),
    /// Left click at a terminal cell; resolved against the keypad layout by the app
    Click {
        column: u16,
        row: u16,
    },
    Resize {
        width: u16,
        height: u16,
    },
    Quit,
    NoAction,
    InvalidInput,
}

/// Keyboard layout of the calculator.
///
/// Printable keys go through [`Token::from_key_char`]; Enter, Escape, Delete and
/// Backspace are bound here. `q` and Ctrl+C quit.
#[derive(Debug, Clone, Copy, Default)]
pub struct KeyBindings;

impl KeyBindings {
    pub fn new() -> Self {
        Self
    }

    pub fn handle_key_event(&self, key_event: KeyEvent) -> InputAction {
        if key_event.kind != KeyEventKind::Press {
            return InputAction::NoAction;
        }

        let plain = !key_event
            .modifiers
            .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT);

        match key_event.code {
            KeyCode::Char('c') if key_event.modifiers.contains(KeyModifiers::CONTROL) => {
                InputAction::Quit
            }
            KeyCode::Char('q') | KeyCode::Char('Q') if plain => InputAction::Quit,
            KeyCode::Enter => InputAction::Token(Token::Command(Command::Equals)),
            KeyCode::Esc => InputAction::Token(Token::Command(Command::Clear)),
            KeyCode::Delete => InputAction::Token(Token::Command(Command::ClearEntry)),
            KeyCode::Backspace => InputAction::Token(Token::Command(Command::Backspace)),
            KeyCode::Char(ch) if plain => Token::from_key_char(ch)
                .map(InputAction::Token)
                .unwrap_or(InputAction::InvalidInput),
            _ => InputAction::InvalidInput,
        }
    }
}

/// Service responsible for producing high-level `InputAction`s from terminal events.
pub struct InputService {
    bindings: KeyBindings,
    raw_input: RawInputCollector,
}

impl InputService {
    pub fn new() -> Self {
        Self {
            bindings: KeyBindings::new(),
            raw_input: RawInputCollector::new(),
        }
    }

    pub fn poll_actions(&mut self, timeout: Option<Duration>) -> Result<Vec<InputAction>> {
        let mut actions = Vec::new();

        if let Some(raw_event) = self.raw_input.poll_event(timeout)? {
            if let Some(action) = self.process_raw_event(raw_event) {
                actions.push(action);
            }

            while let Some(extra_event) = self.raw_input.pop_pending() {
                if let Some(action) = self.process_raw_event(extra_event) {
                    actions.push(action);
                }
            }
        }

        Ok(actions)
    }

    pub fn process_event(&mut self, event: Event) -> Vec<InputAction> {
        let mut actions = Vec::new();
        self.raw_input.process_event(event);
        while let Some(raw_event) = self.raw_input.pop_pending() {
            if let Some(action) = self.process_raw_event(raw_event) {
                actions.push(action);
            }
        }
        actions
    }

    fn process_raw_event(&mut self, event: RawInputEvent) -> Option<InputAction> {
        let action = match event {
            RawInputEvent::Key(key_event) => self.bindings.handle_key_event(key_event),
            RawInputEvent::Resize { width, height } => InputAction::Resize { width, height },
            RawInputEvent::Click { column, row } => InputAction::Click { column, row },
        };

        match action {
            InputAction::NoAction | InputAction::InvalidInput => None,
            _ => Some(action),
        }
    }
}

impl Default for InputService {
    fn default() -> Self {
        Self::new()
    }
}
