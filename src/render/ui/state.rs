//! UI state management structures
//!
//! The view state mirrors what the engine last reported plus the terminal geometry. The
//! calculation state itself stays inside the engine.

use crate::engine::{DisplayText, Token};
use crate::render::ui::keypad::{button_at, screen_layout, ScreenLayout};
use ratatui::layout::Rect;

/// Everything the renderer needs to draw one frame
#[derive(Debug, Clone, PartialEq)]
pub struct ViewState {
    /// Text shown in the display box
    pub display_text: String,

    /// True while the display shows the error indicator
    pub is_error: bool,

    /// Token handled most recently, highlighted on the keypad
    pub last_pressed: Option<Token>,

    /// Terminal dimensions
    pub width: u16,
    pub height: u16,

    /// Whether the keypad is drawn (and clickable)
    pub show_keypad: bool,
}

impl ViewState {
    pub fn new(width: u16, height: u16, show_keypad: bool) -> Self {
        Self {
            display_text: "0".to_string(),
            is_error: false,
            last_pressed: None,
            width,
            height,
            show_keypad,
        }
    }

    /// Record the engine's answer to `token`.
    pub fn apply_display(&mut self, display: &DisplayText, token: Token) {
        self.display_text = display.text().to_string();
        self.is_error = display.is_error();
        self.last_pressed = Some(token);
    }

    /// Update terminal dimensions, returning true when they changed.
    pub fn update_terminal_size(&mut self, width: u16, height: u16) -> bool {
        if self.width == width && self.height == height {
            return false;
        }
        self.width = width;
        self.height = height;
        true
    }

    pub fn layout(&self) -> ScreenLayout {
        screen_layout(Rect::new(0, 0, self.width, self.height), self.show_keypad)
    }

    /// Keypad button under a terminal cell.
    pub fn button_at(&self, column: u16, row: u16) -> Option<Token> {
        self.layout()
            .keypad
            .and_then(|keypad| button_at(keypad, column, row))
    }
}
