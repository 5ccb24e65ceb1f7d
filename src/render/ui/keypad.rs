//! Screen layout and keypad geometry.
//!
//! Both the renderer and the mouse hit test go through these functions so a click always
//! lands on the button that was drawn under it.

use crate::engine::Token;
use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Buttons per keypad row.
pub const KEYPAD_COLUMNS: u16 = 4;

/// Keypad labels in reading order.
pub const KEYPAD_LABELS: [&str; 22] = [
    "CE", "C", "⌫", "/", //
    "√", "7", "8", "9", //
    "*", "4", "5", "6", //
    "-", "1", "2", "3", //
    "+", "+/-", "0", ".", //
    "%", "=",
];

/// Height of the expression display including its border.
const DISPLAY_HEIGHT: u16 = 3;

/// Areas of the calculator screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenLayout {
    pub display: Rect,
    pub keypad: Option<Rect>,
    pub status: Rect,
}

/// Split the terminal into display, optional keypad, and status line.
pub fn screen_layout(area: Rect, show_keypad: bool) -> ScreenLayout {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(DISPLAY_HEIGHT),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .split(area);

    ScreenLayout {
        display: chunks[0],
        keypad: show_keypad.then_some(chunks[1]),
        status: chunks[2],
    }
}

/// Tokens on the keypad, in the order of [`KEYPAD_LABELS`].
pub fn keypad_tokens() -> Vec<Token> {
    KEYPAD_LABELS
        .iter()
        .filter_map(|label| label.parse().ok())
        .collect()
}

fn keypad_rows() -> u16 {
    (KEYPAD_LABELS.len() as u16).div_ceil(KEYPAD_COLUMNS)
}

/// Cell rectangle of every keypad button. Empty when the area is too small to draw any.
pub fn button_areas(keypad: Rect) -> Vec<(Rect, Token)> {
    let column_width = keypad.width / KEYPAD_COLUMNS;
    let row_height = keypad.height / keypad_rows();
    if column_width == 0 || row_height == 0 {
        return Vec::new();
    }

    keypad_tokens()
        .into_iter()
        .enumerate()
        .map(|(idx, token)| {
            let idx = idx as u16;
            let area = Rect::new(
                keypad.x + (idx % KEYPAD_COLUMNS) * column_width,
                keypad.y + (idx / KEYPAD_COLUMNS) * row_height,
                column_width,
                row_height,
            );
            (area, token)
        })
        .collect()
}

/// Button drawn at the given terminal cell, if any.
pub fn button_at(keypad: Rect, column: u16, row: u16) -> Option<Token> {
    button_areas(keypad)
        .into_iter()
        .find(|(area, _)| {
            column >= area.x
                && column < area.x + area.width
                && row >= area.y
                && row < area.y + area.height
        })
        .map(|(_, token)| token)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::{Command, Operator};

    #[test]
    fn test_every_label_is_a_token() {
        assert_eq!(keypad_tokens().len(), KEYPAD_LABELS.len());
        assert_eq!(keypad_rows(), 6);
    }

    #[test]
    fn test_layout_reserves_display_and_status() {
        let layout = screen_layout(Rect::new(0, 0, 40, 30), true);
        assert_eq!(layout.display.height, 3);
        assert_eq!(layout.status, Rect::new(0, 29, 40, 1));
        assert_eq!(layout.keypad, Some(Rect::new(0, 3, 40, 26)));

        let compact = screen_layout(Rect::new(0, 0, 40, 30), false);
        assert_eq!(compact.keypad, None);
        assert_eq!(compact.status.y, 29);
    }

    #[test]
    fn test_buttons_follow_reading_order() {
        let keypad = Rect::new(0, 3, 40, 24);
        let areas = button_areas(keypad);
        assert_eq!(areas.len(), 22);
        assert_eq!(
            areas[0],
            (Rect::new(0, 3, 10, 4), Token::Command(Command::ClearEntry))
        );
        assert_eq!(
            areas[21],
            (Rect::new(10, 23, 10, 4), Token::Command(Command::Equals))
        );
    }

    #[test]
    fn test_hit_testing_finds_buttons() {
        let keypad = Rect::new(0, 3, 40, 24);
        assert_eq!(
            button_at(keypad, 35, 4),
            Some(Token::Operator(Operator::Divide))
        );
        assert_eq!(button_at(keypad, 15, 8), Token::digit(7));
        // the last row only has two buttons
        assert_eq!(button_at(keypad, 25, 24), None);
        assert_eq!(button_at(keypad, 5, 1), None);
    }

    #[test]
    fn test_tiny_keypad_has_no_buttons() {
        assert!(button_areas(Rect::new(0, 0, 3, 40)).is_empty());
        assert_eq!(button_at(Rect::new(0, 0, 40, 5), 0, 0), None);
    }
}
