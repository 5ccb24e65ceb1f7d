//! Terminal rendering components.
//!
//! This module hosts the concrete terminal UI implementation along with the supporting view/state
//! structures, keypad geometry and styling utilities.

pub mod keypad;
pub mod renderer;
pub mod state;
pub mod terminal;
pub mod theme;

pub use keypad::{ScreenLayout, KEYPAD_LABELS};
pub use renderer::UIRenderer;
pub use state::ViewState;
pub use terminal::TerminalUI;
pub use theme::{ColorTheme, ThemeName};

#[cfg(test)]
pub use renderer::tests::MockUIRenderer;
