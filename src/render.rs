//! Rendering subsystem.

pub mod ui;

pub use ui::{ColorTheme, TerminalUI, ThemeName, UIRenderer, ViewState};
