//! Color theme and styling definitions using ratatui colors
//!
//! This module provides color themes for terminal rendering using ratatui's
//! color system directly to avoid unnecessary abstractions.

use crate::error::RcalcError;
use ratatui::style::{Color, Modifier, Style};
use std::str::FromStr;

/// Named themes selectable from the command line or the config file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "config", derive(serde::Deserialize))]
#[cfg_attr(feature = "config", serde(rename_all = "kebab-case"))]
pub enum ThemeName {
    #[default]
    Default,
    Monochrome,
    #[cfg_attr(feature = "config", serde(alias = "high_contrast"))]
    HighContrast,
}

impl FromStr for ThemeName {
    type Err = RcalcError;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        match name {
            "default" => Ok(ThemeName::Default),
            "monochrome" => Ok(ThemeName::Monochrome),
            "high-contrast" | "high_contrast" => Ok(ThemeName::HighContrast),
            other => Err(RcalcError::config(format!("unknown theme '{other}'"))),
        }
    }
}

/// Color theme for terminal UI elements
#[derive(Debug, Clone)]
pub struct ColorTheme {
    /// Expression text (None uses terminal default)
    pub display_text: Option<Color>,

    /// Display text while an error is shown
    pub error_text: Color,

    /// Borders around the display and buttons
    pub border: Color,

    /// Digit, point and sign buttons
    pub digit_key: Style,

    /// Operator and command buttons
    pub accent_key: Style,

    /// Button matching the most recent token
    pub pressed_key: Style,

    /// Status line background
    pub status_bg: Color,

    /// Status line text
    pub status_fg: Color,
}

impl Default for ColorTheme {
    /// Default theme: white digit keys, cornflower operator keys
    fn default() -> Self {
        Self {
            display_text: None,
            error_text: Color::Red,
            border: Color::Gray,
            digit_key: Style::default().fg(Color::Black).bg(Color::White),
            accent_key: Style::default()
                .fg(Color::White)
                .bg(Color::Rgb(100, 149, 237))
                .add_modifier(Modifier::BOLD),
            pressed_key: Style::default()
                .fg(Color::White)
                .bg(Color::Rgb(65, 105, 225))
                .add_modifier(Modifier::BOLD),
            status_bg: Color::Blue,
            status_fg: Color::White,
        }
    }
}

impl ColorTheme {
    /// Create a monochrome theme for terminals without color support
    pub fn monochrome() -> Self {
        Self {
            display_text: None,
            error_text: Color::White,
            border: Color::White,
            digit_key: Style::default(),
            accent_key: Style::default().add_modifier(Modifier::BOLD),
            pressed_key: Style::default().add_modifier(Modifier::REVERSED),
            status_bg: Color::Black,
            status_fg: Color::White,
        }
    }

    /// Create a high-contrast theme for accessibility
    pub fn high_contrast() -> Self {
        Self {
            display_text: Some(Color::White),
            error_text: Color::LightRed,
            border: Color::White,
            digit_key: Style::default().fg(Color::White).bg(Color::Black),
            accent_key: Style::default()
                .fg(Color::Black)
                .bg(Color::LightYellow)
                .add_modifier(Modifier::BOLD),
            pressed_key: Style::default().fg(Color::LightYellow).bg(Color::Black),
            status_bg: Color::White,
            status_fg: Color::Black,
        }
    }

    pub fn from_name(name: ThemeName) -> Self {
        match name {
            ThemeName::Default => Self::default(),
            ThemeName::Monochrome => Self::monochrome(),
            ThemeName::HighContrast => Self::high_contrast(),
        }
    }
}
