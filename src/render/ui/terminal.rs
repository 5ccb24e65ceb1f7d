//! Terminal UI implementation using ratatui
//!
//! This module provides the concrete implementation of UIRenderer using ratatui for a
//! cross-platform terminal interface. It only draws; the calculator state comes in
//! through `ViewState`.

use crate::error::Result;
use crate::render::ui::keypad::{button_areas, screen_layout};
use crate::render::ui::{ColorTheme, UIRenderer, ViewState};
use ratatui::crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Alignment, Rect},
    style::Style,
    widgets::{Block, Borders, Paragraph},
    Frame, Terminal,
};
use std::io::{self, Stdout};

type CrosstermTerminal = Terminal<CrosstermBackend<Stdout>>;

/// Key hints shown on the status line
const STATUS_HINTS: &str = " q quit | Esc C | Del CE | Bksp ⌫ | n +/- | r √ | Enter = ";

/// Terminal UI implementation with ratatui backend
pub struct TerminalUI {
    terminal: Option<CrosstermTerminal>,
    theme: ColorTheme,
}

impl TerminalUI {
    pub fn new() -> Result<Self> {
        Ok(Self {
            terminal: None,
            theme: ColorTheme::default(),
        })
    }

    /// Create terminal UI with custom theme
    pub fn with_theme(theme: ColorTheme) -> Result<Self> {
        Ok(Self {
            terminal: None,
            theme,
        })
    }

    /// Draw a full calculator frame
    pub fn draw_frame(frame: &mut Frame, view_state: &ViewState, theme: &ColorTheme) {
        let layout = screen_layout(frame.size(), view_state.show_keypad);

        Self::render_display(frame, layout.display, view_state, theme);
        if let Some(keypad) = layout.keypad {
            Self::render_keypad(frame, keypad, view_state, theme);
        }
        Self::render_status(frame, layout.status, theme);
    }

    fn render_display(frame: &mut Frame, area: Rect, view_state: &ViewState, theme: &ColorTheme) {
        let text_style = if view_state.is_error {
            Style::default().fg(theme.error_text)
        } else {
            theme
                .display_text
                .map_or_else(Style::default, |color| Style::default().fg(color))
        };

        let display = Paragraph::new(view_state.display_text.as_str())
            .alignment(Alignment::Right)
            .style(text_style)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(theme.border)),
            );
        frame.render_widget(display, area);
    }

    fn render_keypad(frame: &mut Frame, area: Rect, view_state: &ViewState, theme: &ColorTheme) {
        for (button_area, token) in button_areas(area) {
            let style = if view_state.last_pressed == Some(token) {
                theme.pressed_key
            } else if token.is_accent() {
                theme.accent_key
            } else {
                theme.digit_key
            };

            let mut button = Paragraph::new(token.label())
                .alignment(Alignment::Center)
                .style(style);
            // borders need at least one row of label between them
            if button_area.height >= 3 {
                button = button.block(
                    Block::default()
                        .borders(Borders::ALL)
                        .border_style(Style::default().fg(theme.border)),
                );
            }
            frame.render_widget(button, button_area);
        }
    }

    fn render_status(frame: &mut Frame, area: Rect, theme: &ColorTheme) {
        let status_style = Style::default().bg(theme.status_bg).fg(theme.status_fg);
        let status = Paragraph::new(STATUS_HINTS).style(status_style);
        frame.render_widget(status, area);
    }
}

impl UIRenderer for TerminalUI {
    fn render(&mut self, view_state: &ViewState) -> Result<()> {
        if let Some(ref mut terminal) = self.terminal {
            let theme = &self.theme;
            terminal.draw(move |frame| Self::draw_frame(frame, view_state, theme))?;
        }
        Ok(())
    }

    fn initialize(&mut self) -> Result<()> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;

        let backend = CrosstermBackend::new(stdout);
        let terminal = Terminal::new(backend)?;
        self.terminal = Some(terminal);

        Ok(())
    }

    fn cleanup(&mut self) -> Result<()> {
        if self.terminal.is_some() {
            disable_raw_mode()?;
            execute!(io::stdout(), LeaveAlternateScreen, DisableMouseCapture)?;
            self.terminal = None;
        }
        Ok(())
    }

    fn get_terminal_size(&self) -> Result<(u16, u16)> {
        let (cols, rows) = ratatui::crossterm::terminal::size()?;
        Ok((cols, rows))
    }
}

impl Drop for TerminalUI {
    fn drop(&mut self) {
        let _ = self.cleanup();
    }
}
