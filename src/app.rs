//! Application orchestration layer
//!
//! Wires the calculator engine to the terminal renderer and the input thread. The engine
//! owns all calculation state; the application only forwards tokens and mirrors the
//! resulting display into the view state.

pub mod runtime;

use crate::config::Settings;
use crate::engine::{Command, DisplayText, InputStateMachine, Token};
use crate::error::{RcalcError, Result};
use crate::input::InputAction;
use crate::render::{UIRenderer, ViewState};
use runtime::{join_input_thread, spawn_input_thread};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc::{self, UnboundedReceiver};

/// Application orchestrator
pub struct Application {
    calculator: InputStateMachine,
    ui_renderer: Box<dyn UIRenderer>,
    view_state: ViewState,
    poll_interval: Duration,
}

impl Application {
    pub fn new(ui_renderer: Box<dyn UIRenderer>, settings: &Settings) -> Result<Self> {
        let (width, height) = ui_renderer.get_terminal_size()?;

        Ok(Self {
            calculator: InputStateMachine::new(),
            ui_renderer,
            view_state: ViewState::new(width, height, settings.show_keypad),
            poll_interval: settings.poll_interval(),
        })
    }

    pub fn view_state(&self) -> &ViewState {
        &self.view_state
    }

    pub fn calculator(&self) -> &InputStateMachine {
        &self.calculator
    }

    /// Feed one token to the engine and mirror the result into the view.
    pub fn press(&mut self, token: Token) -> DisplayText {
        let display = self.calculator.handle(token);
        self.view_state.apply_display(&display, token);
        display
    }

    /// Apply an input action - returns false if the session should end
    pub fn process_action(&mut self, action: InputAction) -> bool {
        match action {
            InputAction::Quit => false,
            InputAction::Token(token) => {
                self.press(token);
                true
            }
            InputAction::Click { column, row } => {
                if let Some(token) = self.view_state.button_at(column, row) {
                    self.press(token);
                }
                true
            }
            InputAction::Resize { width, height } => {
                self.view_state.update_terminal_size(width, height);
                true
            }
            InputAction::NoAction | InputAction::InvalidInput => true,
        }
    }

    /// Run the interactive session until the user quits
    pub async fn run(&mut self) -> Result<()> {
        self.ui_renderer.initialize()?;
        log::info!("calculator session started");

        let (width, height) = self.ui_renderer.get_terminal_size()?;
        self.view_state.update_terminal_size(width, height);
        self.ui_renderer.render(&self.view_state)?;

        let (tx, mut rx) = mpsc::unbounded_channel();
        let shutdown = Arc::new(AtomicBool::new(false));
        let input_thread = spawn_input_thread(tx, Arc::clone(&shutdown), self.poll_interval);

        let result = self.drive(&mut rx).await;

        shutdown.store(true, Ordering::SeqCst);
        drop(rx);
        join_input_thread(input_thread).await;

        self.ui_renderer.cleanup()?;
        log::info!("calculator session ended");
        result
    }

    /// Consume actions until `Quit` or until every sender is gone, rendering after each batch
    pub async fn drive(&mut self, rx: &mut UnboundedReceiver<InputAction>) -> Result<()> {
        while let Some(action) = rx.recv().await {
            let mut running = self.process_action(action);

            // Coalesce whatever queued up while we were busy into a single frame
            while running {
                match rx.try_recv() {
                    Ok(next) => running = self.process_action(next),
                    Err(_) => break,
                }
            }

            self.ui_renderer.render(&self.view_state)?;
            if !running {
                break;
            }
        }
        Ok(())
    }
}

/// Evaluate a typed key sequence without a terminal.
///
/// Each non-whitespace character goes through the keyboard bindings and the same state
/// machine as the interactive session. Equals is pressed at the end unless the sequence
/// already ends with it.
pub fn run_keys(keys: &str) -> Result<DisplayText> {
    let equals = Token::Command(Command::Equals);
    let mut calculator = InputStateMachine::new();
    let mut last_token = None;

    for ch in keys.chars().filter(|ch| !ch.is_whitespace()) {
        let token = Token::from_key_char(ch).ok_or_else(|| {
            RcalcError::invalid_argument(format!("unsupported key '{ch}' in expression"))
        })?;
        calculator.handle(token);
        last_token = Some(token);
    }

    if last_token != Some(equals) {
        calculator.handle(equals);
    }
    Ok(calculator.display())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::Operator;
    use crate::error::CalcError;
    use crate::render::ui::MockUIRenderer;

    fn app() -> Application {
        let mut renderer = MockUIRenderer::new();
        renderer.set_terminal_size(40, 28);
        Application::new(Box::new(renderer), &Settings::default()).unwrap()
    }

    fn token(ch: char) -> InputAction {
        InputAction::Token(Token::from_key_char(ch).unwrap())
    }

    #[test]
    fn test_tokens_update_view_state() {
        let mut app = app();
        for ch in "12+7".chars() {
            assert!(app.process_action(token(ch)));
        }
        assert_eq!(app.view_state().display_text, "12+7");
        assert_eq!(app.view_state().last_pressed, Token::digit(7));

        app.process_action(InputAction::Token(Token::Command(Command::Equals)));
        assert_eq!(app.view_state().display_text, "19");
        assert_eq!(app.calculator().buffer(), "19");
    }

    #[test]
    fn test_errors_show_indicator() {
        let mut app = app();
        for ch in "5/0=".chars() {
            app.process_action(token(ch));
        }
        assert_eq!(app.view_state().display_text, "Error");
        assert!(app.view_state().is_error);
        assert_eq!(app.calculator().last_error(), Some(CalcError::DivisionByZero));
    }

    #[test]
    fn test_clicks_press_keypad_buttons() {
        let mut app = app();
        // 40x28: keypad rows start at 3 and are 4 cells tall, columns are 10 wide
        app.process_action(InputAction::Click { column: 25, row: 8 }); // 8
        app.process_action(InputAction::Click { column: 5, row: 12 }); // *
        app.process_action(InputAction::Click { column: 35, row: 16 }); // 3
        app.process_action(InputAction::Click { column: 15, row: 24 }); // =
        assert_eq!(app.view_state().display_text, "24");

        // status line is not a button
        app.process_action(InputAction::Click { column: 5, row: 27 });
        assert_eq!(app.view_state().display_text, "24");
    }

    #[test]
    fn test_resize_and_quit() {
        let mut app = app();
        assert!(app.process_action(InputAction::Resize {
            width: 100,
            height: 40
        }));
        assert_eq!(app.view_state().width, 100);
        assert!(!app.process_action(InputAction::Quit));
    }

    #[tokio::test]
    async fn test_drive_consumes_until_quit() {
        let mut app = app();
        let (tx, mut rx) = mpsc::unbounded_channel();
        for ch in "9*9".chars() {
            tx.send(token(ch)).unwrap();
        }
        tx.send(InputAction::Token(Token::Command(Command::Equals)))
            .unwrap();
        tx.send(InputAction::Quit).unwrap();
        tx.send(InputAction::Token(Token::Operator(Operator::Add)))
            .unwrap();

        app.drive(&mut rx).await.unwrap();
        assert_eq!(app.view_state().display_text, "81");
        // the action queued after Quit is left unread
        assert!(rx.try_recv().is_ok());
    }

    #[tokio::test]
    async fn test_drive_stops_when_senders_drop() {
        let mut app = app();
        let (tx, mut rx) = mpsc::unbounded_channel();
        tx.send(token('4')).unwrap();
        drop(tx);

        app.drive(&mut rx).await.unwrap();
        assert_eq!(app.view_state().display_text, "4");
    }

    #[test]
    fn test_run_keys_appends_equals() {
        assert_eq!(run_keys("6+4*2").unwrap().text(), "14");
        assert_eq!(run_keys("6 - 4 - 2 =").unwrap().text(), "0");
        assert_eq!(run_keys("9r").unwrap().text(), "3");
        assert_eq!(
            run_keys("5/0").unwrap(),
            DisplayText::Error(CalcError::DivisionByZero)
        );
    }

    #[test]
    fn test_run_keys_rejects_unknown_keys() {
        assert!(matches!(
            run_keys("2^8"),
            Err(RcalcError::InvalidArgument { .. })
        ));
    }
}
