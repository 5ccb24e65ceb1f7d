//! Input state machine driving the expression buffer.
//!
//! Consumes [`Token`]s one at a time and edits the buffer in place. Calculation failures
//! never escape [`InputStateMachine::handle`]: they reset the buffer and surface as
//! [`DisplayText::Error`] carrying the failure kind.

use crate::engine::evaluator::evaluate;
use crate::engine::format::format_number;
use crate::engine::segment::{number_segment, number_segment_start, rewrite_operand};
use crate::engine::token::{is_operator_char, Command, Digit, Operator, Token};
use crate::error::CalcError;
use std::fmt;

/// Text shown for every calculation failure.
pub const ERROR_TEXT: &str = "Error";

/// Mutable calculator state threaded through every token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalcState {
    /// Expression typed so far. Empty renders as `0`.
    pub buffer: String,
    /// When set, the next digit starts a new number segment.
    pub start_new_number: bool,
}

impl CalcState {
    pub fn new() -> Self {
        Self {
            buffer: String::new(),
            start_new_number: true,
        }
    }

    /// State with a pre-filled buffer, as if the text had just been typed.
    pub fn with_buffer(buffer: impl Into<String>) -> Self {
        Self {
            buffer: buffer.into(),
            start_new_number: false,
        }
    }

    fn reset(&mut self) {
        self.buffer.clear();
        self.start_new_number = true;
    }
}

impl Default for CalcState {
    fn default() -> Self {
        Self::new()
    }
}

/// What the display shows after a token has been handled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DisplayText {
    Expression(String),
    Error(CalcError),
}

impl DisplayText {
    pub fn text(&self) -> &str {
        match self {
            DisplayText::Expression(text) => text.as_str(),
            DisplayText::Error(_) => ERROR_TEXT,
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, DisplayText::Error(_))
    }

    pub fn error(&self) -> Option<CalcError> {
        match self {
            DisplayText::Error(kind) => Some(*kind),
            DisplayText::Expression(_) => None,
        }
    }
}

impl fmt::Display for DisplayText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.text())
    }
}

/// Whether a handler touched the state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Edit {
    Changed,
    Unchanged,
}

/// State machine that turns calculator tokens into buffer edits.
#[derive(Debug, Default)]
pub struct InputStateMachine {
    state: CalcState,
    /// Failure still on display; cleared by the next token that edits the state.
    last_error: Option<CalcError>,
}

impl InputStateMachine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_state(state: CalcState) -> Self {
        Self {
            state,
            last_error: None,
        }
    }

    pub fn state(&self) -> &CalcState {
        &self.state
    }

    pub fn buffer(&self) -> &str {
        &self.state.buffer
    }

    pub fn last_error(&self) -> Option<CalcError> {
        self.last_error
    }

    /// Current display without consuming a token.
    pub fn display(&self) -> DisplayText {
        match self.last_error {
            Some(kind) => DisplayText::Error(kind),
            None if self.state.buffer.is_empty() => DisplayText::Expression("0".to_string()),
            None => DisplayText::Expression(self.state.buffer.clone()),
        }
    }

    /// Handle one token and return the resulting display.
    pub fn handle(&mut self, token: Token) -> DisplayText {
        match self.apply(token) {
            Ok(Edit::Changed) => self.last_error = None,
            Ok(Edit::Unchanged) => {}
            Err(kind) => {
                log::warn!(
                    "calculation error on '{}' with buffer {:?}: {}",
                    token,
                    self.state.buffer,
                    kind
                );
                self.state.reset();
                self.last_error = Some(kind);
            }
        }

        let display = self.display();
        log::debug!(
            "token '{}' -> buffer {:?}, start_new_number={}",
            token,
            self.state.buffer,
            self.state.start_new_number
        );
        display
    }

    fn apply(&mut self, token: Token) -> Result<Edit, CalcError> {
        match token {
            Token::Digit(digit) => Ok(self.push_digit(digit)),
            Token::Point => Ok(self.push_point()),
            Token::Operator(op) => Ok(self.push_operator(op)),
            Token::Command(Command::Clear) => {
                self.state.reset();
                Ok(Edit::Changed)
            }
            Token::Command(Command::ClearEntry) => Ok(self.clear_entry()),
            Token::Command(Command::Backspace) => Ok(self.backspace()),
            Token::Command(Command::ToggleSign) => self.toggle_sign(),
            Token::Command(Command::Sqrt) => self.sqrt(),
            Token::Command(Command::Percent) => self.percent(),
            Token::Command(Command::Equals) => self.commit(),
        }
    }

    fn push_digit(&mut self, digit: Digit) -> Edit {
        // A fresh segment still appends: the buffer after an operator ends in it.
        self.state.buffer.push(digit.to_char());
        self.state.start_new_number = false;
        Edit::Changed
    }

    fn push_point(&mut self) -> Edit {
        if number_segment(&self.state.buffer).contains('.') {
            return Edit::Unchanged;
        }
        self.state.buffer.push('.');
        Edit::Changed
    }

    fn push_operator(&mut self, op: Operator) -> Edit {
        let buffer = &mut self.state.buffer;
        if buffer.is_empty() {
            return Edit::Unchanged;
        }
        if buffer.ends_with(is_operator_char) {
            buffer.pop();
        }
        buffer.push(op.symbol());
        self.state.start_new_number = true;
        Edit::Changed
    }

    fn clear_entry(&mut self) -> Edit {
        let start = number_segment_start(&self.state.buffer);
        self.state.buffer.truncate(start);
        self.state.start_new_number = true;
        Edit::Changed
    }

    fn backspace(&mut self) -> Edit {
        if self.state.buffer.pop().is_none() {
            return Edit::Unchanged;
        }
        if self.state.buffer.is_empty() {
            self.state.buffer.push('0');
        }
        Edit::Changed
    }

    fn toggle_sign(&mut self) -> Result<Edit, CalcError> {
        if self.state.buffer.is_empty() {
            return Ok(Edit::Unchanged);
        }
        self.state.buffer = rewrite_operand(&self.state.buffer, |value| Ok(-value))?;
        self.state.start_new_number = true;
        Ok(Edit::Changed)
    }

    fn sqrt(&mut self) -> Result<Edit, CalcError> {
        self.state.buffer = rewrite_operand(&self.state.buffer, |value| {
            if value < 0.0 {
                Err(CalcError::NegativeSqrtOperand)
            } else {
                Ok(value.sqrt())
            }
        })?;
        self.state.start_new_number = true;
        Ok(Edit::Changed)
    }

    fn percent(&mut self) -> Result<Edit, CalcError> {
        self.state.buffer = rewrite_operand(&self.state.buffer, |value| Ok(value / 100.0))?;
        Ok(Edit::Changed)
    }

    fn commit(&mut self) -> Result<Edit, CalcError> {
        if self.state.buffer.is_empty() {
            return Ok(Edit::Unchanged);
        }
        let result = evaluate(&self.state.buffer)?;
        self.state.buffer = format_number(result);
        self.state.start_new_number = true;
        Ok(Edit::Changed)
    }
}
