//! Logical input tokens fed into the calculator engine.
//!
//! Every key press or keypad click is reduced to a [`Token`] before it reaches the
//! state machine. Tokens print as their keypad label and parse back from it.

use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// A single decimal digit, `0` through `9`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Digit(u8);

impl Digit {
    pub fn new(value: u8) -> Option<Self> {
        (value <= 9).then_some(Self(value))
    }

    pub fn from_char(ch: char) -> Option<Self> {
        ch.to_digit(10).map(|value| Self(value as u8))
    }

    pub fn to_char(self) -> char {
        char::from(b'0' + self.0)
    }
}

/// The four binary operators understood by the evaluator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl Operator {
    pub const ALL: [Operator; 4] = [
        Operator::Add,
        Operator::Subtract,
        Operator::Multiply,
        Operator::Divide,
    ];

    /// Character used for this operator inside the expression buffer.
    pub fn symbol(self) -> char {
        match self {
            Operator::Add => '+',
            Operator::Subtract => '-',
            Operator::Multiply => '*',
            Operator::Divide => '/',
        }
    }

    pub fn from_symbol(ch: char) -> Option<Self> {
        match ch {
            '+' => Some(Operator::Add),
            '-' => Some(Operator::Subtract),
            '*' => Some(Operator::Multiply),
            '/' => Some(Operator::Divide),
            _ => None,
        }
    }

    /// Binding strength: `*` and `/` bind tighter than `+` and `-`.
    pub fn precedence(self) -> u8 {
        match self {
            Operator::Add | Operator::Subtract => 1,
            Operator::Multiply | Operator::Divide => 2,
        }
    }
}

/// Returns true for characters that act as binary operators in the buffer.
pub fn is_operator_char(ch: char) -> bool {
    Operator::from_symbol(ch).is_some()
}

/// Editing and evaluation commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Command {
    Clear,
    ClearEntry,
    Backspace,
    ToggleSign,
    Sqrt,
    Percent,
    Equals,
}

/// One discrete logical input unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Token {
    Digit(Digit),
    Point,
    Operator(Operator),
    Command(Command),
}

impl Token {
    /// Convenience constructor for digit tokens.
    pub fn digit(value: u8) -> Option<Self> {
        Digit::new(value).map(Token::Digit)
    }

    /// Map a typed character to a token using the keyboard bindings.
    ///
    /// Covers every printable key: digits, `.`, the operators, `=` for Equals, `%` for
    /// Percent, `r`/`R` for square root and `n`/`N` for sign toggle. Non-printable keys
    /// (Enter, Escape, Delete, Backspace) are bound in the input layer.
    pub fn from_key_char(ch: char) -> Option<Self> {
        if let Some(digit) = Digit::from_char(ch) {
            return Some(Token::Digit(digit));
        }
        if let Some(op) = Operator::from_symbol(ch) {
            return Some(Token::Operator(op));
        }
        match ch {
            '.' => Some(Token::Point),
            '=' => Some(Token::Command(Command::Equals)),
            '%' => Some(Token::Command(Command::Percent)),
            'r' | 'R' => Some(Token::Command(Command::Sqrt)),
            'n' | 'N' => Some(Token::Command(Command::ToggleSign)),
            _ => None,
        }
    }

    /// Keypad label for this token.
    pub fn label(self) -> String {
        self.to_string()
    }

    /// True for tokens drawn with the accent style on the keypad.
    pub fn is_accent(self) -> bool {
        !matches!(
            self,
            Token::Digit(_) | Token::Point | Token::Command(Command::ToggleSign)
        )
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Digit(digit) => write!(f, "{}", digit.to_char()),
            Token::Point => f.write_str("."),
            Token::Operator(op) => write!(f, "{}", op.symbol()),
            Token::Command(command) => f.write_str(match command {
                Command::Clear => "C",
                Command::ClearEntry => "CE",
                Command::Backspace => "⌫",
                Command::ToggleSign => "+/-",
                Command::Sqrt => "√",
                Command::Percent => "%",
                Command::Equals => "=",
            }),
        }
    }
}

/// Returned when a keypad label does not name any token.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown keypad label '{0}'")]
pub struct ParseTokenError(pub String);

impl FromStr for Token {
    type Err = ParseTokenError;

    fn from_str(label: &str) -> Result<Self, Self::Err> {
        let command = match label {
            "C" => Some(Command::Clear),
            "CE" => Some(Command::ClearEntry),
            "⌫" => Some(Command::Backspace),
            "+/-" => Some(Command::ToggleSign),
            "√" => Some(Command::Sqrt),
            "%" => Some(Command::Percent),
            "=" => Some(Command::Equals),
            _ => None,
        };
        if let Some(command) = command {
            return Ok(Token::Command(command));
        }

        let mut chars = label.chars();
        match (chars.next(), chars.next()) {
            (Some(ch), None) if ch == '.' || ch.is_ascii_digit() || is_operator_char(ch) => {
                Token::from_key_char(ch).ok_or_else(|| ParseTokenError(label.to_string()))
            }
            _ => Err(ParseTokenError(label.to_string())),
        }
    }
}
