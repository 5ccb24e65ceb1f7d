//! # rcalc - Terminal Calculator
//!
//! A keyboard and mouse driven calculator for the terminal. Keys are turned into logical
//! tokens, an input state machine edits a single expression buffer, and a left-to-right
//! evaluator commits it on `=`.
//!
//! ## Architecture
//!
//! - [`engine`] - Tokens, the input state machine, the evaluator and number formatting
//! - [`error`] - Calculation error kinds and the crate error type
//! - [`input`] - Terminal event collection and key bindings
//! - [`render::ui`](crate::render::ui) - Terminal user interface components
//! - [`config`] - Settings and the optional TOML config file
//! - [`app`] - Application core and component coordination

// Core modules
pub mod engine;
pub mod error;

// Front end
pub mod config;
pub mod input;
pub mod render;

pub mod app;

// Re-export commonly used types for convenience
pub use error::{CalcError, RcalcError, Result};

// Public API surface for external usage
pub use app::{run_keys, Application};
pub use config::Settings;
pub use engine::{evaluate, CalcState, Command, DisplayText, InputStateMachine, Operator, Token};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
