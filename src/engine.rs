//! Calculator engine: tokens, the input state machine and the evaluator.
//!
//! Nothing in here knows about terminals. The front end turns key presses into
//! [`Token`]s, feeds them to [`InputStateMachine::handle`] and renders the returned
//! [`DisplayText`].

pub mod evaluator;
pub mod format;
pub mod segment;
pub mod state;
pub mod token;

pub use evaluator::evaluate;
pub use format::format_number;
pub use state::{CalcState, DisplayText, InputStateMachine, ERROR_TEXT};
pub use token::{Command, Digit, Operator, ParseTokenError, Token};
