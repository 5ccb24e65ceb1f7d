//! Input subsystem: raw terminal event collection and the calculator key bindings.

pub mod raw;
pub mod service;

// Modules outside this crate should prefer importing from `crate::input` rather than
// reaching into submodules.
pub use service::{InputAction, InputService, KeyBindings};
