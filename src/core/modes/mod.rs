//! Per-mode key handlers.
//!
//! Each handler receives the session and one key event, mutates the session
//! and returns. None of them fail: boundary conditions are clamped or ignored
//! and command errors end up in the status message.

pub mod command_line;
pub mod insert;
pub mod normal;
