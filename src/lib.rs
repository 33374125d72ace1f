//! vimlet - a small modal text editor for the terminal.
//!
//! `core` is the headless editing engine; `terminal` renders it with
//! crossterm and `run` ties the two together.

pub mod cli;
pub mod config;
pub mod core;
pub mod logging;
pub mod run;
pub mod terminal;
pub mod user_config;
