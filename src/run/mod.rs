//! Application execution for vimlet.
//!
//! - `run_event_loop` drives a session through any `Renderer`/`EventSource` pair
//! - `run_terminal_mode` wires the loop to the real terminal

mod event_loop;
mod tui;

use std::io::IsTerminal;

pub use event_loop::run_event_loop;
pub use tui::run_terminal_mode;

/// Fail early when stdin or stdout is not an interactive terminal.
pub fn require_terminal() -> Result<(), Box<dyn std::error::Error>> {
    require_terminal_internal(std::io::stdin().is_terminal(), std::io::stdout().is_terminal())
}

/// Terminal check with injectable tty state.
fn require_terminal_internal(
    is_stdin_tty: bool,
    is_stdout_tty: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    if !is_stdin_tty {
        return Err("standard input is not a terminal".into());
    }
    if !is_stdout_tty {
        return Err("standard output is not a terminal".into());
    }
    Ok(())
}
