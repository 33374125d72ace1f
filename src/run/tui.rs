//! Terminal (TUI) mode implementation.

use std::path::Path;

use crate::config::Config;
use crate::core::session::EditorSession;
use crate::core::storage::FileStorage;
use crate::run::event_loop::run_event_loop;
use crate::terminal::events::EventHandler;
use crate::terminal::raw::RawMode;
use crate::terminal::render::TerminalRenderer;

/// Run in terminal (TUI) mode.
///
/// The file is loaded before the terminal is touched, so a load failure is
/// reported on a normal screen.
pub fn run_terminal_mode(path: &Path, config: &Config) -> Result<(), Box<dyn std::error::Error>> {
    let mut session = EditorSession::open(path, Box::new(FileStorage))?
        .with_pending_timeout(config.pending_key_timeout());

    let mut renderer = TerminalRenderer::stdout(config)?;
    let _raw_mode = RawMode::new()?;
    let mut events = EventHandler::new();

    run_event_loop(&mut session, &mut renderer, &mut events)
}
