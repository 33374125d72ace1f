//! Capabilities the event loop needs from a front end.
//!
//! The core never talks to the terminal directly. A front end paints the
//! session through `Renderer` and feeds events through `EventSource`; the
//! terminal backend implements both, tests implement them with scripts.

use crate::core::input::EditorEvent;
use crate::core::session::EditorSession;

/// Paints the session onto a character grid
pub trait Renderer {
    /// Current grid size as (cols, rows)
    fn size(&self) -> (u16, u16);

    /// Adopt a new grid size and force a full redraw on the next frame
    fn resize(&mut self, cols: u16, rows: u16);

    /// Draw a full frame: the visible lines, the status bar and the cursor
    fn render(&mut self, session: &EditorSession) -> Result<(), Box<dyn std::error::Error>>;
}

/// Supplies input events, one at a time
pub trait EventSource {
    /// Wait for the next event. `EditorEvent::None` means nothing arrived
    /// before the source gave up waiting.
    fn next_event(&mut self) -> Result<EditorEvent, Box<dyn std::error::Error>>;
}
