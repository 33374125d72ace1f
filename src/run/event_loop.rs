//! Front-end independent event loop.

use crate::core::frontend::{EventSource, Renderer};
use crate::core::input::EditorEvent;
use crate::core::session::EditorSession;

/// Drive `session` with events from `events`, painting through `renderer`.
///
/// The first frame is drawn before any input is read. Every key is followed
/// by a redraw; the loop returns once a key has asked the session to quit
/// and that frame has been drawn.
pub fn run_event_loop<R, E>(
    session: &mut EditorSession,
    renderer: &mut R,
    events: &mut E,
) -> Result<(), Box<dyn std::error::Error>>
where
    R: Renderer + ?Sized,
    E: EventSource + ?Sized,
{
    let (cols, rows) = renderer.size();
    session.resize(cols, rows);
    renderer.render(session)?;

    while !session.should_quit() {
        match events.next_event()? {
            EditorEvent::Input(input) => {
                session.handle_input(&input);
                renderer.render(session)?;
            }
            EditorEvent::Resize(cols, rows) => {
                tracing::debug!(cols, rows, "resize");
                renderer.resize(cols, rows);
                session.resize(cols, rows);
                renderer.render(session)?;
            }
            EditorEvent::None => {}
        }
    }

    tracing::info!(path = %session.path().display(), "session ended");
    Ok(())
}
