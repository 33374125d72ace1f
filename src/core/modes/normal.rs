use std::time::Instant;

use crate::core::input::{InputEvent, Key};
use crate::core::mode::Mode;
use crate::core::session::EditorSession;

/// Handle a key in Normal mode
pub fn handle(session: &mut EditorSession, event: &InputEvent, now: Instant) {
    if event.key == Key::Char('d') {
        if session.pending.complete('d', now) {
            delete_line(session);
        } else {
            let timeout = session.pending_timeout();
            session.pending.arm('d', now, timeout);
        }
        return;
    }

    // Any other key breaks a half-typed gesture
    session.pending.cancel();

    match event.key {
        Key::Left | Key::Char('h') => session.view.move_left(&session.document),
        Key::Right | Key::Char('l') => session.view.move_right(&session.document),
        Key::Up | Key::Char('k') => session.view.move_up(&session.document),
        Key::Down | Key::Char('j') => session.view.move_down(&session.document),
        Key::Char('x') => {
            session.view.ensure_cursor_valid(&session.document);
            let (row, col) = (session.view.cursor_y, session.view.cursor_x);
            session.document.remove_char(row, col);
        }
        Key::Char('i') => session.transition(Mode::Insert),
        Key::Char(':') => session.transition(Mode::Command),
        Key::Ctrl('c') => session.request_quit(),
        _ => {}
    }
}

/// Delete the cursor line, keeping the cursor on a valid line
fn delete_line(session: &mut EditorSession) {
    session.view.ensure_cursor_valid(&session.document);
    let row = session.view.cursor_y;
    if let Some(removed) = session.document.delete_line(row) {
        tracing::debug!(row, len = removed.len(), "deleted line");
    }
    session.view.ensure_cursor_valid(&session.document);
    session.view.ensure_cursor_visible();
}
