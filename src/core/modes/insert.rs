use crate::core::input::{InputEvent, Key};
use crate::core::mode::Mode;
use crate::core::session::EditorSession;

/// Handle a key in Insert mode
pub fn handle(session: &mut EditorSession, event: &InputEvent) {
    session.view.ensure_cursor_valid(&session.document);
    let (row, col) = (session.view.cursor_y, session.view.cursor_x);

    match event.key {
        Key::Esc => {
            session.clear_message();
            session.transition(Mode::Normal);
        }
        Key::Enter => {
            if session.document.split_line(row, col) {
                session.view.goto(&session.document, row + 1, 0);
            }
        }
        // Column 0 does not join with the previous line
        Key::Backspace => {
            if col > 0 && session.document.remove_char(row, col - 1).is_some() {
                session.view.cursor_x = col - 1;
            }
        }
        key => {
            if let Some(ch) = key.printable() {
                if session.document.insert_char(row, col, ch) {
                    session.view.cursor_x = col + 1;
                }
            }
        }
    }
}
