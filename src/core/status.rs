use crate::core::mode::Mode;
use crate::core::session::EditorSession;

/// Compose the status bar text:
/// ` <file>[ [+]] | <MODE> | Ln <r>, Col <c> ` followed by the command line
/// in Command mode and the transient message, if any.
pub fn status_line(session: &EditorSession) -> String {
    let modified = if session.document.modified { " [+]" } else { "" };
    let mut status = format!(
        " {}{} | {} | Ln {}, Col {} ",
        session.file_name(),
        modified,
        session.mode().name(),
        session.view.cursor_y + 1,
        session.view.cursor_x + 1
    );

    if session.mode() == Mode::Command {
        status.push_str(" :");
        status.push_str(session.command_line());
    }

    if let Some(message) = session.message() {
        status.push_str(" | ");
        status.push_str(message);
    }

    status
}
