use crate::core::command::ExCommand;
use crate::core::input::{InputEvent, Key};
use crate::core::mode::Mode;
use crate::core::session::EditorSession;

/// Handle a key in Command mode
pub fn handle(session: &mut EditorSession, event: &InputEvent) {
    match event.key {
        Key::Esc => {
            session.command_line.clear();
            session.clear_message();
            session.transition(Mode::Normal);
        }
        Key::Enter => {
            let text = std::mem::take(&mut session.command_line);
            if let Some(command) = ExCommand::parse(&text) {
                if let Err(e) = command.execute(session) {
                    tracing::warn!(error = %e, "command failed");
                    session.set_message(e.to_string());
                }
            }
            session.transition(Mode::Normal);
        }
        Key::Backspace => {
            session.command_line.pop();
        }
        key => {
            if let Some(ch) = key.printable() {
                session.command_line.push(ch);
            }
        }
    }
}
