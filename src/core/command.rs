//! The command-line language typed after `:`.
//!
//! Every command maps onto session effects. Failures come back as a
//! `CommandError`; the caller turns them into a status message, so nothing
//! here ends the session except an explicit quit.

use thiserror::Error;

use crate::core::session::EditorSession;
use crate::core::storage::StorageError;

/// A parsed command line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExCommand {
    /// `w`: save to the file the document came from
    Write,
    /// `q`: quit without saving
    Quit,
    /// `wq`: save, then quit if the save worked
    WriteQuit,
    /// `q!`: quit unconditionally
    ForceQuit,
    /// Anything else, kept verbatim for the error message
    Unknown(String),
}

#[derive(Debug, Error)]
pub enum CommandError {
    #[error("unknown command: {0}")]
    Unknown(String),

    #[error("error saving file: {0}")]
    Save(#[from] StorageError),
}

impl ExCommand {
    /// Parse a command line. Surrounding whitespace is ignored; a blank
    /// line is not a command.
    pub fn parse(input: &str) -> Option<Self> {
        let text = input.trim();
        let command = match text {
            "" => return None,
            "w" => ExCommand::Write,
            "q" => ExCommand::Quit,
            "wq" => ExCommand::WriteQuit,
            "q!" => ExCommand::ForceQuit,
            other => ExCommand::Unknown(other.to_string()),
        };
        Some(command)
    }

    /// Apply the command to the session
    pub fn execute(&self, session: &mut EditorSession) -> Result<(), CommandError> {
        tracing::debug!(command = ?self, "executing command");
        match self {
            ExCommand::Write => {
                write(session)?;
            }
            ExCommand::Quit | ExCommand::ForceQuit => session.request_quit(),
            ExCommand::WriteQuit => {
                write(session)?;
                session.request_quit();
            }
            ExCommand::Unknown(text) => return Err(CommandError::Unknown(text.clone())),
        }
        Ok(())
    }
}

/// Save and report what was written
fn write(session: &mut EditorSession) -> Result<(), CommandError> {
    let bytes = session.save()?;
    let message = format!(
        "\"{}\" {}L, {}B written",
        session.file_name(),
        session.document.line_count(),
        bytes
    );
    session.set_message(message);
    Ok(())
}
