use std::fmt;

/// The active interpretation of keystrokes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    /// Navigation and line edits (initial mode)
    #[default]
    Normal,
    /// Typed characters go into the document
    Insert,
    /// Typed characters go into the command line
    Command,
}

impl Mode {
    /// Name shown in the status bar
    pub fn name(self) -> &'static str {
        match self {
            Mode::Normal => "NORMAL",
            Mode::Insert => "INSERT",
            Mode::Command => "COMMAND",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
