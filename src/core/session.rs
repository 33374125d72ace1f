//! This module defines `EditorSession`, the single owned value holding all
//! editing state: the document, the cursor and viewport, the active mode and
//! the transient status. The event loop threads it through every keystroke.

use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use crate::core::document::Document;
use crate::core::input::InputEvent;
use crate::core::mode::Mode;
use crate::core::modes;
use crate::core::pending::{DEFAULT_PENDING_TIMEOUT, PendingKey};
use crate::core::status;
use crate::core::storage::{Storage, StorageError};
use crate::core::view::View;

/// Status message shown while in Insert mode
pub const INSERT_MESSAGE: &str = "-- INSERT --";

/// One editing session over one file
pub struct EditorSession {
    /// The text being edited
    pub document: Document,
    /// Cursor and viewport
    pub view: View,
    /// Active mode
    mode: Mode,
    /// First half of a two-key gesture
    pub(crate) pending: PendingKey,
    /// How long the first half of a gesture stays live
    pending_timeout: Duration,
    /// Text typed after `:`
    pub(crate) command_line: String,
    /// Transient status message
    message: Option<String>,
    /// Set once the session should end
    quit: bool,
    /// Where the document came from and is saved to
    path: PathBuf,
    /// Backing store for load and save
    storage: Box<dyn Storage>,
}

impl EditorSession {
    /// Create a session over an already loaded document
    pub fn new(path: impl Into<PathBuf>, document: Document, storage: Box<dyn Storage>) -> Self {
        Self {
            document,
            view: View::new(),
            mode: Mode::Normal,
            pending: PendingKey::new(),
            pending_timeout: DEFAULT_PENDING_TIMEOUT,
            command_line: String::new(),
            message: None,
            quit: false,
            path: path.into(),
            storage,
        }
    }

    /// Load `path` through `storage` and start a session on it
    pub fn open(path: impl Into<PathBuf>, storage: Box<dyn Storage>) -> Result<Self, StorageError> {
        let path = path.into();
        let document = storage.load(&path)?;
        Ok(Self::new(path, document, storage))
    }

    /// Use a different window for two-key gestures
    pub fn with_pending_timeout(mut self, timeout: Duration) -> Self {
        self.pending_timeout = timeout;
        self
    }

    // ==================== Accessors ====================

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// File name as shown to the user
    pub fn file_name(&self) -> String {
        self.path.display().to_string()
    }

    pub fn command_line(&self) -> &str {
        &self.command_line
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    pub fn pending_timeout(&self) -> Duration {
        self.pending_timeout
    }

    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Text for the status bar
    pub fn status_line(&self) -> String {
        status::status_line(self)
    }

    // ==================== State changes ====================

    /// Switch modes, running the entry action of the target mode
    pub(crate) fn transition(&mut self, to: Mode) {
        tracing::debug!(from = %self.mode, to = %to, "mode transition");
        match to {
            Mode::Insert => self.message = Some(INSERT_MESSAGE.to_string()),
            Mode::Command => self.command_line.clear(),
            Mode::Normal => {}
        }
        self.mode = to;
    }

    pub fn set_message(&mut self, message: impl Into<String>) {
        self.message = Some(message.into());
    }

    pub fn clear_message(&mut self) {
        self.message = None;
    }

    pub fn request_quit(&mut self) {
        tracing::debug!("quit requested");
        self.quit = true;
    }

    /// Write the document back to its path. The document is left untouched
    /// if the write fails.
    pub fn save(&mut self) -> Result<usize, StorageError> {
        match self.storage.save(&self.path, &self.document) {
            Ok(bytes) => {
                self.document.mark_saved();
                Ok(bytes)
            }
            Err(e) => {
                tracing::warn!(path = %self.path.display(), error = %e, "save failed");
                Err(e)
            }
        }
    }

    /// Adopt a new terminal size. The last row belongs to the status bar.
    /// A zero-sized report is ignored, as the display ignores it.
    pub fn resize(&mut self, cols: u16, rows: u16) {
        if cols == 0 || rows == 0 {
            return;
        }
        self.view
            .set_dimensions(cols as usize, (rows as usize).saturating_sub(1));
    }

    // ==================== Input ====================

    /// Handle one key event
    pub fn handle_input(&mut self, event: &InputEvent) {
        self.handle_input_at(event, Instant::now());
    }

    /// Handle one key event as if it arrived at `now`
    pub fn handle_input_at(&mut self, event: &InputEvent, now: Instant) {
        tracing::trace!(key = %event.key, mode = %self.mode, "key");
        match self.mode {
            Mode::Normal => modes::normal::handle(self, event, now),
            Mode::Insert => modes::insert::handle(self, event),
            Mode::Command => modes::command_line::handle(self, event),
        }
        self.view.ensure_cursor_valid(&self.document);
    }
}
