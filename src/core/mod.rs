//! This module constitutes the core, headless editing engine of vimlet.
//! It owns the document, the cursor and viewport, the modal key handling and
//! the command-line interpreter. Display and storage are reached only
//! through the `Renderer`, `EventSource` and `Storage` traits.

pub mod command;
pub mod document;
pub mod frontend;
pub mod input;
pub mod mode;
pub mod modes;
pub mod pending;
pub mod session;
pub mod status;
pub mod storage;
pub mod view;
