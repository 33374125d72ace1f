//! Backing store for the document.
//!
//! The session only sees the `Storage` trait. `FileStorage` is the real
//! backend used by the terminal front end; `MemoryStorage` keeps files in a
//! shared map so editing sessions can run without touching the disk.

use std::cell::RefCell;
use std::collections::HashMap;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::rc::Rc;

use tempfile::NamedTempFile;
use thiserror::Error;

use crate::core::document::Document;

/// Mode for files created by a save (Unix only)
#[cfg(unix)]
const NEW_FILE_MODE: u32 = 0o644;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("file does not exist: {}", .0.display())]
    NotFound(PathBuf),

    #[error("path is a directory, not a file: {}", .0.display())]
    IsDirectory(PathBuf),

    #[error("cannot open device/special file: {}", .0.display())]
    SpecialFile(PathBuf),

    #[error("{}: read-only", .0.display())]
    ReadOnly(PathBuf),

    #[error("{}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl StorageError {
    fn io(path: &Path, source: std::io::Error) -> Self {
        StorageError::Io {
            path: path.to_path_buf(),
            source,
        }
    }
}

/// Load and save capability used by the editing session
pub trait Storage {
    /// Read `path` into a document, splitting lines on `\n`
    fn load(&self, path: &Path) -> Result<Document, StorageError>;

    /// Write the document's lines joined with `\n` to `path`, replacing its
    /// contents. Returns the number of bytes written.
    fn save(&self, path: &Path, document: &Document) -> Result<usize, StorageError>;
}

/// Files on the local file system
#[derive(Debug, Clone, Copy, Default)]
pub struct FileStorage;

impl FileStorage {
    /// Reject directories and special files that could hang the editor
    fn validate_file_path(path: &Path) -> Result<(), StorageError> {
        let metadata = match fs::metadata(path) {
            Ok(m) => m,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Err(StorageError::NotFound(path.to_path_buf()));
            }
            Err(e) => return Err(StorageError::io(path, e)),
        };

        if metadata.is_dir() {
            return Err(StorageError::IsDirectory(path.to_path_buf()));
        }

        #[cfg(unix)]
        {
            use std::os::unix::fs::FileTypeExt;
            let ft = metadata.file_type();
            if ft.is_block_device() || ft.is_char_device() || ft.is_fifo() || ft.is_socket() {
                return Err(StorageError::SpecialFile(path.to_path_buf()));
            }
        }

        Ok(())
    }

    /// Permissions for the replacement file: keep the existing ones, or use
    /// the default mode for a new file
    fn target_permissions(path: &Path) -> Option<fs::Permissions> {
        fs::metadata(path)
            .map(|m| m.permissions())
            .ok()
            .or_else(new_file_permissions)
    }
}

#[cfg(unix)]
fn new_file_permissions() -> Option<fs::Permissions> {
    use std::os::unix::fs::PermissionsExt;
    Some(fs::Permissions::from_mode(NEW_FILE_MODE))
}

#[cfg(not(unix))]
fn new_file_permissions() -> Option<fs::Permissions> {
    None
}

impl Storage for FileStorage {
    fn load(&self, path: &Path) -> Result<Document, StorageError> {
        Self::validate_file_path(path)?;

        let bytes = fs::read(path).map_err(|e| StorageError::io(path, e))?;
        // Invalid UTF-8 is loaded lossily rather than refused
        let document = match String::from_utf8(bytes) {
            Ok(text) => Document::from_string(text),
            Err(e) => {
                tracing::warn!(path = %path.display(), "file is not valid UTF-8, loading lossily");
                Document::from_string(String::from_utf8_lossy(e.as_bytes()))
            }
        };

        tracing::info!(
            path = %path.display(),
            lines = document.line_count(),
            bytes = document.len_bytes(),
            "loaded file"
        );
        Ok(document)
    }

    fn save(&self, path: &Path, document: &Document) -> Result<usize, StorageError> {
        // Write through symlinks: the rename must replace the real file, not the link
        let target = fs::canonicalize(path).unwrap_or_else(|_| path.to_path_buf());

        // Write to temp file first for atomic save
        let parent = match target.parent() {
            Some(p) if !p.as_os_str().is_empty() => p,
            _ => Path::new("."),
        };
        let mut temp_file = NamedTempFile::new_in(parent).map_err(|e| StorageError::io(path, e))?;

        // Write content chunk by chunk to avoid large allocations
        for chunk in document.chunks() {
            temp_file
                .write_all(chunk.as_bytes())
                .map_err(|e| StorageError::io(path, e))?;
        }
        temp_file.flush().map_err(|e| StorageError::io(path, e))?;

        if let Some(permissions) = Self::target_permissions(&target) {
            temp_file
                .as_file()
                .set_permissions(permissions)
                .map_err(|e| StorageError::io(path, e))?;
        }

        // Data must reach the disk before the rename makes it visible
        temp_file
            .as_file()
            .sync_all()
            .map_err(|e| StorageError::io(path, e))?;

        temp_file
            .persist(&target)
            .map_err(|e| StorageError::io(path, e.error))?;

        tracing::info!(path = %path.display(), bytes = document.len_bytes(), "saved file");
        Ok(document.len_bytes())
    }
}

#[derive(Debug, Default)]
struct MemoryFiles {
    files: HashMap<PathBuf, String>,
    read_only: bool,
}

/// In-memory files shared between clones of the same `MemoryStorage`
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    inner: Rc<RefCell<MemoryFiles>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create or replace a file
    pub fn insert(&self, path: impl Into<PathBuf>, content: impl Into<String>) {
        self.inner
            .borrow_mut()
            .files
            .insert(path.into(), content.into());
    }

    /// Current content of a file
    pub fn contents(&self, path: impl AsRef<Path>) -> Option<String> {
        self.inner.borrow().files.get(path.as_ref()).cloned()
    }

    /// Make every save fail, as a full or read-only disk would
    pub fn set_read_only(&self, read_only: bool) {
        self.inner.borrow_mut().read_only = read_only;
    }
}

impl Storage for MemoryStorage {
    fn load(&self, path: &Path) -> Result<Document, StorageError> {
        self.inner
            .borrow()
            .files
            .get(path)
            .map(Document::from_string)
            .ok_or_else(|| StorageError::NotFound(path.to_path_buf()))
    }

    fn save(&self, path: &Path, document: &Document) -> Result<usize, StorageError> {
        let mut inner = self.inner.borrow_mut();
        if inner.read_only {
            return Err(StorageError::ReadOnly(path.to_path_buf()));
        }
        inner.files.insert(path.to_path_buf(), document.to_string());
        Ok(document.len_bytes())
    }
}
