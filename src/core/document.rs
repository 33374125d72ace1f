//! Document: the line buffer holding the text being edited.
//! No cursor or viewport state (those belong to View).
//!
//! Backed by a ropey Rope built without the `unicode_lines`/`cr_lines`
//! features, so only `\n` separates lines. Rows and columns are addressed
//! in chars. The rope always reports at least one line, which keeps the
//! "never zero lines" invariant without extra bookkeeping.

use ropey::Rope;

/// Ordered sequence of text lines
#[derive(Debug, Clone)]
pub struct Document {
    /// Text content stored in a Rope (O(log n) operations)
    rope: Rope,
    /// Dirty flag (true if document has unsaved changes)
    pub modified: bool,
    /// Version counter for tracking document changes
    pub version: u64,
}

impl Document {
    /// Create a new document holding a single empty line
    pub fn new() -> Self {
        Self {
            rope: Rope::new(),
            modified: false,
            version: 0,
        }
    }

    /// Create a document from a string, splitting lines on `\n`
    pub fn from_string(content: impl AsRef<str>) -> Self {
        Self {
            rope: Rope::from_str(content.as_ref()),
            modified: false,
            version: 0,
        }
    }

    // ==================== Content Access ====================

    /// Number of lines (always >= 1)
    pub fn line_count(&self) -> usize {
        self.rope.len_lines()
    }

    /// Total length in bytes of the joined text
    pub fn len_bytes(&self) -> usize {
        self.rope.len_bytes()
    }

    /// Content of a line without its newline
    pub fn line(&self, row: usize) -> Option<String> {
        if row >= self.line_count() {
            return None;
        }
        let mut s = self.rope.line(row).to_string();
        if s.ends_with('\n') {
            s.pop();
        }
        Some(s)
    }

    /// Length of a line in chars, excluding the newline. Zero past the end.
    pub fn line_len(&self, row: usize) -> usize {
        if row >= self.line_count() {
            return 0;
        }
        let line = self.rope.line(row);
        let len = line.len_chars();
        if len > 0 && line.char(len - 1) == '\n' {
            len - 1
        } else {
            len
        }
    }

    /// Iterate over the lines starting at `row`, without newlines
    pub fn lines_from(&self, row: usize) -> impl Iterator<Item = String> + '_ {
        let start = row.min(self.line_count());
        (start..self.line_count()).filter_map(move |r| self.line(r))
    }

    /// Iterate over the rope's text chunks (for streaming writes)
    pub fn chunks(&self) -> impl Iterator<Item = &str> {
        self.rope.chunks()
    }

    /// Char index of `(row, col)` with `col` clamped to the line length
    fn char_index(&self, row: usize, col: usize) -> usize {
        self.rope.line_to_char(row) + col.min(self.line_len(row))
    }

    // ==================== Editing Operations ====================

    /// Insert a char at `(row, col)`. A column past the end of the line
    /// appends. Returns false if `row` is out of range.
    pub fn insert_char(&mut self, row: usize, col: usize, ch: char) -> bool {
        if row >= self.line_count() {
            return false;
        }
        let idx = self.char_index(row, col);
        self.rope.insert_char(idx, ch);
        self.mark_modified();
        true
    }

    /// Remove the char at `(row, col)` and return it. No-op at or past the
    /// end of the line.
    pub fn remove_char(&mut self, row: usize, col: usize) -> Option<char> {
        if row >= self.line_count() || col >= self.line_len(row) {
            return None;
        }
        let idx = self.char_index(row, col);
        let ch = self.rope.char(idx);
        self.rope.remove(idx..idx + 1);
        self.mark_modified();
        Some(ch)
    }

    /// Split line `row` at `col`; the tail becomes line `row + 1`.
    pub fn split_line(&mut self, row: usize, col: usize) -> bool {
        if row >= self.line_count() {
            return false;
        }
        let idx = self.char_index(row, col);
        self.rope.insert_char(idx, '\n');
        self.mark_modified();
        true
    }

    /// Delete line `row` and return its content. Deleting the only line
    /// leaves a single empty line behind.
    pub fn delete_line(&mut self, row: usize) -> Option<String> {
        let count = self.line_count();
        if row >= count {
            return None;
        }
        let removed = self.line(row)?;
        let start = self.rope.line_to_char(row);
        let range = if row + 1 < count {
            // Take the line together with its own newline
            start..self.rope.line_to_char(row + 1)
        } else if row > 0 {
            // Last line: take the newline that precedes it
            start - 1..self.rope.len_chars()
        } else {
            start..self.rope.len_chars()
        };
        self.rope.remove(range);
        self.mark_modified();
        Some(removed)
    }

    // ==================== State Management ====================

    /// Mark document as modified
    fn mark_modified(&mut self) {
        self.modified = true;
        self.version += 1;
    }

    /// Clear the dirty flag after a successful save
    pub fn mark_saved(&mut self) {
        self.modified = false;
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for Document {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for chunk in self.rope.chunks() {
            f.write_str(chunk)?;
        }
        Ok(())
    }
}
