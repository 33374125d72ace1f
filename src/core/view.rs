use crate::core::document::Document;

/// `View` is the cursor and the visible window onto the `Document`.
///
/// The cursor is addressed in chars. `cursor_x` may equal the line length,
/// which is the insertion point at end of line. `scroll_offset` is the first
/// visible row and is only changed through `ensure_cursor_visible`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct View {
    /// Cursor column position (chars)
    pub cursor_x: usize,
    /// Cursor line position
    pub cursor_y: usize,
    /// Vertical scroll offset (top visible line)
    pub scroll_offset: usize,
    /// Viewport width (columns)
    pub width: usize,
    /// Viewport height (text rows, status bar excluded)
    pub height: usize,
}

impl Default for View {
    fn default() -> Self {
        Self::new()
    }
}

impl View {
    pub fn new() -> Self {
        Self {
            cursor_x: 0,
            cursor_y: 0,
            scroll_offset: 0,
            width: 80,
            height: 23,
        }
    }

    /// Set viewport dimensions and re-derive the scroll offset
    pub fn set_dimensions(&mut self, width: usize, height: usize) {
        self.width = width.max(1);
        self.height = height.max(1);
        self.ensure_cursor_visible();
    }

    /// Move cursor left one char, stopping at column 0
    pub fn move_left(&mut self, document: &Document) {
        self.ensure_cursor_valid(document);
        self.cursor_x = self.cursor_x.saturating_sub(1);
    }

    /// Move cursor right one char, stopping just past the last char
    pub fn move_right(&mut self, document: &Document) {
        self.ensure_cursor_valid(document);
        if self.cursor_x < document.line_len(self.cursor_y) {
            self.cursor_x += 1;
        }
    }

    /// Move cursor up one line
    pub fn move_up(&mut self, document: &Document) {
        if self.cursor_y > 0 {
            self.cursor_y -= 1;
        }
        self.ensure_cursor_valid(document);
        self.ensure_cursor_visible();
    }

    /// Move cursor down one line
    pub fn move_down(&mut self, document: &Document) {
        if self.cursor_y < document.line_count().saturating_sub(1) {
            self.cursor_y += 1;
        }
        self.ensure_cursor_valid(document);
        self.ensure_cursor_visible();
    }

    /// Place the cursor, clamped to the document, and scroll to it
    pub fn goto(&mut self, document: &Document, row: usize, col: usize) {
        self.cursor_y = row;
        self.cursor_x = col;
        self.ensure_cursor_valid(document);
        self.ensure_cursor_visible();
    }

    /// Ensure cursor is within valid bounds
    pub fn ensure_cursor_valid(&mut self, document: &Document) {
        self.cursor_y = self.cursor_y.min(document.line_count().saturating_sub(1));
        self.cursor_x = self.cursor_x.min(document.line_len(self.cursor_y));
    }

    /// Ensure cursor is visible in viewport (scroll only at edges)
    pub fn ensure_cursor_visible(&mut self) {
        let height = self.height.max(1);
        if self.cursor_y < self.scroll_offset {
            // Cursor above viewport - scroll up so cursor is at top
            self.scroll_offset = self.cursor_y;
        } else if self.cursor_y >= self.scroll_offset + height {
            // Cursor below viewport - scroll down so cursor is at bottom
            self.scroll_offset = self.cursor_y + 1 - height;
        }
    }

    /// Cursor row relative to the top of the viewport
    pub fn screen_row(&self) -> usize {
        self.cursor_y.saturating_sub(self.scroll_offset)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn doc(text: &str) -> Document {
        Document::from_string(text)
    }

    #[test]
    fn test_horizontal_motion_is_clamped() {
        let d = doc("ab");
        let mut view = View::new();
        view.move_left(&d);
        assert_eq!(view.cursor_x, 0);
        view.move_right(&d);
        view.move_right(&d);
        view.move_right(&d);
        assert_eq!(view.cursor_x, 2);
    }

    #[test]
    fn test_vertical_motion_clamps_column() {
        let d = doc("long line\nab\n");
        let mut view = View::new();
        view.goto(&d, 0, 9);
        view.move_down(&d);
        assert_eq!((view.cursor_y, view.cursor_x), (1, 2));
        view.move_down(&d);
        assert_eq!((view.cursor_y, view.cursor_x), (2, 0));
        view.move_down(&d);
        assert_eq!(view.cursor_y, 2);
        view.move_up(&d);
        view.move_up(&d);
        view.move_up(&d);
        assert_eq!(view.cursor_y, 0);
    }

    #[test]
    fn test_scroll_follows_cursor() {
        let d = doc(&"x\n".repeat(20));
        let mut view = View::new();
        view.set_dimensions(10, 5);
        for _ in 0..7 {
            view.move_down(&d);
        }
        assert_eq!(view.cursor_y, 7);
        assert_eq!(view.scroll_offset, 3);
        assert_eq!(view.screen_row(), 4);

        for _ in 0..5 {
            view.move_up(&d);
        }
        assert_eq!(view.cursor_y, 2);
        assert_eq!(view.scroll_offset, 2);
        assert_eq!(view.screen_row(), 0);
    }

    #[test]
    fn test_shrinking_viewport_keeps_cursor_visible() {
        let d = doc(&"x\n".repeat(20));
        let mut view = View::new();
        view.set_dimensions(10, 20);
        view.goto(&d, 15, 0);
        assert_eq!(view.scroll_offset, 0);
        view.set_dimensions(10, 4);
        assert_eq!(view.scroll_offset, 12);
        assert!(view.cursor_y < view.scroll_offset + view.height);
    }

    #[test]
    fn test_zero_height_is_treated_as_one_row() {
        let d = doc("a\nb\nc");
        let mut view = View::new();
        view.set_dimensions(0, 0);
        assert_eq!((view.width, view.height), (1, 1));
        view.move_down(&d);
        assert_eq!(view.scroll_offset, 1);
    }

    #[test]
    fn test_ensure_cursor_valid_after_document_shrinks() {
        let mut d = doc("abc\ndef\nghi");
        let mut view = View::new();
        view.goto(&d, 2, 3);
        d.delete_line(2);
        view.ensure_cursor_valid(&d);
        assert_eq!((view.cursor_y, view.cursor_x), (1, 3));
    }
}
