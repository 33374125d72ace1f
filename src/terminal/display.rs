use unicode_width::UnicodeWidthChar;

use crate::config::{Config, TrueColor};
use crate::core::session::EditorSession;

// Re-export Color from color module for convenience
pub use crate::terminal::color::Color;

/// Represents a single cell on the terminal screen
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Cell {
    pub ch: char,
    pub fg: Color,
    pub bg: Color,
    /// If true, this cell is covered by the previous wide character and should be skipped
    pub hidden: bool,
}

impl Cell {
    pub(crate) fn new(ch: char, fg: Color, bg: Color) -> Self {
        Self {
            ch,
            fg,
            bg,
            hidden: false,
        }
    }

    pub fn hidden() -> Self {
        Self {
            ch: ' ',
            fg: Color::Reset,
            bg: Color::Reset,
            hidden: true,
        }
    }

    pub fn empty() -> Self {
        Self::new(' ', Color::Reset, Color::Reset)
    }
}

/// Represents the state of the entire screen
#[derive(Clone, Debug)]
pub struct ScreenBuffer {
    pub cells: Vec<Cell>,
    pub width: u16,
    pub height: u16,
}

impl ScreenBuffer {
    fn new(width: u16, height: u16) -> Self {
        let cells = vec![Cell::empty(); (width as usize) * (height as usize)];
        Self {
            cells,
            width,
            height,
        }
    }

    fn clear(&mut self) {
        for cell in &mut self.cells {
            *cell = Cell::empty();
        }
    }

    pub(crate) fn set(&mut self, x: u16, y: u16, cell: Cell) {
        if x < self.width && y < self.height {
            let idx = (y as usize) * (self.width as usize) + (x as usize);
            self.cells[idx] = cell;
        }
    }

    pub fn get(&self, x: u16, y: u16) -> Option<&Cell> {
        if x < self.width && y < self.height {
            let idx = (y as usize) * (self.width as usize) + (x as usize);
            Some(&self.cells[idx])
        } else {
            None
        }
    }

    /// The characters of row `y`, hidden cells skipped
    pub fn row_text(&self, y: u16) -> String {
        (0..self.width)
            .filter_map(|x| self.get(x, y))
            .filter(|cell| !cell.hidden)
            .map(|cell| cell.ch)
            .collect()
    }
}

/// Columns `ch` occupies when drawn at visual column `visual_x`
fn char_cells(ch: char, visual_x: usize, tab_width: usize) -> usize {
    if ch == '\t' {
        tab_width - (visual_x % tab_width)
    } else if ch.is_control() {
        // Drawn as a single replacement glyph
        1
    } else {
        ch.width().unwrap_or(0)
    }
}

/// Visual column of char index `col` in `line`
pub fn visual_column(line: &str, col: usize, tab_width: usize) -> usize {
    line.chars()
        .take(col)
        .fold(0, |x, ch| x + char_cells(ch, x, tab_width))
}

/// Composes editor frames into a pair of screen buffers.
///
/// `back_buffer` receives the new frame, `front_buffer` holds what is
/// currently on screen; the two are diffed when writing to the terminal.
pub struct Display {
    /// Terminal dimensions (cols, rows)
    pub terminal_size: (u16, u16),
    /// Whether a full screen clear is needed (e.g. after resize)
    pub needs_full_redraw: bool,
    /// Front buffer (currently displayed)
    pub front_buffer: ScreenBuffer,
    /// Back buffer (being drawn to)
    pub back_buffer: ScreenBuffer,
    /// Screen position of the cursor in the composed frame
    pub cursor_pos: Option<(u16, u16)>,
    /// Emit 24-bit colors; otherwise RGB is reduced to the 16 ANSI colors
    pub true_color: bool,
    tab_width: usize,
    status_fg: Color,
    status_bg: Color,
}

impl Display {
    /// Initialize the display system with specified dimensions
    pub fn new(width: u16, height: u16, config: &Config) -> Self {
        let true_color = match config.truecolor() {
            TrueColor::On => true,
            TrueColor::Off => false,
            TrueColor::Auto => {
                crate::terminal::color::has_true_color_support(|k| std::env::var(k))
            }
        };

        Self {
            terminal_size: (width, height),
            needs_full_redraw: true,
            front_buffer: ScreenBuffer::new(width, height),
            back_buffer: ScreenBuffer::new(width, height),
            cursor_pos: None,
            true_color,
            tab_width: config.tab_width(),
            status_fg: config.status_fg(),
            status_bg: config.status_bg(),
        }
    }

    /// Initialize the display system with terminal detection (for terminal mode)
    pub fn new_terminal(config: &Config) -> Result<Self, Box<dyn std::error::Error>> {
        let (cols, rows) = crossterm::terminal::size()?;
        tracing::debug!(cols, rows, "terminal size");
        Ok(Self::new(cols, rows, config))
    }

    /// Update terminal size
    pub fn update_size(&mut self, cols: u16, rows: u16) {
        if cols == 0 || rows == 0 {
            return;
        }

        self.terminal_size = (cols, rows);

        // Fresh buffers; old content would only leave artifacts
        self.front_buffer = ScreenBuffer::new(cols, rows);
        self.back_buffer = ScreenBuffer::new(cols, rows);
        self.needs_full_redraw = true;
    }

    /// Draw the session into the back buffer and compute the cursor position
    pub fn compose(&mut self, session: &EditorSession) {
        self.back_buffer.clear();

        let (width, height) = self.terminal_size;
        if width == 0 || height == 0 {
            self.cursor_pos = None;
            return;
        }
        let text_rows = height - 1;

        let view = &session.view;
        for (y, line) in session
            .document
            .lines_from(view.scroll_offset)
            .take(text_rows as usize)
            .enumerate()
        {
            self.draw_line(&line, y as u16);
        }

        self.draw_status(&session.status_line(), height - 1);

        let line = session.document.line(view.cursor_y).unwrap_or_default();
        let screen_x = visual_column(&line, view.cursor_x, self.tab_width);
        let screen_y = view.cursor_y.saturating_sub(view.scroll_offset);
        let max_x = (width - 1) as usize;
        let max_y = text_rows.saturating_sub(1) as usize;
        self.cursor_pos = Some((screen_x.min(max_x) as u16, screen_y.min(max_y) as u16));
    }

    /// Draw one document line at screen row `y`, truncated at the width
    fn draw_line(&mut self, line: &str, y: u16) {
        let width = self.terminal_size.0 as usize;
        let mut visual_x = 0;

        for ch in line.chars() {
            let cells = char_cells(ch, visual_x, self.tab_width);
            if cells == 0 {
                continue;
            }
            if visual_x + cells > width {
                break;
            }

            let x = visual_x as u16;
            if ch == '\t' {
                for i in 0..cells as u16 {
                    self.back_buffer.set(x + i, y, Cell::empty());
                }
            } else {
                let glyph = if ch.is_control() { '?' } else { ch };
                self.back_buffer
                    .set(x, y, Cell::new(glyph, Color::Reset, Color::Reset));
                for i in 1..cells as u16 {
                    self.back_buffer.set(x + i, y, Cell::hidden());
                }
            }
            visual_x += cells;
        }
    }

    /// Fill row `y` with the status bar colors and write `status` over it
    fn draw_status(&mut self, status: &str, y: u16) {
        let width = self.terminal_size.0 as usize;
        for x in 0..width as u16 {
            self.back_buffer
                .set(x, y, Cell::new(' ', self.status_fg, self.status_bg));
        }

        let mut visual_x = 0;
        for ch in status.chars() {
            let cells = match ch.width() {
                Some(0) | None => continue,
                Some(w) => w,
            };
            if visual_x + cells > width {
                break;
            }
            let x = visual_x as u16;
            self.back_buffer
                .set(x, y, Cell::new(ch, self.status_fg, self.status_bg));
            for i in 1..cells as u16 {
                let mut cell = Cell::hidden();
                cell.fg = self.status_fg;
                cell.bg = self.status_bg;
                self.back_buffer.set(x + i, y, cell);
            }
            visual_x += cells;
        }
    }

    /// Colors as they will be written, reduced when TrueColor is unavailable
    pub fn output_colors(&self, cell: &Cell) -> (Color, Color) {
        if self.true_color {
            (cell.fg, cell.bg)
        } else {
            (cell.fg.to_ansi_fallback(), cell.bg.to_ansi_fallback())
        }
    }

    /// Promote the composed frame to the front buffer
    pub fn swap_buffers(&mut self) {
        std::mem::swap(&mut self.front_buffer, &mut self.back_buffer);
        self.needs_full_redraw = false;
    }
}
