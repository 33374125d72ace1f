//! Terminal rendering module
//!
//! This module handles the low-level rendering of the display buffer to the terminal,
//! using ANSI escape codes and crossterm for cursor control.

use std::io::{Stdout, Write};

use crossterm::{QueueableCommand, cursor};

use crate::config::Config;
use crate::core::frontend::Renderer;
use crate::core::session::EditorSession;
use crate::terminal::display::Display;

/// Write the display's back buffer to `out`, using the front buffer for
/// diffing so only changed cells are emitted.
///
/// - Full redraws when needed (e.g., after resize)
/// - Incremental updates by comparing old and new cells
/// - Color escapes only when the color changes
/// - Cursor placed and shown last
pub fn render_display<W: Write>(display: &Display, out: &mut W) -> std::io::Result<()> {
    // Hide cursor during update to prevent flickering
    write!(out, "\x1b[?25l")?;

    let needs_full = display.needs_full_redraw;
    if needs_full {
        write!(out, "\x1b[2J\x1b[H")?;
    }

    let front_buffer = &display.front_buffer;
    let back_buffer = &display.back_buffer;

    let mut last_fg = String::new();
    let mut last_bg = String::new();
    let mut cursor_moved = false;
    // Where the terminal cursor sits after the last write, to skip redundant moves
    let mut write_pos: Option<(u16, u16)> = None;

    for y in 0..display.terminal_size.1 {
        for x in 0..display.terminal_size.0 {
            let new_cell = match back_buffer.get(x, y) {
                Some(cell) => cell,
                None => continue,
            };

            if !needs_full && front_buffer.get(x, y) == Some(new_cell) {
                continue;
            }

            if new_cell.hidden {
                continue;
            }

            if write_pos != Some((x, y)) {
                write!(out, "\x1b[{};{}H", y + 1, x + 1)?;
            }
            cursor_moved = true;

            let (fg, bg) = display.output_colors(new_cell);
            let fg_code = fg.to_ansi_fg_code();
            let bg_code = bg.to_ansi_bg_code();

            if fg_code != last_fg || bg_code != last_bg {
                write!(out, "\x1b[{}m\x1b[{}m", fg_code, bg_code)?;
                last_fg = fg_code;
                last_bg = bg_code;
            }

            write!(out, "{}", new_cell.ch)?;
            // Wide glyphs advance past their hidden continuation cells
            let advance = 1 + (x + 1..display.terminal_size.0)
                .take_while(|&hx| back_buffer.get(hx, y).is_some_and(|c| c.hidden))
                .count() as u16;
            write_pos = Some((x + advance, y));
        }
    }

    if cursor_moved {
        write!(out, "\x1b[0m")?;
    }

    match display.cursor_pos {
        Some((cx, cy)) => {
            out.queue(cursor::MoveTo(cx, cy))?;
            out.queue(cursor::Show)?;
        }
        None => {
            out.queue(cursor::Hide)?;
        }
    }

    out.flush()
}

/// `Renderer` backed by a `Display` and an ANSI terminal stream
pub struct TerminalRenderer<W: Write = Stdout> {
    pub display: Display,
    out: W,
}

impl TerminalRenderer<Stdout> {
    /// Render to stdout at the current terminal size
    pub fn stdout(config: &Config) -> Result<Self, Box<dyn std::error::Error>> {
        Ok(Self::new(Display::new_terminal(config)?, std::io::stdout()))
    }
}

impl<W: Write> TerminalRenderer<W> {
    pub fn new(display: Display, out: W) -> Self {
        Self { display, out }
    }

    pub fn writer(&self) -> &W {
        &self.out
    }
}

impl<W: Write> Renderer for TerminalRenderer<W> {
    fn size(&self) -> (u16, u16) {
        self.display.terminal_size
    }

    fn resize(&mut self, cols: u16, rows: u16) {
        self.display.update_size(cols, rows);
    }

    fn render(&mut self, session: &EditorSession) -> Result<(), Box<dyn std::error::Error>> {
        self.display.compose(session);
        render_display(&self.display, &mut self.out)?;
        self.display.swap_buffers();
        Ok(())
    }
}
