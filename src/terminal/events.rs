use crate::core::frontend::EventSource;
use crate::core::input::{EditorEvent, InputEvent, Key};

use crossterm::event::{self, Event, KeyCode, KeyEventKind, KeyModifiers};
use std::time::Duration;

/// How long `next_event` waits before reporting `EditorEvent::None`
pub const DEFAULT_POLL_TIMEOUT: Duration = Duration::from_millis(250);

/// Reads terminal events through crossterm
pub struct EventHandler {
    poll_timeout: Duration,
}

impl EventHandler {
    /// Create a new EventHandler
    pub fn new() -> Self {
        Self {
            poll_timeout: DEFAULT_POLL_TIMEOUT,
        }
    }

    /// Check for available events with a timeout
    pub fn poll(&self, timeout: Duration) -> Result<bool, Box<dyn std::error::Error>> {
        Ok(event::poll(timeout)?)
    }

    /// Read the next event, blocking until one is available
    pub fn read(&mut self) -> Result<EditorEvent, Box<dyn std::error::Error>> {
        Ok(translate_event(event::read()?))
    }
}

impl Default for EventHandler {
    fn default() -> Self {
        Self::new()
    }
}

impl EventSource for EventHandler {
    fn next_event(&mut self) -> Result<EditorEvent, Box<dyn std::error::Error>> {
        if self.poll(self.poll_timeout)? {
            self.read()
        } else {
            Ok(EditorEvent::None)
        }
    }
}

/// Map a crossterm event onto the editor's event type
fn translate_event(event: Event) -> EditorEvent {
    match event {
        // Release and repeat reports only arrive with keyboard enhancement
        // enabled; a key counts once, on press
        Event::Key(key_event) if key_event.kind == KeyEventKind::Press => {
            EditorEvent::Input(crossterm_key_to_input(key_event))
        }
        Event::Resize(cols, rows) => EditorEvent::Resize(cols, rows),
        _ => EditorEvent::None,
    }
}

fn crossterm_key_to_input(key_event: event::KeyEvent) -> InputEvent {
    let code = key_event.code;
    let modifiers = key_event.modifiers;

    let shift = modifiers.contains(KeyModifiers::SHIFT);
    let alt = modifiers.contains(KeyModifiers::ALT);
    let ctrl = modifiers.contains(KeyModifiers::CONTROL);

    let key = match code {
        KeyCode::Char(c) => {
            if ctrl && !alt {
                Key::Ctrl(c.to_ascii_lowercase())
            } else if alt {
                // No Alt bindings; keep Alt chords out of the buffer
                Key::Null
            } else {
                Key::Char(c)
            }
        }
        KeyCode::Backspace => Key::Backspace,
        KeyCode::Enter => Key::Enter,
        KeyCode::Left => Key::Left,
        KeyCode::Right => Key::Right,
        KeyCode::Up => Key::Up,
        KeyCode::Down => Key::Down,
        KeyCode::Tab => Key::Tab,
        KeyCode::Esc => Key::Esc,
        _ => Key::Null,
    };

    InputEvent {
        key,
        shift,
        alt,
        ctrl,
    }
}
