use std::fmt;
use std::str::FromStr;

/// Native key representation for vimlet
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Char(char),
    Ctrl(char),
    Esc,
    Enter,
    Backspace,
    Tab,
    Up,
    Down,
    Left,
    Right,
    Null,
}

impl Key {
    /// The code point a key inserts as text, if it inserts one at all.
    pub fn printable(self) -> Option<char> {
        match self {
            Key::Char(c) if !c.is_control() => Some(c),
            Key::Tab => Some('\t'),
            _ => None,
        }
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Key::Char(c) => write!(f, "{}", c),
            Key::Ctrl(c) => write!(f, "C-{}", c),
            Key::Esc => write!(f, "ESC"),
            Key::Enter => write!(f, "RET"),
            Key::Backspace => write!(f, "BS"),
            Key::Tab => write!(f, "TAB"),
            Key::Up => write!(f, "↑"),
            Key::Down => write!(f, "↓"),
            Key::Left => write!(f, "←"),
            Key::Right => write!(f, "→"),
            Key::Null => write!(f, "NUL"),
        }
    }
}

impl FromStr for Key {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        // Ctrl notation: ^C or C-c
        let ctrl = s
            .strip_prefix('^')
            .or_else(|| s.strip_prefix("C-"))
            .filter(|rest| rest.chars().count() == 1);
        if let Some(rest) = ctrl {
            if let Some(c) = rest.chars().next() {
                return Ok(Key::Ctrl(c.to_ascii_lowercase()));
            }
        }

        match s.to_ascii_uppercase().as_str() {
            "ENTER" | "RET" => Ok(Key::Enter),
            "TAB" => Ok(Key::Tab),
            "BACKSPACE" | "BS" => Ok(Key::Backspace),
            "ESC" => Ok(Key::Esc),
            "UP" => Ok(Key::Up),
            "DOWN" => Ok(Key::Down),
            "LEFT" => Ok(Key::Left),
            "RIGHT" => Ok(Key::Right),
            "NUL" | "NULL" => Ok(Key::Null),
            _ => {
                let mut chars = s.chars();
                match (chars.next(), chars.next()) {
                    // Raw characters keep their case
                    (Some(c), None) => Ok(Key::Char(c)),
                    _ => Err(format!("Unknown key: {}", s)),
                }
            }
        }
    }
}

/// Native input event representation for vimlet
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputEvent {
    pub key: Key,
    pub shift: bool,
    pub alt: bool,
    pub ctrl: bool,
}

impl InputEvent {
    /// A bare key press with no modifiers.
    pub fn key(key: Key) -> Self {
        Self {
            key,
            shift: false,
            alt: false,
            ctrl: false,
        }
    }

    /// Parse a key script such as `"ihello<Esc>:wq<Enter>"` into events.
    ///
    /// Plain characters map to `Key::Char`; anything inside `<...>` is parsed
    /// with `Key::from_str`. A literal `<` is written as `<lt>`.
    pub fn parse_script(script: &str) -> Result<Vec<InputEvent>, String> {
        let mut events = Vec::new();
        let mut chars = script.chars();
        while let Some(c) = chars.next() {
            if c != '<' {
                events.push(Self::key(Key::Char(c)));
                continue;
            }
            let name: String = chars.by_ref().take_while(|&c| c != '>').collect();
            let key = if name.eq_ignore_ascii_case("lt") {
                Key::Char('<')
            } else {
                name.parse()?
            };
            let ctrl = matches!(key, Key::Ctrl(_));
            events.push(InputEvent {
                key,
                shift: false,
                alt: false,
                ctrl,
            });
        }
        Ok(events)
    }
}

impl From<Key> for InputEvent {
    fn from(key: Key) -> Self {
        Self::key(key)
    }
}

/// Events handed to the editor by a front end
#[derive(Debug, Clone, PartialEq)]
pub enum EditorEvent {
    Input(InputEvent),
    Resize(u16, u16),
    None,
}
