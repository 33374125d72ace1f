// Configuration module
// Internal representation of user configuration

use std::collections::HashMap;
use std::time::Duration;

use crate::core::pending::DEFAULT_PENDING_TIMEOUT;
use crate::terminal::color::Color;

pub const DEFAULT_TAB_WIDTH: usize = 4;
pub const DEFAULT_STATUS_FG: Color = Color::Black;
pub const DEFAULT_STATUS_BG: Color = Color::White;

#[derive(Debug, Clone)]
pub struct Config {
    pub settings: HashMap<String, ConfigValue>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ConfigValue {
    Bool(bool),
    Int(i64),
    String(String),
}

/// Whether to emit 24-bit color escapes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrueColor {
    /// Decide from the environment
    Auto,
    On,
    Off,
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

impl Config {
    pub fn new() -> Self {
        Self {
            settings: HashMap::new(),
        }
    }

    /// Set a configuration value
    pub fn set<V: Into<ConfigValue>>(&mut self, key: &str, value: V) {
        self.settings.insert(key.to_string(), value.into());
    }

    /// Get a setting value
    pub fn get(&self, key: &str) -> Option<&ConfigValue> {
        self.settings.get(key)
    }

    /// Get boolean setting
    pub fn get_bool(&self, key: &str) -> Option<bool> {
        self.get(key).and_then(|v| match v {
            ConfigValue::Bool(b) => Some(*b),
            _ => None,
        })
    }

    /// Get integer setting
    pub fn get_int(&self, key: &str) -> Option<i64> {
        self.get(key).and_then(|v| match v {
            ConfigValue::Int(i) => Some(*i),
            _ => None,
        })
    }

    /// Get string setting
    pub fn get_string(&self, key: &str) -> Option<&str> {
        self.get(key).and_then(|v| match v {
            ConfigValue::String(s) => Some(s.as_str()),
            _ => None,
        })
    }

    // ==================== Typed settings ====================
    // Missing or ill-typed values fall back to the built-in default.

    /// Window in which the second key of a two-key gesture must arrive
    pub fn pending_key_timeout(&self) -> Duration {
        match self.get_int("pending_key_timeout_ms") {
            Some(ms) if ms > 0 => Duration::from_millis(ms as u64),
            _ => DEFAULT_PENDING_TIMEOUT,
        }
    }

    /// Columns per tab stop when rendering
    pub fn tab_width(&self) -> usize {
        match self.get_int("tab_width") {
            Some(w) if (1..=16).contains(&w) => w as usize,
            _ => DEFAULT_TAB_WIDTH,
        }
    }

    pub fn status_fg(&self) -> Color {
        self.color("status_fg").unwrap_or(DEFAULT_STATUS_FG)
    }

    pub fn status_bg(&self) -> Color {
        self.color("status_bg").unwrap_or(DEFAULT_STATUS_BG)
    }

    pub fn truecolor(&self) -> TrueColor {
        match self.get_string("truecolor") {
            Some("on") | Some("true") => TrueColor::On,
            Some("off") | Some("false") => TrueColor::Off,
            _ => TrueColor::Auto,
        }
    }

    fn color(&self, key: &str) -> Option<Color> {
        let name = self.get_string(key)?;
        let color = Color::from_name(name);
        if color.is_none() {
            tracing::warn!(key, value = name, "unrecognized color, using default");
        }
        color
    }
}

impl From<bool> for ConfigValue {
    fn from(b: bool) -> Self {
        ConfigValue::Bool(b)
    }
}

impl From<i64> for ConfigValue {
    fn from(i: i64) -> Self {
        ConfigValue::Int(i)
    }
}

impl From<&str> for ConfigValue {
    fn from(s: &str) -> Self {
        ConfigValue::String(s.to_string())
    }
}

impl From<String> for ConfigValue {
    fn from(s: String) -> Self {
        ConfigValue::String(s)
    }
}
