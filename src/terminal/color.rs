//! Terminal color definitions and ANSI conversion
//!
//! Provides the Color enum used by TUI rendering and ANSI escape sequence generation.

/// Terminal color definition - supporting Reset, RGB, and 16-color ANSI fallback
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Color {
    Reset,
    Black,
    Red,
    Green,
    Yellow,
    Blue,
    Magenta,
    Cyan,
    White,
    BrightBlack,
    BrightRed,
    BrightGreen,
    BrightYellow,
    BrightBlue,
    BrightMagenta,
    BrightCyan,
    BrightWhite,
    Rgb { r: u8, g: u8, b: u8 },
}

impl Color {
    /// Parse a color name (`"black"`, `"bright-blue"`, `"reset"`) or a
    /// `#rrggbb` hex triple
    pub fn from_name(name: &str) -> Option<Self> {
        let name = name.trim().to_ascii_lowercase();
        if let Some(hex) = name.strip_prefix('#') {
            if hex.len() != 6 || !hex.is_ascii() {
                return None;
            }
            let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();
            return Some(Color::Rgb {
                r: channel(0)?,
                g: channel(2)?,
                b: channel(4)?,
            });
        }

        let color = match name.replace('_', "-").as_str() {
            "reset" | "default" => Color::Reset,
            "black" => Color::Black,
            "red" => Color::Red,
            "green" => Color::Green,
            "yellow" => Color::Yellow,
            "blue" => Color::Blue,
            "magenta" => Color::Magenta,
            "cyan" => Color::Cyan,
            "white" => Color::White,
            "bright-black" | "gray" | "grey" => Color::BrightBlack,
            "bright-red" => Color::BrightRed,
            "bright-green" => Color::BrightGreen,
            "bright-yellow" => Color::BrightYellow,
            "bright-blue" => Color::BrightBlue,
            "bright-magenta" => Color::BrightMagenta,
            "bright-cyan" => Color::BrightCyan,
            "bright-white" => Color::BrightWhite,
            _ => return None,
        };
        Some(color)
    }

    /// Convert Color enum to ANSI foreground color code
    pub fn to_ansi_fg_code(self) -> String {
        match self {
            Color::Reset => "39".to_string(),
            Color::Black => "30".to_string(),
            Color::Red => "31".to_string(),
            Color::Green => "32".to_string(),
            Color::Yellow => "33".to_string(),
            Color::Blue => "34".to_string(),
            Color::Magenta => "35".to_string(),
            Color::Cyan => "36".to_string(),
            Color::White => "37".to_string(),
            Color::BrightBlack => "90".to_string(),
            Color::BrightRed => "91".to_string(),
            Color::BrightGreen => "92".to_string(),
            Color::BrightYellow => "93".to_string(),
            Color::BrightBlue => "94".to_string(),
            Color::BrightMagenta => "95".to_string(),
            Color::BrightCyan => "96".to_string(),
            Color::BrightWhite => "97".to_string(),
            Color::Rgb { r, g, b } => format!("38;2;{};{};{}", r, g, b),
        }
    }

    /// Convert Color enum to ANSI background color code
    pub fn to_ansi_bg_code(self) -> String {
        match self {
            Color::Reset => "49".to_string(),
            Color::Black => "40".to_string(),
            Color::Red => "41".to_string(),
            Color::Green => "42".to_string(),
            Color::Yellow => "43".to_string(),
            Color::Blue => "44".to_string(),
            Color::Magenta => "45".to_string(),
            Color::Cyan => "46".to_string(),
            Color::White => "47".to_string(),
            Color::BrightBlack => "100".to_string(),
            Color::BrightRed => "101".to_string(),
            Color::BrightGreen => "102".to_string(),
            Color::BrightYellow => "103".to_string(),
            Color::BrightBlue => "104".to_string(),
            Color::BrightMagenta => "105".to_string(),
            Color::BrightCyan => "106".to_string(),
            Color::BrightWhite => "107".to_string(),
            Color::Rgb { r, g, b } => format!("48;2;{};{};{}", r, g, b),
        }
    }

    /// Convert RGB color to nearest 16-color ANSI for terminals without TrueColor
    pub fn to_ansi_fallback(self) -> Self {
        match self {
            Color::Rgb { r, g, b } => {
                let luminance = (r as u32 + g as u32 + b as u32) / 3;
                let bright = luminance > 127;
                let threshold = 85;

                let has_r = r > threshold;
                let has_g = g > threshold;
                let has_b = b > threshold;

                match (has_r, has_g, has_b, bright) {
                    (false, false, false, false) => Color::Black,
                    (false, false, false, true) => Color::BrightBlack,
                    (true, false, false, false) => Color::Red,
                    (true, false, false, true) => Color::BrightRed,
                    (false, true, false, false) => Color::Green,
                    (false, true, false, true) => Color::BrightGreen,
                    (true, true, false, false) => Color::Yellow,
                    (true, true, false, true) => Color::BrightYellow,
                    (false, false, true, false) => Color::Blue,
                    (false, false, true, true) => Color::BrightBlue,
                    (true, false, true, false) => Color::Magenta,
                    (true, false, true, true) => Color::BrightMagenta,
                    (false, true, true, false) => Color::Cyan,
                    (false, true, true, true) => Color::BrightCyan,
                    (true, true, true, false) => Color::White,
                    (true, true, true, true) => Color::BrightWhite,
                }
            }
            other => other,
        }
    }
}

/// Check if the terminal supports true color (24-bit), with injectable
/// environment lookup
pub fn has_true_color_support<F>(get_env: F) -> bool
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    if let Ok(colorterm) = get_env("COLORTERM") {
        if colorterm.contains("truecolor") || colorterm.contains("24bit") {
            return true;
        }
    }

    if let Ok(term) = get_env("TERM") {
        if term.contains("24bit") || term.contains("truecolor") || term.starts_with("xterm-kitty")
        {
            return true;
        }
    }

    get_env("TERM_PROGRAM").map_or(false, |tp| {
        tp == "iTerm.app" || tp == "wezterm" || tp == "vscode"
    })
}
