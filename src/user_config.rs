// vimlet Configuration
// Edit this file to customize your editor, then rebuild

use crate::config::Config;

/// User configuration function
pub fn configure(config: &mut Config) {
    // Editing
    config.set("pending_key_timeout_ms", 300_i64); // Window for the second key of `dd`

    // Display
    config.set("tab_width", 4_i64); // Columns per tab stop
    config.set("status_fg", "black"); // Status bar text: color name or #rrggbb
    config.set("status_bg", "white"); // Status bar background
    config.set("truecolor", "auto"); // "auto", "on" or "off"
}
