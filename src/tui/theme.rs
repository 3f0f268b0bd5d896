use ratatui::style::Color;

use crate::model::UiConfig;

/// Parsed color theme for the TUI
#[derive(Debug, Clone)]
pub struct Theme {
    pub background: Color,
    pub text: Color,
    pub text_bright: Color,
    /// Cursor marker and input caret
    pub highlight: Color,
    /// Timestamps, help text, inactive tabs
    pub dim: Color,
    pub tab_bg: Color,
    pub red: Color,
    pub yellow: Color,
    pub green: Color,
    /// Notes, prompts, info messages
    pub cyan: Color,
    /// Headers and command lists
    pub blue: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Theme {
            background: Color::Reset,
            text: Color::Rgb(0xEE, 0xEE, 0xEE),
            text_bright: Color::Rgb(0xFF, 0xFF, 0xFF),
            highlight: Color::Rgb(0x5F, 0xD7, 0xFF),
            dim: Color::Rgb(0x76, 0x76, 0x76),
            tab_bg: Color::Rgb(0x30, 0x30, 0x30),
            red: Color::Rgb(0xFF, 0x5F, 0x5F),
            yellow: Color::Rgb(0xFF, 0xD7, 0x00),
            green: Color::Rgb(0x87, 0xFF, 0x87),
            cyan: Color::Rgb(0x87, 0xD7, 0xFF),
            blue: Color::Rgb(0x5F, 0xAF, 0xFF),
        }
    }
}

/// Parse a hex color string like "#FF4444" into an RGB Color
fn parse_hex_color(hex: &str) -> Option<Color> {
    let hex = hex.strip_prefix('#')?;
    if hex.len() != 6 || !hex.is_ascii() {
        return None;
    }
    let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
    let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
    let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
    Some(Color::Rgb(r, g, b))
}

impl Theme {
    /// Create a theme from the `[ui.colors]` table, falling back to defaults
    pub fn from_config(ui: &UiConfig) -> Self {
        let mut theme = Theme::default();

        for (key, value) in &ui.colors {
            let Some(color) = parse_hex_color(value) else {
                tracing::warn!(key = %key, value = %value, "ignoring invalid color");
                continue;
            };
            match key.as_str() {
                "background" => theme.background = color,
                "text" => theme.text = color,
                "text_bright" => theme.text_bright = color,
                "highlight" => theme.highlight = color,
                "dim" => theme.dim = color,
                "tab_bg" => theme.tab_bg = color,
                "red" => theme.red = color,
                "yellow" => theme.yellow = color,
                "green" => theme.green = color,
                "cyan" => theme.cyan = color,
                "blue" => theme.blue = color,
                _ => tracing::warn!(key = %key, "unknown color slot"),
            }
        }

        theme
    }
}
