use std::str::FromStr;

use ratatui::style::Color;

pub const DEFAULT_FG: &str = "#FFFFFF";
pub const DEFAULT_BG: &str = "#000000";

/// Foreground/background pair used by every widget
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub fg: Color,
    pub bg: Color,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            fg: Color::Rgb(0xFF, 0xFF, 0xFF),
            bg: Color::Rgb(0, 0, 0),
        }
    }
}

impl Palette {
    /// Parse configured colors, falling back to white on black for invalid values
    pub fn resolve(fg: &str, bg: &str) -> Self {
        let defaults = Self::default();
        Self {
            fg: parse_or(fg, defaults.fg, "foreground"),
            bg: parse_or(bg, defaults.bg, "background"),
        }
    }
}

fn parse_or(value: &str, fallback: Color, which: &str) -> Color {
    match Color::from_str(value) {
        Ok(color) => color,
        Err(_) => {
            tracing::warn!(value, which, "invalid color, using default");
            fallback
        }
    }
}
