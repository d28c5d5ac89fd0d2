use std::sync::OnceLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

pub const DEFAULT_CALENDAR_COLOR: &str = "#1a73e8";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Calendar {
    pub id: String,
    pub name: String,
    pub color: String,
    pub visible: bool,
}

impl Calendar {
    pub fn new(id: impl Into<String>, name: impl Into<String>, color: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            color: color.into(),
            visible: true,
        }
    }

    /// Parses `color` as `#rrggbb`, returning `None` for anything else.
    pub fn rgb(&self) -> Option<(u8, u8, u8)> {
        if !is_valid_color(&self.color) {
            return None;
        }
        let hex = &self.color[1..];
        let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
        let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
        let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
        Some((r, g, b))
    }
}

pub fn is_valid_color(color: &str) -> bool {
    static HEX_COLOR_RE: OnceLock<Regex> = OnceLock::new();
    let pattern = HEX_COLOR_RE.get_or_init(|| {
        Regex::new(r"^#[0-9a-fA-F]{6}$").expect("invalid hex color regex")
    });
    pattern.is_match(color)
}
