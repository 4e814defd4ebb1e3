//! Main window configuration.

use serde::{Deserialize, Serialize};

/// Main window geometry and appearance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub width: u32,
    pub height: u32,
    pub min_width: u32,
    pub min_height: u32,
    /// Background shown before content paints, `#rrggbb`.
    pub background: String,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: 1366,
            height: 768,
            min_width: 1280,
            min_height: 720,
            background: "#f9fafb".into(),
        }
    }
}

impl WindowConfig {
    /// Parse `background` into RGBA, opaque.
    pub fn background_rgba(&self) -> Option<(u8, u8, u8, u8)> {
        let hex = self.background.strip_prefix('#')?;
        if hex.len() != 6 {
            return None;
        }
        let channel = |i: usize| u8::from_str_radix(hex.get(i..i + 2)?, 16).ok();
        Some((channel(0)?, channel(2)?, channel(4)?, 255))
    }
}
