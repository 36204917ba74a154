use serde::{Deserialize, Serialize};

use super::display::Dimension;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScrollbarConfig {
    pub vertical_size: u32,
    pub horizontal_size: u32,
}

impl Default for ScrollbarConfig {
    fn default() -> Self {
        Self {
            vertical_size: 25,
            horizontal_size: 25,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Padding {
    pub top: u32,
    pub bottom: u32,
}

impl Default for Padding {
    fn default() -> Self {
        Self { top: 5, bottom: 5 }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorConfig {
    pub theme: String,
    pub font_size: i32,
    pub word_wrap: bool,
    pub minimap: bool,
    pub drag_and_drop: bool,
    pub scrollbar: ScrollbarConfig,
    pub padding: Padding,
    pub dimension: Dimension,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            theme: "vs-dark".to_string(),
            font_size: 14,
            word_wrap: false,
            minimap: false,
            drag_and_drop: true,
            scrollbar: ScrollbarConfig::default(),
            padding: Padding::default(),
            dimension: Dimension::default(),
        }
    }
}

#[cfg(test)]
#[path = "../../../../tests/unit/kernel/services/ports/config.rs"]
mod tests;
