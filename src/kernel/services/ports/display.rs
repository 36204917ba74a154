//! Display surface contract.
//!
//! The surface is the opaque rendering/editing widget. The session core only
//! binds models to it, pushes options and layout, and drains the edits it
//! produced; it never depends on tokenization or rendering behaviour.

use crate::models::{BufferId, LanguageTag, TextEdit};
use ropey::Rope;
use serde::{Deserialize, Serialize};

use super::config::{EditorConfig, Padding, ScrollbarConfig};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct Dimension {
    pub width: u32,
    pub height: u32,
}

impl Dimension {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

impl Default for Dimension {
    fn default() -> Self {
        Self::new(800, 600)
    }
}

/// The surface's wrap modes. Only `On`/`Off` are reachable from the session
/// façade; the column-bounded modes exist so the schema can grow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum WordWrap {
    Off,
    On,
    WordWrapColumn,
    Bounded,
}

impl WordWrap {
    pub fn from_enabled(enabled: bool) -> Self {
        if enabled {
            WordWrap::On
        } else {
            WordWrap::Off
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            WordWrap::Off => "off",
            WordWrap::On => "on",
            WordWrap::WordWrapColumn => "wordWrapColumn",
            WordWrap::Bounded => "bounded",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EditorOption {
    FontSize,
    WordWrap,
    Theme,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OptionValue {
    Number(i32),
    WordWrap(WordWrap),
    Text(String),
}

impl OptionValue {
    pub fn as_number(&self) -> Option<i32> {
        match self {
            OptionValue::Number(n) => Some(*n),
            _ => None,
        }
    }
}

/// Partial option update; `None` fields are left as they are.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SurfaceOptions {
    pub theme: Option<String>,
    pub font_size: Option<i32>,
    pub word_wrap: Option<WordWrap>,
    pub minimap: Option<bool>,
    pub drag_and_drop: Option<bool>,
    pub scrollbar: Option<ScrollbarConfig>,
    pub padding: Option<Padding>,
}

impl SurfaceOptions {
    pub fn from_config(config: &EditorConfig) -> Self {
        Self {
            theme: Some(config.theme.clone()),
            font_size: Some(config.font_size),
            word_wrap: Some(WordWrap::from_enabled(config.word_wrap)),
            minimap: Some(config.minimap),
            drag_and_drop: Some(config.drag_and_drop),
            scrollbar: Some(config.scrollbar),
            padding: Some(config.padding),
        }
    }

    pub fn word_wrap(enabled: bool) -> Self {
        Self {
            word_wrap: Some(WordWrap::from_enabled(enabled)),
            ..Self::default()
        }
    }

    pub fn font_size(size: i32) -> Self {
        Self {
            font_size: Some(size),
            ..Self::default()
        }
    }
}

/// What the surface receives when a model is bound or refreshed. The rope is
/// a cheap clone of the registry's copy.
#[derive(Debug, Clone)]
pub struct ModelBinding {
    pub id: BufferId,
    pub uri: String,
    pub text: Rope,
    pub language: Option<LanguageTag>,
    pub version: u64,
}

pub trait DisplaySurface {
    /// Replace the displayed model. `None` detaches without attaching another.
    fn bind(&mut self, model: Option<ModelBinding>);

    /// Refresh the content of an already bound model. `external` holds the
    /// edits applied since the last refresh that did not come from
    /// `take_edits`, oldest first.
    fn sync(&mut self, model: ModelBinding, external: &[TextEdit]);

    /// Drop every handle the surface keeps for a destroyed model.
    fn release_model(&mut self, id: BufferId);

    fn set_model_language(&mut self, id: BufferId, language: Option<&LanguageTag>);

    fn layout(&mut self, dimension: Dimension);

    fn update_options(&mut self, options: &SurfaceOptions);

    fn option(&self, option: EditorOption) -> OptionValue;

    fn focus(&mut self);

    fn dispose(&mut self);

    /// Edits the user made since the last call, oldest first.
    fn take_edits(&mut self) -> Vec<TextEdit>;
}
