//! 无界面显示面
//!
//! 在进程内实现 DisplaySurface：记录绑定的模型、选项与布局，
//! 并把宿主输入转换为待提交的编辑。

use crate::kernel::services::ports::{
    Dimension, DisplaySurface, EditorOption, ModelBinding, OptionValue, Padding, ScrollbarConfig,
    SurfaceOptions, WordWrap,
};
use crate::models::{BufferId, LanguageTag, TextEdit};
use rustc_hash::FxHashMap;

/// Per-model view state the widget keeps while a model is alive.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ViewState {
    pub cursor: usize,
}

#[derive(Debug)]
pub struct HeadlessSurface {
    bound: Option<ModelBinding>,
    view_states: FxHashMap<BufferId, ViewState>,
    theme: String,
    font_size: i32,
    word_wrap: WordWrap,
    minimap: bool,
    drag_and_drop: bool,
    scrollbar: ScrollbarConfig,
    padding: Padding,
    dimension: Option<Dimension>,
    layout_passes: u64,
    focused: bool,
    disposed: bool,
    pending: Vec<TextEdit>,
}

impl HeadlessSurface {
    pub fn new() -> Self {
        Self {
            bound: None,
            view_states: FxHashMap::default(),
            theme: "vs".to_string(),
            font_size: 14,
            word_wrap: WordWrap::Off,
            minimap: true,
            drag_and_drop: false,
            scrollbar: ScrollbarConfig::default(),
            padding: Padding::default(),
            dimension: None,
            layout_passes: 0,
            focused: false,
            disposed: false,
            pending: Vec::new(),
        }
    }

    pub fn bound(&self) -> Option<&ModelBinding> {
        self.bound.as_ref()
    }

    pub fn bound_id(&self) -> Option<BufferId> {
        self.bound.as_ref().map(|b| b.id)
    }

    pub fn bound_text(&self) -> Option<String> {
        self.bound.as_ref().map(|b| b.text.to_string())
    }

    pub fn view_state(&self, id: BufferId) -> Option<ViewState> {
        self.view_states.get(&id).copied()
    }

    pub fn tracked_models(&self) -> usize {
        self.view_states.len()
    }

    pub fn theme(&self) -> &str {
        &self.theme
    }

    pub fn font_size(&self) -> i32 {
        self.font_size
    }

    pub fn word_wrap(&self) -> WordWrap {
        self.word_wrap
    }

    pub fn minimap(&self) -> bool {
        self.minimap
    }

    pub fn drag_and_drop(&self) -> bool {
        self.drag_and_drop
    }

    pub fn scrollbar(&self) -> ScrollbarConfig {
        self.scrollbar
    }

    pub fn padding(&self) -> Padding {
        self.padding
    }

    pub fn dimension(&self) -> Option<Dimension> {
        self.dimension
    }

    pub fn layout_passes(&self) -> u64 {
        self.layout_passes
    }

    pub fn is_focused(&self) -> bool {
        self.focused
    }

    pub fn is_disposed(&self) -> bool {
        self.disposed
    }

    /// Types `text` at the cursor of the bound model. The edit is queued
    /// until the session pumps it; the cursor moves past the inserted text.
    pub fn type_text(&mut self, text: &str) -> bool {
        let Some(bound) = self.bound.as_ref() else {
            return false;
        };
        let state = self.view_states.entry(bound.id).or_default();
        // Only inserts are ever queued here.
        let queued: usize = self.pending.iter().map(|e| e.text.chars().count()).sum();
        let limit = bound.text.len_chars() + queued;
        let at = state.cursor.min(limit);
        self.pending.push(TextEdit::insert(at, text));
        state.cursor = at + text.chars().count();
        true
    }

    pub fn move_cursor(&mut self, char_offset: usize) -> bool {
        let Some(bound) = self.bound.as_ref() else {
            return false;
        };
        let len = bound.text.len_chars();
        let state = self.view_states.entry(bound.id).or_default();
        state.cursor = char_offset.min(len);
        true
    }
}

impl Default for HeadlessSurface {
    fn default() -> Self {
        Self::new()
    }
}

impl DisplaySurface for HeadlessSurface {
    fn bind(&mut self, model: Option<ModelBinding>) {
        // Edits typed into the previous model never reach the new one.
        self.pending.clear();
        if let Some(model) = &model {
            self.view_states.entry(model.id).or_default();
        }
        self.bound = model;
    }

    fn sync(&mut self, model: ModelBinding, external: &[TextEdit]) {
        if self.bound_id() != Some(model.id) {
            tracing::warn!(buffer = ?model.id, "sync for a model that is not bound");
            return;
        }
        let len = model.text.len_chars();
        if let Some(state) = self.view_states.get_mut(&model.id) {
            let cursor = external
                .iter()
                .fold(state.cursor, |cursor, edit| shift_cursor(cursor, edit));
            state.cursor = cursor.min(len);
        }
        self.bound = Some(model);
    }

    fn release_model(&mut self, id: BufferId) {
        self.view_states.remove(&id);
        if self.bound_id() == Some(id) {
            self.bound = None;
            self.pending.clear();
        }
    }

    fn set_model_language(&mut self, id: BufferId, language: Option<&LanguageTag>) {
        if let Some(bound) = self.bound.as_mut().filter(|b| b.id == id) {
            bound.language = language.cloned();
        }
    }

    fn layout(&mut self, dimension: Dimension) {
        if self.dimension == Some(dimension) {
            return;
        }
        self.dimension = Some(dimension);
        self.layout_passes += 1;
    }

    fn update_options(&mut self, options: &SurfaceOptions) {
        if let Some(theme) = &options.theme {
            self.theme = theme.clone();
        }
        if let Some(size) = options.font_size {
            self.font_size = size;
        }
        if let Some(wrap) = options.word_wrap {
            self.word_wrap = wrap;
        }
        if let Some(minimap) = options.minimap {
            self.minimap = minimap;
        }
        if let Some(drag_and_drop) = options.drag_and_drop {
            self.drag_and_drop = drag_and_drop;
        }
        if let Some(scrollbar) = options.scrollbar {
            self.scrollbar = scrollbar;
        }
        if let Some(padding) = options.padding {
            self.padding = padding;
        }
    }

    fn option(&self, option: EditorOption) -> OptionValue {
        match option {
            EditorOption::FontSize => OptionValue::Number(self.font_size),
            EditorOption::WordWrap => OptionValue::WordWrap(self.word_wrap),
            EditorOption::Theme => OptionValue::Text(self.theme.clone()),
        }
    }

    fn focus(&mut self) {
        self.focused = true;
    }

    fn dispose(&mut self) {
        self.bound = None;
        self.view_states.clear();
        self.pending.clear();
        self.focused = false;
        self.disposed = true;
    }

    fn take_edits(&mut self) -> Vec<TextEdit> {
        std::mem::take(&mut self.pending)
    }
}

/// Moves a cursor across an edit made elsewhere. A cursor at or after the
/// replaced range keeps its place relative to the text after it; one inside
/// the range lands after the inserted text.
fn shift_cursor(cursor: usize, edit: &TextEdit) -> usize {
    let inserted = edit.text.chars().count();
    if cursor >= edit.range.end {
        cursor - (edit.range.end - edit.range.start) + inserted
    } else if cursor > edit.range.start {
        edit.range.start + inserted
    } else {
        cursor
    }
}

#[cfg(test)]
#[path = "../../../../tests/unit/kernel/services/adapters/surface.rs"]
mod tests;
