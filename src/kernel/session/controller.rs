use super::error::Result;
use super::events::{ContentChanged, ListenerId};
use super::registry::BufferRegistry;
use crate::kernel::services::ports::{
    Dimension, DisplaySurface, EditorConfig, EditorOption, ModelBinding, SurfaceOptions,
};
use crate::models::{BufferId, LanguageTag, TextEdit};

/// Keeps one display surface showing exactly the registry's active buffer.
///
/// Every mutation runs to completion before returning. Listeners must not
/// call back into the controller; nothing here guards against reentrancy.
pub struct SessionController<S: DisplaySurface> {
    registry: BufferRegistry,
    surface: S,
    config: EditorConfig,
    disposed: bool,
}

impl<S: DisplaySurface> SessionController<S> {
    pub fn new(surface: S, config: EditorConfig) -> Self {
        let mut controller = Self {
            registry: BufferRegistry::new(),
            surface,
            config,
            disposed: false,
        };
        controller
            .surface
            .update_options(&SurfaceOptions::from_config(&controller.config));
        controller.surface.layout(controller.config.dimension);
        controller.bind_active();
        controller
    }

    pub fn registry(&self) -> &BufferRegistry {
        &self.registry
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    pub fn config(&self) -> &EditorConfig {
        &self.config
    }

    pub fn len(&self) -> usize {
        self.registry.len()
    }

    pub fn is_empty(&self) -> bool {
        self.registry.is_empty()
    }

    pub fn active_index(&self) -> usize {
        self.registry.active_index()
    }

    pub fn buffer_id(&self, index: usize) -> Result<BufferId> {
        self.registry.id_at(index)
    }

    fn binding(&self, index: usize) -> Result<ModelBinding> {
        let id = self.registry.id_at(index)?;
        let model = self.registry.model(index)?;
        Ok(ModelBinding {
            id,
            uri: model.uri().to_string(),
            text: model.rope().clone(),
            language: model.language().cloned(),
            version: model.version(),
        })
    }

    fn bind_active(&mut self) {
        let active = self.registry.active_index();
        match self.binding(active) {
            Ok(binding) => {
                tracing::debug!(index = active, buffer = ?binding.id, "surface bound");
                self.surface.bind(Some(binding));
            }
            Err(e) => tracing::error!(error = %e, index = active, "active buffer missing"),
        }
    }

    pub fn add_buffer(&mut self, content: Option<&str>, language: Option<&str>) -> Result<usize> {
        self.registry.add(content, language)
    }

    /// Rebinds first when the active buffer was removed, then lets the surface
    /// release the removed model, so the surface never shows a torn-down one.
    pub fn remove_buffer(&mut self, index: usize) -> Result<()> {
        let removal = self.registry.remove(index)?;
        if removal.was_active() {
            self.bind_active();
        }
        self.surface.release_model(removal.id());
        tracing::debug!(
            index = removal.index(),
            uri = removal.model().uri(),
            version = removal.model().version(),
            "model released"
        );
        drop(removal);
        Ok(())
    }

    pub fn select_buffer(&mut self, index: usize) -> Result<()> {
        self.registry.set_active(index)?;
        self.bind_active();
        Ok(())
    }

    pub fn content(&self, index: usize) -> Result<String> {
        self.registry.model(index).map(|model| model.text())
    }

    pub fn lines(&self, index: usize) -> Result<Vec<String>> {
        self.registry.model(index).map(|model| model.lines())
    }

    pub fn version(&self, index: usize) -> Result<u64> {
        self.registry.model(index).map(|model| model.version())
    }

    pub fn language(&self, index: usize) -> Result<Option<LanguageTag>> {
        self.registry
            .model(index)
            .map(|model| model.language().cloned())
    }

    /// Re-tags the active buffer. `plaintext` is forwarded as "no language".
    pub fn set_language(&mut self, language: Option<&str>) -> Result<()> {
        let active = self.registry.active_index();
        let tag = LanguageTag::normalize(language);
        self.registry.set_language(active, tag.clone())?;
        self.surface
            .set_model_language(self.registry.active_id(), tag.as_ref());
        Ok(())
    }

    pub fn set_word_wrap(&mut self, enabled: bool) {
        self.surface
            .update_options(&SurfaceOptions::word_wrap(enabled));
    }

    /// Writes back `current + delta` without clamping.
    pub fn change_font_size(&mut self, delta: i32) {
        let current = self
            .surface
            .option(EditorOption::FontSize)
            .as_number()
            .unwrap_or(self.config.font_size);
        let next = current.saturating_add(delta);
        if next <= 0 {
            tracing::warn!(current, delta, next, "font size is not positive");
        }
        self.surface.update_options(&SurfaceOptions::font_size(next));
    }

    pub fn increase_font_size(&mut self) {
        self.change_font_size(1);
    }

    pub fn decrease_font_size(&mut self) {
        self.change_font_size(-1);
    }

    pub fn resize_viewport(&mut self, dimension: Dimension) {
        self.surface.layout(dimension);
    }

    pub fn focus(&mut self) {
        self.surface.focus();
    }

    pub fn on_content_changed<F>(&mut self, index: usize, listener: F) -> Result<ListenerId>
    where
        F: FnMut(&ContentChanged) + 'static,
    {
        self.registry.subscribe(index, Box::new(listener))
    }

    pub fn remove_listener(&mut self, index: usize, listener: ListenerId) -> Result<bool> {
        self.registry.unsubscribe(index, listener)
    }

    /// Applies an edit to the buffer at `index` and refreshes the surface when
    /// that buffer is the one on display.
    pub fn apply_edit(&mut self, index: usize, edit: &TextEdit) -> Result<u64> {
        let version = self.registry.apply_edit(index, edit)?;
        if index == self.registry.active_index() {
            let binding = self.binding(index)?;
            self.surface.sync(binding, std::slice::from_ref(edit));
        }
        Ok(version)
    }

    /// Drains edits the surface produced into the active buffer. Edits with
    /// ranges the buffer cannot hold are dropped.
    pub fn pump(&mut self) -> usize {
        let edits = self.surface.take_edits();
        if edits.is_empty() {
            return 0;
        }

        let active = self.registry.active_index();
        let mut applied = 0;
        for edit in &edits {
            match self.registry.apply_edit(active, edit) {
                Ok(_) => applied += 1,
                Err(e) => tracing::warn!(error = %e, index = active, "surface edit dropped"),
            }
        }
        if applied > 0 {
            match self.binding(active) {
                Ok(binding) => self.surface.sync(binding, &[]),
                Err(e) => tracing::error!(error = %e, index = active, "active buffer missing"),
            }
        }
        applied
    }

    /// Releases every model and the surface. Dropping the controller does the
    /// same.
    pub fn dispose(mut self) {
        self.shutdown();
    }

    fn shutdown(&mut self) {
        if self.disposed {
            return;
        }
        self.disposed = true;
        self.surface.bind(None);
        for id in self.registry.ids().to_vec() {
            self.surface.release_model(id);
        }
        self.surface.dispose();
        tracing::debug!(len = self.registry.len(), "session disposed");
    }
}

impl<S: DisplaySurface> Drop for SessionController<S> {
    fn drop(&mut self) {
        self.shutdown();
    }
}

#[cfg(test)]
#[path = "../../../tests/unit/kernel/session/controller.rs"]
mod tests;
