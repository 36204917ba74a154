use super::error::{Result, SessionError};
use super::events::{ChangeListeners, ContentChanged, ContentListener, ListenerId};
use crate::models::{BufferId, LanguageTag, TextEdit, TextModel};
use slotmap::SlotMap;

pub const INITIAL_MODEL_URI: &str = "file:///initial";

#[derive(Debug)]
struct BufferSlot {
    model: TextModel,
    listeners: ChangeListeners,
}

impl BufferSlot {
    fn new(model: TextModel) -> Self {
        Self {
            model,
            listeners: ChangeListeners::new(),
        }
    }
}

/// A buffer taken out of the registry.
///
/// The active index has already been adjusted when this is handed out; the
/// model and its listeners are released when the value is dropped.
#[derive(Debug)]
pub struct Removal {
    id: BufferId,
    index: usize,
    slot: BufferSlot,
    was_active: bool,
    replaced_with_initial: bool,
}

impl Removal {
    pub fn id(&self) -> BufferId {
        self.id
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn model(&self) -> &TextModel {
        &self.slot.model
    }

    /// The removed buffer was the active one, so whatever displays the
    /// active buffer has to be rebound.
    pub fn was_active(&self) -> bool {
        self.was_active
    }

    /// The registry became empty and a fresh initial buffer took its place.
    pub fn replaced_with_initial(&self) -> bool {
        self.replaced_with_initial
    }
}

/// Ordered text models with exactly one active entry.
///
/// Indices are positions in insertion order; removal closes the gap. The
/// registry is never empty and `active` is always a valid index.
#[derive(Debug)]
pub struct BufferRegistry {
    slots: SlotMap<BufferId, BufferSlot>,
    order: Vec<BufferId>,
    active: usize,
    next_model_seq: u64,
}

impl BufferRegistry {
    pub fn new() -> Self {
        let mut registry = Self {
            slots: SlotMap::with_key(),
            order: Vec::new(),
            active: 0,
            next_model_seq: 1,
        };
        registry.create_initial();
        registry
    }

    fn create_initial(&mut self) -> BufferId {
        let model = TextModel::new(INITIAL_MODEL_URI, "", None);
        let id = self.slots.insert(BufferSlot::new(model));
        self.order.push(id);
        self.active = self.order.len() - 1;
        tracing::debug!(buffer = ?id, index = self.active, "initial buffer created");
        id
    }

    fn check_index(&self, index: usize) -> Result<BufferId> {
        self.order
            .get(index)
            .copied()
            .ok_or_else(|| SessionError::index_out_of_range(index, self.order.len()))
    }

    fn slot(&self, index: usize) -> Result<&BufferSlot> {
        let id = self.check_index(index)?;
        self.slots.get(id).ok_or_else(|| unregistered(id))
    }

    fn slot_mut(&mut self, index: usize) -> Result<(BufferId, &mut BufferSlot)> {
        let id = self.check_index(index)?;
        match self.slots.get_mut(id) {
            Some(slot) => Ok((id, slot)),
            None => Err(unregistered(id)),
        }
    }

    /// Appends a buffer and returns its index. The active buffer is unchanged.
    ///
    /// `None` content is rejected; an empty string is a valid document.
    pub fn add(&mut self, content: Option<&str>, language: Option<&str>) -> Result<usize> {
        let content = content.ok_or_else(|| {
            SessionError::InvalidArgument("content must not be absent".to_string())
        })?;
        let uri = format!("inmemory://model/{}", self.next_model_seq);
        self.next_model_seq = self.next_model_seq.saturating_add(1);

        let model = TextModel::new(uri, content, LanguageTag::normalize(language));
        let id = self.slots.insert(BufferSlot::new(model));
        self.order.push(id);
        let index = self.order.len() - 1;
        tracing::debug!(buffer = ?id, index, len = self.order.len(), "buffer added");
        Ok(index)
    }

    /// Removes the buffer at `index`.
    ///
    /// Removing the active buffer moves focus to the previous buffer (or to
    /// index 0); removing the last buffer creates a fresh initial one.
    /// Removing a buffer before the active one keeps the same buffer active.
    pub fn remove(&mut self, index: usize) -> Result<Removal> {
        let id = self.check_index(index)?;
        let slot = self.slots.remove(id).ok_or_else(|| unregistered(id))?;
        self.order.remove(index);

        let was_active = index == self.active;
        let mut replaced_with_initial = false;
        if self.order.is_empty() {
            self.create_initial();
            replaced_with_initial = true;
        } else if was_active {
            self.active = index.saturating_sub(1);
        } else if index < self.active {
            self.active -= 1;
        }

        tracing::debug!(
            buffer = ?id,
            index,
            active = self.active,
            len = self.order.len(),
            replaced_with_initial,
            "buffer removed"
        );

        Ok(Removal {
            id,
            index,
            slot,
            was_active,
            replaced_with_initial,
        })
    }

    /// Activating the already active index is a no-op.
    pub fn set_active(&mut self, index: usize) -> Result<()> {
        self.check_index(index)?;
        if self.active != index {
            tracing::debug!(from = self.active, to = index, "active buffer changed");
        }
        self.active = index;
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Always false; kept for symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    pub fn active_index(&self) -> usize {
        self.active
    }

    pub fn active_id(&self) -> BufferId {
        self.order[self.active]
    }

    pub fn id_at(&self, index: usize) -> Result<BufferId> {
        self.check_index(index)
    }

    pub fn index_of(&self, id: BufferId) -> Option<usize> {
        self.order.iter().position(|entry| *entry == id)
    }

    pub fn ids(&self) -> &[BufferId] {
        &self.order
    }

    pub fn model(&self, index: usize) -> Result<&TextModel> {
        self.slot(index).map(|slot| &slot.model)
    }

    pub fn active_model(&self) -> Result<&TextModel> {
        self.model(self.active)
    }

    pub fn set_language(&mut self, index: usize, language: Option<LanguageTag>) -> Result<()> {
        let (_, slot) = self.slot_mut(index)?;
        slot.model.set_language(language);
        Ok(())
    }

    /// Applies an edit to any buffer, active or not, and notifies that
    /// buffer's listeners with the new version.
    pub fn apply_edit(&mut self, index: usize, edit: &TextEdit) -> Result<u64> {
        let (id, slot) = self.slot_mut(index)?;
        let version = slot.model.apply(edit).ok_or_else(|| {
            SessionError::InvalidArgument(format!(
                "edit range {}..{} outside buffer of {} chars",
                edit.range.start,
                edit.range.end,
                slot.model.len_chars()
            ))
        })?;
        slot.listeners.notify(&ContentChanged {
            buffer: id,
            version,
        });
        Ok(version)
    }

    pub fn subscribe(&mut self, index: usize, listener: ContentListener) -> Result<ListenerId> {
        let (_, slot) = self.slot_mut(index)?;
        Ok(slot.listeners.subscribe(listener))
    }

    pub fn unsubscribe(&mut self, index: usize, listener: ListenerId) -> Result<bool> {
        let (_, slot) = self.slot_mut(index)?;
        Ok(slot.listeners.unsubscribe(listener))
    }

    pub fn listener_count(&self, index: usize) -> Result<usize> {
        self.slot(index).map(|slot| slot.listeners.len())
    }
}

impl Default for BufferRegistry {
    fn default() -> Self {
        Self::new()
    }
}

fn unregistered(id: BufferId) -> SessionError {
    SessionError::InvalidArgument(format!("buffer {:?} is not registered", id))
}

#[cfg(test)]
#[path = "../../../tests/unit/kernel/session/registry.rs"]
mod tests;
