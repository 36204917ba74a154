//! Per-buffer content-change subscriptions.
//!
//! Each buffer owns its own listener list, so notifications keep flowing for
//! buffers that are not displayed and stop when the buffer is destroyed.

use crate::models::BufferId;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContentChanged {
    pub buffer: BufferId,
    pub version: u64,
}

pub type ContentListener = Box<dyn FnMut(&ContentChanged)>;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ListenerId(u64);

impl ListenerId {
    pub const fn raw(self) -> u64 {
        self.0
    }
}

#[derive(Default)]
pub struct ChangeListeners {
    next_id: u64,
    entries: Vec<(ListenerId, ContentListener)>,
}

impl std::fmt::Debug for ChangeListeners {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ChangeListeners")
            .field("len", &self.entries.len())
            .finish()
    }
}

impl ChangeListeners {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe(&mut self, listener: ContentListener) -> ListenerId {
        self.next_id = self.next_id.saturating_add(1);
        let id = ListenerId(self.next_id);
        self.entries.push((id, listener));
        id
    }

    pub fn unsubscribe(&mut self, id: ListenerId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|(entry, _)| *entry != id);
        self.entries.len() != before
    }

    /// Listeners run in subscription order.
    pub fn notify(&mut self, event: &ContentChanged) {
        for (_, listener) in &mut self.entries {
            listener(event);
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
#[path = "../../../tests/unit/kernel/session/events.rs"]
mod tests;
