use crate::kernel::services::adapters::{
    default_storage_config, AsyncRuntime, HeadlessSurface, StorageService,
};
use crate::kernel::services::ports::{Settings, StorageError};
use crate::kernel::{SessionController, SessionError};
use crate::models::{BufferId, LanguageTag};
use rustc_hash::{FxHashMap, FxHashSet};
use std::cell::RefCell;
use std::io;
use std::path::Path;
use std::rc::Rc;

use super::command::{FontChange, HostCommand};

#[derive(Debug)]
pub enum HostError {
    Parse(String),
    Session(SessionError),
    Storage(StorageError),
}

impl std::fmt::Display for HostError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            HostError::Parse(msg) => write!(f, "{}", msg),
            HostError::Session(e) => write!(f, "{}", e),
            HostError::Storage(e) => write!(f, "{}", e),
        }
    }
}

impl std::error::Error for HostError {}

impl From<SessionError> for HostError {
    fn from(e: SessionError) -> Self {
        HostError::Session(e)
    }
}

impl From<StorageError> for HostError {
    fn from(e: StorageError) -> Self {
        HostError::Storage(e)
    }
}

/// A session over the headless surface plus the detected file storage.
pub struct Host {
    session: SessionController<HeadlessSurface>,
    storage: StorageService,
    runtime: AsyncRuntime,
    // Buffers edited since they were last saved or opened.
    modified: Rc<RefCell<FxHashSet<BufferId>>>,
    filenames: FxHashMap<BufferId, String>,
}

impl Host {
    pub fn new(settings: &Settings) -> io::Result<Self> {
        let storage_config = if settings.storage.is_unset() {
            default_storage_config()
        } else {
            settings.storage.clone()
        };
        let storage = StorageService::detect(&storage_config);
        let session = SessionController::new(HeadlessSurface::new(), settings.editor.clone());
        Ok(Self::with_parts(session, storage, AsyncRuntime::new()?))
    }

    pub fn with_parts(
        session: SessionController<HeadlessSurface>,
        storage: StorageService,
        runtime: AsyncRuntime,
    ) -> Self {
        let mut host = Self {
            session,
            storage,
            runtime,
            modified: Rc::new(RefCell::new(FxHashSet::default())),
            filenames: FxHashMap::default(),
        };
        host.track_untracked();
        host
    }

    pub fn session(&self) -> &SessionController<HeadlessSurface> {
        &self.session
    }

    pub fn storage(&self) -> &StorageService {
        &self.storage
    }

    pub fn is_modified(&self, index: usize) -> Result<bool, HostError> {
        let id = self.session.buffer_id(index)?;
        Ok(self.modified.borrow().contains(&id))
    }

    pub fn filename(&self, index: usize) -> Result<Option<&str>, HostError> {
        let id = self.session.buffer_id(index)?;
        Ok(self.filenames.get(&id).map(String::as_str))
    }

    /// Subscribes the modified-set listener on every buffer that has none,
    /// which covers the initial buffer and its replacements.
    fn track_untracked(&mut self) {
        for index in 0..self.session.len() {
            let untracked = self
                .session
                .registry()
                .listener_count(index)
                .map(|n| n == 0)
                .unwrap_or(false);
            if !untracked {
                continue;
            }
            let modified = Rc::clone(&self.modified);
            let result = self.session.on_content_changed(index, move |event| {
                modified.borrow_mut().insert(event.buffer);
                tracing::trace!(buffer = ?event.buffer, version = event.version, "content changed");
            });
            if let Err(e) = result {
                tracing::error!(error = %e, index, "failed to subscribe to buffer");
            }
        }
    }

    fn forget(&mut self, id: BufferId) {
        self.modified.borrow_mut().remove(&id);
        self.filenames.remove(&id);
    }

    pub fn execute(&mut self, command: HostCommand) -> Result<Vec<String>, HostError> {
        match command {
            HostCommand::New { language } => {
                let index = self.session.add_buffer(Some(""), language.as_deref())?;
                self.track_untracked();
                self.session.select_buffer(index)?;
                Ok(vec![format!("buffer {}", index)])
            }
            HostCommand::Close(index) => {
                let id = self.session.buffer_id(index)?;
                self.session.remove_buffer(index)?;
                self.forget(id);
                self.track_untracked();
                Ok(vec![format!(
                    "closed {}, active {}",
                    index,
                    self.session.active_index()
                )])
            }
            HostCommand::Select(index) => {
                self.session.select_buffer(index)?;
                self.session.focus();
                Ok(vec![format!("active {}", index)])
            }
            HostCommand::Show(index) => {
                let index = index.unwrap_or_else(|| self.session.active_index());
                Ok(vec![self.session.content(index)?])
            }
            HostCommand::Lines(index) => Ok(self
                .session
                .lines(index)?
                .into_iter()
                .enumerate()
                .map(|(n, line)| format!("{:>4} | {}", n + 1, line))
                .collect()),
            HostCommand::Language(language) => {
                self.session.set_language(Some(&language))?;
                let active = self.session.active_index();
                Ok(vec![format!(
                    "language {}",
                    language_label(self.session.language(active)?.as_ref())
                )])
            }
            HostCommand::Wrap(enabled) => {
                self.session.set_word_wrap(enabled);
                Ok(vec![format!(
                    "word wrap {}",
                    self.session.surface().word_wrap().as_str()
                )])
            }
            HostCommand::Font(change) => {
                match change {
                    FontChange::Increase => self.session.increase_font_size(),
                    FontChange::Decrease => self.session.decrease_font_size(),
                    FontChange::By(delta) => self.session.change_font_size(delta),
                }
                Ok(vec![format!(
                    "font size {}",
                    self.session.surface().font_size()
                )])
            }
            HostCommand::Resize(dimension) => {
                self.session.resize_viewport(dimension);
                Ok(vec![format!("viewport {}x{}", dimension.width, dimension.height)])
            }
            HostCommand::Type(text) => {
                self.session.surface_mut().type_text(&text);
                let applied = self.session.pump();
                Ok(vec![format!("{} edit(s)", applied)])
            }
            HostCommand::Save { index, filename } => {
                let id = self.session.buffer_id(index)?;
                let content = self.session.content(index)?;
                if let Err(e) = self.runtime.block_on(self.storage.save(&filename, &content)) {
                    tracing::error!(error = %e, filename = %filename, "save failed");
                    return Err(e.into());
                }
                self.modified.borrow_mut().remove(&id);
                self.filenames.insert(id, filename.clone());
                Ok(vec![format!("saved {} as {}", index, filename)])
            }
            HostCommand::Open { filename, language } => {
                let content = match self.runtime.block_on(self.storage.read(&filename)) {
                    Ok(content) => content,
                    Err(e) => {
                        tracing::error!(error = %e, filename = %filename, "open failed");
                        return Err(e.into());
                    }
                };
                let language = language.or_else(|| {
                    LanguageTag::from_path(Path::new(&filename)).map(|tag| tag.to_string())
                });
                let index = self
                    .session
                    .add_buffer(Some(&content), language.as_deref())?;
                let id = self.session.buffer_id(index)?;
                self.filenames.insert(id, filename.clone());
                self.track_untracked();
                self.session.select_buffer(index)?;
                Ok(vec![format!("opened {} as buffer {}", filename, index)])
            }
            HostCommand::Files => Ok(self.runtime.block_on(self.storage.list())?),
            HostCommand::Remove(filename) => {
                self.runtime.block_on(self.storage.delete(&filename))?;
                Ok(vec![format!("deleted {}", filename)])
            }
            HostCommand::List => self.list(),
            HostCommand::Help => Ok(HostCommand::usage()
                .iter()
                .map(|line| line.to_string())
                .collect()),
            HostCommand::Quit => Ok(Vec::new()),
        }
    }

    fn list(&self) -> Result<Vec<String>, HostError> {
        let registry = self.session.registry();
        let modified = self.modified.borrow();
        let mut out = Vec::with_capacity(registry.len());
        for (index, id) in registry.ids().iter().enumerate() {
            let model = registry.model(index)?;
            let active = if index == registry.active_index() { '>' } else { ' ' };
            let dirty = if modified.contains(id) { '*' } else { ' ' };
            let name = self
                .filenames
                .get(id)
                .map(String::as_str)
                .unwrap_or_else(|| model.uri());
            out.push(format!(
                "{}{} {:>3}  {}  [{}] v{}",
                active,
                dirty,
                index,
                name,
                language_label(model.language()),
                model.version()
            ));
        }
        Ok(out)
    }
}

fn language_label(language: Option<&LanguageTag>) -> &str {
    language.map(LanguageTag::as_str).unwrap_or(LanguageTag::PLAINTEXT)
}

#[cfg(test)]
#[path = "../../tests/unit/host/session.rs"]
mod tests;
