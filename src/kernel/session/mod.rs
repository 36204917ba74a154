//! Session domain: buffer registry + the controller binding it to a display surface.

mod controller;
mod error;
mod events;
mod registry;

pub use controller::SessionController;
pub use error::{Result, SessionError};
pub use events::{ChangeListeners, ContentChanged, ContentListener, ListenerId};
pub use registry::{BufferRegistry, Removal, INITIAL_MODEL_URI};
