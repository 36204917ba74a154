//! Headless session core (registry/controller) and its service ports.

pub mod services;
pub mod session;

pub use session::{
    BufferRegistry, ContentChanged, ListenerId, Removal, SessionController, SessionError,
};
