//! 数据模型层

pub mod language;
pub mod text_model;

pub use language::LanguageTag;
pub use text_model::{BufferId, TextEdit, TextModel};
