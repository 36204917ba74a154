//! tabpad - 多文档编辑会话库
//!
//! 模块结构：
//! - models: 数据模型（TextModel, LanguageTag）
//! - kernel: 会话核心（BufferRegistry, SessionController）与服务（ports + adapters）
//! - host: 面向宿主的命令层

pub mod host;
pub mod kernel;
pub mod models;
