//! 宿主命令层
//!
//! 把一行文本命令解析为 `HostCommand`，并在会话与存储服务上执行。

mod command;
mod session;

pub use command::{FontChange, HostCommand};
pub use session::{Host, HostError};
