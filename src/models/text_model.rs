//! 文本模型
//!
//! 职责：
//! - 文本存储（Rope）
//! - 语言标记
//! - 版本号（每次编辑递增，用于检测内容变化）

use super::language::LanguageTag;
use ropey::{Rope, RopeSlice};
use std::borrow::Cow;
use std::io::{self, Write};
use std::ops::Range;

slotmap::new_key_type! {
    /// Opaque handle of a text model inside the buffer arena.
    pub struct BufferId;
}

/// 从 RopeSlice 获取字符串，优先零拷贝
pub fn slice_to_cow(slice: RopeSlice<'_>) -> Cow<'_, str> {
    match slice.as_str() {
        Some(s) => Cow::Borrowed(s),
        None => Cow::Owned(slice.to_string()),
    }
}

/// Replace `range` (char offsets) with `text`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextEdit {
    pub range: Range<usize>,
    pub text: String,
}

impl TextEdit {
    pub fn insert(at: usize, text: impl Into<String>) -> Self {
        Self {
            range: at..at,
            text: text.into(),
        }
    }

    pub fn delete(range: Range<usize>) -> Self {
        Self {
            range,
            text: String::new(),
        }
    }

    pub fn replace(range: Range<usize>, text: impl Into<String>) -> Self {
        Self {
            range,
            text: text.into(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct TextModel {
    uri: String,
    rope: Rope,
    language: Option<LanguageTag>,
    version: u64,
}

impl TextModel {
    pub fn new(uri: impl Into<String>, text: &str, language: Option<LanguageTag>) -> Self {
        Self {
            uri: uri.into(),
            rope: Rope::from_str(text),
            language,
            version: 1,
        }
    }

    pub fn uri(&self) -> &str {
        &self.uri
    }

    pub fn rope(&self) -> &Rope {
        &self.rope
    }

    pub fn language(&self) -> Option<&LanguageTag> {
        self.language.as_ref()
    }

    pub fn set_language(&mut self, language: Option<LanguageTag>) {
        self.language = language;
    }

    pub fn version(&self) -> u64 {
        self.version
    }

    pub fn len_chars(&self) -> usize {
        self.rope.len_chars()
    }

    pub fn is_empty(&self) -> bool {
        self.rope.len_chars() == 0
    }

    pub fn text(&self) -> String {
        let mut out = String::with_capacity(self.rope.len_bytes());
        for chunk in self.rope.chunks() {
            out.push_str(chunk);
        }
        out
    }

    /// Lines without their terminators. Only `\n` and `\r\n` break lines, so
    /// an empty model has exactly one empty line and a trailing newline
    /// produces a final empty line.
    pub fn lines(&self) -> Vec<String> {
        let text = slice_to_cow(self.rope.slice(..));
        text.split('\n')
            .map(|line| line.strip_suffix('\r').unwrap_or(line).to_string())
            .collect()
    }

    /// 流式写入到 Writer，避免大文件 OOM
    pub fn write_to<W: Write>(&self, writer: &mut W) -> io::Result<()> {
        for chunk in self.rope.chunks() {
            writer.write_all(chunk.as_bytes())?;
        }
        Ok(())
    }

    /// Applies `edit` and bumps the version. Returns `None` without touching
    /// the model when the range is reversed or past the end.
    pub fn apply(&mut self, edit: &TextEdit) -> Option<u64> {
        let Range { start, end } = edit.range.clone();
        if start > end || end > self.rope.len_chars() {
            return None;
        }
        if start < end {
            self.rope.remove(start..end);
        }
        if !edit.text.is_empty() {
            self.rope.insert(start, &edit.text);
        }
        self.version = self.version.saturating_add(1);
        Some(self.version)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/models/text_model.rs"]
mod tests;
