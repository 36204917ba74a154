use compact_str::CompactString;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;

/// Language identifier the display surface understands.
///
/// The surface treats "no language" and the `plaintext` sentinel as the same
/// state but only accepts the former, so a tag is never `plaintext`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LanguageTag(CompactString);

impl LanguageTag {
    pub const PLAINTEXT: &'static str = "plaintext";

    /// Single entry point for host-supplied language ids.
    pub fn normalize(value: Option<&str>) -> Option<Self> {
        let value = value?.trim();
        if value.is_empty() || value == Self::PLAINTEXT {
            return None;
        }
        Some(Self(CompactString::from(value)))
    }

    pub fn from_path(path: &Path) -> Option<Self> {
        let id = match path.extension().and_then(|s| s.to_str())? {
            "md" | "markdown" => "markdown",
            "js" | "mjs" | "cjs" => "javascript",
            "ts" | "mts" | "cts" => "typescript",
            "json" => "json",
            "css" => "css",
            "html" | "htm" => "html",
            "xml" => "xml",
            "rs" => "rust",
            "py" | "pyi" => "python",
            "fs" | "fsi" | "fsx" => "fsharp",
            "go" => "go",
            "c" | "h" => "c",
            "cc" | "cpp" | "cxx" | "hpp" => "cpp",
            "java" => "java",
            "sh" | "bash" => "shell",
            "yml" | "yaml" => "yaml",
            "toml" => "toml",
            _ => return None,
        };
        Some(Self(CompactString::from(id)))
    }

    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for LanguageTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/models/language.rs"]
mod tests;
