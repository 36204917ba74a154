use crate::kernel::services::ports::Dimension;

use super::session::HostError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FontChange {
    Increase,
    Decrease,
    By(i32),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HostCommand {
    New { language: Option<String> },
    Close(usize),
    Select(usize),
    Show(Option<usize>),
    Lines(usize),
    Language(String),
    Wrap(bool),
    Font(FontChange),
    Resize(Dimension),
    Type(String),
    Save { index: usize, filename: String },
    Open { filename: String, language: Option<String> },
    Files,
    Remove(String),
    List,
    Help,
    Quit,
}

impl HostCommand {
    /// Blank lines and `#` comments parse to `None`.
    pub fn parse(line: &str) -> Result<Option<Self>, HostError> {
        let raw = line.trim_start();
        let line = raw.trim_end();
        if line.is_empty() || line.starts_with('#') {
            return Ok(None);
        }

        let (name, rest) = match line.split_once(char::is_whitespace) {
            Some((name, rest)) => (name, rest.trim()),
            None => (line, ""),
        };
        let mut args = rest.split_whitespace();

        let command = match name {
            "new" => HostCommand::New {
                language: args.next().map(str::to_string),
            },
            "close" => HostCommand::Close(parse_index(args.next(), name)?),
            "select" => HostCommand::Select(parse_index(args.next(), name)?),
            "show" => HostCommand::Show(match args.next() {
                Some(arg) => Some(parse_index(Some(arg), name)?),
                None => None,
            }),
            "lines" => HostCommand::Lines(parse_index(args.next(), name)?),
            "lang" => HostCommand::Language(required(args.next(), name)?.to_string()),
            "wrap" => match required(args.next(), name)? {
                "on" => HostCommand::Wrap(true),
                "off" => HostCommand::Wrap(false),
                other => return Err(HostError::Parse(format!("wrap expects on|off, got {other}"))),
            },
            "font" => HostCommand::Font(match required(args.next(), name)? {
                "+" => FontChange::Increase,
                "-" => FontChange::Decrease,
                delta => FontChange::By(delta.parse().map_err(|_| {
                    HostError::Parse(format!("font expects +, - or a delta, got {delta}"))
                })?),
            }),
            "resize" => {
                let width = parse_number(args.next(), name)?;
                let height = parse_number(args.next(), name)?;
                HostCommand::Resize(Dimension::new(width, height))
            }
            "type" => {
                let text = required(typed_text(raw, name), name)?;
                HostCommand::Type(unescape(text))
            }
            "save" => HostCommand::Save {
                index: parse_index(args.next(), name)?,
                filename: required(args.next(), name)?.to_string(),
            },
            "open" => HostCommand::Open {
                filename: required(args.next(), name)?.to_string(),
                language: args.next().map(str::to_string),
            },
            "files" => HostCommand::Files,
            "rm" => HostCommand::Remove(required(args.next(), name)?.to_string()),
            "list" | "ls" => HostCommand::List,
            "help" | "?" => HostCommand::Help,
            "quit" | "exit" => HostCommand::Quit,
            other => return Err(HostError::Parse(format!("unknown command: {other}"))),
        };
        Ok(Some(command))
    }

    pub fn usage() -> &'static [&'static str] {
        &[
            "new [lang]            add an empty buffer and show it",
            "close <i>             remove buffer i",
            "select <i>            show buffer i",
            "show [i]              print buffer i (default: active)",
            "lines <i>             print buffer i with line numbers",
            "lang <id>             set the active buffer's language (plaintext = none)",
            "wrap on|off           toggle word wrap",
            "font +|-|<delta>      change the font size",
            "resize <w> <h>        resize the viewport",
            "type <text>           type text at the cursor (\\n, \\t escapes)",
            "save <i> <name>       persist buffer i under name",
            "open <name> [lang]    load a stored file into a new buffer",
            "files                 list stored files",
            "rm <name>             delete a stored file",
            "list                  list buffers",
            "quit                  exit",
        ]
    }
}

fn required<'a>(arg: Option<&'a str>, command: &str) -> Result<&'a str, HostError> {
    arg.ok_or_else(|| HostError::Parse(format!("{command}: missing argument")))
}

/// Everything after the command name and exactly one separator, so leading
/// and trailing spaces are typed too.
fn typed_text<'a>(raw: &'a str, name: &str) -> Option<&'a str> {
    let rest = raw.strip_prefix(name)?;
    let mut chars = rest.chars();
    match chars.next() {
        Some(c) if c.is_whitespace() => Some(chars.as_str()).filter(|text| !text.is_empty()),
        _ => None,
    }
}

fn parse_index(arg: Option<&str>, command: &str) -> Result<usize, HostError> {
    let arg = required(arg, command)?;
    arg.parse()
        .map_err(|_| HostError::Parse(format!("{command}: invalid buffer index {arg:?}")))
}

fn parse_number(arg: Option<&str>, command: &str) -> Result<u32, HostError> {
    let arg = required(arg, command)?;
    arg.parse()
        .map_err(|_| HostError::Parse(format!("{command}: invalid number {arg:?}")))
}

fn unescape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut chars = text.chars();
    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some('n') => out.push('\n'),
            Some('t') => out.push('\t'),
            Some('\\') => out.push('\\'),
            Some(other) => {
                out.push('\\');
                out.push(other);
            }
            None => out.push('\\'),
        }
    }
    out
}

#[cfg(test)]
#[path = "../../tests/unit/host/command.rs"]
mod tests;
