//! Bot command parsed from message text: `/<name>[@<bot_username>] [args...]`.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Command {
    /// Lowercased command name without the leading slash.
    pub name: String,
    /// Bot username after `@`, when the command is addressed explicitly (group chats).
    pub target: Option<String>,
    /// Whitespace-separated arguments.
    pub args: Vec<String>,
}

impl Command {
    /// Parses `text` as a command. Returns `None` for plain text or a malformed command token.
    pub fn parse(text: &str) -> Option<Self> {
        let rest = text.trim_start().strip_prefix('/')?;
        if rest.starts_with(char::is_whitespace) {
            return None;
        }
        let mut parts = rest.split_whitespace();
        let head = parts.next()?;
        let (name, target) = match head.split_once('@') {
            Some((name, target)) => (name, Some(target.to_string())),
            None => (head, None),
        };
        if name.is_empty() || !name.chars().all(|c| c.is_ascii_alphanumeric() || c == '_') {
            return None;
        }
        Some(Self {
            name: name.to_ascii_lowercase(),
            target,
            args: parts.map(str::to_string).collect(),
        })
    }

    /// All arguments joined by single spaces; `None` when there are no arguments.
    pub fn argument_text(&self) -> Option<String> {
        if self.args.is_empty() {
            None
        } else {
            Some(self.args.join(" "))
        }
    }

    /// True when the command has no explicit target or targets `username` (case-insensitive).
    pub fn is_addressed_to(&self, username: &str) -> bool {
        self.target
            .as_deref()
            .map_or(true, |target| target.eq_ignore_ascii_case(username))
    }
}
