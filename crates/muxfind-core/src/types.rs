//! Domain types flowing through the Enumerator → Resolver → Matcher pipeline.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifies one tmux pane: session name plus window/pane indexes, and the
/// server-unique pane id (`%N`).
///
/// The pane id is stable for the pane's lifetime and unambiguous as a tmux
/// `-t` target even when a session is renamed mid-invocation.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PaneRef {
    pub session_name: String,
    pub window_index: u32,
    pub pane_index: u32,
    pub pane_id: String,
}

impl PaneRef {
    /// Canonical `session:window.pane` label. Doubles as a tmux target for
    /// the fzf preview and kill bindings.
    pub fn label(&self) -> String {
        format!(
            "{}:{}.{}",
            self.session_name, self.window_index, self.pane_index
        )
    }
}

impl fmt::Display for PaneRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label())
    }
}

/// A pane paired with the resolved command of its foreground process.
///
/// `command` is the short resolved name (`codex`, never a path); `cmdline`
/// is the full command line of the resolved process, kept for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolvedCommand {
    pub pane: PaneRef,
    pub command: String,
    pub cmdline: String,
}

/// A resolved command that matched a configured target, ready for the
/// picker or the listing output. Field order is the JSON key order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchResult {
    pub pane: PaneRef,
    /// Resolved short name of the foreground command.
    pub command: String,
    /// The target set entry this command matched.
    pub matched: String,
    /// Full command line, for display.
    pub cmdline: String,
}
