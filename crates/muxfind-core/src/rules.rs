//! Recognition sets for shells and interpreter wrappers.
//!
//! Both sets are data, not hard-coded match arms: callers can extend them
//! for wrappers the defaults don't know about. An unrecognized name is
//! simply not a wrapper and resolves as itself.

/// Interactive shells — container processes whose meaningful command, if
/// any, lives among their descendants.
const DEFAULT_SHELLS: &[&str] = &[
    "zsh", "bash", "sh", "fish", "csh", "tcsh", "ksh", "dash", "nu", "pwsh",
];

/// Interpreter runtimes that commonly front another tool
/// (`node /usr/local/bin/codex`, `python3 ~/.local/bin/claude`).
const DEFAULT_INTERPRETERS: &[&str] = &["node", "python", "python3", "ruby", "perl", "bun", "deno"];

/// Shell/interpreter recognition used by the resolver.
#[derive(Debug, Clone)]
pub struct WrapperRules {
    shells: Vec<String>,
    interpreters: Vec<String>,
}

impl Default for WrapperRules {
    fn default() -> Self {
        Self {
            shells: DEFAULT_SHELLS.iter().map(|s| s.to_string()).collect(),
            interpreters: DEFAULT_INTERPRETERS.iter().map(|s| s.to_string()).collect(),
        }
    }
}

impl WrapperRules {
    #[must_use]
    pub fn with_shell(mut self, name: impl Into<String>) -> Self {
        let name = name.into().to_ascii_lowercase();
        if !self.shells.contains(&name) {
            self.shells.push(name);
        }
        self
    }

    #[must_use]
    pub fn with_interpreter(mut self, name: impl Into<String>) -> Self {
        let name = name.into().to_ascii_lowercase();
        if !self.interpreters.contains(&name) {
            self.interpreters.push(name);
        }
        self
    }

    /// Exact (case-insensitive) shell name match.
    pub fn is_shell(&self, name: &str) -> bool {
        let lower = name.to_ascii_lowercase();
        self.shells.iter().any(|s| *s == lower)
    }

    /// Interpreter name match; accepts version-suffixed variants
    /// (`python3.12` matches `python`).
    pub fn is_interpreter(&self, name: &str) -> bool {
        let lower = name.to_ascii_lowercase();
        self.interpreters
            .iter()
            .any(|i| *i == lower || is_versioned_variant(&lower, i))
    }
}

/// True when `name` is `base` followed by a non-empty run of digits and
/// dots (`python3`, `python3.12`). Not a substring test: `nodemon` is not
/// a variant of `node`.
pub(crate) fn is_versioned_variant(name: &str, base: &str) -> bool {
    name.strip_prefix(base)
        .is_some_and(|rest| !rest.is_empty() && rest.chars().all(|c| c.is_ascii_digit() || c == '.'))
}
