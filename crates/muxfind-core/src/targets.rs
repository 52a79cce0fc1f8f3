//! The target command set: what the finder is looking for.

use crate::error::ConfigError;
use crate::rules::is_versioned_variant;

/// Built-in targets: agent CLIs, package managers, language runtimes,
/// build tools, devops CLIs.
pub const DEFAULT_TARGETS: &[&str] = &[
    "codex", "claude", "opencode", "npm", "yarn", "python", "node", "cargo", "go", "java", "mvn",
    "gradle", "docker", "kubectl",
];

/// Ordered, deduplicated, lowercased set of target command names.
///
/// Construction rejects an empty set: an empty TargetSet would silently
/// match nothing, and the caller could not tell that apart from a
/// successful run with no matches.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TargetSet {
    names: Vec<String>,
}

impl TargetSet {
    pub fn new<I, S>(names: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut out: Vec<String> = Vec::new();
        for name in names {
            let name = name.as_ref().trim().to_ascii_lowercase();
            if !name.is_empty() && !out.contains(&name) {
                out.push(name);
            }
        }
        if out.is_empty() {
            return Err(ConfigError::EmptyTargets);
        }
        Ok(Self { names: out })
    }

    /// The built-in default list.
    pub fn built_in() -> Self {
        Self {
            names: DEFAULT_TARGETS.iter().map(|s| s.to_string()).collect(),
        }
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// The target entry `name` matches, if any. Case-insensitive; exact
    /// equality or a versioned variant (`Python3` matches `python`), never
    /// a substring match.
    pub fn match_name(&self, name: &str) -> Option<&str> {
        let lower = name.to_ascii_lowercase();
        self.names
            .iter()
            .find(|target| lower == **target || is_versioned_variant(&lower, target))
            .map(String::as_str)
    }
}
