//! Configuration resolution: target set and wrapper rules.
//!
//! Target priority: explicit `--commands` → tmux user option
//! `@muxfind-commands` → built-in default list. Resolved before any
//! enumeration work so a bad configuration never masquerades as an empty
//! result.

use muxfind_core::{TargetSet, WrapperRules};
use muxfind_tmux::{TmuxCommandRunner, show_user_option};

/// Global tmux user option holding the target list, whitespace- or
/// comma-separated.
pub const COMMANDS_OPTION: &str = "@muxfind-commands";

pub fn resolve_targets(
    runner: &impl TmuxCommandRunner,
    overrides: &[String],
) -> anyhow::Result<TargetSet> {
    if !overrides.is_empty() {
        return Ok(TargetSet::new(overrides)?);
    }
    if let Some(value) = show_user_option(runner, COMMANDS_OPTION)? {
        tracing::debug!(option = COMMANDS_OPTION, %value, "targets from tmux option");
        return Ok(TargetSet::new(split_option_list(&value))?);
    }
    Ok(TargetSet::built_in())
}

/// Wrapper rules: defaults plus any `--interpreter` additions.
pub fn wrapper_rules(extra_interpreters: &[String]) -> WrapperRules {
    extra_interpreters
        .iter()
        .fold(WrapperRules::default(), |rules, name| {
            rules.with_interpreter(name.as_str())
        })
}

fn split_option_list(value: &str) -> impl Iterator<Item = &str> {
    value
        .split(|c: char| c.is_whitespace() || c == ',')
        .filter(|part| !part.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use muxfind_core::{ConfigError, DEFAULT_TARGETS};
    use muxfind_tmux::TmuxError;

    struct OptionRunner(&'static str);
    impl TmuxCommandRunner for OptionRunner {
        fn run(&self, args: &[&str]) -> Result<String, TmuxError> {
            assert_eq!(args[0], "show-option");
            Ok(self.0.to_string())
        }
    }

    #[test]
    fn explicit_commands_win() {
        let targets =
            resolve_targets(&OptionRunner("npm docker"), &["codex".to_string()]).expect("valid");
        assert_eq!(targets.names(), &["codex"]);
    }

    #[test]
    fn tmux_option_beats_built_in() {
        let targets = resolve_targets(&OptionRunner("npm, docker\n"), &[]).expect("valid");
        assert_eq!(targets.names(), &["npm", "docker"]);
    }

    #[test]
    fn built_in_when_nothing_configured() {
        let targets = resolve_targets(&OptionRunner(""), &[]).expect("valid");
        assert_eq!(targets.names().len(), DEFAULT_TARGETS.len());
    }

    #[test]
    fn blank_overrides_are_a_config_error() {
        let err = resolve_targets(&OptionRunner(""), &["  ".to_string()]).expect_err("must fail");
        assert_eq!(
            err.downcast_ref::<ConfigError>(),
            Some(&ConfigError::EmptyTargets)
        );
    }

    #[test]
    fn option_splits_on_whitespace_and_commas() {
        let parts: Vec<&str> = split_option_list(" codex,claude  npm ,").collect();
        assert_eq!(parts, ["codex", "claude", "npm"]);
    }

    #[test]
    fn extra_interpreters_extend_defaults() {
        let rules = wrapper_rules(&["electron".to_string()]);
        assert!(rules.is_interpreter("electron"));
        assert!(rules.is_interpreter("node"));
    }
}
