//! Filter resolved commands against the target set.

use crate::targets::TargetSet;
use crate::types::{MatchResult, ResolvedCommand};

/// Annotate every resolved command whose short name matches a target.
///
/// Input order (pane enumeration order) is preserved; panes running the
/// same command stay distinct — each is a separate selectable target.
pub fn match_commands(resolved: Vec<ResolvedCommand>, targets: &TargetSet) -> Vec<MatchResult> {
    resolved
        .into_iter()
        .filter_map(|rc| {
            let matched = targets.match_name(&rc.command)?.to_string();
            Some(MatchResult {
                pane: rc.pane,
                command: rc.command,
                matched,
                cmdline: rc.cmdline,
            })
        })
        .collect()
}
