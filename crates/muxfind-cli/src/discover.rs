//! The single-pass pipeline: enumerate panes → resolve commands → match
//! targets. No state survives an invocation.

use muxfind_core::{MatchResult, ProcessSnapshot, ResolvedCommand, TargetSet, WrapperRules};
use muxfind_tmux::{TmuxCommandRunner, TmuxError, list_panes};

/// Run discovery over every pane of the server.
///
/// Panes whose process vanished or whose shell is idle are dropped here,
/// silently — per-pane gaps never abort the pass. An unreachable tmux
/// does.
pub fn discover(
    runner: &impl TmuxCommandRunner,
    procs: &ProcessSnapshot,
    targets: &TargetSet,
    rules: &WrapperRules,
) -> Result<Vec<MatchResult>, TmuxError> {
    let panes = list_panes(runner)?;
    let mut resolved = Vec::with_capacity(panes.len());
    for listing in panes {
        match muxfind_core::resolve(listing.pane_pid, procs, rules) {
            Some(resolution) => resolved.push(ResolvedCommand {
                pane: listing.pane,
                command: resolution.command,
                cmdline: resolution.cmdline,
            }),
            None => tracing::debug!(
                pane = %listing.pane,
                pid = listing.pane_pid,
                "no resolvable foreground command"
            ),
        }
    }
    Ok(muxfind_core::match_commands(resolved, targets))
}

#[cfg(test)]
mod tests {
    use super::*;
    use muxfind_core::ProcessInfo;

    /// Three panes: an npm job behind zsh, a vim pane, and a wrapped
    /// codex invocation.
    struct ThreePaneRunner;
    impl TmuxCommandRunner for ThreePaneRunner {
        fn run(&self, args: &[&str]) -> Result<String, TmuxError> {
            assert_eq!(args[0], "list-panes");
            Ok([
                "main\t0\t0\t%0\tzsh\t100",
                "main\t0\t1\t%1\tvim\t200",
                "dev\t1\t0\t%2\tnode\t300",
            ]
            .join("\n"))
        }
    }

    fn proc(pid: u32, ppid: u32, args: &str, elapsed_secs: Option<u64>) -> ProcessInfo {
        ProcessInfo {
            pid,
            ppid,
            argv: args.split_whitespace().map(String::from).collect(),
            elapsed_secs,
        }
    }

    fn three_pane_procs() -> ProcessSnapshot {
        ProcessSnapshot::new(vec![
            proc(100, 1, "zsh", Some(3600)),
            proc(101, 100, "npm run dev", Some(60)),
            proc(200, 1, "vim notes.md", Some(600)),
            proc(300, 1, "node /usr/local/bin/codex serve", Some(30)),
        ])
    }

    #[test]
    fn pipeline_resolves_filters_and_preserves_order() {
        let targets = TargetSet::new(["npm", "codex"]).expect("valid");
        let matches = discover(
            &ThreePaneRunner,
            &three_pane_procs(),
            &targets,
            &WrapperRules::default(),
        )
        .expect("discovers");

        assert_eq!(matches.len(), 2);
        assert_eq!(matches[0].pane.label(), "main:0.0");
        assert_eq!(matches[0].command, "npm");
        assert_eq!(matches[0].cmdline, "npm run dev");
        assert_eq!(matches[1].pane.label(), "dev:1.0");
        assert_eq!(matches[1].command, "codex");
    }

    #[test]
    fn unmatched_panes_are_filtered() {
        let targets = TargetSet::new(["vim"]).expect("valid");
        let matches = discover(
            &ThreePaneRunner,
            &three_pane_procs(),
            &targets,
            &WrapperRules::default(),
        )
        .expect("discovers");
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].command, "vim");
    }

    #[test]
    fn vanished_and_idle_panes_are_dropped_not_fatal() {
        struct GappyRunner;
        impl TmuxCommandRunner for GappyRunner {
            fn run(&self, _args: &[&str]) -> Result<String, TmuxError> {
                Ok([
                    "main\t0\t0\t%0\tzsh\t100",  // idle shell
                    "main\t0\t1\t%1\tnpm\t999",  // exited between list and scan
                    "main\t0\t2\t%2\tnpm\t400",  // alive
                ]
                .join("\n"))
            }
        }
        let procs = ProcessSnapshot::new(vec![
            proc(100, 1, "zsh", Some(3600)),
            proc(400, 1, "npm run build", Some(10)),
        ]);
        let targets = TargetSet::new(["npm"]).expect("valid");
        let matches = discover(&GappyRunner, &procs, &targets, &WrapperRules::default())
            .expect("discovers");
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].pane.label(), "main:0.2");
    }

    #[test]
    fn unreachable_tmux_is_fatal() {
        struct DownRunner;
        impl TmuxCommandRunner for DownRunner {
            fn run(&self, _args: &[&str]) -> Result<String, TmuxError> {
                Err(TmuxError::CommandFailed("no server running".to_string()))
            }
        }
        let targets = TargetSet::built_in();
        let result = discover(
            &DownRunner,
            &ProcessSnapshot::default(),
            &targets,
            &WrapperRules::default(),
        );
        assert!(result.is_err());
    }

    #[test]
    fn two_passes_yield_identical_results() {
        let targets = TargetSet::new(["npm", "codex", "vim"]).expect("valid");
        let procs = three_pane_procs();
        let rules = WrapperRules::default();
        let first = discover(&ThreePaneRunner, &procs, &targets, &rules).expect("first");
        let second = discover(&ThreePaneRunner, &procs, &targets, &rules).expect("second");
        assert_eq!(first, second);
    }
}
