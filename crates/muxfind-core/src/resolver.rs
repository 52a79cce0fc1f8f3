//! Command resolution: recover the meaningful command behind a pane's
//! foreground PID.
//!
//! A pane's immediate process is frequently a generic interpreter or an
//! interactive shell, so its raw command name is misleading. Resolution
//! applies, in order:
//!
//! 1. wrapped invocation — `node /usr/local/bin/codex --flag` → `codex`
//! 2. container shell — walk the PID→children index for the shell's job
//! 3. idle shell — nothing to report, the pane resolves to absent
//! 4. plain process — the raw argv[0] basename

use std::path::Path;

use crate::process::{ProcessInfo, ProcessSnapshot};
use crate::rules::WrapperRules;

/// Resolution outcome for one pane PID.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    /// Resolved short name: no path separators, no wrapper prefix.
    pub command: String,
    /// Full command line of the resolved process.
    pub cmdline: String,
}

/// Walk depth cap; unusual trees (PID reuse cycles) stop here.
const MAX_WALK_DEPTH: u32 = 5;

/// Resolve the meaningful command for `pid`.
///
/// Returns `None` when the PID is missing from the snapshot (the process
/// exited between enumeration and resolution) or when the pane holds an
/// idle shell with no foreground job. Neither case is an error.
pub fn resolve(pid: u32, procs: &ProcessSnapshot, rules: &WrapperRules) -> Option<Resolution> {
    let root = procs.get(pid)?;
    if is_container(root, rules) {
        let job = foreground_job(pid, procs, rules)?;
        return Some(resolve_process(job, rules));
    }
    Some(resolve_process(root, rules))
}

/// A shell with no script argument: its meaningful command, if any, lives
/// among its descendants.
fn is_container(proc: &ProcessInfo, rules: &WrapperRules) -> bool {
    rules.is_shell(proc.base_name()) && script_entry_point(proc).is_none()
}

/// Rules 1 and 4 for a single process: unwrap a wrapped invocation, else
/// take the raw basename.
fn resolve_process(proc: &ProcessInfo, rules: &WrapperRules) -> Resolution {
    let name = proc.base_name();
    let command = if rules.is_interpreter(name) || rules.is_shell(name) {
        script_entry_point(proc).unwrap_or_else(|| name.to_string())
    } else {
        name.to_string()
    };
    Resolution {
        command,
        cmdline: proc.cmdline(),
    }
}

/// The script/entry-point name of a wrapped invocation: the basename of
/// the first non-flag argument that is a filesystem path, stripped of
/// directories and extension. `node /a/b/codex.js --x` → `codex`.
///
/// The first non-flag argument decides: if it is not path-like (a REPL
/// word, a `-c` payload), the invocation is not wrapped.
fn script_entry_point(proc: &ProcessInfo) -> Option<String> {
    let arg = proc
        .argv
        .iter()
        .skip(1)
        .find(|a| !a.starts_with('-'))?;
    if !is_path_like(arg) {
        return None;
    }
    Path::new(arg)
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
}

fn is_path_like(arg: &str) -> bool {
    arg.contains('/') || Path::new(arg).extension().is_some()
}

/// Walk downward from a container shell. Shells are transparent (descend
/// through them); the first non-shell process on each branch is that
/// branch's job. The deepest job wins; at equal depth the most recently
/// started (lowest elapsed, else highest PID) wins.
fn foreground_job<'a>(
    pid: u32,
    procs: &'a ProcessSnapshot,
    rules: &WrapperRules,
) -> Option<&'a ProcessInfo> {
    let mut best: Option<(u32, &ProcessInfo)> = None;
    let mut stack: Vec<(u32, u32)> = vec![(pid, 0)];

    while let Some((cur, depth)) = stack.pop() {
        if depth >= MAX_WALK_DEPTH {
            continue;
        }
        for &child_pid in procs.children(cur) {
            let Some(child) = procs.get(child_pid) else {
                continue;
            };
            if is_container(child, rules) {
                stack.push((child_pid, depth + 1));
                continue;
            }
            let candidate = (depth + 1, child);
            let wins = match best {
                Some(incumbent) => prefer(candidate, incumbent),
                None => true,
            };
            if wins {
                best = Some(candidate);
            }
        }
    }

    best.map(|(_, proc)| proc)
}

/// Deeper wins; at equal depth younger wins; at equal age higher PID wins.
fn prefer(candidate: (u32, &ProcessInfo), incumbent: (u32, &ProcessInfo)) -> bool {
    let (depth, cand) = candidate;
    let (best_depth, best) = incumbent;
    if depth != best_depth {
        return depth > best_depth;
    }
    let cand_age = cand.elapsed_secs.unwrap_or(u64::MAX);
    let best_age = best.elapsed_secs.unwrap_or(u64::MAX);
    if cand_age != best_age {
        return cand_age < best_age;
    }
    cand.pid > best.pid
}
