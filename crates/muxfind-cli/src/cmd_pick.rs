//! `muxfind pick` — interactive pane picker via fzf.
//!
//! fzf owns the fuzzy search and the live preview (`tmux capture-pane`
//! over the selected line's pane target); this module only feeds it
//! candidates and acts on the selection.

use std::io::Write;
use std::process::{Command, Stdio};

use muxfind_core::MatchResult;
use muxfind_tmux::{TmuxCommandRunner, switch_to_pane};

use crate::cmd_list::{format_line, render_human};

pub fn cmd_pick(
    runner: &impl TmuxCommandRunner,
    matches: &[MatchResult],
    dry_run: bool,
) -> anyhow::Result<()> {
    if dry_run {
        println!("{}", render_human(matches));
        return Ok(());
    }

    if !fzf_available() {
        anyhow::bail!("fzf not found; install fzf or use `muxfind list`");
    }

    let candidates: Vec<String> = matches.iter().map(format_line).collect();
    let output = run_fzf(&candidates)?;

    // Non-zero status is Escape/Ctrl-C — a clean cancel, not a failure.
    let Some(selected) = output else {
        return Ok(());
    };

    if let Some(chosen) = selected_match(matches, &selected) {
        switch_to_pane(runner, &chosen.pane)?;
    }
    Ok(())
}

fn fzf_available() -> bool {
    Command::new("fzf")
        .arg("--version")
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status()
        .map(|s| s.success())
        .unwrap_or(false)
}

/// Spawn fzf over the candidate lines; `None` on cancel.
fn run_fzf(candidates: &[String]) -> anyhow::Result<Option<String>> {
    // Ctrl-x kills the highlighted pane and reloads the list through this
    // same binary; {1} is the pane target leading each line.
    let exe = std::env::current_exe()
        .ok()
        .and_then(|p| p.to_str().map(String::from))
        .unwrap_or_else(|| "muxfind".to_string());
    let kill_binding = format!("ctrl-x:execute-silent({exe} kill {{1}})+reload({exe} list)");

    let mut child = Command::new("fzf")
        .args([
            "--ansi",
            "--no-multi",
            "--prompt=pane> ",
            "--header=enter: switch | ctrl-x: kill pane | esc: cancel",
            "--preview",
            "tmux capture-pane -e -p -t {1}",
            "--preview-window=right:60%:wrap",
            "--height=90%",
            "--layout=reverse",
            "--info=inline",
        ])
        .arg("--bind")
        .arg(&kill_binding)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::inherit())
        .spawn()
        .map_err(|e| anyhow::anyhow!("failed to spawn fzf: {e}"))?;

    if let Some(ref mut stdin) = child.stdin {
        stdin.write_all(candidates.join("\n").as_bytes())?;
    }
    drop(child.stdin.take());

    let output = child.wait_with_output()?;
    if !output.status.success() {
        return Ok(None);
    }

    let selected = String::from_utf8_lossy(&output.stdout).trim().to_string();
    if selected.is_empty() {
        Ok(None)
    } else {
        Ok(Some(selected))
    }
}

/// Map an fzf selection line back to its MatchResult by the leading pane
/// target.
fn selected_match<'a>(matches: &'a [MatchResult], selected: &str) -> Option<&'a MatchResult> {
    let label = selected.split_whitespace().next()?;
    matches.iter().find(|m| m.pane.label() == label)
}

#[cfg(test)]
mod tests {
    use super::*;
    use muxfind_core::PaneRef;

    fn result(session: &str, window: u32, pane: u32, command: &str) -> MatchResult {
        MatchResult {
            pane: PaneRef {
                session_name: session.to_string(),
                window_index: window,
                pane_index: pane,
                pane_id: format!("%{window}{pane}"),
            },
            command: command.to_string(),
            matched: command.to_string(),
            cmdline: format!("{command} --serve"),
        }
    }

    #[test]
    fn selection_maps_back_by_pane_target() {
        let matches = vec![result("main", 0, 0, "npm"), result("dev", 1, 0, "codex")];
        let line = format_line(&matches[1]);
        let chosen = selected_match(&matches, &line).expect("found");
        assert_eq!(chosen.command, "codex");
        assert_eq!(chosen.pane.label(), "dev:1.0");
    }

    #[test]
    fn unknown_selection_maps_to_nothing() {
        let matches = vec![result("main", 0, 0, "npm")];
        assert!(selected_match(&matches, "gone:9.9 | vim | vim").is_none());
        assert!(selected_match(&matches, "").is_none());
    }
}
