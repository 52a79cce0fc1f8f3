//! Pane enumeration: one `list-panes -a` query over the whole server.

use muxfind_core::PaneRef;

use crate::error::TmuxError;
use crate::executor::TmuxCommandRunner;

/// Tab-delimited format string for `tmux list-panes -a -F`.
pub const LIST_PANES_FORMAT: &str = "#{session_name}\t#{window_index}\t#{pane_index}\t#{pane_id}\t#{pane_current_command}\t#{pane_pid}";

/// One pane as enumerated: identity plus tmux's own (often misleading)
/// notion of its current command and the pane's root PID.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaneListing {
    pub pane: PaneRef,
    /// tmux `#{pane_current_command}` — the basename of the process tmux
    /// attached to the pty, usually just the shell.
    pub current_cmd: String,
    /// PID of that process; the root of command resolution.
    pub pane_pid: u32,
}

/// Enumerate every pane of every session. Fails when tmux is unreachable;
/// no partial result is synthesized.
pub fn list_panes(runner: &impl TmuxCommandRunner) -> Result<Vec<PaneListing>, TmuxError> {
    let output = runner.run(&["list-panes", "-a", "-F", LIST_PANES_FORMAT])?;
    parse_list_panes_output(&output)
}

/// Parse the raw output of `tmux list-panes -a -F <FORMAT>`.
pub fn parse_list_panes_output(output: &str) -> Result<Vec<PaneListing>, TmuxError> {
    output
        .lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(idx, line)| parse_line(line, idx + 1))
        .collect()
}

fn parse_line(line: &str, line_num: usize) -> Result<PaneListing, TmuxError> {
    let parts: Vec<&str> = line.split('\t').collect();
    if parts.len() < 6 {
        return Err(TmuxError::Parse {
            line_num,
            detail: format!("expected 6 tab-separated fields, got {}", parts.len()),
        });
    }

    let window_index = parse_index(parts[1], "window index", line_num)?;
    let pane_index = parse_index(parts[2], "pane index", line_num)?;
    let pane_pid = parse_index(parts[5], "pane pid", line_num)?;

    Ok(PaneListing {
        pane: PaneRef {
            session_name: parts[0].to_string(),
            window_index,
            pane_index,
            pane_id: parts[3].to_string(),
        },
        current_cmd: parts[4].to_string(),
        pane_pid,
    })
}

fn parse_index(field: &str, what: &str, line_num: usize) -> Result<u32, TmuxError> {
    field.trim().parse().map_err(|_| TmuxError::Parse {
        line_num,
        detail: format!("unparseable {what}: {field:?}"),
    })
}
