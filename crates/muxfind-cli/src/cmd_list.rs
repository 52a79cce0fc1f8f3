//! `muxfind list` — flat listing of matches, human lines or JSON.
//!
//! Pure rendering over MatchResult; no logic of its own.

use muxfind_core::MatchResult;

/// Keep candidate lines readable in the picker and in terminals.
const MAX_CMDLINE_CHARS: usize = 80;

/// One display line per match:
/// `session:window.pane | resolved | command line`.
///
/// The first whitespace-delimited token is a valid tmux pane target; the
/// picker's preview and kill bindings rely on that.
pub fn format_line(m: &MatchResult) -> String {
    format!(
        "{} | {} | {}",
        m.pane.label(),
        m.command,
        truncate(&m.cmdline, MAX_CMDLINE_CHARS)
    )
}

pub fn render_human(matches: &[MatchResult]) -> String {
    matches
        .iter()
        .map(format_line)
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn render_json(matches: &[MatchResult]) -> anyhow::Result<String> {
    Ok(serde_json::to_string_pretty(matches)?)
}

pub fn cmd_list(matches: &[MatchResult], json: bool) -> anyhow::Result<()> {
    if json {
        println!("{}", render_json(matches)?);
    } else {
        println!("{}", render_human(matches));
    }
    Ok(())
}

fn truncate(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    let cut: String = text.chars().take(max_chars.saturating_sub(1)).collect();
    format!("{cut}\u{2026}")
}
