//! Process-table scan via `ps`, feeding the resolver's snapshot.

use muxfind_core::{ProcessInfo, ProcessSnapshot};

/// Scan all host processes with `ps -axo pid=,ppid=,etime=,args=`.
///
/// Called once per invocation. A failed or unparseable scan yields an
/// empty snapshot: every pane then resolves absent, which degrades the
/// result rather than aborting it — only an unreachable tmux is fatal.
pub fn scan_processes() -> ProcessSnapshot {
    let output = match std::process::Command::new("ps")
        .args(["-axo", "pid=,ppid=,etime=,args="])
        .output()
    {
        Ok(o) => o,
        Err(_) => return ProcessSnapshot::default(),
    };
    parse_ps_output(&String::from_utf8_lossy(&output.stdout))
}

/// Parse `ps` output into a snapshot; malformed lines are skipped.
pub fn parse_ps_output(output: &str) -> ProcessSnapshot {
    ProcessSnapshot::new(output.lines().filter_map(parse_ps_line))
}

fn parse_ps_line(line: &str) -> Option<ProcessInfo> {
    let mut fields = line.split_whitespace();
    let pid: u32 = fields.next()?.parse().ok()?;
    let ppid: u32 = fields.next()?.parse().ok()?;
    let elapsed_secs = parse_etime(fields.next()?);
    let argv: Vec<String> = fields.map(String::from).collect();
    Some(ProcessInfo {
        pid,
        ppid,
        argv,
        elapsed_secs,
    })
}

/// Parse ps `etime` (`[[dd-]hh:]mm:ss`) into seconds.
fn parse_etime(etime: &str) -> Option<u64> {
    let (days, clock) = match etime.split_once('-') {
        Some((d, rest)) => (d.parse::<u64>().ok()?, rest),
        None => (0, etime),
    };
    let parts: Vec<&str> = clock.split(':').collect();
    let (hours, minutes, seconds) = match parts.as_slice() {
        [m, s] => (0, m.parse::<u64>().ok()?, s.parse::<u64>().ok()?),
        [h, m, s] => (
            h.parse::<u64>().ok()?,
            m.parse::<u64>().ok()?,
            s.parse::<u64>().ok()?,
        ),
        _ => return None,
    };
    Some(days * 86400 + hours * 3600 + minutes * 60 + seconds)
}
