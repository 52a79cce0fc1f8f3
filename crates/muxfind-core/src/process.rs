//! Flat process-table snapshot and the PID→children index the resolver
//! walks. Built once per invocation from `ps` output; read-only afterwards.

use std::collections::HashMap;

/// One process-table row: identity, parentage, argv, and age.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessInfo {
    pub pid: u32,
    pub ppid: u32,
    /// Full argument vector; `argv[0]` is the command as invoked.
    pub argv: Vec<String>,
    /// Seconds since the process started (ps `etime`). Lower = younger.
    /// `None` when ps reported nothing parseable for this row.
    pub elapsed_secs: Option<u64>,
}

impl ProcessInfo {
    /// Basename of `argv[0]`, with any login-shell `-` prefix stripped.
    pub fn base_name(&self) -> &str {
        let argv0 = self.argv.first().map(String::as_str).unwrap_or("");
        let argv0 = argv0.strip_prefix('-').unwrap_or(argv0);
        argv0.rsplit('/').next().unwrap_or(argv0)
    }

    /// The argument vector joined back into a display command line.
    pub fn cmdline(&self) -> String {
        self.argv.join(" ")
    }
}

/// Point-in-time snapshot of the host process table, indexed by PID and by
/// parent PID for tree walks.
///
/// Child lists preserve insertion order (ps emits rows in PID order), so
/// repeated walks over the same snapshot are deterministic.
#[derive(Debug, Clone, Default)]
pub struct ProcessSnapshot {
    by_pid: HashMap<u32, ProcessInfo>,
    children: HashMap<u32, Vec<u32>>,
}

impl ProcessSnapshot {
    pub fn new(entries: impl IntoIterator<Item = ProcessInfo>) -> Self {
        let mut by_pid = HashMap::new();
        let mut children: HashMap<u32, Vec<u32>> = HashMap::new();
        for info in entries {
            children.entry(info.ppid).or_default().push(info.pid);
            by_pid.insert(info.pid, info);
        }
        Self { by_pid, children }
    }

    pub fn get(&self, pid: u32) -> Option<&ProcessInfo> {
        self.by_pid.get(&pid)
    }

    /// Direct children of `pid`, in process-table order.
    pub fn children(&self, pid: u32) -> &[u32] {
        self.children.get(&pid).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn len(&self) -> usize {
        self.by_pid.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_pid.is_empty()
    }
}
