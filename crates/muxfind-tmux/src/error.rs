//! Error type for the tmux boundary.
//!
//! Any variant here means discovery failed as a whole: an unreachable
//! server or an unparseable listing aborts the request rather than
//! synthesizing a partial result.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum TmuxError {
    /// tmux exited non-zero (typically: no server running).
    #[error("tmux failed: {0}")]
    CommandFailed(String),

    /// A list-panes line did not match the expected format.
    #[error("bad list-panes line {line_num}: {detail}")]
    Parse { line_num: usize, detail: String },

    #[error("io error running tmux: {0}")]
    Io(#[from] std::io::Error),
}
