//! muxfind-tmux: tmux and process-table IO boundary.
//! Subprocess execution, pane listing, process scanning, and pane actions.
//! No resolution logic — that lives in muxfind-core.

pub mod actions;
pub mod error;
pub mod executor;
pub mod options;
pub mod panes;
pub mod procs;

pub use actions::{kill_pane, switch_to_pane};
pub use error::TmuxError;
pub use executor::{TmuxCommandRunner, TmuxExecutor};
pub use options::show_user_option;
pub use panes::{LIST_PANES_FORMAT, PaneListing, list_panes};
pub use procs::{parse_ps_output, scan_processes};
