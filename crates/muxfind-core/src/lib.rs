//! muxfind-core: process discovery & command resolution engine.
//! Pure logic over pane/process snapshots — no subprocess execution, no IO.

pub mod error;
pub mod matcher;
pub mod process;
pub mod resolver;
pub mod rules;
pub mod targets;
pub mod types;

pub use error::ConfigError;
pub use matcher::match_commands;
pub use process::{ProcessInfo, ProcessSnapshot};
pub use resolver::{Resolution, resolve};
pub use rules::WrapperRules;
pub use targets::{DEFAULT_TARGETS, TargetSet};
pub use types::{MatchResult, PaneRef, ResolvedCommand};
