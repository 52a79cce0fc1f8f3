//! CLI definition using clap derive.

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "muxfind", about = "find commands running in tmux panes")]
pub struct Cli {
    /// tmux socket name (tmux -L)
    #[arg(long, global = true, env = "MUXFIND_TMUX_SOCKET", value_name = "NAME")]
    pub tmux_socket: Option<String>,

    /// tmux socket path (tmux -S); takes precedence over --tmux-socket
    #[arg(long, global = true, value_name = "PATH")]
    pub tmux_socket_path: Option<String>,

    /// Target commands to look for (overrides @muxfind-commands and the
    /// built-in list); repeatable, comma-separated values accepted
    #[arg(
        long,
        short = 'c',
        global = true,
        value_delimiter = ',',
        value_name = "NAME"
    )]
    pub commands: Vec<String>,

    /// Extra interpreter names to treat as wrappers (repeatable)
    #[arg(long, global = true, value_name = "NAME")]
    pub interpreter: Vec<String>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Interactive pane picker via fzf (default)
    Pick(PickOpts),
    /// List matching panes
    List(ListOpts),
    /// Kill a pane (used by the picker's ctrl-x binding)
    Kill(KillOpts),
}

#[derive(clap::Args, Default)]
pub struct PickOpts {
    /// Print candidate lines instead of launching fzf
    #[arg(long)]
    pub dry_run: bool,
}

#[derive(clap::Args, Default)]
pub struct ListOpts {
    /// Structured JSON output for scripting
    #[arg(long, short = 'j')]
    pub json: bool,
}

#[derive(clap::Args)]
pub struct KillOpts {
    /// Pane target (`session:window.pane` label or `%N` id)
    pub target: String,
}
