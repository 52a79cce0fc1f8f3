//! muxfind: find and jump to commands running in tmux panes.
//! Single-pass binary: enumerate → resolve → match → present.

use clap::Parser;

use muxfind_core::MatchResult;
use muxfind_tmux::{TmuxCommandRunner, TmuxExecutor};

mod cli;
mod cmd_list;
mod cmd_pick;
mod config;
mod discover;

/// Distinct exit codes so callers can tell outcomes apart.
const EXIT_NO_MATCHES: i32 = 1;
const EXIT_DISCOVERY: i32 = 2;
const EXIT_CONFIG: i32 = 3;

fn main() {
    let args = cli::Cli::parse();

    let filter = std::env::var("MUXFIND_LOG")
        .or_else(|_| std::env::var("RUST_LOG"))
        .unwrap_or_else(|_| "warn".to_string());
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new(filter))
        .with_writer(std::io::stderr)
        .init();

    match run(args) {
        Ok(code) => std::process::exit(code),
        Err(err) => {
            eprintln!("error: {err:#}");
            std::process::exit(exit_code(&err));
        }
    }
}

fn run(args: cli::Cli) -> anyhow::Result<i32> {
    let cli::Cli {
        tmux_socket,
        tmux_socket_path,
        commands,
        interpreter,
        command,
    } = args;

    let runner = build_executor(tmux_socket.as_deref(), tmux_socket_path.as_deref());
    let command = command.unwrap_or(cli::Command::Pick(cli::PickOpts::default()));

    match command {
        cli::Command::Kill(opts) => {
            muxfind_tmux::kill_pane(&runner, &opts.target)?;
            Ok(0)
        }
        cli::Command::Pick(opts) => {
            let matches = gather(&runner, &commands, &interpreter)?;
            if matches.is_empty() {
                eprintln!("no matching panes");
                return Ok(EXIT_NO_MATCHES);
            }
            cmd_pick::cmd_pick(&runner, &matches, opts.dry_run)?;
            Ok(0)
        }
        cli::Command::List(opts) => {
            let matches = gather(&runner, &commands, &interpreter)?;
            if matches.is_empty() {
                if opts.json {
                    println!("[]");
                } else {
                    eprintln!("no matching panes");
                }
                return Ok(EXIT_NO_MATCHES);
            }
            cmd_list::cmd_list(&matches, opts.json)?;
            Ok(0)
        }
    }
}

/// Resolve configuration, scan the process table once, and run the
/// discovery pipeline.
fn gather(
    runner: &impl TmuxCommandRunner,
    commands: &[String],
    interpreters: &[String],
) -> anyhow::Result<Vec<MatchResult>> {
    let rules = config::wrapper_rules(interpreters);
    let targets = config::resolve_targets(runner, commands)?;
    let procs = muxfind_tmux::scan_processes();
    tracing::debug!(processes = procs.len(), targets = targets.names().len(), "snapshot ready");
    Ok(discover::discover(runner, &procs, &targets, &rules)?)
}

fn build_executor(socket_name: Option<&str>, socket_path: Option<&str>) -> TmuxExecutor {
    let mut executor = TmuxExecutor::default();
    if let Some(name) = socket_name {
        executor = executor.with_socket_name(name);
    }
    if let Some(path) = socket_path {
        executor = executor.with_socket_path(path);
    }
    executor
}

fn exit_code(err: &anyhow::Error) -> i32 {
    if err.downcast_ref::<muxfind_core::ConfigError>().is_some() {
        EXIT_CONFIG
    } else {
        EXIT_DISCOVERY
    }
}
