//! TmuxCommandRunner trait and the real subprocess executor.
//!
//! Every tmux interaction in the workspace goes through the trait, so
//! tests inject mock runners instead of spawning tmux.

use crate::error::TmuxError;

/// Executes one tmux command and returns its stdout.
pub trait TmuxCommandRunner {
    fn run(&self, args: &[&str]) -> Result<String, TmuxError>;
}

impl<T: TmuxCommandRunner + ?Sized> TmuxCommandRunner for &T {
    fn run(&self, args: &[&str]) -> Result<String, TmuxError> {
        (**self).run(args)
    }
}

/// Which tmux server to talk to.
#[derive(Debug, Clone)]
enum TmuxSocket {
    /// `-L <name>` — named socket in the default directory.
    Name(String),
    /// `-S <path>` — explicit socket path.
    Path(String),
}

/// Real executor wrapping `std::process::Command`.
pub struct TmuxExecutor {
    tmux_bin: String,
    socket: Option<TmuxSocket>,
}

impl TmuxExecutor {
    pub fn new(tmux_bin: impl Into<String>) -> Self {
        Self {
            tmux_bin: tmux_bin.into(),
            socket: None,
        }
    }

    #[must_use]
    pub fn with_socket_name(mut self, name: impl Into<String>) -> Self {
        self.socket = Some(TmuxSocket::Name(name.into()));
        self
    }

    #[must_use]
    pub fn with_socket_path(mut self, path: impl Into<String>) -> Self {
        self.socket = Some(TmuxSocket::Path(path.into()));
        self
    }
}

impl Default for TmuxExecutor {
    fn default() -> Self {
        Self::new("tmux")
    }
}

impl TmuxCommandRunner for TmuxExecutor {
    fn run(&self, args: &[&str]) -> Result<String, TmuxError> {
        let mut cmd = std::process::Command::new(&self.tmux_bin);
        match &self.socket {
            Some(TmuxSocket::Name(name)) => {
                cmd.args(["-L", name]);
            }
            Some(TmuxSocket::Path(path)) => {
                cmd.args(["-S", path]);
            }
            None => {}
        }
        let output = cmd.args(args).output()?;
        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(TmuxError::CommandFailed(format!(
                "{} (exit {})",
                stderr.trim(),
                output.status.code().unwrap_or(-1)
            )));
        }
        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}
