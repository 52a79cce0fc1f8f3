//! tmux user-option reads (`@muxfind-*` configuration).

use crate::error::TmuxError;
use crate::executor::TmuxCommandRunner;

/// Read a global tmux user option (`show-option -gqv`). Returns `None`
/// when the option is unset — `-q` makes tmux print nothing and exit
/// zero in that case.
pub fn show_user_option(
    runner: &impl TmuxCommandRunner,
    name: &str,
) -> Result<Option<String>, TmuxError> {
    let output = runner.run(&["show-option", "-gqv", name])?;
    let value = output.trim();
    if value.is_empty() {
        Ok(None)
    } else {
        Ok(Some(value.to_string()))
    }
}
