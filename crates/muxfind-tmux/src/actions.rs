//! Pane actions: focus switching and pane teardown.

use muxfind_core::PaneRef;

use crate::error::TmuxError;
use crate::executor::TmuxCommandRunner;

/// Move the attached client to `pane`: session, then window, then pane.
pub fn switch_to_pane(runner: &impl TmuxCommandRunner, pane: &PaneRef) -> Result<(), TmuxError> {
    runner.run(&["switch-client", "-t", &pane.session_name])?;
    let window = format!("{}:{}", pane.session_name, pane.window_index);
    runner.run(&["select-window", "-t", &window])?;
    runner.run(&["select-pane", "-t", &pane.pane_id])?;
    Ok(())
}

/// Destroy a pane and everything running in it. `target` is any tmux pane
/// target (`session:window.pane` label or `%N` id).
pub fn kill_pane(runner: &impl TmuxCommandRunner, target: &str) -> Result<(), TmuxError> {
    runner.run(&["kill-pane", "-t", target])?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    /// Records every command it runs.
    struct RecordingRunner {
        calls: RefCell<Vec<Vec<String>>>,
    }

    impl RecordingRunner {
        fn new() -> Self {
            Self {
                calls: RefCell::new(Vec::new()),
            }
        }
    }

    impl TmuxCommandRunner for RecordingRunner {
        fn run(&self, args: &[&str]) -> Result<String, TmuxError> {
            self.calls
                .borrow_mut()
                .push(args.iter().map(|s| s.to_string()).collect());
            Ok(String::new())
        }
    }

    #[test]
    fn switch_runs_session_window_pane_sequence() {
        let runner = RecordingRunner::new();
        let pane = PaneRef {
            session_name: "dev".to_string(),
            window_index: 2,
            pane_index: 0,
            pane_id: "%7".to_string(),
        };
        switch_to_pane(&runner, &pane).expect("switches");

        let calls = runner.calls.borrow();
        assert_eq!(calls.len(), 3);
        assert_eq!(calls[0], ["switch-client", "-t", "dev"]);
        assert_eq!(calls[1], ["select-window", "-t", "dev:2"]);
        assert_eq!(calls[2], ["select-pane", "-t", "%7"]);
    }

    #[test]
    fn kill_targets_the_given_pane() {
        let runner = RecordingRunner::new();
        kill_pane(&runner, "main:0.1").expect("kills");
        assert_eq!(runner.calls.borrow()[0], ["kill-pane", "-t", "main:0.1"]);
    }

    #[test]
    fn switch_failure_propagates() {
        struct FailingRunner;
        impl TmuxCommandRunner for FailingRunner {
            fn run(&self, _args: &[&str]) -> Result<String, TmuxError> {
                Err(TmuxError::CommandFailed("no current client".to_string()))
            }
        }
        let pane = PaneRef::default();
        assert!(switch_to_pane(&FailingRunner, &pane).is_err());
    }
}
