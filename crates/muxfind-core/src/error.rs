//! Engine error types.

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("target command set is empty")]
    EmptyTargets,
}
