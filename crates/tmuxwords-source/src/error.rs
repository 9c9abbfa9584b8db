//! Error types for the pane source.

use thiserror::Error;

/// Marker tmux prints on stderr when no server is listening on the socket.
const NO_SERVER_MARKER: &str = "no server running";

#[derive(Debug, Error)]
pub enum TmuxError {
    #[error("tmux command failed (exit code {}): {stderr}", .code.unwrap_or(-1))]
    CommandFailed { code: Option<i32>, stderr: String },

    #[error("tmux io error: {0}")]
    Io(#[from] std::io::Error),
}

impl TmuxError {
    /// True when tmux reported that no server is running, i.e. there is
    /// simply nothing to list.
    pub fn is_no_server(&self) -> bool {
        matches!(self, Self::CommandFailed { stderr, .. } if stderr.contains(NO_SERVER_MARKER))
    }
}

/// Rejected source configuration, reported once during initialization.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("executable should be a string")]
    NotAString,

    #[error("executable should not be empty")]
    EmptyExecutable,

    #[error("executable not found")]
    ExecutableNotFound(String),

    #[error("invalid source params: {0}")]
    InvalidParams(String),
}
