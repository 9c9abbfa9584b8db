//! TmuxCommandRunner trait and TmuxExecutor (async subprocess wrapper).

use std::future::Future;
use std::sync::Arc;

use crate::error::TmuxError;

/// Trait for executing tmux commands. Enables mock injection for testing.
pub trait TmuxCommandRunner: Send + Sync {
    fn run(&self, args: &[&str]) -> impl Future<Output = Result<String, TmuxError>> + Send;
}

impl<T: TmuxCommandRunner> TmuxCommandRunner for &T {
    fn run(&self, args: &[&str]) -> impl Future<Output = Result<String, TmuxError>> + Send {
        (**self).run(args)
    }
}

impl<T: TmuxCommandRunner> TmuxCommandRunner for Arc<T> {
    fn run(&self, args: &[&str]) -> impl Future<Output = Result<String, TmuxError>> + Send {
        (**self).run(args)
    }
}

/// Real tmux executor using `tokio::process::Command`.
///
/// The child is killed when the returned future is dropped, so a caller's
/// deadline also ends a hung tmux.
#[derive(Debug, Clone)]
pub struct TmuxExecutor {
    tmux_bin: String,
    socket_path: Option<String>,
    socket_name: Option<String>,
}

impl TmuxExecutor {
    pub fn new(tmux_bin: impl Into<String>) -> Self {
        Self {
            tmux_bin: tmux_bin.into(),
            socket_path: None,
            socket_name: None,
        }
    }

    #[must_use]
    pub fn with_socket_path(mut self, path: impl Into<String>) -> Self {
        self.socket_path = Some(path.into());
        self
    }

    #[must_use]
    pub fn with_socket_name(mut self, name: impl Into<String>) -> Self {
        self.socket_name = Some(name.into());
        self
    }

    pub fn tmux_bin(&self) -> &str {
        &self.tmux_bin
    }

    fn build_args<'a>(&'a self, args: &[&'a str]) -> Vec<&'a str> {
        let mut full = Vec::with_capacity(args.len() + 2);
        // Socket path takes precedence over socket name
        if let Some(ref path) = self.socket_path {
            full.extend(["-S", path.as_str()]);
        } else if let Some(ref name) = self.socket_name {
            full.extend(["-L", name.as_str()]);
        }
        full.extend_from_slice(args);
        full
    }
}

impl Default for TmuxExecutor {
    fn default() -> Self {
        Self::new("tmux")
    }
}

impl TmuxCommandRunner for TmuxExecutor {
    async fn run(&self, args: &[&str]) -> Result<String, TmuxError> {
        let output = tokio::process::Command::new(&self.tmux_bin)
            .args(self.build_args(args))
            .stdin(std::process::Stdio::null())
            .kill_on_drop(true)
            .output()
            .await?;
        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(TmuxError::CommandFailed {
                code: output.status.code(),
                stderr: stderr.trim().to_string(),
            });
        }
        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}

/// Split captured stdout into lines on `'\n'`.
///
/// Output ending in a newline keeps a trailing empty element; callers
/// skip empty lines on their own.
pub fn split_output_lines(output: &str) -> Vec<String> {
    output.split('\n').map(String::from).collect()
}
