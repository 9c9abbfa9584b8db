//! Candidate gathering: list panes, capture them concurrently, tokenize.

use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use futures_util::future::try_join_all;
use serde::{Deserialize, Serialize};

use crate::capture::capture_pane;
use crate::config::SourceParams;
use crate::error::{ConfigError, TmuxError};
use crate::executor::{TmuxCommandRunner, TmuxExecutor};
use crate::locate::find_executable;
use crate::pane_info::list_panes;
use crate::words::all_words;

/// Tag attached to every diagnostic this source emits.
pub const SOURCE_NAME: &str = "tmuxwords";

/// A completion candidate: a word and the label of the pane it came from.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Candidate {
    pub word: String,
    pub kind: String,
}

/// Text captured from one pane during a gather cycle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CapturedPane {
    pub label: String,
    pub lines: Vec<String>,
}

impl CapturedPane {
    /// One candidate per distinct word, all stamped with this pane's label.
    pub fn candidates(&self) -> impl Iterator<Item = Candidate> + '_ {
        all_words(&self.lines).into_iter().map(|word| Candidate {
            word,
            kind: self.label.clone(),
        })
    }
}

/// Host error channel, used only when initialization fails.
pub trait DiagnosticSink {
    fn print_error(&self, message: &str, source: &str);
}

/// Proof that the configured executable was validated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ready {
    executable: PathBuf,
}

impl Ready {
    pub fn executable(&self) -> &Path {
        &self.executable
    }
}

/// Validate the configured executable.
pub fn initialize(params: &SourceParams) -> Result<Ready, ConfigError> {
    if params.executable.is_empty() {
        return Err(ConfigError::EmptyExecutable);
    }
    let executable = find_executable(&params.executable)
        .ok_or_else(|| ConfigError::ExecutableNotFound(params.executable.clone()))?;
    Ok(Ready { executable })
}

/// Run one gather cycle against `runner`.
///
/// Every selected pane is captured concurrently and the results are joined
/// fail-fast: one failed capture fails the cycle and drops the captures
/// still in flight, no partial candidate list is returned. Candidates keep
/// pane enumeration order and are not deduplicated across panes.
pub async fn gather(
    runner: &impl TmuxCommandRunner,
    params: &SourceParams,
) -> Result<Vec<Candidate>, TmuxError> {
    let panes = list_panes(runner, params).await?;

    tracing::debug!("listed {} panes", panes.len());

    let captures = try_join_all(panes.into_iter().map(|pane| async move {
        let lines = capture_pane(runner, &pane.pane_id)
            .await
            .inspect_err(|e| tracing::warn!(pane_id = %pane.pane_id, "capture failed: {e}"))?;
        Ok::<_, TmuxError>(CapturedPane {
            label: pane.label,
            lines,
        })
    }))
    .await?;

    let candidates: Vec<Candidate> = captures.iter().flat_map(|pane| pane.candidates()).collect();
    tracing::debug!(
        "gathered {} candidates from {} panes",
        candidates.len(),
        captures.len()
    );
    Ok(candidates)
}

/// Stateful source for hosts that keep one object per process.
///
/// Availability is write-once: a successful `on_init` enables gathering for
/// the rest of the process, a failed one leaves every gather empty.
#[derive(Debug, Default)]
pub struct TmuxSource {
    ready: OnceLock<Ready>,
    socket_path: Option<String>,
    socket_name: Option<String>,
}

impl TmuxSource {
    pub fn new() -> Self {
        Self::default()
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

    pub fn is_available(&self) -> bool {
        self.ready.get().is_some()
    }

    /// Validate `params` and mark the source available. On failure exactly
    /// one diagnostic goes to `sink` and the source stays unavailable.
    pub fn on_init(&self, params: &SourceParams, sink: &dyn DiagnosticSink) -> bool {
        match initialize(params) {
            Ok(ready) => {
                tracing::debug!(executable = %ready.executable().display(), "tmux source ready");
                if self.ready.set(ready).is_err() {
                    tracing::debug!("tmux source already initialized, keeping first executable");
                }
                true
            }
            Err(e) => {
                tracing::warn!("tmux source unavailable: {e}");
                sink.print_error(&e.to_string(), SOURCE_NAME);
                false
            }
        }
    }

    /// Gather candidates, or nothing at all if initialization never
    /// succeeded. The executable validated at init is used, not the one
    /// in `params`.
    pub async fn gather_candidates(
        &self,
        params: &SourceParams,
    ) -> Result<Vec<Candidate>, TmuxError> {
        let Some(ready) = self.ready.get() else {
            return Ok(Vec::new());
        };
        gather(&self.executor(ready), params).await
    }

    fn executor(&self, ready: &Ready) -> TmuxExecutor {
        let exec = TmuxExecutor::new(ready.executable().to_string_lossy());
        if let Some(ref path) = self.socket_path {
            exec.with_socket_path(path.clone())
        } else if let Some(ref name) = self.socket_name {
            exec.with_socket_name(name.clone())
        } else {
            exec
        }
    }
}
