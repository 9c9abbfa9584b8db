//! Source parameters as supplied by the completion host.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Default tmux binary.
pub const DEFAULT_EXECUTABLE: &str = "tmux";

/// Default label template, rendered by tmux as `<session>:<window>.<pane>`.
pub const DEFAULT_KIND_FORMAT: &str = "#S:#I.#P";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SourceParams {
    /// Only consult panes of the current window (drops `list-panes -a`).
    pub current_win_only: bool,
    /// Skip the active pane, usually the one being typed in.
    pub exclude_current_pane: bool,
    pub executable: String,
    /// tmux format string used as each candidate's kind. Interpolated by
    /// tmux itself, never by us.
    pub kind_format: String,
}

impl Default for SourceParams {
    fn default() -> Self {
        Self {
            current_win_only: false,
            exclude_current_pane: false,
            executable: DEFAULT_EXECUTABLE.to_string(),
            kind_format: DEFAULT_KIND_FORMAT.to_string(),
        }
    }
}

impl SourceParams {
    /// Build params from the host's JSON object. Missing keys fall back
    /// to defaults; a non-string `executable` (number, bool, null) is
    /// rejected before deserializing.
    pub fn from_json(value: serde_json::Value) -> Result<Self, ConfigError> {
        if value
            .get("executable")
            .is_some_and(|exe| !exe.is_string())
        {
            return Err(ConfigError::NotAString);
        }
        serde_json::from_value(value).map_err(|e| ConfigError::InvalidParams(e.to_string()))
    }
}
