//! Pane enumeration: list-panes format string, parser, and filtering.

use serde::{Deserialize, Serialize};

use crate::config::SourceParams;
use crate::error::TmuxError;
use crate::executor::TmuxCommandRunner;

/// ASCII unit separator. Never appears in session or window names in
/// practice, unlike `,`, `:` or tabs.
pub const FIELD_SEPARATOR: char = '\x1f';

/// Fields per list-panes line: label, pane id, active flag.
const EXPECTED_FIELDS: usize = 3;

/// A pane selected for capture. The label is already rendered by tmux.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaneRecord {
    pub label: String,
    pub pane_id: String,
}

/// One parsed list-panes line, before active-pane filtering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListedPane {
    pub label: String,
    pub pane_id: String,
    pub active: bool,
}

impl From<ListedPane> for PaneRecord {
    fn from(pane: ListedPane) -> Self {
        Self {
            label: pane.label,
            pane_id: pane.pane_id,
        }
    }
}

/// `-F` format: `<kind_format>` US `#D` US `#{pane_active}`.
pub fn list_panes_format(kind_format: &str) -> String {
    format!("{kind_format}{FIELD_SEPARATOR}#D{FIELD_SEPARATOR}#{{pane_active}}")
}

/// Arguments for `tmux list-panes`. `-a` spans every session unless the
/// caller only wants the current window.
pub fn list_panes_args(params: &SourceParams) -> Vec<String> {
    let mut args = vec!["list-panes".to_string()];
    if !params.current_win_only {
        args.push("-a".to_string());
    }
    args.push("-F".to_string());
    args.push(list_panes_format(&params.kind_format));
    args
}

/// Execute `tmux list-panes` and return the panes to capture.
///
/// "no server running" means there is nothing to list and yields an empty
/// vector; every other failure propagates.
pub async fn list_panes(
    runner: &impl TmuxCommandRunner,
    params: &SourceParams,
) -> Result<Vec<PaneRecord>, TmuxError> {
    let args = list_panes_args(params);
    let argv: Vec<&str> = args.iter().map(String::as_str).collect();
    let output = match runner.run(&argv).await {
        Ok(output) => output,
        Err(e) if e.is_no_server() => {
            tracing::debug!("no tmux server running, no panes to list");
            return Ok(Vec::new());
        }
        Err(e) => return Err(e),
    };
    Ok(select_panes(
        parse_list_panes_output(&output),
        params.exclude_current_pane,
    ))
}

/// Parse list-panes output. Lines that do not split into exactly three
/// fields are dropped.
pub fn parse_list_panes_output(output: &str) -> Vec<ListedPane> {
    output
        .split('\n')
        .enumerate()
        .filter_map(|(idx, line)| {
            let pane = parse_line(line);
            if pane.is_none() && !line.is_empty() {
                tracing::debug!(line_num = idx + 1, line, "dropping malformed list-panes line");
            }
            pane
        })
        .collect()
}

fn parse_line(line: &str) -> Option<ListedPane> {
    let parts: Vec<&str> = line.split(FIELD_SEPARATOR).collect();
    if parts.len() != EXPECTED_FIELDS {
        return None;
    }
    Some(ListedPane {
        label: parts[0].to_string(),
        pane_id: parts[1].to_string(),
        active: parts[2] == "1",
    })
}

/// Apply the active-pane exclusion; order is kept as tmux reported it.
pub fn select_panes(panes: Vec<ListedPane>, exclude_active: bool) -> Vec<PaneRecord> {
    panes
        .into_iter()
        .filter(|pane| !(exclude_active && pane.active))
        .map(PaneRecord::from)
        .collect()
}
