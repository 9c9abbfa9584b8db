//! Pane capture.

use crate::error::TmuxError;
use crate::executor::{TmuxCommandRunner, split_output_lines};

/// Capture the visible text of a pane, soft-wrapped lines joined.
///
/// Failures are returned as-is: a pane that vanished between listing and
/// capture is a real error.
pub async fn capture_pane(
    runner: &impl TmuxCommandRunner,
    pane_id: &str,
) -> Result<Vec<String>, TmuxError> {
    let output = runner
        .run(&["capture-pane", "-p", "-J", "-t", pane_id])
        .await?;
    Ok(split_output_lines(&output))
}
