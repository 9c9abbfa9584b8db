//! `tmuxwords panes`: show which panes a gather would capture.

use anyhow::Context;
use tmuxwords_source::{initialize, list_panes};

use crate::cli::{Cli, ParamOpts};

pub async fn cmd_panes(cli: &Cli, opts: &ParamOpts) -> anyhow::Result<()> {
    let params = opts.resolve()?;
    let ready = initialize(&params)
        .with_context(|| format!("tmux executable '{}'", params.executable))?;
    tracing::debug!(executable = %ready.executable().display(), "listing panes");

    let exec = cli.executor(ready.executable().to_string_lossy());
    let panes = list_panes(&exec, &params).await?;
    println!("{}", serde_json::to_string_pretty(&panes)?);
    Ok(())
}
