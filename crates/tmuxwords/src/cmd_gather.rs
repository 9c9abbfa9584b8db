//! `tmuxwords gather`: run one gather cycle and print the candidates.

use std::io::Write;
use std::time::Duration;

use anyhow::Context;
use tmuxwords_source::{Candidate, DiagnosticSink, SOURCE_NAME, TmuxSource};

use crate::cli::{GatherOpts, OutputFormat};

pub async fn cmd_gather(
    source: &TmuxSource,
    opts: &GatherOpts,
    sink: &dyn DiagnosticSink,
    out: &mut impl Write,
) -> anyhow::Result<()> {
    let params = match opts.params.resolve() {
        Ok(params) => params,
        Err(e) => {
            // Availability stays unset: report once, print nothing.
            sink.print_error(&e.to_string(), SOURCE_NAME);
            return print_candidates(out, &[], opts.format);
        }
    };
    source.on_init(&params, sink);

    let gathering = source.gather_candidates(&params);
    let candidates = match opts.timeout_ms {
        Some(ms) => tokio::time::timeout(Duration::from_millis(ms), gathering)
            .await
            .with_context(|| format!("gather timed out after {ms}ms"))??,
        None => gathering.await?,
    };
    print_candidates(out, &candidates, opts.format)
}

fn print_candidates(
    out: &mut impl Write,
    candidates: &[Candidate],
    format: OutputFormat,
) -> anyhow::Result<()> {
    writeln!(out, "{}", render(candidates, format)?)?;
    Ok(())
}

pub(crate) fn render(candidates: &[Candidate], format: OutputFormat) -> anyhow::Result<String> {
    Ok(match format {
        OutputFormat::Json => serde_json::to_string(candidates)?,
        OutputFormat::Lines => candidates
            .iter()
            .map(|c| format!("{}\t{}", c.word, c.kind))
            .collect::<Vec<_>>()
            .join("\n"),
    })
}
