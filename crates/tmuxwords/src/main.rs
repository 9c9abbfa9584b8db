//! tmuxwords: print completion candidates harvested from tmux panes.
//! Thin host around tmuxwords-source; stdout carries the results, logs and
//! diagnostics go to stderr.

use clap::Parser;

mod cli;
mod cmd_gather;
mod cmd_panes;
mod diagnostics;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = cli::Cli::parse();

    let filter = std::env::var("TMUXWORDS_LOG")
        .or_else(|_| std::env::var("RUST_LOG"))
        .unwrap_or_else(|_| "warn".to_string());
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new(filter))
        .with_writer(std::io::stderr)
        .init();

    match &args.command {
        cli::Command::Gather(opts) => {
            let source = args.source();
            let sink = diagnostics::StderrSink::new();
            cmd_gather::cmd_gather(&source, opts, &sink, &mut std::io::stdout()).await?;
        }
        cli::Command::Panes(opts) => {
            cmd_panes::cmd_panes(&args, opts).await?;
        }
    }

    Ok(())
}
