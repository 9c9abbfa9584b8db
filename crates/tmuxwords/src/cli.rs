//! CLI definition using clap derive.

use clap::{Args, Parser, Subcommand, ValueEnum};
use tmuxwords_source::{ConfigError, SourceParams, TmuxExecutor, TmuxSource};

#[derive(Parser)]
#[command(name = "tmuxwords", about = "completion candidates from tmux panes")]
pub struct Cli {
    /// tmux server socket path (-S)
    #[arg(long, global = true, env = "TMUXWORDS_TMUX_SOCKET")]
    pub tmux_socket: Option<String>,

    /// tmux server socket name (-L); ignored when --tmux-socket is set
    #[arg(long, global = true)]
    pub tmux_socket_name: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

impl Cli {
    /// Executor for `tmux_bin` aimed at the selected server.
    pub fn executor(&self, tmux_bin: impl Into<String>) -> TmuxExecutor {
        let exec = TmuxExecutor::new(tmux_bin);
        match (&self.tmux_socket, &self.tmux_socket_name) {
            (Some(path), _) => exec.with_socket_path(path.clone()),
            (None, Some(name)) => exec.with_socket_name(name.clone()),
            (None, None) => exec,
        }
    }

    /// Source aimed at the selected server.
    pub fn source(&self) -> TmuxSource {
        let source = TmuxSource::new();
        match (&self.tmux_socket, &self.tmux_socket_name) {
            (Some(path), _) => source.with_socket_path(path.clone()),
            (None, Some(name)) => source.with_socket_name(name.clone()),
            (None, None) => source,
        }
    }
}

#[derive(Subcommand)]
pub enum Command {
    /// Print candidates gathered from pane contents
    Gather(GatherOpts),
    /// Print the panes that would be captured
    Panes(ParamOpts),
}

#[derive(Args)]
pub struct GatherOpts {
    #[command(flatten)]
    pub params: ParamOpts,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Json)]
    pub format: OutputFormat,

    /// Give up on the whole cycle after this many milliseconds
    #[arg(long)]
    pub timeout_ms: Option<u64>,
}

#[derive(Args, Default)]
pub struct ParamOpts {
    /// Source params as the host's JSON object; flags below override it
    #[arg(long)]
    pub params: Option<String>,

    /// Only consult panes in the current window
    #[arg(long)]
    pub current_win_only: bool,

    /// Skip the active pane
    #[arg(long)]
    pub exclude_current_pane: bool,

    /// tmux executable
    #[arg(long, env = "TMUXWORDS_EXECUTABLE")]
    pub executable: Option<String>,

    /// tmux format used as each candidate's kind
    #[arg(long, env = "TMUXWORDS_KIND_FORMAT")]
    pub kind_format: Option<String>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// JSON array of {"word", "kind"}
    Json,
    /// One `word<TAB>kind` per line
    Lines,
}

impl ParamOpts {
    /// Merge `--params` JSON with the individual flags.
    pub fn resolve(&self) -> Result<SourceParams, ConfigError> {
        let mut params = match &self.params {
            Some(raw) => {
                let value: serde_json::Value = serde_json::from_str(raw)
                    .map_err(|e| ConfigError::InvalidParams(e.to_string()))?;
                SourceParams::from_json(value)?
            }
            None => SourceParams::default(),
        };
        params.current_win_only |= self.current_win_only;
        params.exclude_current_pane |= self.exclude_current_pane;
        if let Some(ref exe) = self.executable {
            params.executable = exe.clone();
        }
        if let Some(ref fmt) = self.kind_format {
            params.kind_format = fmt.clone();
        }
        Ok(params)
    }
}
