//! tmuxwords-source: completion candidates from visible tmux pane text.
//! Lists panes, captures each one concurrently, and turns the captured
//! text into per-pane deduplicated words labelled with their pane.

pub mod capture;
pub mod config;
pub mod error;
pub mod executor;
pub mod locate;
pub mod pane_info;
pub mod source;
pub mod words;

pub use capture::capture_pane;
pub use config::{DEFAULT_EXECUTABLE, DEFAULT_KIND_FORMAT, SourceParams};
pub use error::{ConfigError, TmuxError};
pub use executor::{TmuxCommandRunner, TmuxExecutor, split_output_lines};
pub use locate::find_executable;
pub use pane_info::{FIELD_SEPARATOR, ListedPane, PaneRecord, list_panes, parse_list_panes_output};
pub use source::{
    Candidate, CapturedPane, DiagnosticSink, Ready, SOURCE_NAME, TmuxSource, gather, initialize,
};
pub use words::all_words;
