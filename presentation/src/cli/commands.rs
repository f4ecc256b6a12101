//! CLI command definitions

use clap::Parser;
use collapse_domain::RenderOptions;
use std::path::PathBuf;

/// CLI arguments for collapse-tools
#[derive(Parser, Debug)]
#[command(name = "collapse-tools")]
#[command(author, version, about = "Preview collapsed tool output from a recorded transcript")]
#[command(long_about = r#"
Collapse Tools replays a JSONL transcript of tool invocations through the
collapsed renderers and prints what the agent terminal would show.

Each line of the transcript is one invocation:
  {"tool": "read", "args": {"path": "src/main.rs"}, "result": {"content": [...]}}
Entries without "result" are shown as still running.

Configuration files are loaded from (in priority order):
1. --config <path>                          Explicit config file
2. ./collapse-tools.toml                    Project-level config
3. ~/.config/collapse-tools/config.toml     Global config

Example:
  collapse-tools session.jsonl
  collapse-tools --expanded session.jsonl
  cat session.jsonl | collapse-tools --no-color
"#)]
pub struct Cli {
    /// Transcript to replay (reads stdin when omitted)
    pub transcript: Option<PathBuf>,

    /// Show results in the expanded state
    #[arg(short, long, conflicts_with = "partial")]
    pub expanded: bool,

    /// Show every result as still running
    #[arg(long)]
    pub partial: bool,

    /// Disable ANSI colors
    #[arg(long)]
    pub no_color: bool,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,
}

impl Cli {
    /// Render options selected by the state flags
    pub fn render_options(&self) -> RenderOptions {
        if self.partial {
            RenderOptions::partial()
        } else if self.expanded {
            RenderOptions::expanded()
        } else {
            RenderOptions::collapsed()
        }
    }
}
