//! CLI command definitions

use clap::{Parser, ValueEnum};
use poker_domain::ResolutionPolicy;
use std::path::PathBuf;

/// Resolution policy selection
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum PolicyArg {
    /// All players must play the same card
    Unanimous,
    /// Discussion round, then an averaged re-vote
    Average,
}

impl From<PolicyArg> for ResolutionPolicy {
    fn from(arg: PolicyArg) -> Self {
        match arg {
            PolicyArg::Unanimous => ResolutionPolicy::Unanimous,
            PolicyArg::Average => ResolutionPolicy::Average,
        }
    }
}

/// CLI arguments for planning-poker
#[derive(Parser, Debug)]
#[command(name = "planning-poker")]
#[command(author, version, about = "Estimation consensus engine for planning poker")]
#[command(long_about = r#"
Planning Poker walks a backlog one item at a time and collects a card from
every player in turn order. A completed round is resolved by policy:

- unanimous: everyone must play the same card; divergence opens a timed
  discussion and a full re-vote
- average: two rounds are always played; the first surfaces the extremes
  for discussion, the second is averaged

Playing "break" on every card asks the table to pause; a confirmed pause
saves a snapshot that --resume picks up later.

Configuration files are loaded from (in priority order):
1. --config <path>     Explicit config file
2. ./poker.toml        Project-level config
3. ~/.config/planning-poker/config.toml   Global config

Example:
  planning-poker --backlog backlog.json -p alice -p bob -p carol
  planning-poker --backlog backlog.json -p alice -p bob --policy unanimous
  planning-poker --resume --snapshot state/paused.json -p alice -p bob
"#)]
pub struct Cli {
    /// Path to the backlog file (JSON array of items)
    #[arg(short, long, value_name = "FILE")]
    pub backlog: Option<PathBuf>,

    /// Players at the table in turn order (can be specified multiple times)
    #[arg(short, long, value_name = "NAME")]
    pub player: Vec<String>,

    /// How completed rounds are resolved
    #[arg(long, value_enum)]
    pub policy: Option<PolicyArg>,

    /// Resume the session saved in the snapshot file
    #[arg(long)]
    pub resume: bool,

    /// Where to write the final estimates
    #[arg(long, value_name = "FILE")]
    pub results: Option<PathBuf>,

    /// Where to write pause snapshots
    #[arg(long, value_name = "FILE")]
    pub snapshot: Option<PathBuf>,

    /// Length of the discussion window in seconds
    #[arg(long, value_name = "SECONDS")]
    pub discussion_secs: Option<u64>,

    /// Use plain text instead of the countdown bar during discussions
    #[arg(long)]
    pub no_progress: bool,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress session narration (prompts only)
    #[arg(short, long)]
    pub quiet: bool,

    /// Append logs to this file instead of stderr
    #[arg(long, value_name = "FILE")]
    pub log_file: Option<PathBuf>,

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
