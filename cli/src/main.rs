//! CLI entrypoint for Planning Poker
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Context, Result, bail};
use clap::Parser;
use poker_application::{
    BacklogSource, NoObserver, SessionEngine, SessionObserver, SessionParams, SnapshotStore,
};
use poker_domain::{ResolutionPolicy, Roster, SessionState};
use poker_infrastructure::{ConfigLoader, JsonBacklogSource, JsonResultsSink, JsonSnapshotStore};
use poker_presentation::{
    Cli, InteractivePauseConfirmation, ProgressReporter, SimpleProgress, TableRepl,
};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity level
    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    };

    // The guard must be held until exit so buffered lines get flushed
    let _guard = init_logging(filter, cli.log_file.as_deref())?;

    info!("Starting Planning Poker");

    // Show config sources and exit
    if cli.show_config {
        ConfigLoader::print_config_sources();
        return Ok(());
    }

    // Load configuration
    let config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_ref())?
    };
    config.validate()?;

    if !config.output.color {
        colored::control::set_override(false);
    }

    // CLI flags override file configuration
    let policy: ResolutionPolicy = match cli.policy {
        Some(arg) => arg.into(),
        None => config.session.parse_policy(),
    };
    let discussion_seconds = cli
        .discussion_secs
        .unwrap_or(config.session.discussion_seconds);
    if discussion_seconds == 0 {
        bail!("discussion seconds must be at least 1");
    }

    let results_path = cli
        .results
        .clone()
        .unwrap_or_else(|| PathBuf::from(&config.output.results_file));
    let snapshot_path = cli
        .snapshot
        .clone()
        .unwrap_or_else(|| PathBuf::from(&config.output.snapshot_file));

    // === Dependency Injection ===
    // Create infrastructure adapters
    let snapshot_store = Arc::new(JsonSnapshotStore::new(&snapshot_path));
    let results_sink = Arc::new(JsonResultsSink::new(&results_path));
    let backlog_source: Option<Arc<dyn BacklogSource>> = cli
        .backlog
        .as_ref()
        .map(|path| Arc::new(JsonBacklogSource::new(path)) as Arc<dyn BacklogSource>);

    // Build or restore the session
    let state = if cli.resume {
        let snapshot = snapshot_store
            .load()
            .await
            .with_context(|| format!("cannot resume from {}", snapshot_path.display()))?;
        SessionState::restore(snapshot)?
    } else {
        let Some(source) = backlog_source.as_deref() else {
            bail!("--backlog is required unless --resume is set");
        };
        let roster = Roster::new(cli.player.clone())?;
        let backlog = source.load().await?;
        SessionState::new(roster, backlog, policy)
    };

    let params = SessionParams::default()
        .with_policy(state.policy())
        .with_discussion_seconds(discussion_seconds);

    let observer: Arc<dyn SessionObserver> = if cli.quiet {
        Arc::new(NoObserver)
    } else if cli.no_progress || !config.repl.show_progress {
        Arc::new(SimpleProgress)
    } else {
        Arc::new(ProgressReporter::new())
    };

    let engine = SessionEngine::new(
        state,
        params,
        snapshot_store,
        results_sink,
        Arc::new(InteractivePauseConfirmation::new()),
    )
    .with_observer(observer);

    let mut repl = TableRepl::new(engine, backlog_source)
        .with_history_file(config.repl.history_file.as_ref().map(PathBuf::from));

    repl.run().await?;

    Ok(())
}

/// Set up tracing to stderr, or to an append-only file when requested.
///
/// Returns the worker guard keeping the file writer alive.
fn init_logging(
    filter: EnvFilter,
    log_file: Option<&Path>,
) -> Result<Option<tracing_appender::non_blocking::WorkerGuard>> {
    match log_file {
        Some(path) => {
            let file = std::fs::OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .with_context(|| format!("cannot open log file {}", path.display()))?;
            let (writer, guard) = tracing_appender::non_blocking(file);
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_target(false)
                .with_ansi(false)
                .with_writer(writer)
                .init();
            Ok(Some(guard))
        }
        None => {
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_target(false)
                .with_writer(std::io::stderr)
                .init();
            Ok(None)
        }
    }
}
