//! Wordle Arena binary.
//!
//! Serves the generated puzzles over HTTP and, unless disabled, points a
//! solver pool at its own endpoints.
//!
//! # Startup Sequence
//!
//! 1. Initialize structured logging (tracing)
//! 2. Load configuration from `wordle-config.yaml`
//! 3. Decode the base word list
//! 4. Generate the easy and hard puzzles
//! 5. Start the puzzle server
//! 6. Publish every puzzle address to its dispatch queue
//! 7. Drain both queues with the solver pool and log the reports
//! 8. Serve until Ctrl-C

mod error;

use std::path::Path;
use std::sync::Arc;

use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;
use wordle_core::{AppConfig, Difficulty, WordStore, dispatch_queue};
use wordle_server::{AppState, Registry, ServerConfig, spawn_server};
use wordle_solver::{CancelSignal, DispatchReport, Dispatcher, Solver};
use wordle_types::Preferences;

use crate::error::EngineError;

/// Application entry point.
///
/// # Errors
///
/// Returns an error if configuration, the word list, or the server fails.
#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // 1. Initialize structured logging.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(true)
        .init();

    info!("wordle-engine starting");

    // 2. Load configuration.
    let config = AppConfig::load_or_default(Path::new("wordle-config.yaml"))
        .map_err(EngineError::from)?;
    info!(
        host = config.server.host,
        port = config.server.port,
        puzzle_count = config.puzzles.count,
        solver_enabled = config.solver.enabled,
        "Configuration loaded"
    );

    // 3. Decode the word list. Nothing can be generated without it.
    let words = Arc::new(WordStore::load(&config.words.path).map_err(EngineError::from)?);
    info!(
        path = %config.words.path.display(),
        words = words.len(),
        "Word list loaded"
    );

    // 4. Generate puzzles.
    let state = {
        let mut rng = rand::rng();
        let registry = Registry::build(&words, &config.puzzles, &mut rng);
        let default_prefs = Preferences::plain(config.puzzles.default_length);
        Arc::new(AppState::new(registry, Arc::clone(&words), &default_prefs))
    };

    // 5. Start the server. Ctrl-C raises the cancel flag, which stops both
    //    the server and any running solves.
    let (cancel_tx, cancel_rx) = watch::channel(false);
    tokio::spawn(async move {
        match tokio::signal::ctrl_c().await {
            Ok(()) => {
                info!("Ctrl-C received, shutting down");
                cancel_tx.send_replace(true);
            }
            Err(e) => warn!(error = %e, "unable to listen for Ctrl-C"),
        }
    });

    let server_config = ServerConfig {
        host: config.server.host.clone(),
        port: config.server.port,
    };
    let server = spawn_server(
        &server_config,
        Arc::clone(&state),
        shutdown_signal(cancel_rx.clone()),
    )
    .await
    .map_err(EngineError::from)?;
    let base_url = server.base_url();
    info!(base_url, puzzles = state.registry.len(), "Puzzle server started");

    // 6-7. Publish and solve.
    if config.solver.enabled {
        let filler = u8::try_from(config.solver.filler).unwrap_or(b'a');
        let dispatcher = Dispatcher::new(Solver::new(filler), reqwest::Client::new(), cancel_rx)
            .with_max_concurrent(config.solver.max_concurrent_solvers)
            .with_timeout(config.solver.timeout());

        let runs: Vec<JoinHandle<DispatchReport>> = Difficulty::ALL
            .into_iter()
            .map(|difficulty| {
                let (publisher, consumer) =
                    dispatch_queue(difficulty.name(), config.solver.queue_capacity);
                let state = Arc::clone(&state);
                let base_url = base_url.clone();
                tokio::spawn(async move {
                    let published = state.registry.publish(difficulty, &base_url, publisher);
                    if let Err(e) = published.await {
                        warn!(%difficulty, error = %e, "publishing stopped early");
                    }
                });
                let dispatcher = dispatcher.clone();
                tokio::spawn(async move { dispatcher.run(consumer).await })
            })
            .collect();

        for run in runs {
            let report = run.await.map_err(|e| EngineError::Task {
                message: format!("dispatcher task failed: {e}"),
            })?;
            log_report(&report);
        }
    } else {
        info!("Solver disabled, serving puzzles only");
    }

    // 8. Serve until shutdown.
    server
        .handle
        .await
        .map_err(|e| EngineError::Task {
            message: format!("server task failed: {e}"),
        })?
        .map_err(EngineError::from)?;

    info!("wordle-engine stopped");
    Ok(())
}

/// Resolves once the cancel flag is raised. If the flag can never be
/// raised, the server keeps running.
async fn shutdown_signal(mut cancel: CancelSignal) {
    let raised = cancel.wait_for(|&cancelled| cancelled).await.is_ok();
    if !raised {
        std::future::pending::<()>().await;
    }
}

fn log_report(report: &DispatchReport) {
    info!(
        queue = report.queue,
        received = report.received,
        solved = report.solved,
        failed = report.failed,
        total_guesses = report.total_guesses,
        "Queue finished"
    );
}
