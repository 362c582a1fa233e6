//! Worker pool that drains a dispatch queue.
//!
//! Every address received from a [`QueueConsumer`] becomes one solving task
//! on a [`JoinSet`]. A semaphore bounds how many tasks run at once; with a
//! bound of `0` every address is solved concurrently. A failing task is
//! logged and counted but never affects its siblings.
//!
//! A solve can stall forever, so the bound is only enforced when a
//! per-puzzle deadline is set. Without one, a full pool of stalled solves
//! would keep every later address from ever starting.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::Semaphore;
use tokio::task::JoinSet;
use tracing::{info, warn};
use wordle_core::QueueConsumer;

use crate::client::{HttpPuzzle, PuzzleOracle};
use crate::error::SolverError;
use crate::solver::{CancelSignal, Solution, Solver};

/// Summary of one drained queue.
#[derive(Debug, Clone, Default)]
pub struct DispatchReport {
    /// Queue name.
    pub queue: &'static str,
    /// Addresses received from the queue.
    pub received: usize,
    /// Puzzles solved.
    pub solved: usize,
    /// Tasks that ended in an error or panicked.
    pub failed: usize,
    /// Adaptive-phase guesses summed over every solved puzzle.
    pub total_guesses: u64,
    /// Solutions in completion order.
    pub solutions: Vec<Solution>,
}

/// Spawns a solving task per received address.
#[derive(Debug, Clone)]
pub struct Dispatcher {
    solver: Solver,
    http: reqwest::Client,
    max_concurrent: usize,
    timeout: Option<Duration>,
    cancel: CancelSignal,
}

impl Dispatcher {
    /// A dispatcher with no concurrency bound and no per-puzzle deadline.
    pub const fn new(solver: Solver, http: reqwest::Client, cancel: CancelSignal) -> Self {
        Self {
            solver,
            http,
            max_concurrent: 0,
            timeout: None,
            cancel,
        }
    }

    /// Run at most `limit` solving tasks at once (`0` = unbounded).
    ///
    /// Ignored unless [`Dispatcher::with_timeout`] sets a deadline.
    #[must_use]
    pub const fn with_max_concurrent(mut self, limit: usize) -> Self {
        self.max_concurrent = limit;
        self
    }

    /// Abort any single solve that runs longer than `timeout`.
    #[must_use]
    pub const fn with_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }

    /// Receive addresses until the queue closes or the cancel flag is
    /// raised, then wait for every spawned task.
    pub async fn run(&self, mut consumer: QueueConsumer) -> DispatchReport {
        let queue = consumer.name();
        let limit = self.effective_limit();
        if limit == 0 && self.max_concurrent > 0 {
            warn!(
                queue,
                max_concurrent = self.max_concurrent,
                "no solver timeout set, running every solve concurrently"
            );
        }
        let permits = (limit > 0).then(|| Arc::new(Semaphore::new(limit)));
        let mut tasks = JoinSet::new();

        while let Some(address) = consumer.recv().await {
            if *self.cancel.borrow() {
                warn!(queue, "dispatch cancelled, leaving remaining addresses unsolved");
                break;
            }

            let permit = match &permits {
                Some(semaphore) => match Arc::clone(semaphore).acquire_owned().await {
                    Ok(permit) => Some(permit),
                    Err(e) => {
                        warn!(queue, error = %e, "worker pool closed");
                        break;
                    }
                },
                None => None,
            };

            let solver = self.solver;
            let timeout = self.timeout;
            let cancel = self.cancel.clone();
            let puzzle = HttpPuzzle::new(self.http.clone(), address);
            tasks.spawn(async move {
                let _permit = permit;
                solve_one(solver, &puzzle, &cancel, timeout).await
            });
        }

        let mut report = DispatchReport {
            queue,
            received: consumer.received(),
            ..DispatchReport::default()
        };

        while let Some(joined) = tasks.join_next().await {
            match joined {
                Ok(Ok(solution)) => {
                    report.solved = report.solved.saturating_add(1);
                    report.total_guesses = report.total_guesses.saturating_add(solution.guesses);
                    report.solutions.push(solution);
                }
                Ok(Err(e)) => {
                    report.failed = report.failed.saturating_add(1);
                    warn!(queue, error = %e, "solving task failed");
                }
                Err(e) => {
                    report.failed = report.failed.saturating_add(1);
                    warn!(queue, error = %e, "solving task panicked");
                }
            }
        }

        info!(
            queue,
            received = report.received,
            solved = report.solved,
            failed = report.failed,
            total_guesses = report.total_guesses,
            "dispatch queue drained"
        );
        report
    }

    /// Concurrency bound actually applied (`0` = unbounded).
    const fn effective_limit(&self) -> usize {
        if self.timeout.is_some() {
            self.max_concurrent
        } else {
            0
        }
    }
}

async fn solve_one(
    solver: Solver,
    puzzle: &HttpPuzzle,
    cancel: &CancelSignal,
    timeout: Option<Duration>,
) -> Result<Solution, SolverError> {
    let Some(limit) = timeout else {
        return solver.solve(puzzle, cancel).await;
    };
    tokio::time::timeout(limit, solver.solve(puzzle, cancel))
        .await
        .map_err(|_elapsed| SolverError::TimedOut {
            address: puzzle.address().to_owned(),
            elapsed: limit,
        })?
}
