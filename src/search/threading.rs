//! Background search worker.
//!
//! A worker owns a private clone of the game and a boxed engine, runs the
//! search on its own thread, and hands back exactly one outcome through a
//! single-slot channel. Cancellation is cooperative: `cancel` flips the
//! shared token, the recursion unwinds at its next node, and the outcome is
//! reported with no move. The engine travels back with the outcome so the
//! driver can reuse it (and its RNG) for the next move.

use std::sync::mpsc::{sync_channel, Receiver, TryRecvError};
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

use tracing::{info, warn};

use crate::engines::engine_trait::{Engine, EngineOutput};
use crate::errors::{ChessError, ChessResult};
use crate::game_state::game_state::GameState;
use crate::search::search_config::CancellationToken;

pub struct WorkerOutcome {
    pub engine: Box<dyn Engine>,
    pub output: EngineOutput,
    pub cancelled: bool,
    pub elapsed: Duration,
}

pub struct SearchWorker {
    cancel: CancellationToken,
    receiver: Receiver<WorkerOutcome>,
    handle: Option<JoinHandle<()>>,
    started_at: Instant,
}

impl SearchWorker {
    /// Starts searching `game_state` for the side to move.
    pub fn spawn(mut game_state: GameState, mut engine: Box<dyn Engine>) -> Self {
        let cancel = CancellationToken::new();
        engine.set_cancellation_token(cancel.clone());
        let (sender, receiver) = sync_channel(1);
        let token = cancel.clone();
        let started_at = Instant::now();

        info!(engine = engine.name(), side = %game_state.side_to_move(), "search worker started");
        let handle = thread::spawn(move || {
            let mut moves = game_state.get_valid_moves();
            let mut output = engine.choose_move(&mut game_state, &mut moves);
            let cancelled = token.is_cancelled();
            if cancelled {
                output.best_move = None;
                output.score = None;
            }
            let outcome = WorkerOutcome {
                engine,
                output,
                cancelled,
                elapsed: started_at.elapsed(),
            };
            // The driver may have dropped the worker already.
            let _ = sender.send(outcome);
        });

        Self {
            cancel,
            receiver,
            handle: Some(handle),
            started_at,
        }
    }

    pub fn cancel(&self) {
        if !self.cancel.is_cancelled() {
            info!("search worker cancelled");
        }
        self.cancel.cancel();
    }

    #[inline]
    pub fn is_cancelled(&self) -> bool {
        self.cancel.is_cancelled()
    }

    #[inline]
    pub fn elapsed(&self) -> Duration {
        self.started_at.elapsed()
    }

    /// Non-blocking poll. `Ok(None)` while the search is still running.
    pub fn try_result(&mut self) -> ChessResult<Option<WorkerOutcome>> {
        match self.receiver.try_recv() {
            Ok(outcome) => {
                self.join();
                log_finished(&outcome);
                Ok(Some(outcome))
            }
            Err(TryRecvError::Empty) => Ok(None),
            Err(TryRecvError::Disconnected) => {
                self.join();
                Err(ChessError::WorkerDisconnected)
            }
        }
    }

    /// Blocks until the worker reports.
    pub fn wait(mut self) -> ChessResult<WorkerOutcome> {
        let outcome = self
            .receiver
            .recv()
            .map_err(|_| ChessError::WorkerDisconnected)?;
        self.join();
        log_finished(&outcome);
        Ok(outcome)
    }

    /// Waits at most `budget` from the worker's start, cancelling once it is
    /// spent. The outcome of a cancelled search carries no move.
    pub fn wait_with_budget(self, budget: Duration) -> ChessResult<WorkerOutcome> {
        let remaining = budget.saturating_sub(self.elapsed());
        match self.receiver.recv_timeout(remaining) {
            Ok(outcome) => {
                let mut worker = self;
                worker.join();
                log_finished(&outcome);
                Ok(outcome)
            }
            Err(_) => {
                self.cancel();
                self.wait()
            }
        }
    }

    fn join(&mut self) {
        if let Some(handle) = self.handle.take() {
            if handle.join().is_err() {
                warn!("search worker panicked");
            }
        }
    }
}

impl Drop for SearchWorker {
    fn drop(&mut self) {
        // Stop a still-running search; its result is never read.
        if self.handle.is_some() {
            self.cancel.cancel();
        }
    }
}

fn log_finished(outcome: &WorkerOutcome) {
    info!(
        engine = outcome.engine.name(),
        cancelled = outcome.cancelled,
        nodes = outcome.output.nodes,
        elapsed_ms = outcome.elapsed.as_millis() as u64,
        best_move = ?outcome.output.best_move.map(|m| m.long_algebraic()),
        "search worker finished"
    );
}
