//! Shared board access and command dispatch.
//!
//! The run loop and any input layer hold clones of the same [`Controller`].
//! Every read and every generation swap goes through one `RwLock`, so a
//! reader on another thread sees either the old grid or the new one.

use anyhow::Result;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, RwLock};
use std::time::Instant;

use lifegrid_core::config::MAX_DIMENSION;
use lifegrid_core::{find_pattern, Board, GenerationStats, Metrics};

use super::command::Command;
use super::shutdown::ShutdownManager;

pub type SharedBoard = Arc<RwLock<Board>>;

#[derive(Clone)]
pub struct Controller {
    board: SharedBoard,
    paused: Arc<AtomicBool>,
    shutdown: ShutdownManager,
    metrics: Arc<Metrics>,
}

impl Controller {
    pub fn new(board: Board) -> Self {
        Self {
            board: Arc::new(RwLock::new(board)),
            paused: Arc::new(AtomicBool::new(false)),
            shutdown: ShutdownManager::new(),
            metrics: Arc::new(Metrics::new()),
        }
    }

    pub fn shared_board(&self) -> SharedBoard {
        Arc::clone(&self.board)
    }

    pub fn metrics(&self) -> Arc<Metrics> {
        Arc::clone(&self.metrics)
    }

    pub fn shutdown(&self) -> &ShutdownManager {
        &self.shutdown
    }

    /// Runs `f` against the board under the read lock.
    pub fn read<R>(&self, f: impl FnOnce(&Board) -> R) -> R {
        let board = self.board.read().unwrap_or_else(|e| e.into_inner());
        f(&board)
    }

    fn write<R>(&self, f: impl FnOnce(&mut Board) -> R) -> R {
        let mut board = self.board.write().unwrap_or_else(|e| e.into_inner());
        f(&mut board)
    }

    /// Advances one generation under the write lock and records it.
    pub fn step(&self) -> GenerationStats {
        let started = Instant::now();
        let stats = self.write(Board::advance_generation);
        self.metrics.record_generation(&stats, started.elapsed());
        if stats.stable {
            tracing::info!(generation = stats.generation, "Board is stable");
        }
        stats
    }

    pub fn pause(&self) {
        self.paused.store(true, Ordering::SeqCst);
        tracing::info!("Paused");
    }

    pub fn resume(&self) {
        self.paused.store(false, Ordering::SeqCst);
        tracing::info!("Resumed");
    }

    pub fn is_paused(&self) -> bool {
        self.paused.load(Ordering::SeqCst)
    }

    pub fn request_quit(&self) {
        self.shutdown.request_shutdown();
    }

    pub fn is_quit_requested(&self) -> bool {
        self.shutdown.is_shutdown_requested()
    }

    /// Applies a command. Coordinate errors come back as
    /// [`BoardError`](lifegrid_core::BoardError) wrapped in `anyhow`. Resizes
    /// beyond [`MAX_DIMENSION`] are refused and leave the board as it was.
    pub fn dispatch(&self, command: Command) -> Result<()> {
        tracing::debug!(?command, "Dispatching command");
        match command {
            Command::SetAlive { x, y } => self.write(|b| b.set_alive(x, y))?,
            Command::SetDead { x, y } => self.write(|b| b.set_dead(x, y))?,
            Command::Toggle { x, y } => {
                self.write(|b| b.toggle(x, y))?;
            }
            Command::Randomize(count) => {
                let activated = self.write(|b| b.randomize_seed(count));
                tracing::info!(requested = count, activated, "Randomized board");
            }
            Command::Pattern { name, x, y } => {
                let pattern = find_pattern(&name)
                    .ok_or_else(|| anyhow::anyhow!("unknown pattern '{name}'"))?;
                self.write(|b| b.apply_pattern(pattern, x, y))?;
            }
            Command::Step => {
                self.step();
            }
            Command::Clear => self.write(Board::clear),
            Command::Resize { width, height } => {
                anyhow::ensure!(
                    width <= MAX_DIMENSION && height <= MAX_DIMENSION,
                    "Board {width}x{height} too large (max {MAX_DIMENSION})"
                );
                self.write(|b| b.resize(width, height));
            }
            Command::Pause => self.pause(),
            Command::Resume => self.resume(),
            Command::Quit => self.request_quit(),
        }
        Ok(())
    }
}
