use anyhow::Result;
use serde::Serialize;
use std::time::{Duration, Instant};
use tokio::time::MissedTickBehavior;

use lifegrid_core::config::RunConfig;
use lifegrid_core::Board;

use super::controller::Controller;
use crate::ui::Renderer;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StopReason {
    Stable,
    GenerationLimit,
    Quit,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RunSummary {
    /// Generations advanced by this run loop.
    pub generations: u64,
    /// The board's own generation counter at exit.
    pub final_generation: u64,
    pub population: usize,
    pub stop_reason: StopReason,
    pub elapsed_ms: u64,
}

/// Drives a board at a fixed cadence until it stabilises, hits the
/// generation limit, or a quit is requested.
pub struct Simulation {
    controller: Controller,
    config: RunConfig,
}

impl Simulation {
    pub fn new(board: Board, config: RunConfig) -> Self {
        Self {
            controller: Controller::new(board),
            config,
        }
    }

    /// A handle for issuing commands while [`Simulation::run`] is in progress.
    pub fn controller(&self) -> Controller {
        self.controller.clone()
    }

    pub fn config(&self) -> &RunConfig {
        &self.config
    }

    /// Captures a frame under the read lock and presents it after the lock
    /// is dropped, so a slow sink never holds up writers.
    fn show<R: Renderer + ?Sized>(&self, renderer: &mut R) -> Result<()> {
        let frame = self.controller.read(|board| renderer.capture(board));
        renderer.present(frame)
    }

    pub async fn run<R: Renderer + ?Sized>(&self, renderer: &mut R) -> Result<RunSummary> {
        let started = Instant::now();
        let mut interval = tokio::time::interval(Duration::from_millis(self.config.interval_ms));
        interval.set_missed_tick_behavior(MissedTickBehavior::Delay);

        tracing::info!(
            interval_ms = self.config.interval_ms,
            max_generations = ?self.config.max_generations,
            stop_when_stable = self.config.stop_when_stable,
            "Simulation started"
        );

        self.show(renderer)?;
        // The first tick completes immediately.
        interval.tick().await;

        let mut advanced = 0u64;
        let stop_reason = loop {
            interval.tick().await;

            if self.controller.is_quit_requested() {
                break StopReason::Quit;
            }
            if matches!(self.config.max_generations, Some(limit) if advanced >= limit) {
                break StopReason::GenerationLimit;
            }
            // Pause is only observed between generations.
            if self.controller.is_paused() {
                continue;
            }

            let stats = self.controller.step();
            advanced += 1;
            self.show(renderer)?;

            if self.config.stop_when_stable && stats.stable {
                break StopReason::Stable;
            }
        };

        let (final_generation, population) =
            self.controller.read(|b| (b.generation(), b.population()));
        let summary = RunSummary {
            generations: advanced,
            final_generation,
            population,
            stop_reason,
            elapsed_ms: started.elapsed().as_millis() as u64,
        };
        tracing::info!(
            generations = summary.generations,
            population = summary.population,
            reason = ?summary.stop_reason,
            "Simulation finished"
        );
        Ok(summary)
    }
}
