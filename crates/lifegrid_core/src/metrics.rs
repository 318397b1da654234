//! Generation metrics and structured logging setup.

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{Duration, Instant};

use crate::board::GenerationStats;

/// How often (in generations) a summary is logged at info level.
pub const SUMMARY_INTERVAL: u64 = 100;

/// Running totals across generations. Safe to share between the run loop
/// and a reader thread.
pub struct Metrics {
    generations: AtomicU64,
    population: AtomicU64,
    births: AtomicU64,
    deaths: AtomicU64,
    start_time: Instant,
}

impl Default for Metrics {
    fn default() -> Self {
        Self::new()
    }
}

impl Metrics {
    #[must_use]
    pub fn new() -> Self {
        Self {
            generations: AtomicU64::new(0),
            population: AtomicU64::new(0),
            births: AtomicU64::new(0),
            deaths: AtomicU64::new(0),
            start_time: Instant::now(),
        }
    }

    /// Records one generation and how long it took to compute.
    pub fn record_generation(&self, stats: &GenerationStats, duration: Duration) {
        let count = self.generations.fetch_add(1, Ordering::Relaxed) + 1;
        self.population
            .store(stats.population as u64, Ordering::Relaxed);
        self.births.fetch_add(stats.births as u64, Ordering::Relaxed);
        self.deaths.fetch_add(stats.deaths as u64, Ordering::Relaxed);

        if count % SUMMARY_INTERVAL == 0 {
            tracing::info!(
                generation = stats.generation,
                population = stats.population,
                total_births = self.total_births(),
                total_deaths = self.total_deaths(),
                duration_us = duration.as_micros() as u64,
                "Simulation summary"
            );
        }
    }

    #[must_use]
    pub fn generations(&self) -> u64 {
        self.generations.load(Ordering::Relaxed)
    }

    #[must_use]
    pub fn population(&self) -> u64 {
        self.population.load(Ordering::Relaxed)
    }

    #[must_use]
    pub fn total_births(&self) -> u64 {
        self.births.load(Ordering::Relaxed)
    }

    #[must_use]
    pub fn total_deaths(&self) -> u64 {
        self.deaths.load(Ordering::Relaxed)
    }

    #[must_use]
    pub fn elapsed(&self) -> Duration {
        self.start_time.elapsed()
    }
}

/// Installs a global fmt subscriber. `RUST_LOG` overrides the default `info`
/// filter. Calling this more than once is harmless.
pub fn init_logging() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    tracing::subscriber::set_global_default(
        tracing_subscriber::FmtSubscriber::builder()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .finish(),
    )
    .ok();
}
