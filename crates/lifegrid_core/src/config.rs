//! Configuration management for board and run parameters.
//!
//! Strongly-typed structures that map to `config.toml`. Values are layered:
//!
//! 1. Default values (hardcoded in `Default` impls)
//! 2. `config.toml` file (overrides defaults)
//! 3. Command-line flags (applied by the binary)
//!
//! ## Example `config.toml`
//!
//! ```toml
//! [board]
//! width = 10
//! height = 10
//! seed_count = 100
//! seed = 42
//! deterministic = true
//!
//! [run]
//! interval_ms = 1000
//! stop_when_stable = true
//!
//! [render]
//! alive_glyph = "*"
//! dead_glyph = "-"
//! ```

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

use crate::board::{Board, ALIVE_GLYPH, DEAD_GLYPH, DEFAULT_HEIGHT, DEFAULT_WIDTH};

/// Largest accepted board dimension.
pub const MAX_DIMENSION: u16 = 4096;

/// Board dimensions and initial seeding.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct BoardConfig {
    pub width: u16,
    pub height: u16,
    /// Number of random draws made when seeding. Duplicates are allowed.
    pub seed_count: usize,
    pub seed: Option<u64>,
    pub deterministic: bool,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            seed_count: 100,
            seed: None,
            deterministic: false,
        }
    }
}

impl BoardConfig {
    /// Compact 5x5 layout with a single 50-draw seeding pass.
    #[must_use]
    pub fn compact() -> Self {
        Self {
            width: 5,
            height: 5,
            seed_count: 50,
            ..Self::default()
        }
    }

    /// Builds a dead board with the configured dimensions.
    #[must_use]
    pub fn build(&self) -> Board {
        Board::new(self.width, self.height)
    }

    /// Builds a board and seeds it with `seed_count` random draws, using a
    /// ChaCha RNG when a seed is configured.
    #[must_use]
    pub fn build_seeded(&self) -> Board {
        let mut board = self.build();
        match self.seed {
            Some(seed) => {
                let mut rng = ChaCha8Rng::seed_from_u64(seed);
                board.randomize_seed_with_rng(self.seed_count, &mut rng);
            }
            None => {
                board.randomize_seed(self.seed_count);
            }
        }
        board
    }
}

/// Run loop cadence and termination.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct RunConfig {
    pub interval_ms: u64,
    pub max_generations: Option<u64>,
    pub stop_when_stable: bool,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            interval_ms: 1000,
            max_generations: None,
            stop_when_stable: true,
        }
    }
}

impl RunConfig {
    #[must_use]
    pub fn compact() -> Self {
        Self {
            interval_ms: 500,
            ..Self::default()
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct RenderConfig {
    pub alive_glyph: char,
    pub dead_glyph: char,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            alive_glyph: ALIVE_GLYPH,
            dead_glyph: DEAD_GLYPH,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(default)]
pub struct AppConfig {
    pub board: BoardConfig,
    pub run: RunConfig,
    pub render: RenderConfig,
}

impl AppConfig {
    /// Compact preset: a 5x5 board stepped every 500 ms.
    #[must_use]
    pub fn compact() -> Self {
        Self {
            board: BoardConfig::compact(),
            run: RunConfig::compact(),
            render: RenderConfig::default(),
        }
    }

    /// Validates all configuration parameters.
    ///
    /// # Validation Rules
    /// - Board dimensions must not exceed [`MAX_DIMENSION`]
    /// - Interval must be in `1..=60000` ms
    /// - Alive and dead glyphs must differ
    /// - Deterministic runs must carry a seed
    pub fn validate(&self) -> anyhow::Result<()> {
        anyhow::ensure!(
            self.board.width <= MAX_DIMENSION,
            "Board width too large (max {MAX_DIMENSION})"
        );
        anyhow::ensure!(
            self.board.height <= MAX_DIMENSION,
            "Board height too large (max {MAX_DIMENSION})"
        );
        anyhow::ensure!(
            !self.board.deterministic || self.board.seed.is_some(),
            "Deterministic mode requires a seed"
        );

        anyhow::ensure!(self.run.interval_ms > 0, "Interval must be positive");
        anyhow::ensure!(
            self.run.interval_ms <= 60_000,
            "Interval too long (max 60000 ms)"
        );

        anyhow::ensure!(
            self.render.alive_glyph != self.render.dead_glyph,
            "Alive and dead glyphs must differ"
        );

        Ok(())
    }

    /// Parses and validates a TOML document.
    pub fn from_toml(content: &str) -> anyhow::Result<Self> {
        let config = toml::from_str::<Self>(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_toml(&self) -> anyhow::Result<String> {
        Ok(toml::to_string(self)?)
    }
}
