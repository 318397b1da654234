pub mod macros;

use lifegrid_lib::model::patterns::Pattern;
use lifegrid_lib::model::Board;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

#[allow(dead_code)]
pub struct BoardBuilder {
    width: u16,
    height: u16,
    alive: Vec<(i32, i32)>,
    patterns: Vec<(&'static Pattern, i32, i32)>,
    random: Option<(usize, u64)>,
}

#[allow(dead_code)]
impl BoardBuilder {
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            width,
            height,
            alive: Vec::new(),
            patterns: Vec::new(),
            random: None,
        }
    }

    pub fn with_alive(mut self, x: i32, y: i32) -> Self {
        self.alive.push((x, y));
        self
    }

    pub fn with_cells(mut self, cells: &[(i32, i32)]) -> Self {
        self.alive.extend_from_slice(cells);
        self
    }

    pub fn with_pattern(mut self, pattern: &'static Pattern, x: i32, y: i32) -> Self {
        self.patterns.push((pattern, x, y));
        self
    }

    pub fn with_random(mut self, count: usize, seed: u64) -> Self {
        self.random = Some((count, seed));
        self
    }

    pub fn build(self) -> Board {
        let mut board = Board::new(self.width, self.height);
        board
            .seed_cells(&self.alive)
            .expect("Builder cells must be on the board");
        for (pattern, x, y) in self.patterns {
            board
                .apply_pattern(pattern, x, y)
                .expect("Builder pattern must fit on the board");
        }
        if let Some((count, seed)) = self.random {
            board.randomize_seed_with_rng(count, &mut ChaCha8Rng::seed_from_u64(seed));
        }
        board
    }
}

/// Live cells as a sorted vector, for order-independent comparisons.
#[allow(dead_code)]
pub fn live(board: &Board) -> Vec<(u16, u16)> {
    let mut cells: Vec<_> = board.live_cells().collect();
    cells.sort_unstable();
    cells
}
