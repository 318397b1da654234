//! The board: grid storage, neighbor counting, and the generational update.
//!
//! Cells are stored row-major (`y * width + x`). Each generation is computed
//! into a back buffer from the untouched current grid and then swapped in, so
//! no decision ever sees a partially updated neighborhood.

use lifegrid_data::{Cell, Coord};
use rand::Rng;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{BoardError, Result};

/// Default board width for the console driver.
pub const DEFAULT_WIDTH: u16 = 10;
/// Default board height for the console driver.
pub const DEFAULT_HEIGHT: u16 = 10;
/// Glyph used by [`Board`]'s `Display` for a live cell.
pub const ALIVE_GLYPH: char = '*';
/// Glyph used by [`Board`]'s `Display` for a dead cell.
pub const DEAD_GLYPH: char = '-';

/// Boards with fewer cells than this are stepped on the calling thread.
const PARALLEL_MIN_CELLS: usize = 64 * 64;

const NEIGHBOR_OFFSETS: [(i32, i32); 8] = [
    (-1, -1),
    (0, -1),
    (1, -1),
    (-1, 0),
    (1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
];

/// Conway's rule: survival on 2 or 3 neighbors, birth on exactly 3.
#[inline]
#[must_use]
pub fn next_state(alive: bool, live_neighbors: u8) -> bool {
    matches!((alive, live_neighbors), (true, 2) | (true, 3) | (false, 3))
}

/// Summary of a single call to [`Board::advance_generation`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct GenerationStats {
    pub generation: u64,
    pub population: usize,
    pub births: usize,
    pub deaths: usize,
    pub stable: bool,
}

/// A fixed-size, non-wrapping Game of Life grid.
#[derive(Debug, Clone)]
pub struct Board {
    width: u16,
    height: u16,
    cells: Vec<Cell>,
    back_buffer: Vec<Cell>,
    stable: bool,
    generation: u64,
}

impl Default for Board {
    fn default() -> Self {
        Self::new(DEFAULT_WIDTH, DEFAULT_HEIGHT)
    }
}

impl Board {
    /// Creates a `width x height` board with every cell dead.
    ///
    /// A zero dimension produces an empty but valid board.
    #[must_use]
    pub fn new(width: u16, height: u16) -> Self {
        let cells = dead_cells(width, height);
        let back_buffer = cells.clone();
        Self {
            width,
            height,
            cells,
            back_buffer,
            stable: false,
            generation: 0,
        }
    }

    /// Creates a board from signed dimensions, rejecting anything that does
    /// not fit in `0..=u16::MAX`.
    ///
    /// # Errors
    /// Returns [`BoardError::InvalidDimensions`] for negative or oversized input.
    pub fn try_new(width: i64, height: i64) -> Result<Self> {
        match (u16::try_from(width), u16::try_from(height)) {
            (Ok(w), Ok(h)) => Ok(Self::new(w, h)),
            _ => Err(BoardError::InvalidDimensions { width, height }),
        }
    }

    #[must_use]
    pub fn width(&self) -> u16 {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> u16 {
        self.height
    }

    /// True when the most recent generation left every cell unchanged.
    #[must_use]
    pub fn is_stable(&self) -> bool {
        self.stable
    }

    /// Number of generations applied since construction or the last reset.
    #[must_use]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Number of live cells.
    #[must_use]
    pub fn population(&self) -> usize {
        self.cells.iter().filter(|c| c.is_alive()).count()
    }

    #[must_use]
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Iterates over rows from `y = 0` upward, each row ordered by `x`.
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.chunks(usize::from(self.width.max(1)))
    }

    /// Coordinates of every live cell in row-major order.
    pub fn live_cells(&self) -> impl Iterator<Item = Coord> + '_ {
        self.cells
            .iter()
            .filter(|c| c.is_alive())
            .map(Cell::coord)
    }

    /// Whether `(x, y)` lies on the grid.
    #[inline]
    #[must_use]
    pub fn contains(&self, x: i32, y: i32) -> bool {
        x >= 0 && y >= 0 && x < i32::from(self.width) && y < i32::from(self.height)
    }

    #[inline(always)]
    fn index(&self, x: u16, y: u16) -> usize {
        usize::from(y) * usize::from(self.width) + usize::from(x)
    }

    fn locate(&self, x: i32, y: i32) -> Result<usize> {
        if self.contains(x, y) {
            Ok(self.index(x as u16, y as u16))
        } else {
            Err(BoardError::out_of_range(
                i64::from(x),
                i64::from(y),
                self.width,
                self.height,
            ))
        }
    }

    /// Returns the cell at `(x, y)`.
    ///
    /// # Errors
    /// Returns [`BoardError::OutOfRange`] if the coordinate is off the grid.
    pub fn cell(&self, x: i32, y: i32) -> Result<&Cell> {
        let idx = self.locate(x, y)?;
        Ok(&self.cells[idx])
    }

    /// Returns whether the cell at `(x, y)` is alive.
    ///
    /// # Errors
    /// Returns [`BoardError::OutOfRange`] if the coordinate is off the grid.
    pub fn is_alive(&self, x: i32, y: i32) -> Result<bool> {
        Ok(self.cell(x, y)?.is_alive())
    }

    /// Sets the cell at `(x, y)` alive.
    ///
    /// # Errors
    /// Returns [`BoardError::OutOfRange`] and leaves the grid untouched if the
    /// coordinate is off the grid.
    pub fn set_alive(&mut self, x: i32, y: i32) -> Result<()> {
        let idx = self.locate(x, y)?;
        self.cells[idx].set_alive();
        Ok(())
    }

    /// Sets the cell at `(x, y)` dead.
    ///
    /// # Errors
    /// Returns [`BoardError::OutOfRange`] and leaves the grid untouched if the
    /// coordinate is off the grid.
    pub fn set_dead(&mut self, x: i32, y: i32) -> Result<()> {
        let idx = self.locate(x, y)?;
        self.cells[idx].set_dead();
        Ok(())
    }

    /// Flips the cell at `(x, y)` and returns its new state.
    ///
    /// # Errors
    /// Returns [`BoardError::OutOfRange`] if the coordinate is off the grid.
    pub fn toggle(&mut self, x: i32, y: i32) -> Result<bool> {
        let idx = self.locate(x, y)?;
        Ok(self.cells[idx].toggle())
    }

    /// Sets every listed coordinate alive.
    ///
    /// All coordinates are checked first; if any is off the grid nothing is
    /// changed.
    ///
    /// # Errors
    /// Returns [`BoardError::OutOfRange`] for the first off-grid coordinate.
    pub fn seed_cells(&mut self, coords: &[(i32, i32)]) -> Result<()> {
        let indices = coords
            .iter()
            .map(|&(x, y)| self.locate(x, y))
            .collect::<Result<Vec<_>>>()?;
        for idx in indices {
            self.cells[idx].set_alive();
        }
        Ok(())
    }

    /// Kills every cell and resets the generation counter and stability flag.
    pub fn clear(&mut self) {
        for cell in &mut self.cells {
            cell.set_dead();
        }
        self.stable = false;
        self.generation = 0;
    }

    /// Reallocates the grid at the new dimensions with every cell dead.
    pub fn resize(&mut self, width: u16, height: u16) {
        tracing::info!(
            from_width = self.width,
            from_height = self.height,
            width,
            height,
            "Resizing board"
        );
        *self = Self::new(width, height);
    }

    /// Counts live cells among the up-to-eight neighbors of `(x, y)`.
    ///
    /// Neighbor positions off the grid are treated as dead; the board does
    /// not wrap.
    ///
    /// # Errors
    /// Returns [`BoardError::OutOfRange`] if `(x, y)` itself is off the grid.
    pub fn count_live_neighbors(&self, x: i32, y: i32) -> Result<u8> {
        self.locate(x, y)?;
        Ok(live_neighbors(&self.cells, self.width, self.height, x, y))
    }

    /// Applies one generation of Conway's rule to the whole grid.
    ///
    /// The board is marked stable when every cell ends up in the same state
    /// it started in.
    pub fn advance_generation(&mut self) -> GenerationStats {
        let (births, deaths) = self.compute_next();

        std::mem::swap(&mut self.cells, &mut self.back_buffer);
        self.generation += 1;

        // back_buffer now holds the previous generation.
        self.stable = self
            .cells
            .iter()
            .zip(&self.back_buffer)
            .all(|(new, old)| new.is_alive() == old.is_alive());

        let stats = GenerationStats {
            generation: self.generation,
            population: self.population(),
            births,
            deaths,
            stable: self.stable,
        };
        tracing::debug!(
            generation = stats.generation,
            population = stats.population,
            births,
            deaths,
            stable = stats.stable,
            "Advanced generation"
        );
        stats
    }

    /// Fills the back buffer with the next generation, row by row.
    /// Returns `(births, deaths)`.
    fn compute_next(&mut self) -> (usize, usize) {
        let (width, height) = (self.width, self.height);
        let row_len = usize::from(width).max(1);
        let cells = &self.cells;

        let step_row = |(y, row): (usize, &mut [Cell])| {
            let mut births = 0usize;
            let mut deaths = 0usize;
            for (x, next) in row.iter_mut().enumerate() {
                let current = cells[y * row_len + x];
                let neighbors = live_neighbors(cells, width, height, x as i32, y as i32);
                *next = current;
                match (current.is_alive(), next_state(current.is_alive(), neighbors)) {
                    (false, true) => {
                        next.set_alive();
                        births += 1;
                    }
                    (true, false) => {
                        next.set_dead();
                        deaths += 1;
                    }
                    _ => {}
                }
            }
            (births, deaths)
        };
        let sum = |a: (usize, usize), b: (usize, usize)| (a.0 + b.0, a.1 + b.1);

        if cells.len() >= PARALLEL_MIN_CELLS {
            self.back_buffer
                .par_chunks_mut(row_len)
                .enumerate()
                .map(step_row)
                .reduce(|| (0, 0), sum)
        } else {
            self.back_buffer
                .chunks_mut(row_len)
                .enumerate()
                .map(step_row)
                .fold((0, 0), sum)
        }
    }

    /// Sets `count` uniformly chosen cells alive, drawing coordinates with
    /// replacement from the thread-local RNG. Returns how many cells changed.
    pub fn randomize_seed(&mut self, count: usize) -> usize {
        self.randomize_seed_with_rng(count, &mut rand::thread_rng())
    }

    /// Same as [`Board::randomize_seed`] but with a caller-supplied RNG, so
    /// seeding can be reproduced.
    pub fn randomize_seed_with_rng<R: Rng>(&mut self, count: usize, rng: &mut R) -> usize {
        if self.cells.is_empty() {
            return 0;
        }
        let mut activated = 0;
        for _ in 0..count {
            let x = rng.gen_range(0..self.width);
            let y = rng.gen_range(0..self.height);
            let idx = self.index(x, y);
            if !self.cells[idx].is_alive() {
                self.cells[idx].set_alive();
                activated += 1;
            }
        }
        tracing::debug!(requested = count, activated, "Randomized seed");
        activated
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.width == 0 {
            return Ok(());
        }
        for row in self.rows() {
            for cell in row {
                let glyph = if cell.is_alive() { ALIVE_GLYPH } else { DEAD_GLYPH };
                write!(f, "{glyph}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

fn dead_cells(width: u16, height: u16) -> Vec<Cell> {
    (0..height)
        .flat_map(|y| (0..width).map(move |x| Cell::new(x, y)))
        .collect()
}

fn live_neighbors(cells: &[Cell], width: u16, height: u16, x: i32, y: i32) -> u8 {
    let (w, h) = (i32::from(width), i32::from(height));
    let mut count = 0;
    for (dx, dy) in NEIGHBOR_OFFSETS {
        let nx = x + dx;
        let ny = y + dy;
        if nx >= 0 && nx < w && ny >= 0 && ny < h {
            let idx = ny as usize * width as usize + nx as usize;
            if cells[idx].is_alive() {
                count += 1;
            }
        }
    }
    count
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn board_with(width: u16, height: u16, alive: &[(i32, i32)]) -> Board {
        let mut board = Board::new(width, height);
        board.seed_cells(alive).unwrap();
        board
    }

    #[test]
    fn test_new_board_is_dead() {
        let board = Board::new(4, 3);
        assert_eq!(board.cells().len(), 12);
        assert_eq!(board.population(), 0);
        assert!(!board.is_stable());
        assert_eq!(board.generation(), 0);
    }

    #[test]
    fn test_cells_know_their_slot() {
        let board = Board::new(3, 2);
        for y in 0..2 {
            for x in 0..3 {
                let cell = board.cell(x, y).unwrap();
                assert_eq!(cell.coord(), (x as u16, y as u16));
            }
        }
    }

    #[test]
    fn test_default_is_ten_by_ten() {
        let board = Board::default();
        assert_eq!((board.width(), board.height()), (10, 10));
    }

    #[test]
    fn test_try_new_rejects_negative() {
        assert_eq!(
            Board::try_new(-1, 5).unwrap_err(),
            BoardError::InvalidDimensions {
                width: -1,
                height: 5
            }
        );
        assert!(Board::try_new(5, 70_000).is_err());
        assert!(Board::try_new(0, 0).is_ok());
    }

    #[test]
    fn test_next_state_table() {
        for n in 0..=8u8 {
            assert_eq!(next_state(true, n), n == 2 || n == 3, "alive with {n}");
            assert_eq!(next_state(false, n), n == 3, "dead with {n}");
        }
    }

    #[test]
    fn test_corner_neighbors() {
        let board = board_with(4, 4, &[(0, 1), (1, 0), (1, 1), (3, 3)]);
        assert_eq!(board.count_live_neighbors(0, 0).unwrap(), 3);
        assert_eq!(board.count_live_neighbors(3, 3).unwrap(), 0);
    }

    #[test]
    fn test_center_neighbors_full() {
        let mut board = Board::new(3, 3);
        for y in 0..3 {
            for x in 0..3 {
                board.set_alive(x, y).unwrap();
            }
        }
        assert_eq!(board.count_live_neighbors(1, 1).unwrap(), 8);
    }

    #[test]
    fn test_neighbors_do_not_wrap() {
        let board = board_with(5, 5, &[(4, 0), (0, 4), (4, 4)]);
        assert_eq!(board.count_live_neighbors(0, 0).unwrap(), 0);
    }

    #[test]
    fn test_neighbors_off_grid_center_is_error() {
        let board = Board::new(3, 3);
        assert!(board.count_live_neighbors(3, 0).unwrap_err().is_out_of_range());
    }

    #[test]
    fn test_out_of_range_leaves_grid_untouched() {
        let mut board = board_with(3, 3, &[(1, 1)]);
        assert!(board.set_alive(-1, 0).is_err());
        assert!(board.set_dead(1, 3).is_err());
        assert!(board.is_alive(3, 3).is_err());
        assert_eq!(board.live_cells().collect::<Vec<_>>(), vec![(1, 1)]);
    }

    #[test]
    fn test_seed_cells_is_all_or_nothing() {
        let mut board = Board::new(3, 3);
        let err = board.seed_cells(&[(0, 0), (5, 5)]).unwrap_err();
        assert_eq!(err, BoardError::out_of_range(5, 5, 3, 3));
        assert_eq!(board.population(), 0);
    }

    #[test]
    fn test_isolated_cell_dies() {
        let mut board = board_with(3, 3, &[(1, 1)]);
        let stats = board.advance_generation();
        assert_eq!(stats.deaths, 1);
        assert_eq!(board.population(), 0);
        assert!(!board.is_stable());
    }

    #[test]
    fn test_block_is_stable_after_one_step() {
        let mut board = board_with(4, 4, &[(1, 1), (2, 1), (1, 2), (2, 2)]);
        let before: Vec<_> = board.live_cells().collect();
        let stats = board.advance_generation();
        assert!(stats.stable);
        assert!(board.is_stable());
        assert_eq!(board.live_cells().collect::<Vec<_>>(), before);
    }

    #[test]
    fn test_blinker_oscillates() {
        let mut board = board_with(3, 3, &[(1, 0), (1, 1), (1, 2)]);
        board.advance_generation();
        assert_eq!(
            board.live_cells().collect::<Vec<_>>(),
            vec![(0, 1), (1, 1), (2, 1)]
        );
        assert!(!board.is_stable());
        board.advance_generation();
        assert_eq!(
            board.live_cells().collect::<Vec<_>>(),
            vec![(1, 0), (1, 1), (1, 2)]
        );
        assert!(!board.is_stable());
    }

    #[test]
    fn test_step_reads_previous_generation_only() {
        // An in-place update would let (1,0)'s birth feed into later cells.
        let mut board = board_with(3, 2, &[(0, 0), (2, 0), (1, 1)]);
        board.advance_generation();
        assert_eq!(board.live_cells().collect::<Vec<_>>(), vec![(1, 0), (1, 1)]);
    }

    #[test]
    fn test_mutation_after_stable_keeps_flag_until_next_step() {
        let mut board = Board::new(3, 3);
        board.advance_generation();
        assert!(board.is_stable());
        board.set_alive(1, 1).unwrap();
        assert!(board.is_stable());
        board.advance_generation();
        assert!(!board.is_stable());
    }

    #[test]
    fn test_empty_board_steps() {
        let mut board = Board::new(0, 7);
        let stats = board.advance_generation();
        assert_eq!(stats.population, 0);
        assert!(board.is_stable());
        assert_eq!(board.to_string(), "");
    }

    #[test]
    fn test_randomize_on_empty_board_is_noop() {
        let mut board = Board::new(0, 0);
        assert_eq!(board.randomize_seed(10), 0);
    }

    #[test]
    fn test_randomize_with_seeded_rng_is_reproducible() {
        let mut a = Board::new(8, 8);
        let mut b = Board::new(8, 8);
        a.randomize_seed_with_rng(20, &mut ChaCha8Rng::seed_from_u64(7));
        b.randomize_seed_with_rng(20, &mut ChaCha8Rng::seed_from_u64(7));
        assert_eq!(a.live_cells().collect::<Vec<_>>(), b.live_cells().collect::<Vec<_>>());
        assert!(a.population() > 0 && a.population() <= 20);
    }

    #[test]
    fn test_randomize_does_not_clear() {
        let mut board = board_with(2, 2, &[(0, 0)]);
        board.randomize_seed(0);
        assert!(board.is_alive(0, 0).unwrap());
    }

    #[test]
    fn test_resize_reallocates_dead() {
        let mut board = board_with(3, 3, &[(1, 1)]);
        board.advance_generation();
        board.resize(5, 2);
        assert_eq!((board.width(), board.height()), (5, 2));
        assert_eq!(board.cells().len(), 10);
        assert_eq!(board.population(), 0);
        assert_eq!(board.generation(), 0);
        assert!(!board.is_stable());
        assert!(board.set_alive(4, 1).is_ok());
        assert!(board.set_alive(1, 2).is_err());
    }

    #[test]
    fn test_clear_resets() {
        let mut board = board_with(3, 3, &[(0, 0), (1, 1)]);
        board.advance_generation();
        board.clear();
        assert_eq!(board.population(), 0);
        assert_eq!(board.generation(), 0);
        assert!(!board.is_stable());
    }

    #[test]
    fn test_display_rows() {
        let board = board_with(3, 2, &[(0, 0), (2, 1)]);
        assert_eq!(board.to_string(), "*--\n--*\n");
    }

    #[test]
    fn test_large_board_matches_cell_by_cell_rule() {
        let mut board = Board::new(90, 80);
        board.randomize_seed_with_rng(2500, &mut ChaCha8Rng::seed_from_u64(7));
        assert!(board.cells().len() >= PARALLEL_MIN_CELLS);

        let expected: Vec<bool> = board
            .cells()
            .iter()
            .map(|c| {
                let n = board
                    .count_live_neighbors(i32::from(c.x()), i32::from(c.y()))
                    .unwrap();
                next_state(c.is_alive(), n)
            })
            .collect();
        let before = board.population();

        let stats = board.advance_generation();
        let actual: Vec<bool> = board.cells().iter().map(Cell::is_alive).collect();
        assert_eq!(actual, expected);
        assert_eq!(before + stats.births - stats.deaths, stats.population);
    }
}
