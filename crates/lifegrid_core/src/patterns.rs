//! Named seed patterns and their placement on a board.

use crate::board::Board;
use crate::error::Result;

/// A named set of live cells, given relative to the pattern's top-left corner.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pattern {
    pub name: &'static str,
    pub cells: &'static [(i32, i32)],
}

impl Pattern {
    /// Smallest `(width, height)` box containing every cell of the pattern.
    #[must_use]
    pub fn extent(&self) -> (i32, i32) {
        self.cells
            .iter()
            .fold((0, 0), |(w, h), &(x, y)| (w.max(x + 1), h.max(y + 1)))
    }
}

pub const BLOCK: Pattern = Pattern {
    name: "Block",
    cells: &[(0, 0), (1, 0), (0, 1), (1, 1)],
};

pub const BLINKER: Pattern = Pattern {
    name: "Blinker",
    cells: &[(1, 0), (1, 1), (1, 2)],
};

pub const TOAD: Pattern = Pattern {
    name: "Toad",
    cells: &[(1, 0), (2, 0), (3, 0), (0, 1), (1, 1), (2, 1)],
};

pub const BEACON: Pattern = Pattern {
    name: "Beacon",
    cells: &[(0, 0), (1, 0), (0, 1), (1, 1), (2, 2), (3, 2), (2, 3), (3, 3)],
};

pub const GLIDER: Pattern = Pattern {
    name: "Glider",
    cells: &[(1, 0), (2, 1), (0, 2), (1, 2), (2, 2)],
};

pub const PATTERNS: &[Pattern] = &[BLOCK, BLINKER, TOAD, BEACON, GLIDER];

/// Looks up a built-in pattern by name, ignoring case.
#[must_use]
pub fn find_pattern(name: &str) -> Option<&'static Pattern> {
    PATTERNS.iter().find(|p| p.name.eq_ignore_ascii_case(name))
}

impl Board {
    /// Sets the pattern's cells alive, offset by `(origin_x, origin_y)`.
    ///
    /// # Errors
    /// Returns [`BoardError::OutOfRange`](crate::error::BoardError::OutOfRange)
    /// without touching the grid if any translated cell falls off the board.
    pub fn apply_pattern(&mut self, pattern: &Pattern, origin_x: i32, origin_y: i32) -> Result<()> {
        let coords: Vec<(i32, i32)> = pattern
            .cells
            .iter()
            .map(|&(x, y)| (x + origin_x, y + origin_y))
            .collect();
        self.seed_cells(&coords)?;
        tracing::debug!(pattern = pattern.name, origin_x, origin_y, "Applied pattern");
        Ok(())
    }

    /// Places the pattern as close to the board's center as it fits.
    ///
    /// # Errors
    /// Returns `OutOfRange` if the pattern is larger than the board.
    pub fn apply_pattern_centered(&mut self, pattern: &Pattern) -> Result<()> {
        let (w, h) = pattern.extent();
        let origin_x = ((i32::from(self.width()) - w) / 2).max(0);
        let origin_y = ((i32::from(self.height()) - h) / 2).max(0);
        self.apply_pattern(pattern, origin_x, origin_y)
    }
}
