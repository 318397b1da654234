use serde::{Deserialize, Serialize};
use std::fmt;

/// A grid coordinate as `(x, y)`.
pub type Coord = (u16, u16);

/// A single automaton unit: an alive/dead flag plus the grid slot it occupies.
///
/// Cells never change state on their own. The owning board drives every
/// transition; the coordinate is kept for identification and debugging.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Cell {
    x: u16,
    y: u16,
    alive: bool,
}

impl Cell {
    /// Creates a dead cell at `(x, y)`.
    #[must_use]
    pub fn new(x: u16, y: u16) -> Self {
        Self { x, y, alive: false }
    }

    #[inline]
    #[must_use]
    pub fn is_alive(&self) -> bool {
        self.alive
    }

    #[inline]
    pub fn set_alive(&mut self) {
        self.alive = true;
    }

    #[inline]
    pub fn set_dead(&mut self) {
        self.alive = false;
    }

    /// Flips the state and returns the new one.
    pub fn toggle(&mut self) -> bool {
        self.alive = !self.alive;
        self.alive
    }

    #[must_use]
    pub fn x(&self) -> u16 {
        self.x
    }

    #[must_use]
    pub fn y(&self) -> u16 {
        self.y
    }

    pub fn set_x(&mut self, x: u16) {
        self.x = x;
    }

    pub fn set_y(&mut self, y: u16) {
        self.y = y;
    }

    #[must_use]
    pub fn coord(&self) -> Coord {
        (self.x, self.y)
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Cell[alive: {}, x: {}, y: {}]",
            self.alive, self.x, self.y
        )
    }
}
