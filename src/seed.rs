//! Initial-state policies handed to [`Grid::seed`].

use crate::{CellState, Coord, Grid};
use rand::Rng;
use tracing::debug;

/// Chance of a cell starting alive under the default random fill
pub const DEFAULT_DENSITY: f64 = 0.25;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FillMode {
    /// Each cell alive independently with probability `density`
    Random { density: f64 },
    /// Checkerboard, alive where `row + col` is even
    Alternating,
    All,
    Empty,
}
impl Default for FillMode {
    fn default() -> Self {
        Self::Random {
            density: DEFAULT_DENSITY,
        }
    }
}
impl FillMode {
    /// Parses a fill mode name; `density` only applies to `random`
    ///
    /// Returns [`None`] for an unknown name or a density outside `0.0..=1.0`.
    pub fn new<S: AsRef<str>>(s: S, density: f64) -> Option<Self> {
        match s.as_ref() {
            "random" if (0.0..=1.0).contains(&density) => Some(Self::Random { density }),
            "alternating" => Some(Self::Alternating),
            "all" => Some(Self::All),
            "empty" => Some(Self::Empty),
            _ => None,
        }
    }

    pub fn fill_cell<R: Rng>(&self, cell: Coord, rng: &mut R) -> CellState {
        let alive = match *self {
            Self::Random { density } => rng.random_bool(density),
            Self::Alternating => (cell.row + cell.col) % 2 == 0,
            Self::All => true,
            Self::Empty => false,
        };
        CellState::from(alive)
    }

    /// Overwrites every cell of `grid` according to this mode
    pub fn seed<R: Rng>(&self, grid: &mut Grid, rng: &mut R) {
        grid.seed(|cell| self.fill_cell(cell, &mut *rng));
        debug!(mode = ?self, alive = grid.alive_count(), "grid seeded");
    }
}
