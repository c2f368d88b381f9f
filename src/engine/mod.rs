mod grid;
mod neighbors;
mod rules;
mod window;

pub use self::grid::{CellState, Grid};
pub use self::neighbors::{MOORE_OFFSETS, live_neighbors};
pub use self::rules::{Transition, next_state};
pub use self::window::GridWindow;
use crate::render::Frame;
use rayon::prelude::*;
use tracing::{debug, trace};

impl Grid {
    #[inline]
    fn next_cell(&self, row: usize, col: usize) -> CellState {
        next_state(self.get(row, col), live_neighbors(self, row, col))
    }

    /// Computes the next generation into a new grid
    ///
    /// Every neighbor count is taken against `self`, which is left untouched.
    pub fn step(&self) -> Grid {
        let cells = self
            .iter()
            .map(|(coord, _)| self.next_cell(coord.row, coord.col))
            .collect();
        self.with_cells(cells)
    }

    /// Same as [`Grid::step`], with rows computed on the rayon pool
    ///
    /// Each worker only reads `self` and writes its own row of the new buffer.
    pub fn step_parallel(&self) -> Grid {
        let (height, width) = self.dimensions();
        let mut cells = vec![CellState::Dead; height * width];
        cells
            .par_chunks_mut(width)
            .enumerate()
            .for_each(|(row, out)| {
                for (col, slot) in out.iter_mut().enumerate() {
                    *slot = self.next_cell(row, col);
                }
            });
        self.with_cells(cells)
    }
}

/// The simulation engine: the current grid plus its generation number
#[derive(Debug, Clone)]
pub struct Simulation {
    grid: Grid,
    generation: u64,
}

impl Simulation {
    /// Starts a run at generation 0 from an already seeded grid
    pub fn new(grid: Grid) -> Self {
        debug!(
            height = grid.height(),
            width = grid.width(),
            alive = grid.alive_count(),
            "simulation created"
        );
        Self {
            grid,
            generation: 0,
        }
    }

    pub fn step(&mut self) {
        let next = self.grid.step();
        self.commit(next);
    }

    pub fn step_parallel(&mut self) {
        let next = self.grid.step_parallel();
        self.commit(next);
    }

    fn commit(&mut self, next: Grid) {
        debug_assert_eq!(
            next.dimensions(),
            self.grid.dimensions(),
            "next generation changed dimensions"
        );
        self.grid = next;
        self.generation += 1;
        trace!(generation = self.generation, "generation committed");
    }

    #[inline]
    pub fn is_alive(&self) -> bool {
        self.grid.is_alive()
    }

    #[inline]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    #[inline]
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    #[inline]
    pub fn dimensions(&self) -> (usize, usize) {
        self.grid.dimensions()
    }

    /// Read-only snapshot of the current generation for renderers
    #[inline]
    pub fn frame(&self) -> Frame<'_> {
        Frame::new(&self.grid, self.generation)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Coord;

    fn grid_with(height: usize, width: usize, alive: &[(usize, usize)]) -> Grid {
        let mut grid = Grid::new(height, width).expect("valid grid");
        for &(row, col) in alive {
            grid.set(row, col, CellState::Alive).expect("in range");
        }
        grid
    }

    fn alive_of(grid: &Grid) -> Vec<Coord> {
        grid.alive().collect()
    }

    #[test]
    fn step_keeps_dimensions_and_input() {
        let grid = grid_with(4, 7, &[(0, 0), (1, 1), (2, 2), (3, 6)]);
        let before = grid.clone();
        let next = grid.step();

        assert_eq!(next.dimensions(), (4, 7));
        assert_eq!(grid, before);
    }

    #[test]
    fn dead_grid_stays_dead() {
        let mut sim = Simulation::new(Grid::new(6, 6).expect("valid grid"));
        for _ in 0..5 {
            assert!(!sim.is_alive());
            sim.step();
        }
        assert!(!sim.is_alive());
        assert_eq!(sim.generation(), 5);
    }

    #[test]
    fn isolated_cell_dies() {
        let grid = grid_with(5, 5, &[(2, 2)]);

        assert!(!grid.step().is_alive());
    }

    #[test]
    fn block_is_still_life() {
        let block = grid_with(4, 4, &[(1, 1), (1, 2), (2, 1), (2, 2)]);
        let mut sim = Simulation::new(block.clone());
        for _ in 0..5 {
            sim.step();
            assert_eq!(sim.grid(), &block);
        }
    }

    #[test]
    fn blinker_has_period_two() {
        let horizontal = grid_with(5, 5, &[(2, 1), (2, 2), (2, 3)]);
        let vertical = grid_with(5, 5, &[(1, 2), (2, 2), (3, 2)]);

        let gen1 = horizontal.step();
        assert_eq!(alive_of(&gen1), alive_of(&vertical));
        let gen2 = gen1.step();
        assert_eq!(gen2, horizontal);
    }

    #[test]
    fn blinker_against_edge_is_clipped() {
        // a vertical blinker on row 0 would need row -1, which does not exist
        let horizontal = grid_with(3, 3, &[(0, 0), (0, 1), (0, 2)]);

        assert_eq!(
            alive_of(&horizontal.step()),
            vec![Coord::new(0, 1), Coord::new(1, 1)]
        );
    }

    #[test]
    fn reproduction_needs_exactly_three() {
        // L-shape: (0,0),(0,1),(1,0) -> (1,1) is born, block forms
        let grid = grid_with(3, 3, &[(0, 0), (0, 1), (1, 0)]);

        assert_eq!(
            alive_of(&grid.step()),
            vec![
                Coord::new(0, 0),
                Coord::new(0, 1),
                Coord::new(1, 0),
                Coord::new(1, 1)
            ]
        );
    }

    #[test]
    fn overpopulation_kills_center() {
        // plus sign: the center has 4 neighbors
        let grid = grid_with(3, 3, &[(0, 1), (1, 0), (1, 1), (1, 2), (2, 1)]);

        assert_eq!(grid.step().get(1, 1), CellState::Dead);
    }

    #[test]
    fn parallel_step_matches_serial() {
        let mut grid = Grid::new(23, 17).expect("valid grid");
        grid.seed(|c| CellState::from((c.row * 31 + c.col * 17 + c.row * c.col) % 5 < 2));

        let mut serial = grid.clone();
        let mut parallel = grid;
        for _ in 0..10 {
            serial = serial.step();
            parallel = parallel.step_parallel();
            assert_eq!(serial, parallel);
        }
    }

    #[test]
    fn generation_counts_every_step() {
        let mut sim = Simulation::new(grid_with(5, 5, &[(2, 1), (2, 2), (2, 3)]));
        assert_eq!(sim.generation(), 0);
        sim.step();
        sim.step_parallel();

        assert_eq!(sim.generation(), 2);
        assert_eq!(sim.frame().generation(), 2);
        assert!(sim.is_alive());
    }
}
