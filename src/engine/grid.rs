use crate::{Coord, GridError};
use tracing::trace;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CellState {
    Alive,
    #[default]
    Dead,
}
impl CellState {
    #[inline]
    pub fn is_alive(self) -> bool {
        self == Self::Alive
    }
}
impl From<bool> for CellState {
    #[inline]
    fn from(alive: bool) -> Self {
        if alive { Self::Alive } else { Self::Dead }
    }
}

/// A fixed-size rectangle of cells stored row-major in a flat buffer
///
/// Coordinates are implicit: the cell at `(row, col)` lives at
/// `row * width + col`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    height: usize,
    width: usize,
    cells: Vec<CellState>,
}

impl Grid {
    /// Creates a grid with every cell [`CellState::Dead`]
    pub fn new(height: usize, width: usize) -> Result<Self, GridError> {
        let len = Self::checked_len(height, width)?;
        Ok(Self {
            height,
            width,
            cells: vec![CellState::Dead; len],
        })
    }

    /// Creates a grid from an explicit row-major state array
    pub fn from_cells(
        height: usize,
        width: usize,
        cells: Vec<CellState>,
    ) -> Result<Self, GridError> {
        if Self::checked_len(height, width)? != cells.len() {
            return Err(GridError::InvalidDimensions { height, width });
        }
        Ok(Self {
            height,
            width,
            cells,
        })
    }

    fn checked_len(height: usize, width: usize) -> Result<usize, GridError> {
        match height.checked_mul(width) {
            Some(len) if len > 0 => Ok(len),
            _ => Err(GridError::InvalidDimensions { height, width }),
        }
    }

    #[inline]
    pub fn dimensions(&self) -> (usize, usize) {
        (self.height, self.width)
    }
    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }
    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn contains(&self, row: usize, col: usize) -> bool {
        row < self.height && col < self.width
    }

    #[inline]
    fn index(&self, row: usize, col: usize) -> Option<usize> {
        self.contains(row, col).then(|| row * self.width + col)
    }

    fn out_of_range(&self, row: usize, col: usize) -> GridError {
        GridError::OutOfRange {
            row,
            col,
            height: self.height,
            width: self.width,
        }
    }

    /// State of a cell, treating everything past the edges as dead
    ///
    /// This is the lookup neighbor counting relies on: the grid has hard
    /// edges, it does not wrap around.
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> CellState {
        self.index(row, col)
            .map_or(CellState::Dead, |idx| self.cells[idx])
    }

    /// Checked state lookup for seeding and rendering callers
    pub fn cell(&self, row: usize, col: usize) -> Result<CellState, GridError> {
        self.index(row, col)
            .map(|idx| self.cells[idx])
            .ok_or_else(|| self.out_of_range(row, col))
    }

    pub fn set(&mut self, row: usize, col: usize, state: CellState) -> Result<(), GridError> {
        let idx = self
            .index(row, col)
            .ok_or_else(|| self.out_of_range(row, col))?;
        self.cells[idx] = state;
        Ok(())
    }

    /// Assigns every cell from `fill`, visiting coordinates in row-major order
    pub fn seed<F>(&mut self, mut fill: F)
    where
        F: FnMut(Coord) -> CellState,
    {
        let width = self.width;
        for (idx, cell) in self.cells.iter_mut().enumerate() {
            *cell = fill(Coord::new(idx / width, idx % width));
        }
        trace!(alive = self.alive_count(), "seeded grid");
    }

    /// Whether any cell is alive
    #[inline]
    pub fn is_alive(&self) -> bool {
        self.cells.iter().any(|cell| cell.is_alive())
    }

    pub fn alive_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_alive()).count()
    }

    /// Every cell in row-major order
    pub fn iter(&self) -> impl Iterator<Item = (Coord, CellState)> + '_ {
        let width = self.width;
        self.cells
            .iter()
            .enumerate()
            .map(move |(idx, &state)| (Coord::new(idx / width, idx % width), state))
    }

    /// Coordinates of the live cells in row-major order
    pub fn alive(&self) -> impl Iterator<Item = Coord> + '_ {
        self.iter()
            .filter(|(_, state)| state.is_alive())
            .map(|(coord, _)| coord)
    }

    #[inline]
    pub fn rows(&self) -> std::slice::ChunksExact<'_, CellState> {
        self.cells.chunks_exact(self.width)
    }

    pub(super) fn with_cells(&self, cells: Vec<CellState>) -> Self {
        debug_assert_eq!(cells.len(), self.cells.len(), "cell buffer size changed");
        Self {
            height: self.height,
            width: self.width,
            cells,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_grid_is_dead() {
        let grid = Grid::new(3, 4).expect("valid grid");

        assert_eq!(grid.dimensions(), (3, 4));
        assert!(!grid.is_alive());
        assert_eq!(grid.iter().count(), 12);
    }

    #[test]
    fn zero_dimensions_are_rejected() {
        assert_eq!(
            Grid::new(0, 5),
            Err(GridError::InvalidDimensions {
                height: 0,
                width: 5
            })
        );
        assert_eq!(
            Grid::new(5, 0),
            Err(GridError::InvalidDimensions {
                height: 5,
                width: 0
            })
        );
    }

    #[test]
    fn from_cells_checks_length() {
        let cells = vec![CellState::Alive; 5];

        assert!(matches!(
            Grid::from_cells(2, 3, cells),
            Err(GridError::InvalidDimensions { .. })
        ));
    }

    #[test]
    fn get_outside_is_dead() {
        let mut grid = Grid::new(2, 2).expect("valid grid");
        grid.seed(|_| CellState::Alive);

        assert_eq!(grid.get(1, 1), CellState::Alive);
        assert_eq!(grid.get(2, 0), CellState::Dead);
        assert_eq!(grid.get(0, 2), CellState::Dead);
        assert_eq!(grid.get(usize::MAX, usize::MAX), CellState::Dead);
    }

    #[test]
    fn checked_access_reports_out_of_range() {
        let mut grid = Grid::new(2, 3).expect("valid grid");

        assert_eq!(
            grid.set(2, 0, CellState::Alive),
            Err(GridError::OutOfRange {
                row: 2,
                col: 0,
                height: 2,
                width: 3
            })
        );
        assert!(grid.cell(0, 3).is_err());
        assert_eq!(grid.cell(1, 2), Ok(CellState::Dead));
    }

    #[test]
    fn set_then_read_back() {
        let mut grid = Grid::new(3, 3).expect("valid grid");
        grid.set(1, 2, CellState::Alive).expect("in range");

        assert_eq!(grid.cell(1, 2), Ok(CellState::Alive));
        assert_eq!(grid.alive().collect::<Vec<_>>(), vec![Coord::new(1, 2)]);
        assert!(grid.is_alive());
    }

    #[test]
    fn seed_visits_row_major() {
        let mut grid = Grid::new(2, 3).expect("valid grid");
        let mut visited = Vec::new();
        grid.seed(|coord| {
            visited.push(coord);
            CellState::from(coord.col == 0)
        });

        assert_eq!(visited.len(), 6);
        assert!(visited.windows(2).all(|w| w[0] < w[1]));
        assert_eq!(grid.alive_count(), 2);
    }
}
