use super::{CellState, Grid};
use crate::Coord;

/// A rectangular view into a [`Grid`], clipped to the grid's edges
pub struct GridWindow<'a> {
    top_left: Coord,
    bottom_right: Coord,
    grid: &'a Grid,
}
impl<'a> GridWindow<'a> {
    /// A view of at most `rows` by `cols` cells starting at `top_left`
    pub fn new(grid: &'a Grid, top_left: Coord, rows: usize, cols: usize) -> Self {
        let bottom_right = Coord {
            row: top_left.row.saturating_add(rows).min(grid.height()),
            col: top_left.col.saturating_add(cols).min(grid.width()),
        };
        Self {
            top_left,
            bottom_right,
            grid,
        }
    }

    /// A view of the whole grid
    pub fn full(grid: &'a Grid) -> Self {
        Self::new(grid, Coord::default(), grid.height(), grid.width())
    }

    /// Visible `(rows, cols)`
    pub fn size(&self) -> (usize, usize) {
        (
            self.bottom_right.row.saturating_sub(self.top_left.row),
            self.bottom_right.col.saturating_sub(self.top_left.col),
        )
    }

    /// Rows of the window, each a slice of the grid's row
    pub fn rows(&self) -> impl Iterator<Item = &'a [CellState]> + '_ {
        let cols = self.top_left.col.min(self.bottom_right.col)..self.bottom_right.col;
        self.grid
            .rows()
            .skip(self.top_left.row)
            .take(self.size().0)
            .map(move |row| &row[cols.clone()])
    }

    /// Live cells in the window, relative to its top-left corner
    pub fn alive(&self) -> impl Iterator<Item = Coord> + '_ {
        self.rows().enumerate().flat_map(|(row, cells)| {
            cells
                .iter()
                .enumerate()
                .filter(|(_, state)| state.is_alive())
                .map(move |(col, _)| Coord::new(row, col))
        })
    }
}

impl std::fmt::Display for GridWindow<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, row) in self.rows().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            for cell in row {
                f.write_str(if cell.is_alive() { "█" } else { " " })?;
            }
        }
        Ok(())
    }
}
