use super::Grid;
use crate::Coord;

/// Offsets of the Moore neighborhood, `(d_row, d_col)`
pub const MOORE_OFFSETS: [(isize, isize); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// Counts the live cells among the eight neighbors of `(row, col)`
///
/// Neighbors past any edge of the grid count as dead. The result is always
/// in `0..=8`.
pub fn live_neighbors(grid: &Grid, row: usize, col: usize) -> u8 {
    let center = Coord::new(row, col);
    let mut count = 0;
    for (d_row, d_col) in MOORE_OFFSETS {
        // `offset` rejects negative coordinates, `get` rejects the far edges
        let Some(neighbor) = center.offset(d_row, d_col) else {
            continue;
        };
        if grid.get(neighbor.row, neighbor.col).is_alive() {
            count += 1;
        }
    }
    count
}
