use std::cmp::Ordering;

/// A `(row, col)` coordinate inside a grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Coord {
    pub row: usize,
    pub col: usize,
}
impl Coord {
    #[inline]
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Shifts this coordinate by a signed offset
    ///
    /// Returns [`None`] if either component would go below zero or overflow.
    /// Upper bounds are the grid's concern, not the coordinate's.
    #[inline]
    pub fn offset(self, d_row: isize, d_col: isize) -> Option<Self> {
        Some(Self {
            row: self.row.checked_add_signed(d_row)?,
            col: self.col.checked_add_signed(d_col)?,
        })
    }
}
impl PartialOrd for Coord {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
impl Ord for Coord {
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        // row-major: compare rows first, then columns
        Ord::cmp(&self.row, &other.row).then(Ord::cmp(&self.col, &other.col))
    }
}
impl From<(usize, usize)> for Coord {
    #[inline]
    fn from((row, col): (usize, usize)) -> Self {
        Self { row, col }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn offset_stops_at_zero() {
        let origin = Coord::new(0, 0);

        assert_eq!(origin.offset(-1, 0), None);
        assert_eq!(origin.offset(0, -1), None);
        assert_eq!(origin.offset(1, 1), Some(Coord::new(1, 1)));
    }

    #[test]
    fn ordering_is_row_major() {
        let mut coords = vec![Coord::new(1, 0), Coord::new(0, 2), Coord::new(0, 1)];
        coords.sort();

        assert_eq!(
            coords,
            vec![Coord::new(0, 1), Coord::new(0, 2), Coord::new(1, 0)]
        );
    }
}
