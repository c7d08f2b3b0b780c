//! Board coordinates.
//!
//! Cells are addressed by `(row, col)` with `0 <= row, col < board_size`.
//! Stepping off the board is expressed with `Option` rather than negative
//! indices, so a `Coord` that exists is never negative.

use serde::{Deserialize, Serialize};

/// A cell position on a square board.
///
/// ```
/// use grid_games::core::Coord;
///
/// let c = Coord::new(2, 1);
/// assert_eq!(c.offset(1, -1, 8), Some(Coord::new(3, 0)));
/// assert_eq!(c.offset(1, -2, 8), None);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Coord {
    pub row: usize,
    pub col: usize,
}

impl Coord {
    /// Create a coordinate.
    #[must_use]
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Step by `(d_row, d_col)`, staying inside a `size × size` board.
    ///
    /// Returns `None` if the result would leave the board.
    #[must_use]
    pub fn offset(self, d_row: isize, d_col: isize, size: usize) -> Option<Coord> {
        let row = self.row.checked_add_signed(d_row)?;
        let col = self.col.checked_add_signed(d_col)?;
        (row < size && col < size).then_some(Coord { row, col })
    }

    /// Signed row and column distance from `self` to `other`.
    #[must_use]
    pub fn delta(self, other: Coord) -> (isize, isize) {
        (
            other.row as isize - self.row as isize,
            other.col as isize - self.col as isize,
        )
    }

    /// Check whether the coordinate lies on a `size × size` board.
    #[must_use]
    pub const fn is_within(self, size: usize) -> bool {
        self.row < size && self.col < size
    }
}

impl From<(usize, usize)> for Coord {
    fn from((row, col): (usize, usize)) -> Self {
        Self { row, col }
    }
}

impl std::fmt::Display for Coord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_offset_within_bounds() {
        let c = Coord::new(3, 3);
        assert_eq!(c.offset(-1, -1, 8), Some(Coord::new(2, 2)));
        assert_eq!(c.offset(4, 4, 8), Some(Coord::new(7, 7)));
    }

    #[test]
    fn test_offset_off_board() {
        let corner = Coord::new(0, 7);
        assert_eq!(corner.offset(-1, 0, 8), None);
        assert_eq!(corner.offset(0, 1, 8), None);
        assert_eq!(Coord::new(7, 0).offset(1, 1, 8), None);
    }

    #[test]
    fn test_delta() {
        let from = Coord::new(5, 2);
        assert_eq!(from.delta(Coord::new(3, 4)), (-2, 2));
        assert_eq!(from.delta(from), (0, 0));
    }

    #[test]
    fn test_is_within_and_display() {
        assert!(Coord::new(7, 7).is_within(8));
        assert!(!Coord::new(8, 0).is_within(8));
        assert_eq!(format!("{}", Coord::from((2, 1))), "(2, 1)");
    }
}
