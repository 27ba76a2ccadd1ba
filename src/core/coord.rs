//! Board coordinates.
//!
//! A `Coord` is a (row, column) pair, each in `[0, board_size)`. It is both
//! the index into the board grid and the vocabulary winning lines are
//! written in.

use serde::{Deserialize, Serialize};

/// A (row, column) pair on a square board.
///
/// Ordering is row-major: all of row 0 before all of row 1.
///
/// ```
/// use mnk_engine::Coord;
///
/// let a = Coord::new(0, 2);
/// let b = Coord::new(1, 0);
/// assert!(a < b);
/// assert_eq!(a.index(3), 2);
/// assert_eq!(b.index(3), 3);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Coord {
    /// Row index (0-based, top row first).
    pub row: usize,
    /// Column index (0-based, leftmost column first).
    pub col: usize,
}

impl Coord {
    /// Create a new coordinate.
    #[must_use]
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Check whether this coordinate lies on a board of the given size.
    #[must_use]
    pub const fn in_bounds(self, board_size: usize) -> bool {
        self.row < board_size && self.col < board_size
    }

    /// Flat row-major index into a board of the given size.
    ///
    /// Only meaningful when `in_bounds(board_size)` holds.
    #[must_use]
    pub const fn index(self, board_size: usize) -> usize {
        self.row * board_size + self.col
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
    fn test_in_bounds() {
        assert!(Coord::new(0, 0).in_bounds(1));
        assert!(Coord::new(2, 2).in_bounds(3));
        assert!(!Coord::new(3, 0).in_bounds(3));
        assert!(!Coord::new(0, 3).in_bounds(3));
    }

    #[test]
    fn test_index_row_major() {
        assert_eq!(Coord::new(0, 0).index(3), 0);
        assert_eq!(Coord::new(0, 2).index(3), 2);
        assert_eq!(Coord::new(1, 0).index(3), 3);
        assert_eq!(Coord::new(2, 2).index(3), 8);
    }

    #[test]
    fn test_ordering_row_major() {
        let mut coords = vec![Coord::new(1, 0), Coord::new(0, 2), Coord::new(0, 0)];
        coords.sort();
        assert_eq!(
            coords,
            vec![Coord::new(0, 0), Coord::new(0, 2), Coord::new(1, 0)]
        );
    }

    #[test]
    fn test_from_tuple() {
        let c: Coord = (2, 1).into();
        assert_eq!(c, Coord::new(2, 1));
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Coord::new(4, 7)), "(4, 7)");
    }

    #[test]
    fn test_serialization() {
        let c = Coord::new(3, 5);
        let json = serde_json::to_string(&c).unwrap();
        let deserialized: Coord = serde_json::from_str(&json).unwrap();
        assert_eq!(c, deserialized);
    }
}
