//! Mutable board state.
//!
//! A square grid of `Option<Mark>` cells stored as a flat `Vec` indexed
//! `row * size + col`. The grid's dimensions never change during a game;
//! only cell contents mutate. Exactly one `Game` owns a board.

use serde::{Deserialize, Serialize};

use super::coord::Coord;
use super::player::Mark;
use crate::error::Error;

/// A square grid of cells, each empty or holding one mark.
///
/// A placed-cell count is kept alongside the grid so fullness checks
/// (the tie condition) are O(1). Snapshots serialize as size plus cells;
/// deserialization recomputes the count and rejects a cell list that is
/// not `size * size` long, so a decoded board is always consistent.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "BoardCells", into = "BoardCells")]
pub struct Board {
    size: usize,
    cells: Vec<Option<Mark>>,
    placed: usize,
}

/// Wire form of a board snapshot.
#[derive(Clone, Serialize, Deserialize)]
struct BoardCells {
    size: usize,
    cells: Vec<Option<Mark>>,
}

impl TryFrom<BoardCells> for Board {
    type Error = Error;

    fn try_from(raw: BoardCells) -> Result<Self, Error> {
        let expected = raw.size * raw.size;
        if raw.cells.len() != expected {
            return Err(Error::InvalidBoardLength {
                expected,
                got: raw.cells.len(),
            });
        }
        let placed = raw.cells.iter().filter(|cell| cell.is_some()).count();
        Ok(Self {
            size: raw.size,
            cells: raw.cells,
            placed,
        })
    }
}

impl From<Board> for BoardCells {
    fn from(board: Board) -> Self {
        Self {
            size: board.size,
            cells: board.cells,
        }
    }
}

impl Board {
    /// Create an empty board of the given size.
    #[must_use]
    pub fn new(size: usize) -> Self {
        Self {
            size,
            cells: vec![None; size * size],
            placed: 0,
        }
    }

    /// The board dimension N (the grid is N x N).
    #[must_use]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Get the mark at a coordinate, or `None` if the cell is unplayed.
    ///
    /// # Panics
    ///
    /// Panics if `at` is out of bounds. Callers validate bounds first;
    /// `Game::apply_move` rejects out-of-bounds coordinates before
    /// touching the board.
    #[must_use]
    pub fn get(&self, at: Coord) -> Option<Mark> {
        self.cells[at.index(self.size)]
    }

    /// Check if a cell is unplayed.
    ///
    /// # Panics
    ///
    /// Panics if `at` is out of bounds.
    #[must_use]
    pub fn is_empty(&self, at: Coord) -> bool {
        self.get(at).is_none()
    }

    /// Check if every cell holds a mark.
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.placed == self.cells.len()
    }

    /// Number of cells holding a mark.
    #[must_use]
    pub fn placed_count(&self) -> usize {
        self.placed
    }

    /// Place a mark into an empty cell.
    ///
    /// # Panics
    ///
    /// Panics if `at` is out of bounds. Debug-asserts the cell is empty;
    /// `Game::apply_move` is the validating entry point.
    pub(crate) fn place(&mut self, at: Coord, mark: Mark) {
        let idx = at.index(self.size);
        debug_assert!(self.cells[idx].is_none(), "cell {at} already occupied");
        self.cells[idx] = Some(mark);
        self.placed += 1;
    }

    /// Clear every cell back to unplayed.
    pub(crate) fn clear(&mut self) {
        self.cells.fill(None);
        self.placed = 0;
    }

    /// Iterate over rows, top to bottom; each row is a slice of cells
    /// left to right. Intended for renderers.
    pub fn rows(&self) -> impl Iterator<Item = &[Option<Mark>]> {
        self.cells.chunks(self.size)
    }

    /// Iterate over all coordinates in row-major order.
    pub fn coords(&self) -> impl Iterator<Item = Coord> + '_ {
        (0..self.size).flat_map(move |row| (0..self.size).map(move |col| Coord::new(row, col)))
    }
}

impl std::fmt::Display for Board {
    /// ASCII grid: one row per line, `.` for unplayed cells.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in self.rows() {
            for (i, cell) in row.iter().enumerate() {
                if i > 0 {
                    write!(f, " ")?;
                }
                match cell {
                    Some(mark) => write!(f, "{mark}")?,
                    None => write!(f, ".")?,
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_board_is_empty() {
        let board = Board::new(3);
        assert_eq!(board.size(), 3);
        assert_eq!(board.placed_count(), 0);
        assert!(!board.is_full());
        for at in board.coords() {
            assert!(board.is_empty(at));
        }
    }

    #[test]
    fn test_place_and_get() {
        let mut board = Board::new(3);
        board.place(Coord::new(1, 2), Mark::new('X'));

        assert_eq!(board.get(Coord::new(1, 2)), Some(Mark::new('X')));
        assert!(board.is_empty(Coord::new(2, 1)));
        assert_eq!(board.placed_count(), 1);
    }

    #[test]
    fn test_is_full() {
        let mut board = Board::new(2);
        let marks = ['X', 'O', 'O', 'X'];
        for (at, mark) in board.coords().collect::<Vec<_>>().into_iter().zip(marks) {
            board.place(at, Mark::new(mark));
        }
        assert!(board.is_full());
        assert_eq!(board.placed_count(), 4);
    }

    #[test]
    fn test_clear() {
        let mut board = Board::new(2);
        board.place(Coord::new(0, 0), Mark::new('X'));
        board.clear();

        assert_eq!(board.placed_count(), 0);
        assert!(board.is_empty(Coord::new(0, 0)));
    }

    #[test]
    fn test_rows_iteration() {
        let mut board = Board::new(2);
        board.place(Coord::new(0, 1), Mark::new('X'));

        let rows: Vec<&[Option<Mark>]> = board.rows().collect();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0], &[None, Some(Mark::new('X'))]);
        assert_eq!(rows[1], &[None, None]);
    }

    #[test]
    fn test_display_ascii_grid() {
        let mut board = Board::new(3);
        board.place(Coord::new(0, 0), Mark::new('X'));
        board.place(Coord::new(1, 1), Mark::new('O'));

        assert_eq!(format!("{}", board), "X . .\n. O .\n. . .\n");
    }

    #[test]
    fn test_serialization() {
        let mut board = Board::new(3);
        board.place(Coord::new(2, 0), Mark::new('O'));

        let json = serde_json::to_string(&board).unwrap();
        let deserialized: Board = serde_json::from_str(&json).unwrap();
        assert_eq!(board, deserialized);
    }

    #[test]
    fn test_deserialization_recomputes_placed_count() {
        let json = r#"{"size":2,"cells":["X",null,null,"O"]}"#;
        let board: Board = serde_json::from_str(json).unwrap();

        assert_eq!(board.placed_count(), 2);
        assert_eq!(board.get(Coord::new(0, 0)), Some(Mark::new('X')));
        assert_eq!(board.get(Coord::new(1, 1)), Some(Mark::new('O')));
    }

    #[test]
    fn test_deserialization_rejects_wrong_cell_count() {
        // Three cells on a 2x2 board: get() would index out of bounds.
        let json = r#"{"size":2,"cells":["X",null,null]}"#;
        assert!(serde_json::from_str::<Board>(json).is_err());
    }
}
