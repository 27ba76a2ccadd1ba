//! Winning-line generation.
//!
//! A winning line is a window of `win_size` consecutive cells along one of
//! four axis families: horizontal, vertical, diagonal toward bottom-right,
//! diagonal toward top-right. `winning_lines` enumerates every such window
//! on an N x N board, exactly once per family, in a fixed order.
//!
//! The order matters: win detection scans the returned `Vec` linearly and
//! reports the first satisfied line, so the generation order is part of
//! the engine's observable behavior. Lines are never stored in a
//! hash-ordered container.
//!
//! When `win_size < board_size`, a full-length physical line decomposes
//! into several overlapping windows. That is intended; each window is
//! checked independently.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::Coord;

/// An ordered sequence of `win_size` distinct, collinear coordinates.
///
/// SmallVec keeps up to 8 cells inline - the advisory `MAX_WIN_SIZE` -
/// so line sets for every slider-reachable configuration are allocated
/// in one flat block.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WinningLine {
    cells: SmallVec<[Coord; 8]>,
}

impl WinningLine {
    fn from_iter(cells: impl Iterator<Item = Coord>) -> Self {
        Self {
            cells: cells.collect(),
        }
    }

    /// The line's cells in axis order.
    #[must_use]
    pub fn cells(&self) -> &[Coord] {
        &self.cells
    }

    /// Number of cells (always the generating `win_size`).
    #[must_use]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Check whether a coordinate lies on this line.
    ///
    /// Renderers use this to highlight the winning cells.
    #[must_use]
    pub fn contains(&self, at: Coord) -> bool {
        self.cells.contains(&at)
    }

    /// Iterate over the line's cells.
    pub fn iter(&self) -> impl Iterator<Item = Coord> + '_ {
        self.cells.iter().copied()
    }
}

impl std::fmt::Display for WinningLine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[")?;
        for (i, cell) in self.cells.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{cell}")?;
        }
        write!(f, "]")
    }
}

/// Generate every winning line for an N x N board with K in a row to win.
///
/// Families are emitted in a fixed order - horizontal, vertical, diagonal
/// toward bottom-right, diagonal toward top-right - and each family scans
/// its starting cells row-major. The result has exactly
/// `2*N*(N-K+1) + 2*(N-K+1)^2` lines.
///
/// Total over all inputs: invalid parameters (`N < 1`, `K < 1`, `K > N`)
/// yield an empty `Vec`. `GameConfig` rejects such parameters before an
/// engine is constructed, so the empty case is never reached in play.
///
/// Pure and deterministic; called once per game configuration, not per
/// move.
///
/// ```
/// use mnk_engine::winning_lines;
///
/// // Classic tic-tac-toe: 3 rows + 3 columns + 2 diagonals.
/// assert_eq!(winning_lines(3, 3).len(), 8);
///
/// // Invalid parameters are total, not a panic.
/// assert!(winning_lines(3, 5).is_empty());
/// ```
#[must_use]
pub fn winning_lines(board_size: usize, win_size: usize) -> Vec<WinningLine> {
    if board_size < 1 || win_size < 1 || win_size > board_size {
        return Vec::new();
    }

    let n = board_size;
    let k = win_size;
    let windows = n - k + 1;

    let mut lines = Vec::with_capacity(2 * n * windows + 2 * windows * windows);

    // Horizontal
    for r in 0..n {
        for c in 0..windows {
            lines.push(WinningLine::from_iter((0..k).map(|i| Coord::new(r, c + i))));
        }
    }

    // Vertical
    for c in 0..n {
        for r in 0..windows {
            lines.push(WinningLine::from_iter((0..k).map(|i| Coord::new(r + i, c))));
        }
    }

    // Diagonal toward bottom-right
    for r in 0..windows {
        for c in 0..windows {
            lines.push(WinningLine::from_iter(
                (0..k).map(|i| Coord::new(r + i, c + i)),
            ));
        }
    }

    // Diagonal toward top-right
    for r in (k - 1)..n {
        for c in 0..windows {
            lines.push(WinningLine::from_iter(
                (0..k).map(|i| Coord::new(r - i, c + i)),
            ));
        }
    }

    lines
}
