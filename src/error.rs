//! Error types for the mnk-engine crate.
//!
//! Two groups, matching the engine's failure surface:
//! - Configuration errors: rejected by `GameConfig::new` before a game exists.
//! - Invalid-move errors: rejected by `Game::apply_move` with no state change.
//!
//! Every error is local and recoverable. The UI collaborator re-prompts;
//! nothing here is fatal.

use thiserror::Error;

use crate::core::{Coord, Mark};

/// Main error type for the mnk-engine crate.
#[derive(Error, Clone, Debug, PartialEq, Eq)]
#[non_exhaustive]
pub enum Error {
    #[error("board size {board_size} is too small (must be at least 1)")]
    BoardTooSmall { board_size: usize },

    #[error("win size {win_size} is out of range for board size {board_size} (must be 1..={board_size})")]
    WinSizeOutOfRange { win_size: usize, board_size: usize },

    #[error("roster has {count} players (must have at least 2)")]
    TooFewPlayers { count: usize },

    #[error("roster has {count} players (at most 255 supported)")]
    TooManyPlayers { count: usize },

    #[error("duplicate mark '{mark}' in roster")]
    DuplicateMark { mark: Mark },

    #[error("board snapshot has {got} cells (expected {expected})")]
    InvalidBoardLength { expected: usize, got: usize },

    #[error("coordinate {at} is out of bounds for board size {board_size}")]
    OutOfBounds { at: Coord, board_size: usize },

    #[error("cell {at} is already occupied by '{mark}'")]
    CellOccupied { at: Coord, mark: Mark },

    #[error("game already over")]
    GameOver,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = Error::WinSizeOutOfRange {
            win_size: 5,
            board_size: 3,
        };
        assert_eq!(
            format!("{}", err),
            "win size 5 is out of range for board size 3 (must be 1..=3)"
        );

        let err = Error::CellOccupied {
            at: Coord::new(1, 2),
            mark: Mark::new('X'),
        };
        assert_eq!(format!("{}", err), "cell (1, 2) is already occupied by 'X'");

        assert_eq!(format!("{}", Error::GameOver), "game already over");
    }
}
