//! # mnk-engine
//!
//! A rules engine for generalized tic-tac-toe: an N x N board where a win
//! requires K consecutive marks along a row, column, or diagonal in either
//! slope direction. K is configurable independently of the board size.
//!
//! ## Design Principles
//!
//! 1. **Strictly Layered**: the line generator is a pure function with no
//!    knowledge of the engine; the engine consumes its output once per
//!    configuration and replays it on every move.
//!
//! 2. **Validate Once**: `GameConfig` rejects bad parameters at
//!    construction. A `Game` built from a valid config never re-checks
//!    them.
//!
//! 3. **Deterministic Win Reporting**: win detection scans the winning
//!    lines in generation order and surfaces the first satisfied line.
//!    This tie-break is a behavior contract, not an implementation detail.
//!
//! The engine is an in-process library. A UI collaborator translates input
//! events into coordinates, renders the board, and collects configuration;
//! the engine owns every game-rules decision. No AI, persistence,
//! networking, or move history lives at this layer.
//!
//! ## Modules
//!
//! - `core`: Coordinates, players, board, configuration
//! - `lines`: Winning-line generation
//! - `engine`: Game state machine (moves, win/tie detection, rotation, reset)
//! - `error`: Crate-level error type
//!
//! ## Example
//!
//! ```
//! use mnk_engine::{Coord, Game, GameConfig, Outcome};
//!
//! let config = GameConfig::new(GameConfig::default_players(), 3, 3).unwrap();
//! let mut game = Game::new(config);
//!
//! for (row, col) in [(0, 0), (1, 1), (0, 1), (1, 0), (0, 2)] {
//!     if game.apply_move(Coord::new(row, col)).unwrap().is_none() {
//!         game.advance_turn();
//!     }
//! }
//!
//! assert!(matches!(game.outcome(), Some(Outcome::Won { .. })));
//! assert_eq!(game.winner().unwrap().name(), "X");
//! ```

pub mod core;
pub mod engine;
pub mod error;
pub mod lines;

// Re-export commonly used types
pub use crate::core::{
    Board, Coord, GameConfig, Mark, Player, PlayerId, Roster, DEFAULT_BOARD_SIZE,
    DEFAULT_WIN_SIZE, MAX_BOARD_SIZE, MAX_WIN_SIZE,
};

pub use crate::engine::{Game, Move, Outcome};

pub use crate::error::Error;

pub use crate::lines::{winning_lines, WinningLine};
