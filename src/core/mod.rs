//! Core value types: coordinates, players, board, configuration.

pub mod board;
pub mod config;
pub mod coord;
pub mod player;

pub use board::Board;
pub use config::{
    GameConfig, DEFAULT_BOARD_SIZE, DEFAULT_WIN_SIZE, MAX_BOARD_SIZE, MAX_WIN_SIZE,
};
pub use coord::Coord;
pub use player::{Mark, Player, PlayerId, Roster};
