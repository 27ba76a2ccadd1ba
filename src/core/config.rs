//! Game configuration.
//!
//! A `GameConfig` bundles the roster with the two board scalars and
//! validates them once, at construction. A `Game` built from a validated
//! config never re-checks the invariants: 1 <= win_size <= board_size,
//! at least 2 players.
//!
//! "New parameters" means a new config and a new `Game`; `Game::reset`
//! keeps the configuration it was built with.

use serde::{Deserialize, Serialize};

use super::player::{Player, Roster};
use crate::error::Error;

/// Default board dimension offered to players.
pub const DEFAULT_BOARD_SIZE: usize = 2;

/// Default run length required to win.
pub const DEFAULT_WIN_SIZE: usize = 2;

/// Advisory upper bound for a settings-screen board-size slider.
///
/// Not enforced by the engine: any board with 1 <= win_size <= board_size
/// is accepted.
pub const MAX_BOARD_SIZE: usize = 15;

/// Advisory upper bound for a settings-screen win-size slider.
pub const MAX_WIN_SIZE: usize = 8;

/// Validated game configuration: roster, board size, win size.
///
/// Deserialization reruns the scalar validation, so a decoded config
/// honors the same invariants as one built with [`GameConfig::new`].
///
/// ```
/// use mnk_engine::GameConfig;
///
/// let config = GameConfig::new(GameConfig::default_players(), 5, 3).unwrap();
/// assert_eq!(config.board_size(), 5);
/// assert_eq!(config.win_size(), 3);
///
/// // win_size must not exceed board_size
/// assert!(GameConfig::new(GameConfig::default_players(), 3, 5).is_err());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "ConfigParams", into = "ConfigParams")]
pub struct GameConfig {
    roster: Roster,
    board_size: usize,
    win_size: usize,
}

/// Wire form of a configuration. The roster validates itself on decode.
#[derive(Clone, Serialize, Deserialize)]
struct ConfigParams {
    roster: Roster,
    board_size: usize,
    win_size: usize,
}

impl TryFrom<ConfigParams> for GameConfig {
    type Error = Error;

    fn try_from(raw: ConfigParams) -> Result<Self, Error> {
        if raw.board_size < 1 {
            return Err(Error::BoardTooSmall {
                board_size: raw.board_size,
            });
        }
        if raw.win_size < 1 || raw.win_size > raw.board_size {
            return Err(Error::WinSizeOutOfRange {
                win_size: raw.win_size,
                board_size: raw.board_size,
            });
        }

        Ok(Self {
            roster: raw.roster,
            board_size: raw.board_size,
            win_size: raw.win_size,
        })
    }
}

impl From<GameConfig> for ConfigParams {
    fn from(config: GameConfig) -> Self {
        Self {
            roster: config.roster,
            board_size: config.board_size,
            win_size: config.win_size,
        }
    }
}

impl GameConfig {
    /// Create a validated configuration.
    ///
    /// # Errors
    ///
    /// - [`Error::BoardTooSmall`] if `board_size` is 0.
    /// - [`Error::WinSizeOutOfRange`] unless `1 <= win_size <= board_size`.
    /// - Roster errors per [`Roster::new`].
    pub fn new(players: Vec<Player>, board_size: usize, win_size: usize) -> Result<Self, Error> {
        Self::try_from(ConfigParams {
            roster: Roster::new(players)?,
            board_size,
            win_size,
        })
    }

    /// The classic two-player roster: X in blue, O in green.
    #[must_use]
    pub fn default_players() -> Vec<Player> {
        vec![Player::new('X', "blue"), Player::new('O', "green")]
    }

    /// The player roster.
    #[must_use]
    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    /// Board dimension N.
    #[must_use]
    pub fn board_size(&self) -> usize {
        self.board_size
    }

    /// Run length K required to win.
    #[must_use]
    pub fn win_size(&self) -> usize {
        self.win_size
    }
}

impl Default for GameConfig {
    /// The source defaults: 2x2 board, 2 in a row, X and O.
    fn default() -> Self {
        Self::new(
            Self::default_players(),
            DEFAULT_BOARD_SIZE,
            DEFAULT_WIN_SIZE,
        )
        .expect("default configuration is valid")
    }
}
