//! The game engine: board ownership, move validation, win/tie detection,
//! player rotation, reset.
//!
//! A `Game` is a small state machine: in progress until a move completes a
//! winning line (won) or fills the board with no winner (tied). Terminal
//! states accept no further moves.
//!
//! The winning-line set is computed once at construction and scanned
//! linearly on every move, in generation order. The first satisfied line
//! is the canonical one; a move completing several lines at once always
//! surfaces the line earliest in that order. Tests pin this tie-break.
//!
//! One `Game` belongs to one logical game session. It performs no internal
//! locking; callers sharing an instance across threads must confine it
//! behind their own synchronization.

use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use crate::core::{Board, Coord, GameConfig, Mark, Player, PlayerId};
use crate::error::Error;
use crate::lines::{winning_lines, WinningLine};

/// A placement that actually happened: which mark went where.
///
/// A value, not an identity; equality is by content. The engine hands the
/// most recent one back for rendering via [`Game::last_move`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// Where the mark was placed.
    pub at: Coord,
    /// The mark placed there.
    pub mark: Mark,
}

/// How a finished game ended.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    /// A player completed a winning line.
    Won {
        /// The winning player.
        player: PlayerId,
        /// The first satisfied line in generation order.
        line: WinningLine,
    },
    /// The board filled with no winner.
    Tied,
}

/// A single game in progress (or finished).
///
/// ```
/// use mnk_engine::{Coord, Game, GameConfig};
///
/// let config = GameConfig::new(GameConfig::default_players(), 3, 3).unwrap();
/// let mut game = Game::new(config);
///
/// game.apply_move(Coord::new(0, 0)).unwrap(); // X
/// game.advance_turn();
/// game.apply_move(Coord::new(1, 1)).unwrap(); // O
/// game.advance_turn();
///
/// assert!(!game.is_terminal());
/// assert_eq!(game.current_player().name(), "X");
/// ```
#[derive(Clone, Debug)]
pub struct Game {
    config: GameConfig,
    board: Board,
    lines: Vec<WinningLine>,
    current: PlayerId,
    outcome: Option<Outcome>,
    last_move: Option<Move>,
}

impl Game {
    /// Create a new game from a validated configuration.
    ///
    /// Generates the winning-line set once; every move replays it.
    #[must_use]
    pub fn new(config: GameConfig) -> Self {
        let board = Board::new(config.board_size());
        let lines = winning_lines(config.board_size(), config.win_size());
        Self {
            config,
            board,
            lines,
            current: PlayerId::new(0),
            outcome: None,
            last_move: None,
        }
    }

    /// True iff the game is in progress, `at` is in bounds, and the cell
    /// is unplayed. No side effects.
    #[must_use]
    pub fn is_valid_move(&self, at: Coord) -> bool {
        self.outcome.is_none()
            && at.in_bounds(self.config.board_size())
            && self.board.is_empty(at)
    }

    /// Place the current player's mark at `at`.
    ///
    /// Returns the outcome this move produced: `Ok(None)` means the game
    /// continues, `Ok(Some(_))` means it just ended. The current player is
    /// not rotated; call [`Game::advance_turn`] after an `Ok(None)`.
    ///
    /// # Errors
    ///
    /// - [`Error::GameOver`] if the game already reached a terminal state.
    /// - [`Error::OutOfBounds`] if `at` is off the board.
    /// - [`Error::CellOccupied`] if the cell already holds a mark.
    ///
    /// A rejected move mutates nothing.
    #[instrument(skip(self), fields(at = %at, player = %self.current))]
    pub fn apply_move(&mut self, at: Coord) -> Result<Option<Outcome>, Error> {
        if self.outcome.is_some() {
            return Err(Error::GameOver);
        }
        if !at.in_bounds(self.config.board_size()) {
            return Err(Error::OutOfBounds {
                at,
                board_size: self.config.board_size(),
            });
        }
        if let Some(mark) = self.board.get(at) {
            return Err(Error::CellOccupied { at, mark });
        }

        let mark = self.config.roster().get(self.current).mark();
        self.board.place(at, mark);
        self.last_move = Some(Move { at, mark });

        if let Some(line) = self.first_satisfied_line().cloned() {
            debug!(winner = %self.current, line = %line, "game won");
            self.outcome = Some(Outcome::Won {
                player: self.current,
                line,
            });
        } else if self.board.is_full() {
            debug!("game tied");
            self.outcome = Some(Outcome::Tied);
        }

        Ok(self.outcome.clone())
    }

    /// The first winning line whose cells all hold the same mark, in
    /// generation order.
    fn first_satisfied_line(&self) -> Option<&WinningLine> {
        self.lines.iter().find(|line| {
            let mut cells = line.iter();
            match cells.next().and_then(|at| self.board.get(at)) {
                Some(mark) => cells.all(|at| self.board.get(at) == Some(mark)),
                None => false,
            }
        })
    }

    /// Rotate the current player to the next in cyclic roster order.
    ///
    /// A no-op once the game is terminal.
    pub fn advance_turn(&mut self) {
        if self.outcome.is_none() {
            self.current = self.config.roster().next(self.current);
        }
    }

    /// Check if the game has ended.
    #[must_use]
    pub fn is_terminal(&self) -> bool {
        self.outcome.is_some()
    }

    /// How the game ended, or `None` while in progress.
    #[must_use]
    pub fn outcome(&self) -> Option<&Outcome> {
        self.outcome.as_ref()
    }

    /// The winning player, or `None` unless the game was won.
    #[must_use]
    pub fn winner(&self) -> Option<&Player> {
        match &self.outcome {
            Some(Outcome::Won { player, .. }) => Some(self.config.roster().get(*player)),
            _ => None,
        }
    }

    /// The canonical winning line, or `None` unless the game was won.
    #[must_use]
    pub fn winning_line(&self) -> Option<&WinningLine> {
        match &self.outcome {
            Some(Outcome::Won { line, .. }) => Some(line),
            _ => None,
        }
    }

    /// The player whose turn it is.
    #[must_use]
    pub fn current_player(&self) -> &Player {
        self.config.roster().get(self.current)
    }

    /// The current player's roster index.
    #[must_use]
    pub fn current_player_id(&self) -> PlayerId {
        self.current
    }

    /// The most recent accepted placement, for rendering.
    #[must_use]
    pub fn last_move(&self) -> Option<Move> {
        self.last_move
    }

    /// Coordinates where a move would currently be accepted.
    ///
    /// Empty in a terminal state.
    pub fn legal_moves(&self) -> impl Iterator<Item = Coord> + '_ {
        self.board
            .coords()
            .filter(move |&at| self.is_valid_move(at))
    }

    /// The board, for rendering.
    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The configuration this game was built from.
    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Start over with the same configuration: clear every cell, clear the
    /// outcome, return to in progress.
    ///
    /// The rotation cursor is preserved: whoever was current at reset
    /// moves first afterwards, not necessarily the original first player.
    /// This is deliberate product behavior, not an accident.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        self.board.clear();
        self.outcome = None;
        self.last_move = None;
        debug!(first = %self.current, "game reset");
    }
}
