//! Player identity and turn rotation.
//!
//! ## Mark
//!
//! One-character label a player stamps into cells. An unplayed cell is
//! `Option<Mark>::None` on the board - there is no in-band empty sentinel.
//!
//! ## Player
//!
//! Immutable identity record: mark, display color, display name.
//!
//! ## Roster
//!
//! The fixed, ordered set of players cycling through turns. Validated at
//! construction (at least 2 players, at most 255, marks pairwise distinct)
//! and never mutated afterwards. Rotation is a `PlayerId` cursor advanced
//! modulo the roster length - no iterator state.

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use crate::error::Error;

/// A one-character player mark (e.g. `X` or `O`).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Mark(pub char);

impl Mark {
    /// Create a new mark.
    #[must_use]
    pub const fn new(label: char) -> Self {
        Self(label)
    }

    /// Get the raw character.
    #[must_use]
    pub const fn as_char(self) -> char {
        self.0
    }
}

impl std::fmt::Display for Mark {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Player identifier: a 0-based index into the roster.
///
/// Supports 2-255 players.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerId(pub u8);

impl PlayerId {
    /// Create a new player ID.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    /// Get the raw player index (0-based).
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.0)
    }
}

/// A player's identity: mark, display color, display name.
///
/// Immutable once constructed; equality is by content.
///
/// ```
/// use mnk_engine::Player;
///
/// let x = Player::new('X', "blue");
/// assert_eq!(x.name(), "X"); // name defaults to the mark
///
/// let named = Player::named('O', "green", "Avi");
/// assert_eq!(named.name(), "Avi");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Player {
    mark: Mark,
    color: String,
    name: String,
}

impl Player {
    /// Create a player whose display name is their mark.
    pub fn new(mark: char, color: impl Into<String>) -> Self {
        Self {
            mark: Mark::new(mark),
            color: color.into(),
            name: mark.to_string(),
        }
    }

    /// Create a player with an explicit display name.
    ///
    /// An empty name falls back to the mark, matching blank name entry
    /// in a settings screen.
    pub fn named(mark: char, color: impl Into<String>, name: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            mark: Mark::new(mark),
            color: color.into(),
            name: if name.is_empty() {
                mark.to_string()
            } else {
                name
            },
        }
    }

    /// The player's mark.
    #[must_use]
    pub const fn mark(&self) -> Mark {
        self.mark
    }

    /// The player's display color (opaque to the engine).
    #[must_use]
    pub fn color(&self) -> &str {
        &self.color
    }

    /// The player's display name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.name, self.mark)
    }
}

/// The fixed, ordered set of players cycling through turns.
///
/// Validated at construction; iteration and `next` follow roster order.
/// Serializes as a plain player list; deserialization runs the same
/// validation as [`Roster::new`], so a decoded roster can never hold
/// fewer than 2 players or duplicate marks.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Player>", into = "Vec<Player>")]
pub struct Roster {
    players: Vec<Player>,
}

impl Roster {
    /// Create a roster from an ordered list of players.
    ///
    /// # Errors
    ///
    /// - [`Error::TooFewPlayers`] for fewer than 2 players.
    /// - [`Error::TooManyPlayers`] for more than 255.
    /// - [`Error::DuplicateMark`] if two players share a mark. Win
    ///   attribution is mark-based, so shared marks would make the winner
    ///   ambiguous to observers.
    pub fn new(players: Vec<Player>) -> Result<Self, Error> {
        if players.len() < 2 {
            return Err(Error::TooFewPlayers {
                count: players.len(),
            });
        }
        if players.len() > 255 {
            return Err(Error::TooManyPlayers {
                count: players.len(),
            });
        }

        let mut seen = FxHashSet::default();
        for player in &players {
            if !seen.insert(player.mark()) {
                return Err(Error::DuplicateMark {
                    mark: player.mark(),
                });
            }
        }

        Ok(Self { players })
    }

    /// Get the number of players.
    #[must_use]
    pub fn player_count(&self) -> usize {
        self.players.len()
    }

    /// Get a player by ID.
    #[must_use]
    pub fn get(&self, id: PlayerId) -> &Player {
        &self.players[id.index()]
    }

    /// The ID after `id` in cyclic roster order.
    #[must_use]
    pub fn next(&self, id: PlayerId) -> PlayerId {
        PlayerId(((id.index() + 1) % self.players.len()) as u8)
    }

    /// Iterate over (PlayerId, &Player) pairs in roster order.
    pub fn iter(&self) -> impl Iterator<Item = (PlayerId, &Player)> {
        self.players
            .iter()
            .enumerate()
            .map(|(i, p)| (PlayerId(i as u8), p))
    }
}

impl TryFrom<Vec<Player>> for Roster {
    type Error = Error;

    fn try_from(players: Vec<Player>) -> Result<Self, Error> {
        Self::new(players)
    }
}

impl From<Roster> for Vec<Player> {
    fn from(roster: Roster) -> Self {
        roster.players
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn xo() -> Vec<Player> {
        vec![Player::new('X', "blue"), Player::new('O', "green")]
    }

    #[test]
    fn test_mark_display() {
        assert_eq!(format!("{}", Mark::new('X')), "X");
        assert_eq!(Mark::new('#').as_char(), '#');
    }

    #[test]
    fn test_player_name_defaults_to_mark() {
        let p = Player::new('O', "green");
        assert_eq!(p.mark(), Mark::new('O'));
        assert_eq!(p.color(), "green");
        assert_eq!(p.name(), "O");
    }

    #[test]
    fn test_player_named_empty_falls_back() {
        let p = Player::named('X', "blue", "");
        assert_eq!(p.name(), "X");

        let p = Player::named('X', "blue", "Avi");
        assert_eq!(p.name(), "Avi");
    }

    #[test]
    fn test_player_content_equality() {
        assert_eq!(Player::new('X', "blue"), Player::named('X', "blue", ""));
        assert_ne!(Player::new('X', "blue"), Player::new('X', "red"));
    }

    #[test]
    fn test_roster_cyclic_next() {
        let roster = Roster::new(xo()).unwrap();
        let p0 = PlayerId::new(0);
        let p1 = PlayerId::new(1);

        assert_eq!(roster.next(p0), p1);
        assert_eq!(roster.next(p1), p0);
    }

    #[test]
    fn test_roster_three_players() {
        let mut players = xo();
        players.push(Player::new('#', "red"));
        let roster = Roster::new(players).unwrap();

        assert_eq!(roster.player_count(), 3);
        assert_eq!(roster.next(PlayerId::new(2)), PlayerId::new(0));
    }

    #[test]
    fn test_roster_too_few_players() {
        let err = Roster::new(vec![Player::new('X', "blue")]).unwrap_err();
        assert_eq!(err, Error::TooFewPlayers { count: 1 });
    }

    /// 255 distinct players, each with a distinct mark.
    fn full_roster_players() -> Vec<Player> {
        ('\u{4E00}'..)
            .take(255)
            .map(|mark| Player::new(mark, "blue"))
            .collect()
    }

    #[test]
    fn test_roster_at_player_cap() {
        let roster = Roster::new(full_roster_players()).unwrap();
        assert_eq!(roster.player_count(), 255);
        assert_eq!(roster.next(PlayerId::new(254)), PlayerId::new(0));
    }

    #[test]
    fn test_roster_too_many_players() {
        let mut players = full_roster_players();
        players.push(Player::new('X', "blue"));

        let err = Roster::new(players).unwrap_err();
        assert_eq!(err, Error::TooManyPlayers { count: 256 });
    }

    #[test]
    fn test_roster_duplicate_mark() {
        let err = Roster::new(vec![
            Player::new('X', "blue"),
            Player::named('X', "green", "other"),
        ])
        .unwrap_err();
        assert_eq!(
            err,
            Error::DuplicateMark {
                mark: Mark::new('X')
            }
        );
    }

    #[test]
    fn test_roster_iter_order() {
        let roster = Roster::new(xo()).unwrap();
        let marks: Vec<char> = roster.iter().map(|(_, p)| p.mark().as_char()).collect();
        assert_eq!(marks, vec!['X', 'O']);
    }

    #[test]
    fn test_serialization() {
        let roster = Roster::new(xo()).unwrap();
        let json = serde_json::to_string(&roster).unwrap();
        let deserialized: Roster = serde_json::from_str(&json).unwrap();
        assert_eq!(roster, deserialized);
    }

    #[test]
    fn test_deserialization_validates() {
        // Decoding runs the constructor checks: one player is too few,
        // and shared marks are rejected.
        let one_player = r#"[{"mark":"X","color":"blue","name":"X"}]"#;
        assert!(serde_json::from_str::<Roster>(one_player).is_err());

        let shared_mark = r#"[
            {"mark":"X","color":"blue","name":"X"},
            {"mark":"X","color":"green","name":"other"}
        ]"#;
        assert!(serde_json::from_str::<Roster>(shared_mark).is_err());
    }
}
