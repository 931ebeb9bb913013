//! Player identification and per-player data storage.
//!
//! ## Player
//!
//! The two seats at the board. Player One owns `Vertical`, Player Two owns
//! `Horizontal`.
//!
//! ## PlayerMap
//!
//! Fixed two-slot storage indexed by `Player`, `Copy` whenever the payload
//! is, so it can live inside immutable game state values.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

use super::symbol::Symbol;

/// One of the two players.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Player {
    /// Moves first, places `Vertical`.
    #[default]
    One,
    /// Moves second, places `Horizontal`.
    Two,
}

impl Player {
    /// Both players in seat order.
    pub const ALL: [Player; 2] = [Player::One, Player::Two];

    /// The other player.
    #[must_use]
    pub const fn opponent(self) -> Self {
        match self {
            Player::One => Player::Two,
            Player::Two => Player::One,
        }
    }

    /// The raw symbol this player places on an empty cell.
    #[must_use]
    pub const fn raw_symbol(self) -> Symbol {
        match self {
            Player::One => Symbol::Vertical,
            Player::Two => Symbol::Horizontal,
        }
    }

    /// Get the 0-based seat index.
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Player::One => 0,
            Player::Two => 1,
        }
    }

    /// Iterate over both players in seat order.
    ///
    /// ```
    /// use plus_slash::core::Player;
    ///
    /// let players: Vec<_> = Player::all().collect();
    /// assert_eq!(players, vec![Player::One, Player::Two]);
    /// ```
    pub fn all() -> impl Iterator<Item = Player> {
        Self::ALL.into_iter()
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Player::One => write!(f, "Player 1"),
            Player::Two => write!(f, "Player 2"),
        }
    }
}

/// Per-player data storage with O(1) access.
///
/// ## Example
///
/// ```
/// use plus_slash::core::{Player, PlayerMap};
///
/// let mut score: PlayerMap<u32> = PlayerMap::with_value(0);
/// score[Player::Two] += 3;
///
/// assert_eq!(score[Player::One], 0);
/// assert_eq!(score[Player::Two], 3);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerMap<T> {
    data: [T; 2],
}

impl<T> PlayerMap<T> {
    /// Create a new PlayerMap with values from a factory function.
    pub fn new(factory: impl Fn(Player) -> T) -> Self {
        Self {
            data: [factory(Player::One), factory(Player::Two)],
        }
    }

    /// Create a new PlayerMap with both entries set to the same value.
    pub fn with_value(value: T) -> Self
    where
        T: Clone,
    {
        Self {
            data: [value.clone(), value],
        }
    }

    /// Get a reference to a player's data.
    #[must_use]
    pub fn get(&self, player: Player) -> &T {
        &self.data[player.index()]
    }

    /// Get a mutable reference to a player's data.
    pub fn get_mut(&mut self, player: Player) -> &mut T {
        &mut self.data[player.index()]
    }

    /// Iterate over (Player, &T) pairs.
    pub fn iter(&self) -> impl Iterator<Item = (Player, &T)> {
        Player::ALL.into_iter().zip(self.data.iter())
    }
}

impl<T> Index<Player> for PlayerMap<T> {
    type Output = T;

    fn index(&self, player: Player) -> &Self::Output {
        self.get(player)
    }
}

impl<T> IndexMut<Player> for PlayerMap<T> {
    fn index_mut(&mut self, player: Player) -> &mut Self::Output {
        self.get_mut(player)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_player_basics() {
        assert_eq!(Player::One.opponent(), Player::Two);
        assert_eq!(Player::Two.opponent(), Player::One);
        assert_eq!(Player::One.index(), 0);
        assert_eq!(Player::Two.index(), 1);
        assert_eq!(format!("{}", Player::Two), "Player 2");
    }

    #[test]
    fn test_raw_symbols() {
        assert_eq!(Player::One.raw_symbol(), Symbol::Vertical);
        assert_eq!(Player::Two.raw_symbol(), Symbol::Horizontal);
    }

    #[test]
    fn test_player_map_new() {
        let map: PlayerMap<usize> = PlayerMap::new(|p| p.index() * 10);

        assert_eq!(map[Player::One], 0);
        assert_eq!(map[Player::Two], 10);
    }

    #[test]
    fn test_player_map_mutation() {
        let mut map: PlayerMap<i32> = PlayerMap::with_value(0);

        map[Player::One] = 10;
        map[Player::Two] = 20;

        assert_eq!(map[Player::One], 10);
        assert_eq!(map[Player::Two], 20);
    }

    #[test]
    fn test_player_map_iter() {
        let map: PlayerMap<usize> = PlayerMap::new(|p| p.index());

        let pairs: Vec<_> = map.iter().collect();
        assert_eq!(pairs, vec![(Player::One, &0), (Player::Two, &1)]);
    }

    #[test]
    fn test_player_map_serialization() {
        let map: PlayerMap<i32> = PlayerMap::new(|p| p.index() as i32 + 1);
        let json = serde_json::to_string(&map).unwrap();
        let deserialized: PlayerMap<i32> = serde_json::from_str(&json).unwrap();
        assert_eq!(map, deserialized);
    }
}
