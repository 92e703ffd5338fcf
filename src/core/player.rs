//! Player identification and per-player data storage.
//!
//! ## Player
//!
//! The game has exactly two sides, so identity is a two-variant enum
//! rather than a numeric index. Presentation details (label, colours) are
//! resolved through a fixed lookup table via [`Player::info`].
//!
//! ## PlayerMap
//!
//! Per-player data storage backed by a two-element array for O(1) access.
//! Supports iteration and indexing by `Player`.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

/// One of the two sides.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    Red,
    Blue,
}

impl Player {
    /// Both players, in index order.
    pub const ALL: [Player; 2] = [Player::Red, Player::Blue];

    /// Get the 0-based index of this player.
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Player::Red => 0,
            Player::Blue => 1,
        }
    }

    /// The other side.
    #[must_use]
    pub const fn opponent(self) -> Self {
        match self {
            Player::Red => Player::Blue,
            Player::Blue => Player::Red,
        }
    }

    /// Presentation record for this player.
    ///
    /// ```
    /// use chain_reaction::core::Player;
    ///
    /// assert_eq!(Player::Red.info().label, "RED");
    /// assert_eq!(Player::Blue.info().color, "#08C3F0");
    /// ```
    #[must_use]
    pub fn info(self) -> &'static PlayerInfo {
        &PLAYER_INFO[self.index()]
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.info().label)
    }
}

/// Display data attached to a player. Not used by game logic.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct PlayerInfo {
    /// Short display label.
    pub label: &'static str,
    /// Colour of the player's orbs.
    pub color: &'static str,
    /// Background tint of cells the player owns.
    pub cell_color: &'static str,
}

static PLAYER_INFO: [PlayerInfo; 2] = [
    PlayerInfo {
        label: "RED",
        color: "#FD5F5B",
        cell_color: "#FFCBC7",
    },
    PlayerInfo {
        label: "BLUE",
        color: "#08C3F0",
        cell_color: "#A9E3EF",
    },
];

/// Per-player data storage with O(1) access.
///
/// ## Example
///
/// ```
/// use chain_reaction::core::{Player, PlayerMap};
///
/// let mut owned: PlayerMap<u32> = PlayerMap::default();
/// owned[Player::Blue] += 3;
///
/// assert_eq!(owned[Player::Red], 0);
/// assert_eq!(owned[Player::Blue], 3);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerMap<T> {
    data: [T; 2],
}

impl<T> PlayerMap<T> {
    /// Create a new PlayerMap with values from a factory function.
    pub fn new(factory: impl Fn(Player) -> T) -> Self {
        Self {
            data: [factory(Player::Red), factory(Player::Blue)],
        }
    }

    /// Create a new PlayerMap with both entries set to the same value.
    pub fn with_value(value: T) -> Self
    where
        T: Clone,
    {
        Self::new(|_| value.clone())
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
