//! Players and per-player storage.
//!
//! ## PlayerId
//!
//! Type-safe player identifier, 0-based, supporting 1-255 players.
//!
//! ## PlayerMap
//!
//! Per-player storage backed by `Vec` for O(1) access by `PlayerId`.
//!
//! ## Player
//!
//! A named seat at the table holding a hand and the coders it has woken up.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

use crate::cards::Deck;

/// Number of coders a player must hold to win the reference game.
pub const CODERS_TO_WIN: usize = 4;

/// Player identifier supporting 1-255 players.
///
/// Player indices are 0-based: the first player is `PlayerId(0)`.
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

    /// Iterate over all player IDs for a game with `player_count` players.
    ///
    /// ```
    /// use sleeping_coders::core::PlayerId;
    ///
    /// let players: Vec<_> = PlayerId::all(4).collect();
    /// assert_eq!(players.len(), 4);
    /// assert_eq!(players[3], PlayerId::new(3));
    /// ```
    pub fn all(player_count: usize) -> impl Iterator<Item = PlayerId> {
        (0..player_count as u8).map(PlayerId)
    }
}

/// Renders the seat 1-based, matching the default seat names.
impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.index() + 1)
    }
}

/// Per-player data storage with O(1) access.
///
/// ```
/// use sleeping_coders::core::{PlayerId, PlayerMap};
///
/// let mut scores: PlayerMap<u32> = PlayerMap::new(3, |_| 0);
/// scores[PlayerId::new(1)] += 2;
/// assert_eq!(scores[PlayerId::new(1)], 2);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerMap<T> {
    data: Vec<T>,
}

impl<T> PlayerMap<T> {
    /// Create a new PlayerMap with values from a factory function.
    pub fn new(player_count: usize, factory: impl Fn(PlayerId) -> T) -> Self {
        assert!(player_count > 0, "Must have at least 1 player");
        assert!(player_count <= 255, "At most 255 players supported");

        let data = (0..player_count as u8).map(|i| factory(PlayerId(i))).collect();

        Self { data }
    }

    /// Take ownership of one value per player, in seating order.
    pub fn from_vec(data: Vec<T>) -> Self {
        assert!(!data.is_empty(), "Must have at least 1 player");
        assert!(data.len() <= 255, "At most 255 players supported");

        Self { data }
    }

    /// Get the number of players.
    #[must_use]
    pub fn player_count(&self) -> usize {
        self.data.len()
    }

    /// Check whether `player` has a seat in this map.
    #[must_use]
    pub fn contains(&self, player: PlayerId) -> bool {
        player.index() < self.data.len()
    }

    /// Get a reference to a player's data, if the player exists.
    #[must_use]
    pub fn get(&self, player: PlayerId) -> Option<&T> {
        self.data.get(player.index())
    }

    /// Get a mutable reference to a player's data, if the player exists.
    pub fn get_mut(&mut self, player: PlayerId) -> Option<&mut T> {
        self.data.get_mut(player.index())
    }

    /// Iterate over (PlayerId, &T) pairs in seating order.
    pub fn iter(&self) -> impl Iterator<Item = (PlayerId, &T)> {
        self.data
            .iter()
            .enumerate()
            .map(|(i, v)| (PlayerId(i as u8), v))
    }

    /// Iterate over all player IDs.
    pub fn player_ids(&self) -> impl Iterator<Item = PlayerId> {
        PlayerId::all(self.data.len())
    }
}

impl<T> Index<PlayerId> for PlayerMap<T> {
    type Output = T;

    fn index(&self, player: PlayerId) -> &Self::Output {
        &self.data[player.index()]
    }
}

impl<T> IndexMut<PlayerId> for PlayerMap<T> {
    fn index_mut(&mut self, player: PlayerId) -> &mut Self::Output {
        &mut self.data[player.index()]
    }
}

/// A participant in a game.
///
/// Created once at game start with an empty hand and no coders. The name
/// never changes; the hand and coder pile change throughout play.
#[derive(Clone, Debug, Default)]
pub struct Player {
    name: String,
    hand: Deck,
    coders: Deck,
}

impl Player {
    /// Create a player with an empty hand and coder pile.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            hand: Deck::new(),
            coders: Deck::new(),
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn hand(&self) -> &Deck {
        &self.hand
    }

    pub fn hand_mut(&mut self) -> &mut Deck {
        &mut self.hand
    }

    /// The coders this player has woken up.
    #[must_use]
    pub fn coders(&self) -> &Deck {
        &self.coders
    }

    pub fn coders_mut(&mut self) -> &mut Deck {
        &mut self.coders
    }

    /// True once the player holds at least `threshold` coders.
    #[must_use]
    pub fn has_collected(&self, threshold: usize) -> bool {
        self.coders.size() >= threshold
    }

    /// True once the player holds [`CODERS_TO_WIN`] coders.
    #[must_use]
    pub fn has_won(&self) -> bool {
        self.has_collected(CODERS_TO_WIN)
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player({}, {}, {})", self.name, self.hand, self.coders)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::Card;

    #[test]
    fn test_player_id_basics() {
        let p0 = PlayerId::new(0);
        let p1 = PlayerId::new(1);

        assert_eq!(p0.index(), 0);
        assert_eq!(p1.index(), 1);
        assert_eq!(format!("{}", p0), "Player 1");
        assert_eq!(format!("{}", p1), "Player 2");
    }

    #[test]
    fn test_player_map_new() {
        let map: PlayerMap<usize> = PlayerMap::new(4, |p| p.index() * 10);

        assert_eq!(map[PlayerId::new(0)], 0);
        assert_eq!(map[PlayerId::new(3)], 30);
        assert_eq!(map.player_count(), 4);
    }

    #[test]
    fn test_player_map_get_out_of_range() {
        let map = PlayerMap::from_vec(vec!['a', 'b']);

        assert!(map.contains(PlayerId::new(1)));
        assert!(!map.contains(PlayerId::new(2)));
        assert_eq!(map.get(PlayerId::new(1)), Some(&'b'));
        assert_eq!(map.get(PlayerId::new(2)), None);
    }

    #[test]
    fn test_player_map_iter() {
        let map = PlayerMap::from_vec(vec![5, 6, 7]);

        let pairs: Vec<_> = map.iter().collect();
        assert_eq!(pairs[0], (PlayerId::new(0), &5));
        assert_eq!(pairs[2], (PlayerId::new(2), &7));
        assert_eq!(map.player_ids().count(), 3);
    }

    #[test]
    #[should_panic(expected = "Must have at least 1 player")]
    fn test_player_map_zero_players() {
        let _: PlayerMap<i32> = PlayerMap::from_vec(vec![]);
    }

    #[test]
    fn test_player_name() {
        assert_eq!(Player::new("steven").name(), "steven");
        assert_eq!(Player::new("sTeVeN").name(), "sTeVeN");
    }

    #[test]
    fn test_has_won() {
        let mut player = Player::new("steven");
        assert!(!player.has_won());

        for _ in 0..CODERS_TO_WIN {
            player.coders_mut().add_one(Card::plain());
        }
        assert!(player.has_won());

        player.coders_mut().add_one(Card::plain());
        assert!(player.has_won());
    }

    #[test]
    fn test_display() {
        let mut player = Player::new("Steven");
        assert_eq!(player.to_string(), "Player(Steven, Deck(), Deck())");

        player.hand_mut().add_many([Card::plain(), Card::plain()]);
        assert_eq!(player.to_string(), "Player(Steven, Deck(Card(), Card()), Deck())");

        player.coders_mut().add_many([Card::plain(), Card::plain()]);
        assert_eq!(
            player.to_string(),
            "Player(Steven, Deck(Card(), Card()), Deck(Card(), Card()))"
        );
    }
}
