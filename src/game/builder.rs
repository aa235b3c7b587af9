//! Reference setup: build a ready-to-play [`Game`] from a [`GameConfig`].

use log::debug;

use super::game::Game;
use crate::cards::{build_deck, Card, Deck, DeckStructure};
use crate::core::{GameConfig, GameRng, Player, Result};

/// Pick a random name from `pool`.
pub fn random_name(pool: &[String], rng: &mut GameRng) -> Option<String> {
    rng.choose(pool).cloned()
}

/// Pick `count` distinct names from `pool`, falling back to `Player N` for
/// seats the pool cannot fill.
pub fn pick_names(pool: &[String], count: usize, rng: &mut GameRng) -> Vec<String> {
    let mut shuffled = pool.to_vec();
    rng.shuffle(&mut shuffled);
    shuffled.truncate(count);

    let pooled = shuffled.len();
    shuffled.extend((pooled..count).map(|seat| format!("Player {}", seat + 1)));
    shuffled
}

/// Builder for creating a [`Game`].
///
/// ```
/// use sleeping_coders::game::GameBuilder;
///
/// let game = GameBuilder::new().player_count(4).build(42).unwrap();
/// assert_eq!(game.players().player_count(), 4);
/// assert_eq!(game.draw_pile().size(), 36 - 4 * 5);
/// ```
#[derive(Clone, Debug, Default)]
pub struct GameBuilder {
    config: GameConfig,
    names: Option<Vec<String>>,
}

impl GameBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_config(config: GameConfig) -> Self {
        Self {
            config,
            names: None,
        }
    }

    pub fn player_count(mut self, count: usize) -> Self {
        self.config.player_count = count;
        self
    }

    pub fn hand_size(mut self, size: usize) -> Self {
        self.config.hand_size = size;
        self
    }

    pub fn coders_to_win(mut self, count: usize) -> Self {
        self.config.coders_to_win = count;
        self
    }

    pub fn deck(mut self, deck: DeckStructure) -> Self {
        self.config.deck = deck;
        self
    }

    pub fn tutors<S: Into<String>>(mut self, names: impl IntoIterator<Item = S>) -> Self {
        self.config.tutors = names.into_iter().map(Into::into).collect();
        self
    }

    /// Seat exactly these players, overriding `player_count` and the pool.
    pub fn player_names<S: Into<String>>(mut self, names: impl IntoIterator<Item = S>) -> Self {
        self.names = Some(names.into_iter().map(Into::into).collect());
        self
    }

    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Build the game: expand and shuffle the draw pile, put every coder to
    /// sleep in roster order, seat the players and deal their hands.
    pub fn build(self, seed: u64) -> Result<Game> {
        let rng = GameRng::new(seed);
        let config = self.config;

        let structure = config.deck_structure();
        let mut draw_pile = Deck::from(build_deck(&structure, &config.range_variants)?);
        draw_pile.shuffle(&mut rng.for_context("deck"));

        let names = match self.names {
            Some(names) => names,
            None => pick_names(
                &config.player_names,
                config.player_count,
                &mut rng.for_context("names"),
            ),
        };

        let mut players: Vec<Player> = names.into_iter().map(Player::new).collect();
        if config.hand_size > 0 {
            for player in &mut players {
                player.hand_mut().add_many(draw_pile.draw(config.hand_size)?);
            }
        }

        let coders = config.coders.iter().map(Card::coder).collect();

        debug!(
            "dealt {} hands of {}, {} cards left: {:?}",
            players.len(),
            config.hand_size,
            draw_pile.size(),
            draw_pile.composition()
        );

        Ok(Game::new(draw_pile, coders, players)?.with_coders_to_win(config.coders_to_win))
    }
}
