//! # sleeping-coders
//!
//! Game-state engine for Sleeping Coders, a turn-based card game.
//!
//! Players draw and play cards from a shared draw pile. Some cards request a
//! deferred action (wake a sleeping coder, steal one, put one back to sleep)
//! that is resolved once a target slot is chosen. Turn order can reverse or
//! skip. The game ends when the draw pile runs out or a player holds enough
//! coders.
//!
//! ## Design Principles
//!
//! 1. **Closed card set**: every card is one `CardKind`, matched
//!    exhaustively. `play` resolves the immediate effect, `action` the
//!    targeted one.
//!
//! 2. **All or nothing**: operations validate before mutating. An `Err`
//!    leaves the game untouched.
//!
//! 3. **Deterministic**: all randomness flows through a seeded `GameRng`.
//!
//! ## Modules
//!
//! - `core`: Card identity, players, RNG, errors, configuration
//! - `cards`: Card variants, decks, deck construction
//! - `turns`: Turn order
//! - `game`: The orchestrator, pending actions, setup
//!
//! ## Example
//!
//! ```
//! use sleeping_coders::{GameBuilder, PendingAction, Slot};
//!
//! let mut game = GameBuilder::new().build(42).unwrap();
//! let player = game.current_player();
//! let card = game.player(player).unwrap().hand().top().unwrap().clone();
//!
//! game.select_card(player, card.clone()).unwrap();
//! assert_eq!(game.last_played_card().unwrap(), &card);
//!
//! if game.action() == PendingAction::PickupCoder {
//!     game.resolve_pending_action(Slot::Row(0)).unwrap();
//!     assert_eq!(game.player(player).unwrap().coders().size(), 1);
//! }
//! ```

pub mod cards;
pub mod core;
pub mod game;
pub mod turns;

// Re-export commonly used types
pub use crate::core::{
    EntityId, GameConfig, GameError, GameRng, Player, PlayerId, PlayerMap, Result, CODERS_TO_WIN,
};

pub use crate::cards::{
    build_deck, Card, CardKind, CardVariant, Deck, DeckEntry, DeckStructure, DeckValue, DeckValues,
    Slot,
};

pub use crate::turns::TurnManager;

pub use crate::game::{Game, GameBuilder, GameEvent, PendingAction};
