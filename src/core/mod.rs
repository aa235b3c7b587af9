//! Core engine types: card identity, players, RNG, errors, configuration.

pub mod config;
pub mod entity;
pub mod error;
pub mod player;
pub mod rng;

pub use config::{reference_deck, GameConfig, CODER_NAMES, TUTOR_NAMES};
pub use entity::EntityId;
pub use error::{GameError, Result};
pub use player::{Player, PlayerId, PlayerMap, CODERS_TO_WIN};
pub use rng::GameRng;
