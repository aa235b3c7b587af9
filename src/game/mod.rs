//! The Sleeping Coders game.
//!
//! - Players draw and play cards from a shared draw pile
//! - Tutors wake sleeping coders, keyboard kidnappers steal them, and
//!   all-nighters send them back to sleep
//! - The first player holding enough coders wins; the game also ends when
//!   the draw pile runs out

mod action;
mod builder;
#[allow(clippy::module_inception)]
mod game;

pub use action::{GameEvent, PendingAction};
pub use builder::{pick_names, random_name, GameBuilder};
pub use game::Game;
