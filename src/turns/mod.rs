//! Turn order.
//!
//! `TurnManager` tracks whose turn it is over a fixed circle of players,
//! with reverse, skip and look-ahead.

pub mod manager;

pub use manager::TurnManager;
