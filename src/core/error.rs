//! Engine errors.
//!
//! Every error is a contract violation by the caller (an out-of-range slot,
//! drawing from an empty pile). Operations validate before mutating, so an
//! `Err` always means the game state is untouched.

use super::player::PlayerId;
use crate::cards::CardVariant;

/// Errors raised by the engine.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum GameError {
    #[error("not enough cards: needed {needed}, only {available} available")]
    EmptyCollection { needed: usize, available: usize },

    #[error("index {index} out of range for length {len}")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("amount must be positive, got {0}")]
    InvalidAmount(usize),

    #[error("sleeping coder slot {0} is empty")]
    EmptySlot(usize),

    #[error("slot does not match the kind of action being resolved")]
    WrongSlot,

    #[error("no action is pending")]
    NoPendingAction,

    #[error("{0} cannot target their own coders")]
    SelfTarget(PlayerId),

    #[error("{0} is not in this game")]
    UnknownPlayer(PlayerId),

    #[error("{variant:?} cannot be built from value {value}")]
    MismatchedValue { variant: CardVariant, value: String },
}

/// Result alias used throughout the engine.
pub type Result<T> = std::result::Result<T, GameError>;

impl GameError {
    /// Shorthand for the bounds check used by every indexed accessor.
    pub(crate) fn check_index(index: usize, len: usize) -> Result<()> {
        if index < len {
            Ok(())
        } else {
            Err(GameError::IndexOutOfRange { index, len })
        }
    }
}
