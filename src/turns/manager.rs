//! Turn order over a fixed circle of players.
//!
//! The manager is a tiny state machine: a `location` in `[0, N)` and a
//! direction. It knows nothing about game-over; the game decides that.
//!
//! ```
//! use sleeping_coders::core::PlayerId;
//! use sleeping_coders::turns::TurnManager;
//!
//! let mut turns = TurnManager::new(PlayerId::all(3).collect());
//! assert_eq!(turns.next(), PlayerId::new(1));
//!
//! turns.reverse();
//! assert_eq!(turns.peek(1), PlayerId::new(0));
//! assert_eq!(turns.skip(1), PlayerId::new(2));
//! ```

use serde::{Deserialize, Serialize};

use crate::core::PlayerId;

/// Circular turn order with a current pointer and a direction.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnManager {
    order: Vec<PlayerId>,
    location: usize,
    forward: bool,
}

impl TurnManager {
    /// Create a manager starting at the first player, moving forward.
    ///
    /// Panics if `order` is empty.
    #[must_use]
    pub fn new(order: Vec<PlayerId>) -> Self {
        assert!(!order.is_empty(), "Must have at least 1 player");
        Self {
            order,
            location: 0,
            forward: true,
        }
    }

    /// The player whose turn it is.
    #[must_use]
    pub fn current(&self) -> PlayerId {
        self.order[self.location]
    }

    /// Look `count` turns ahead (or behind, if negative) in the current
    /// direction, without moving.
    #[must_use]
    pub fn peek(&self, count: isize) -> PlayerId {
        self.order[self.offset(count)]
    }

    /// Flip the direction of play. The current player does not change.
    pub fn reverse(&mut self) {
        self.forward = !self.forward;
    }

    /// Move past `count` players and return the new current player.
    ///
    /// `skip(0)` is an ordinary single advance.
    pub fn skip(&mut self, count: usize) -> PlayerId {
        self.location = self.offset(count as isize + 1);
        self.current()
    }

    /// Advance to the next player.
    #[allow(clippy::should_implement_trait)]
    pub fn next(&mut self) -> PlayerId {
        self.skip(0)
    }

    #[must_use]
    pub fn is_forward(&self) -> bool {
        self.forward
    }

    #[must_use]
    pub fn location(&self) -> usize {
        self.location
    }

    #[must_use]
    pub fn player_count(&self) -> usize {
        self.order.len()
    }

    /// Seating order this manager cycles through.
    #[must_use]
    pub fn order(&self) -> &[PlayerId] {
        &self.order
    }

    fn offset(&self, count: isize) -> usize {
        let step = if self.forward { count } else { -count };
        let len = self.order.len() as isize;
        (self.location as isize + step).rem_euclid(len) as usize
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn manager(n: usize) -> TurnManager {
        TurnManager::new(PlayerId::all(n).collect())
    }

    #[test]
    fn test_initial_state() {
        let turns = manager(3);
        assert_eq!(turns.current(), PlayerId::new(0));
        assert_eq!(turns.location(), 0);
        assert!(turns.is_forward());
    }

    #[test]
    fn test_next_wraps() {
        let mut turns = manager(3);
        assert_eq!(turns.next(), PlayerId::new(1));
        assert_eq!(turns.next(), PlayerId::new(2));
        assert_eq!(turns.next(), PlayerId::new(0));
    }

    #[test]
    fn test_peek_both_ways() {
        let turns = manager(4);
        assert_eq!(turns.peek(1), PlayerId::new(1));
        assert_eq!(turns.peek(-1), PlayerId::new(3));
        assert_eq!(turns.peek(-6), PlayerId::new(2));
        assert_eq!(turns.peek(0), PlayerId::new(0));
        assert_eq!(turns.current(), PlayerId::new(0));
    }

    #[test]
    fn test_reverse() {
        let mut turns = manager(4);
        turns.next();
        turns.reverse();

        assert_eq!(turns.current(), PlayerId::new(1));
        assert_eq!(turns.peek(1), PlayerId::new(0));
        assert_eq!(turns.next(), PlayerId::new(0));
        assert_eq!(turns.next(), PlayerId::new(3));

        turns.reverse();
        assert!(turns.is_forward());
        assert_eq!(turns.next(), PlayerId::new(0));
    }

    #[test]
    fn test_skip() {
        let mut turns = manager(5);
        assert_eq!(turns.skip(0), PlayerId::new(1));
        assert_eq!(turns.skip(2), PlayerId::new(4));

        turns.reverse();
        assert_eq!(turns.skip(1), PlayerId::new(2));
        assert_eq!(turns.skip(7), PlayerId::new(4));
    }

    #[test]
    fn test_single_player() {
        let mut turns = manager(1);
        assert_eq!(turns.next(), PlayerId::new(0));
        assert_eq!(turns.peek(-3), PlayerId::new(0));
    }

    #[test]
    #[should_panic(expected = "Must have at least 1 player")]
    fn test_empty_order() {
        let _ = TurnManager::new(vec![]);
    }
}
