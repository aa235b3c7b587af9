//! Card identity.
//!
//! Every card has a unique `EntityId`. Two cards with the same payload are
//! still different cards: equality in decks, piles and slots is by identity.
//!
//! ## Allocation
//!
//! IDs come from a process-wide monotonic counter, so cards built by
//! different games or tests never collide.
//!
//! ```
//! use sleeping_coders::core::EntityId;
//!
//! let a = EntityId::next();
//! let b = EntityId::next();
//! assert_ne!(a, b);
//! assert!(b.raw() > a.raw());
//! ```

use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicU64, Ordering};

static NEXT_ENTITY: AtomicU64 = AtomicU64::new(0);

/// Unique identifier for a card.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct EntityId(pub u64);

impl EntityId {
    /// Allocate a fresh, never-before-seen ID.
    #[must_use]
    pub fn next() -> Self {
        Self(NEXT_ENTITY.fetch_add(1, Ordering::Relaxed))
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u64 {
        self.0
    }
}

impl From<u64> for EntityId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for EntityId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Entity({})", self.0)
    }
}
