//! Pending actions and the play history.
//!
//! A game holds at most one [`PendingAction`]. Playing a tutor, keyboard
//! kidnapper or all-nighter sets it; resolving that card's action clears it.
//!
//! Every play and every resolved action is appended to the history as a
//! [`GameEvent`].

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::cards::{Card, Slot};
use crate::core::{EntityId, PlayerId};

/// The single deferred, slot-targeted effect waiting to be resolved.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PendingAction {
    #[default]
    NoAction,
    /// A tutor was played: pick up a sleeping coder.
    PickupCoder,
    /// A keyboard kidnapper was played: steal another player's coder.
    StealCoder,
    /// An all-nighter was played: send another player's coder back to sleep.
    SleepCoder,
}

impl PendingAction {
    #[must_use]
    pub fn is_pending(self) -> bool {
        self != PendingAction::NoAction
    }

    /// Stable upper-case name, e.g. `PICKUP_CODER`.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            PendingAction::NoAction => "NO_ACTION",
            PendingAction::PickupCoder => "PICKUP_CODER",
            PendingAction::StealCoder => "STEAL_CODER",
            PendingAction::SleepCoder => "SLEEP_CODER",
        }
    }
}

impl std::fmt::Display for PendingAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Something that happened during a game.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GameEvent {
    /// `player` played `card`, drawing the listed replacement cards.
    Played {
        player: PlayerId,
        card: Card,
        drawn: SmallVec<[EntityId; 1]>,
    },
    /// `player` resolved a pending `action` against `slot`.
    Resolved {
        player: PlayerId,
        action: PendingAction,
        slot: Slot,
    },
    /// `player` reached the winning number of coders.
    Won { player: PlayerId },
}

impl GameEvent {
    /// The player the event is about.
    #[must_use]
    pub fn player(&self) -> PlayerId {
        match self {
            GameEvent::Played { player, .. }
            | GameEvent::Resolved { player, .. }
            | GameEvent::Won { player } => *player,
        }
    }
}
