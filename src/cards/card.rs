//! Cards and what they do when played.
//!
//! The variant set is closed: every card is one of the [`CardKind`]s below,
//! and `play`/`action` match on it exhaustively.
//!
//! ## Two phases
//!
//! - `play` runs when the card leaves a hand. It resolves everything that
//!   needs no input: remove from hand, draw a replacement, advance the turn,
//!   and record which deferred action (if any) is now pending.
//! - `action` runs later, once a [`Slot`] has been chosen. It resolves the
//!   targeted effect, advances the turn and clears the pending action.
//!
//! Discarding is not a card's job: [`Game::select_card`] puts the card on
//! the discard pile after `play` returns.

use log::debug;
use serde::{Deserialize, Serialize};

use crate::core::{EntityId, GameError, PlayerId, Result};
use crate::game::{Game, PendingAction};

/// The payload-free discriminant of a card.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CardVariant {
    Plain,
    Number,
    Coder,
    Tutor,
    KeyboardKidnapper,
    AllNighter,
}

impl CardVariant {
    /// Name used when rendering cards of this variant.
    #[must_use]
    pub const fn class_name(self) -> &'static str {
        match self {
            CardVariant::Plain => "Card",
            CardVariant::Number => "NumberCard",
            CardVariant::Coder => "CoderCard",
            CardVariant::Tutor => "TutorCard",
            CardVariant::KeyboardKidnapper => "KeyboardKidnapperCard",
            CardVariant::AllNighter => "AllNighterCard",
        }
    }
}

/// What a card is, with its payload.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CardKind {
    /// No payload, no special effect.
    Plain,
    /// Numeric payload; plays like a plain card.
    Number(u32),
    /// A coder token. Lives in the sleeping row or a player's coder pile.
    Coder(String),
    /// Picks up a sleeping coder.
    Tutor(String),
    /// Steals a coder from another player.
    KeyboardKidnapper,
    /// Puts another player's coder back to sleep.
    AllNighter,
}

impl CardKind {
    #[must_use]
    pub fn variant(&self) -> CardVariant {
        match self {
            CardKind::Plain => CardVariant::Plain,
            CardKind::Number(_) => CardVariant::Number,
            CardKind::Coder(_) => CardVariant::Coder,
            CardKind::Tutor(_) => CardVariant::Tutor,
            CardKind::KeyboardKidnapper => CardVariant::KeyboardKidnapper,
            CardKind::AllNighter => CardVariant::AllNighter,
        }
    }
}

/// Target of a deferred action.
///
/// Tutors pick from the sleeping row; kidnappers and all-nighters reach into
/// another player's coder pile, so the owner is named explicitly.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Slot {
    /// Index into the sleeping-coder row.
    Row(usize),
    /// Index into `owner`'s coder pile.
    Pile { owner: PlayerId, index: usize },
}

impl std::fmt::Display for Slot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Slot::Row(index) => write!(f, "row slot {index}"),
            Slot::Pile { owner, index } => write!(f, "coder {index} of {owner}"),
        }
    }
}

/// A single card.
///
/// Equality and hashing use the card's [`EntityId`], never its payload:
/// `Card::plain() != Card::plain()`. Cloning produces another handle to the
/// same card.
#[derive(Clone, Debug)]
pub struct Card {
    id: EntityId,
    kind: CardKind,
}

impl Card {
    /// Create a new card with a fresh identity.
    #[must_use]
    pub fn new(kind: CardKind) -> Self {
        Self {
            id: EntityId::next(),
            kind,
        }
    }

    #[must_use]
    pub fn plain() -> Self {
        Self::new(CardKind::Plain)
    }

    #[must_use]
    pub fn number(number: u32) -> Self {
        Self::new(CardKind::Number(number))
    }

    #[must_use]
    pub fn coder(name: impl Into<String>) -> Self {
        Self::new(CardKind::Coder(name.into()))
    }

    #[must_use]
    pub fn tutor(name: impl Into<String>) -> Self {
        Self::new(CardKind::Tutor(name.into()))
    }

    #[must_use]
    pub fn keyboard_kidnapper() -> Self {
        Self::new(CardKind::KeyboardKidnapper)
    }

    #[must_use]
    pub fn all_nighter() -> Self {
        Self::new(CardKind::AllNighter)
    }

    /// A different card with the same kind and payload.
    #[must_use]
    pub fn duplicate(&self) -> Self {
        Self::new(self.kind.clone())
    }

    #[must_use]
    pub fn id(&self) -> EntityId {
        self.id
    }

    #[must_use]
    pub fn kind(&self) -> &CardKind {
        &self.kind
    }

    #[must_use]
    pub fn variant(&self) -> CardVariant {
        self.kind.variant()
    }

    /// The numeric payload of a number card.
    #[must_use]
    pub fn number_value(&self) -> Option<u32> {
        match self.kind {
            CardKind::Number(n) => Some(n),
            _ => None,
        }
    }

    /// The name carried by coder and tutor cards.
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        match &self.kind {
            CardKind::Coder(name) | CardKind::Tutor(name) => Some(name),
            _ => None,
        }
    }

    /// The deferred action playing this card leaves pending.
    #[must_use]
    pub fn requested_action(&self) -> PendingAction {
        match self.kind {
            CardKind::Tutor(_) => PendingAction::PickupCoder,
            CardKind::KeyboardKidnapper => PendingAction::StealCoder,
            CardKind::AllNighter => PendingAction::SleepCoder,
            CardKind::Plain | CardKind::Number(_) | CardKind::Coder(_) => PendingAction::NoAction,
        }
    }

    /// Play this card from `player`'s hand.
    ///
    /// Coder cards leave the hand and do nothing else. Every other card draws
    /// a replacement from the draw pile, passes the turn and sets the pending
    /// action to [`Card::requested_action`].
    ///
    /// Fails with [`GameError::EmptyCollection`] before touching anything if
    /// a replacement is needed and the draw pile is empty.
    pub fn play(&self, player: PlayerId, game: &mut Game) -> Result<()> {
        game.player(player)?;

        if let CardKind::Coder(_) = self.kind {
            game.player_mut(player)?.hand_mut().take_card(self);
            debug!("{player} played {self} (no effect)");
            return Ok(());
        }

        let available = game.draw_pile().size();
        if available == 0 {
            return Err(GameError::EmptyCollection { needed: 1, available });
        }

        game.player_mut(player)?.hand_mut().take_card(self);
        game.draw_into_hand(player)?;
        game.next_player();
        game.set_action(self.requested_action());

        debug!("{player} played {self}, pending {}", game.action());
        Ok(())
    }

    /// Resolve this card's deferred action on behalf of `player`.
    ///
    /// | Card                  | Slot                  | Effect                                     |
    /// |-----------------------|-----------------------|--------------------------------------------|
    /// | Tutor                 | `Row(i)`              | row `i` goes to `player`'s coders          |
    /// | KeyboardKidnapper     | `Pile { owner, i }`   | `owner`'s coder `i` goes to `player`       |
    /// | AllNighter            | `Pile { owner, i }`   | `owner`'s coder `i` sleeps in first gap    |
    /// | Plain, Number, Coder  | any                   | nothing                                    |
    ///
    /// Targeted actions then pass the turn and reset the pending action.
    /// All preconditions are checked before any state changes.
    pub fn action(&self, player: PlayerId, game: &mut Game, slot: Slot) -> Result<()> {
        match (&self.kind, slot) {
            (CardKind::Plain | CardKind::Number(_) | CardKind::Coder(_), _) => return Ok(()),
            (CardKind::Tutor(_), Slot::Row(index)) => {
                game.player(player)?;
                if game.sleeping_coder(index)?.is_none() {
                    return Err(GameError::EmptySlot(index));
                }
                if let Some(coder) = game.set_sleeping_coder(index, None)? {
                    game.player_mut(player)?.coders_mut().add_one(coder);
                }
            }
            (CardKind::KeyboardKidnapper, Slot::Pile { owner, index }) => {
                game.player(player)?;
                check_opponent_pile(game, player, owner, index)?;
                let stolen = game.player_mut(owner)?.coders_mut().take_at(index)?;
                game.player_mut(player)?.coders_mut().add_one(stolen);
            }
            (CardKind::AllNighter, Slot::Pile { owner, index }) => {
                game.player(player)?;
                check_opponent_pile(game, player, owner, index)?;
                let gap = game
                    .sleeping_coders()
                    .iter()
                    .position(Option::is_none)
                    .ok_or(GameError::EmptyCollection { needed: 1, available: 0 })?;
                let coder = game.player_mut(owner)?.coders_mut().take_at(index)?;
                game.set_sleeping_coder(gap, Some(coder))?;
            }
            (CardKind::Tutor(_) | CardKind::KeyboardKidnapper | CardKind::AllNighter, _) => {
                return Err(GameError::WrongSlot);
            }
        }

        debug!("{player} resolved {self} on {slot}");
        game.next_player();
        game.set_action(PendingAction::NoAction);
        Ok(())
    }
}

fn check_opponent_pile(game: &Game, player: PlayerId, owner: PlayerId, index: usize) -> Result<()> {
    if owner == player {
        return Err(GameError::SelfTarget(player));
    }
    let len = game.player(owner)?.coders().size();
    GameError::check_index(index, len)
}

impl PartialEq for Card {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Card {}

impl std::hash::Hash for Card {
    fn hash<H: std::hash::Hasher>(&self, hasher: &mut H) {
        self.id.hash(hasher);
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let class = self.variant().class_name();
        match &self.kind {
            CardKind::Number(n) => write!(f, "{class}({n})"),
            CardKind::Coder(name) | CardKind::Tutor(name) => write!(f, "{class}({name})"),
            CardKind::Plain | CardKind::KeyboardKidnapper | CardKind::AllNighter => {
                write!(f, "{class}()")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(Card::plain().to_string(), "Card()");
        assert_eq!(Card::number(3).to_string(), "NumberCard(3)");
        assert_eq!(Card::number(1001).to_string(), "NumberCard(1001)");
        assert_eq!(Card::coder("brae").to_string(), "CoderCard(brae)");
        assert_eq!(Card::tutor("hanwei").to_string(), "TutorCard(hanwei)");
        assert_eq!(Card::keyboard_kidnapper().to_string(), "KeyboardKidnapperCard()");
        assert_eq!(Card::all_nighter().to_string(), "AllNighterCard()");
    }

    #[test]
    fn test_identity_equality() {
        let a = Card::plain();
        let b = Card::plain();

        assert_ne!(a, b);
        assert_eq!(a, a.clone());
        assert_ne!(a, a.duplicate());
        assert_eq!(a.duplicate().kind(), a.kind());
    }

    #[test]
    fn test_payload_accessors() {
        assert_eq!(Card::number(7).number_value(), Some(7));
        assert_eq!(Card::plain().number_value(), None);
        assert_eq!(Card::coder("steven").name(), Some("steven"));
        assert_eq!(Card::tutor("luis").name(), Some("luis"));
        assert_eq!(Card::all_nighter().name(), None);
    }

    #[test]
    fn test_requested_action() {
        assert_eq!(Card::plain().requested_action(), PendingAction::NoAction);
        assert_eq!(Card::number(0).requested_action(), PendingAction::NoAction);
        assert_eq!(Card::coder("kt").requested_action(), PendingAction::NoAction);
        assert_eq!(Card::tutor("brad").requested_action(), PendingAction::PickupCoder);
        assert_eq!(Card::keyboard_kidnapper().requested_action(), PendingAction::StealCoder);
        assert_eq!(Card::all_nighter().requested_action(), PendingAction::SleepCoder);
    }

    #[test]
    fn test_kind_serialization() {
        let kind = CardKind::Tutor("brae".to_string());
        let json = serde_json::to_string(&kind).unwrap();
        let deserialized: CardKind = serde_json::from_str(&json).unwrap();
        assert_eq!(kind, deserialized);
    }
}
