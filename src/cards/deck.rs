//! Ordered card piles.
//!
//! A `Deck` backs the draw pile, the discard pile, every hand and every
//! coder pile. Index 0 is the bottom, the last index is the top.
//!
//! ```
//! use sleeping_coders::cards::{Card, Deck};
//!
//! let (a, b, c) = (Card::plain(), Card::plain(), Card::plain());
//! let mut deck = Deck::from(vec![a.clone(), b.clone(), c.clone()]);
//!
//! assert_eq!(deck.top().unwrap(), &c);
//! assert_eq!(deck.draw(2).unwrap(), vec![c, b]);
//! assert_eq!(deck.cards(), &[a]);
//! ```

use log::trace;
use rustc_hash::FxHashMap;

use super::card::{Card, CardVariant};
use crate::core::{GameError, GameRng, Result};

/// An ordered, exclusively owned sequence of cards.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// Create an empty deck.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Borrow the live cards, bottom to top.
    ///
    /// Repeated calls see the same storage; copy with `to_vec()` when a
    /// snapshot is needed.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// The card at `index` (0 = bottom).
    pub fn card_at(&self, index: usize) -> Result<&Card> {
        GameError::check_index(index, self.cards.len())?;
        Ok(&self.cards[index])
    }

    /// The top card, without removing it.
    pub fn top(&self) -> Result<&Card> {
        self.cards
            .last()
            .ok_or(GameError::EmptyCollection { needed: 1, available: 0 })
    }

    /// Delete the card at `index`, shifting later cards down.
    pub fn remove(&mut self, index: usize) -> Result<()> {
        self.take_at(index).map(drop)
    }

    /// Remove and return the card at `index`.
    pub fn take_at(&mut self, index: usize) -> Result<Card> {
        GameError::check_index(index, self.cards.len())?;
        Ok(self.cards.remove(index))
    }

    /// Remove `card` (by identity) if it is in this deck.
    pub fn take_card(&mut self, card: &Card) -> Option<Card> {
        let index = self.position_of(card)?;
        Some(self.cards.remove(index))
    }

    /// Index of `card` (by identity).
    #[must_use]
    pub fn position_of(&self, card: &Card) -> Option<usize> {
        self.cards.iter().position(|c| c == card)
    }

    #[must_use]
    pub fn contains(&self, card: &Card) -> bool {
        self.position_of(card).is_some()
    }

    /// Number of cards in the deck.
    #[must_use]
    pub fn size(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Randomly permute the deck in place.
    pub fn shuffle(&mut self, rng: &mut GameRng) {
        rng.shuffle(&mut self.cards);
        trace!("shuffled {} cards", self.cards.len());
    }

    /// Remove and return the top `amount` cards, topmost first.
    ///
    /// Fails without removing anything if `amount` is zero or larger than
    /// the deck.
    pub fn draw(&mut self, amount: usize) -> Result<Vec<Card>> {
        if amount == 0 {
            return Err(GameError::InvalidAmount(amount));
        }
        let available = self.cards.len();
        if amount > available {
            return Err(GameError::EmptyCollection { needed: amount, available });
        }

        let mut drawn = self.cards.split_off(available - amount);
        drawn.reverse();
        Ok(drawn)
    }

    /// Put `card` on top.
    pub fn add_one(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// Put `cards` on top, keeping their order (last one ends on top).
    pub fn add_many(&mut self, cards: impl IntoIterator<Item = Card>) {
        self.cards.extend(cards);
    }

    /// Append this deck's cards onto `other`. This deck is left unchanged.
    pub fn merge_into(&self, other: &mut Deck) {
        other.cards.extend(self.cards.iter().cloned());
    }

    /// How many cards of each variant the deck holds.
    #[must_use]
    pub fn composition(&self) -> FxHashMap<CardVariant, usize> {
        let mut counts = FxHashMap::default();
        for card in &self.cards {
            *counts.entry(card.variant()).or_insert(0) += 1;
        }
        counts
    }

    /// Iterate bottom to top.
    pub fn iter(&self) -> std::slice::Iter<'_, Card> {
        self.cards.iter()
    }
}

impl From<Vec<Card>> for Deck {
    fn from(cards: Vec<Card>) -> Self {
        Self { cards }
    }
}

impl FromIterator<Card> for Deck {
    fn from_iter<I: IntoIterator<Item = Card>>(iter: I) -> Self {
        Self {
            cards: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a Deck {
    type Item = &'a Card;
    type IntoIter = std::slice::Iter<'a, Card>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl std::fmt::Display for Deck {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("Deck(")?;
        for (i, card) in self.cards.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{card}")?;
        }
        f.write_str(")")
    }
}
