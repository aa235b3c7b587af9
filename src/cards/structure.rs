//! Declarative deck construction.
//!
//! A [`DeckStructure`] lists `(exemplar, values)` pairs. Each value produces
//! one card: variants in the range set are built with the value as payload,
//! everything else is a fresh copy of the exemplar.
//!
//! ```
//! use sleeping_coders::cards::{build_deck, CardKind, CardVariant, DeckEntry, DeckValues};
//!
//! let structure = vec![
//!     DeckEntry::new(CardKind::AllNighter, DeckValues::range(0, 6)),
//!     DeckEntry::new(CardKind::Number(0), DeckValues::range(1, 11)),
//! ];
//! let cards = build_deck(&structure, &[CardVariant::Number]).unwrap();
//!
//! assert_eq!(cards.len(), 16);
//! assert_eq!(cards[6].to_string(), "NumberCard(1)");
//! ```

use serde::{Deserialize, Serialize};

use super::card::{Card, CardKind, CardVariant};
use crate::core::{GameError, Result};

/// One value taken from a [`DeckValues`] source.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DeckValue {
    Number(u32),
    Name(String),
}

impl std::fmt::Display for DeckValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DeckValue::Number(n) => write!(f, "{n}"),
            DeckValue::Name(name) => f.write_str(name),
        }
    }
}

/// The values an entry is expanded over.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum DeckValues {
    /// Half-open numeric range `start..end`.
    Range { start: u32, end: u32 },
    /// One card per name.
    Names(Vec<String>),
}

impl DeckValues {
    #[must_use]
    pub fn range(start: u32, end: u32) -> Self {
        DeckValues::Range { start, end }
    }

    pub fn names<S: Into<String>>(names: impl IntoIterator<Item = S>) -> Self {
        DeckValues::Names(names.into_iter().map(Into::into).collect())
    }

    /// How many cards this source produces.
    #[must_use]
    pub fn len(&self) -> usize {
        match self {
            DeckValues::Range { start, end } => end.saturating_sub(*start) as usize,
            DeckValues::Names(names) => names.len(),
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn iter(&self) -> Box<dyn Iterator<Item = DeckValue> + '_> {
        match self {
            DeckValues::Range { start, end } => Box::new((*start..*end).map(DeckValue::Number)),
            DeckValues::Names(names) => Box::new(names.iter().cloned().map(DeckValue::Name)),
        }
    }
}

/// An exemplar card kind and the values to replicate it over.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeckEntry {
    pub exemplar: CardKind,
    pub values: DeckValues,
}

impl DeckEntry {
    #[must_use]
    pub fn new(exemplar: CardKind, values: DeckValues) -> Self {
        Self { exemplar, values }
    }
}

/// A whole deck, described entry by entry.
pub type DeckStructure = Vec<DeckEntry>;

/// Build a card of `variant` carrying `value` as its payload.
///
/// Names are accepted for numeric cards only if they parse as numbers;
/// numbers become names for coder and tutor cards.
pub fn card_with_value(variant: CardVariant, value: &DeckValue) -> Result<Card> {
    let mismatch = || GameError::MismatchedValue {
        variant,
        value: value.to_string(),
    };

    let kind = match (variant, value) {
        (CardVariant::Number, DeckValue::Number(n)) => CardKind::Number(*n),
        (CardVariant::Number, DeckValue::Name(name)) => {
            CardKind::Number(name.parse().map_err(|_| mismatch())?)
        }
        (CardVariant::Coder, value) => CardKind::Coder(value.to_string()),
        (CardVariant::Tutor, value) => CardKind::Tutor(value.to_string()),
        (CardVariant::Plain, _) => CardKind::Plain,
        (CardVariant::KeyboardKidnapper, _) => CardKind::KeyboardKidnapper,
        (CardVariant::AllNighter, _) => CardKind::AllNighter,
    };
    Ok(Card::new(kind))
}

/// Expand `structure` into a flat list of new cards, in entry order.
pub fn build_deck(structure: &[DeckEntry], range_variants: &[CardVariant]) -> Result<Vec<Card>> {
    let mut cards = Vec::with_capacity(structure.iter().map(|e| e.values.len()).sum());

    for entry in structure {
        let variant = entry.exemplar.variant();
        let takes_value = range_variants.contains(&variant);

        for value in entry.values.iter() {
            let card = if takes_value {
                card_with_value(variant, &value)?
            } else {
                Card::new(entry.exemplar.clone())
            };
            cards.push(card);
        }
    }

    Ok(cards)
}
