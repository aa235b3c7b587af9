//! Game configuration.
//!
//! A `GameConfig` describes everything needed to set up a match: how many
//! players, how many cards they start with, the draw pile's structure and
//! the roster of coders asleep at the start. `GameConfig::default()` is the
//! reference game.
//!
//! Configs are plain serde data, so a front-end can load them from whatever
//! format it likes; the engine itself never touches the filesystem.

use serde::{Deserialize, Serialize};

use super::player::CODERS_TO_WIN;
use crate::cards::{CardKind, CardVariant, DeckEntry, DeckStructure, DeckValues};

/// Tutors in the reference deck.
pub const TUTOR_NAMES: [&str; 8] = [
    "benjamin", "brad", "brae", "connor", "damien", "hanwei", "justin", "steven",
];

/// Coders asleep at the start of the reference game, one per row slot.
pub const CODER_NAMES: [&str; 16] = [
    "anna", "wilson", "ashleigh", "harry", "hob", "henry", "mike", "anabelle", "kt", "lochie",
    "luis", "jason", "raunaq", "sanni", "tze", "kaleb",
];

/// Deck structure of the reference game: every tutor once, four
/// all-nighters, four keyboard kidnappers and two runs of numbers 0-9.
#[must_use]
pub fn reference_deck() -> DeckStructure {
    vec![
        DeckEntry::new(CardKind::Tutor(String::new()), DeckValues::names(TUTOR_NAMES)),
        DeckEntry::new(CardKind::AllNighter, DeckValues::range(0, 4)),
        DeckEntry::new(CardKind::KeyboardKidnapper, DeckValues::range(0, 4)),
        DeckEntry::new(CardKind::Number(0), DeckValues::range(0, 10)),
        DeckEntry::new(CardKind::Number(0), DeckValues::range(0, 10)),
    ]
}

/// Complete setup for a match.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Number of players at the table.
    pub player_count: usize,

    /// Cards dealt to each player before the first turn.
    pub hand_size: usize,

    /// Coders a player must hold to win.
    pub coders_to_win: usize,

    /// Structure of the draw pile.
    pub deck: DeckStructure,

    /// Tutor roster. Every tutor entry in `deck` is expanded over these names.
    pub tutors: Vec<String>,

    /// Variants that take their entry's values as payload when the deck is
    /// built; all others are replicated as-is.
    pub range_variants: Vec<CardVariant>,

    /// Coders asleep at the start, in row order. The row has one slot each.
    pub coders: Vec<String>,

    /// Pool to draw player names from. Seats without a pooled name are
    /// called `Player 1`, `Player 2`, ...
    pub player_names: Vec<String>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            player_count: 3,
            hand_size: 5,
            coders_to_win: CODERS_TO_WIN,
            deck: reference_deck(),
            tutors: TUTOR_NAMES.iter().map(|s| (*s).to_string()).collect(),
            range_variants: vec![CardVariant::Number, CardVariant::Tutor],
            coders: CODER_NAMES.iter().map(|s| (*s).to_string()).collect(),
            player_names: Vec::new(),
        }
    }
}

impl GameConfig {
    /// The deck structure with tutor entries taking their names from
    /// `tutors`.
    #[must_use]
    pub fn deck_structure(&self) -> DeckStructure {
        self.deck
            .iter()
            .map(|entry| match entry.exemplar {
                CardKind::Tutor(_) => {
                    DeckEntry::new(entry.exemplar.clone(), DeckValues::names(self.tutors.clone()))
                }
                _ => entry.clone(),
            })
            .collect()
    }

    /// Total number of cards the deck structure expands to.
    #[must_use]
    pub fn deck_size(&self) -> usize {
        self.deck_structure().iter().map(|entry| entry.values.len()).sum()
    }

    /// Number of slots in the sleeping-coder row.
    #[must_use]
    pub fn slot_count(&self) -> usize {
        self.coders.len()
    }
}
