//! Card system: card variants, decks, and deck construction.
//!
//! ## Key Types
//!
//! - `Card`: A single card with identity-based equality
//! - `CardKind` / `CardVariant`: The closed set of card variants
//! - `Slot`: Where a deferred action lands
//! - `Deck`: Ordered pile used for draw/discard piles, hands and coder piles
//! - `DeckStructure`: Declarative description of a starting pile

pub mod card;
pub mod deck;
pub mod structure;

pub use card::{Card, CardKind, CardVariant, Slot};
pub use deck::Deck;
pub use structure::{build_deck, card_with_value, DeckEntry, DeckStructure, DeckValue, DeckValues};
