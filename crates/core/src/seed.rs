//! Built-in decks loaded at startup.

use std::collections::HashSet;

use serde::Deserialize;
use thiserror::Error;

use crate::model::{Card, Deck, DeckError, DeckId};

const SEED_JSON: &str = include_str!("../assets/seed.json");

#[derive(Debug, Error)]
#[non_exhaustive]
pub enum SeedError {
    #[error("malformed seed data: {0}")]
    Json(#[from] serde_json::Error),
    #[error("duplicate deck id {0} in seed data")]
    DuplicateDeck(DeckId),
    #[error("duplicate card id {card_id} in seed deck {deck_id}")]
    DuplicateCard { deck_id: DeckId, card_id: u64 },
    #[error(transparent)]
    Deck(#[from] DeckError),
}

#[derive(Debug, Deserialize)]
struct SeedDeck {
    id: DeckId,
    title: String,
    #[serde(default)]
    description: String,
    #[serde(default)]
    cards: Vec<Card>,
}

/// The chemistry, physics and calculus decks shipped with the app.
///
/// # Errors
///
/// Returns `SeedError` if the embedded document fails validation.
pub fn seed_decks() -> Result<Vec<Deck>, SeedError> {
    parse_seed(SEED_JSON)
}

/// Parse and validate a seed document: a JSON array of decks with nested cards.
///
/// # Errors
///
/// Returns `SeedError::Json` for malformed JSON or blank card text,
/// `SeedError::Deck` for blank titles, and the duplicate variants when ids
/// collide.
pub fn parse_seed(json: &str) -> Result<Vec<Deck>, SeedError> {
    let raw: Vec<SeedDeck> = serde_json::from_str(json)?;
    let mut deck_ids = HashSet::with_capacity(raw.len());
    let mut decks = Vec::with_capacity(raw.len());

    for seed in raw {
        if !deck_ids.insert(seed.id) {
            return Err(SeedError::DuplicateDeck(seed.id));
        }
        let mut card_ids = HashSet::with_capacity(seed.cards.len());
        for card in &seed.cards {
            if !card_ids.insert(card.id()) {
                return Err(SeedError::DuplicateCard {
                    deck_id: seed.id,
                    card_id: card.id().value(),
                });
            }
        }
        decks.push(Deck::with_cards(
            seed.id,
            seed.title,
            seed.description,
            seed.cards,
        )?);
    }

    tracing::debug!(decks = decks.len(), "seed decks parsed");
    Ok(decks)
}
