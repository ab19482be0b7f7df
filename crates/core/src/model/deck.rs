use thiserror::Error;

use crate::model::{
    card::Card,
    ids::{CardId, DeckId},
    text::{TextError, TitleText},
};

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum DeckError {
    #[error("invalid deck title: {0}")]
    Title(#[source] TextError),
}

//
// ─── DECK ──────────────────────────────────────────────────────────────────────
//

/// A titled, ordered collection of cards.
///
/// The card count is always derived from the card list, so it cannot drift
/// out of sync with it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deck {
    id: DeckId,
    title: TitleText,
    description: String,
    cards: Vec<Card>,
}

impl Deck {
    /// Creates an empty deck.
    ///
    /// # Errors
    ///
    /// Returns `DeckError::Title` if the title is empty or whitespace-only.
    pub fn new(
        id: DeckId,
        title: impl Into<String>,
        description: impl Into<String>,
    ) -> Result<Self, DeckError> {
        Self::with_cards(id, title, description, Vec::new())
    }

    /// Creates a deck that already holds cards.
    ///
    /// # Errors
    ///
    /// Returns `DeckError::Title` if the title is empty or whitespace-only.
    pub fn with_cards(
        id: DeckId,
        title: impl Into<String>,
        description: impl Into<String>,
        cards: Vec<Card>,
    ) -> Result<Self, DeckError> {
        let title = TitleText::parse(title).map_err(DeckError::Title)?;
        Ok(Self {
            id,
            title,
            description: description.into(),
            cards,
        })
    }

    /// Replace title and description, keeping id and cards.
    ///
    /// # Errors
    ///
    /// Returns `DeckError::Title` and leaves the deck untouched if the title is blank.
    pub fn retitle(
        &mut self,
        title: impl Into<String>,
        description: impl Into<String>,
    ) -> Result<(), DeckError> {
        self.title = TitleText::parse(title).map_err(DeckError::Title)?;
        self.description = description.into();
        Ok(())
    }

    /// Swap in a new card list. Returns `false` when it equals the current one.
    pub fn replace_cards(&mut self, cards: Vec<Card>) -> bool {
        if self.cards == cards {
            return false;
        }
        self.cards = cards;
        true
    }

    // Accessors
    #[must_use]
    pub fn id(&self) -> DeckId {
        self.id
    }

    #[must_use]
    pub fn title(&self) -> &str {
        self.title.as_str()
    }

    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    #[must_use]
    pub fn card_count(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn next_card_id(&self) -> CardId {
        CardId::next_after(self.cards.iter().map(Card::id))
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
