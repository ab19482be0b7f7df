use crate::model::ids::{CardId, DeckId};

/// The one modal that may be open at a time.
///
/// The app state only ever holds the deck variants and a deck session only
/// the card variants; sharing one enum keeps "at most one open" structural.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Modal {
    #[default]
    Closed,
    CreatingDeck,
    EditingDeck(DeckId),
    CreatingCard,
    EditingCard(CardId),
}

impl Modal {
    #[must_use]
    pub fn is_open(self) -> bool {
        self != Self::Closed
    }

    #[must_use]
    pub fn editing_deck(self) -> Option<DeckId> {
        match self {
            Self::EditingDeck(id) => Some(id),
            _ => None,
        }
    }

    #[must_use]
    pub fn editing_card(self) -> Option<CardId> {
        match self {
            Self::EditingCard(id) => Some(id),
            _ => None,
        }
    }
}
