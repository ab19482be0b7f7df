use quizdeck_core::model::{Deck, DeckId};

/// UI-ready deck tile for the browser grid.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DeckSummaryVm {
    pub id: DeckId,
    pub title: String,
    pub description: String,
    pub card_count_label: String,
}

/// Convert domain decks into browser tiles, preserving order.
#[must_use]
pub fn map_deck_summaries(decks: &[Deck]) -> Vec<DeckSummaryVm> {
    decks
        .iter()
        .map(|deck| DeckSummaryVm {
            id: deck.id(),
            title: deck.title().to_owned(),
            description: deck.description().to_owned(),
            card_count_label: format_card_count(deck.card_count()),
        })
        .collect()
}

fn format_card_count(count: usize) -> String {
    format!("{count} cards")
}
