//! Study session over one open deck.
//!
//! The session owns a working copy of the deck's cards. Every card mutation is
//! reported as [`SessionChange::Cards`] so the caller can push the new list
//! back into [`crate::AppState`].

use tracing::debug;

use crate::gesture::{DragRelease, SwipeCommit, SwipeThresholds, resolve_swipe};
use crate::model::{Card, CardId, Deck, DeckId, Modal};

#[derive(Clone, Debug, PartialEq)]
pub enum SessionIntent {
    Previous,
    Next,
    Swipe(DragRelease),
    BeginAddCard,
    BeginEditCard(CardId),
    CancelModal,
    SubmitAddCard { front: String, back: String },
    SubmitEditCard { front: String, back: String },
    DeleteCurrent,
}

/// What a session transition touched.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[must_use]
pub enum SessionChange {
    Unchanged,
    /// Index or modal moved; the card list is the same.
    View,
    /// The card list itself changed.
    Cards,
}

impl SessionChange {
    #[must_use]
    pub fn is_changed(self) -> bool {
        self != Self::Unchanged
    }

    #[must_use]
    pub fn cards_changed(self) -> bool {
        self == Self::Cards
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct DeckSession {
    deck_id: DeckId,
    cards: Vec<Card>,
    current_index: usize,
    modal: Modal,
}

impl DeckSession {
    /// Fresh session positioned on the first card.
    #[must_use]
    pub fn open(deck: &Deck) -> Self {
        Self::new(deck.id(), deck.cards().to_vec())
    }

    #[must_use]
    pub fn new(deck_id: DeckId, cards: Vec<Card>) -> Self {
        Self {
            deck_id,
            cards,
            current_index: 0,
            modal: Modal::Closed,
        }
    }

    #[must_use]
    pub fn deck_id(&self) -> DeckId {
        self.deck_id
    }

    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Meaningless while the session is empty; see [`DeckSession::current_card`].
    #[must_use]
    pub fn current_index(&self) -> usize {
        self.current_index
    }

    #[must_use]
    pub fn current_card(&self) -> Option<&Card> {
        self.cards.get(self.current_index)
    }

    #[must_use]
    pub fn modal(&self) -> Modal {
        self.modal
    }

    /// The card targeted by an open edit modal.
    #[must_use]
    pub fn editing_card(&self) -> Option<&Card> {
        self.modal
            .editing_card()
            .and_then(|id| self.cards.iter().find(|card| card.id() == id))
    }

    #[must_use]
    pub fn can_go_previous(&self) -> bool {
        !self.cards.is_empty() && self.current_index > 0
    }

    #[must_use]
    pub fn can_go_next(&self) -> bool {
        self.current_index + 1 < self.cards.len()
    }

    fn swipe(&mut self, release: DragRelease) -> SessionChange {
        if release.is_tap() {
            return SessionChange::Unchanged;
        }
        match resolve_swipe(release, SwipeThresholds::default()) {
            SwipeCommit::Previous => self.previous(),
            SwipeCommit::Next => self.next(),
            SwipeCommit::None => SessionChange::Unchanged,
        }
    }

    pub fn apply(&mut self, intent: SessionIntent) -> SessionChange {
        match intent {
            SessionIntent::Previous => self.previous(),
            SessionIntent::Next => self.next(),
            SessionIntent::Swipe(release) => self.swipe(release),
            SessionIntent::BeginAddCard => self.set_modal(Modal::CreatingCard),
            SessionIntent::BeginEditCard(id) => {
                if !self.cards.iter().any(|card| card.id() == id) {
                    return SessionChange::Unchanged;
                }
                self.set_modal(Modal::EditingCard(id))
            }
            SessionIntent::CancelModal => self.set_modal(Modal::Closed),
            SessionIntent::SubmitAddCard { front, back } => self.add_card(front, back),
            SessionIntent::SubmitEditCard { front, back } => self.edit_card(front, back),
            SessionIntent::DeleteCurrent => self.delete_current(),
        }
    }

    fn previous(&mut self) -> SessionChange {
        if !self.can_go_previous() {
            return SessionChange::Unchanged;
        }
        self.current_index -= 1;
        SessionChange::View
    }

    fn next(&mut self) -> SessionChange {
        if !self.can_go_next() {
            return SessionChange::Unchanged;
        }
        self.current_index += 1;
        SessionChange::View
    }

    fn set_modal(&mut self, modal: Modal) -> SessionChange {
        if self.modal == modal {
            return SessionChange::Unchanged;
        }
        self.modal = modal;
        SessionChange::View
    }

    fn add_card(&mut self, front: String, back: String) -> SessionChange {
        let id = CardId::next_after(self.cards.iter().map(Card::id));
        let card = match Card::new(id, front, back) {
            Ok(card) => card,
            Err(err) => {
                debug!(deck_id = %self.deck_id, %err, "add card ignored");
                return SessionChange::Unchanged;
            }
        };
        debug!(deck_id = %self.deck_id, card_id = %id, "card added");
        self.current_index = self.cards.len();
        self.cards.push(card);
        if self.modal == Modal::CreatingCard {
            self.modal = Modal::Closed;
        }
        SessionChange::Cards
    }

    fn edit_card(&mut self, front: String, back: String) -> SessionChange {
        let Some(id) = self.modal.editing_card() else {
            return SessionChange::Unchanged;
        };
        let Some(card) = self.cards.iter_mut().find(|card| card.id() == id) else {
            return SessionChange::Unchanged;
        };
        if let Err(err) = card.rewrite(front, back) {
            debug!(deck_id = %self.deck_id, card_id = %id, %err, "edit card ignored");
            return SessionChange::Unchanged;
        }
        debug!(deck_id = %self.deck_id, card_id = %id, "card updated");
        self.modal = Modal::Closed;
        SessionChange::Cards
    }

    fn delete_current(&mut self) -> SessionChange {
        if self.current_index >= self.cards.len() {
            return SessionChange::Unchanged;
        }
        let removed = self.cards.remove(self.current_index);
        if self.current_index >= self.cards.len() {
            self.current_index = self.cards.len().saturating_sub(1);
        }
        if self.modal == Modal::EditingCard(removed.id()) {
            self.modal = Modal::Closed;
        }
        debug!(deck_id = %self.deck_id, card_id = %removed.id(), "card deleted");
        SessionChange::Cards
    }
}
