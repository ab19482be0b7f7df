//! The application state owner.
//!
//! All deck-level mutations go through [`AppState::apply`], which keeps the
//! open-deck reference and the modal consistent with the deck list.

use tracing::{debug, trace};

use crate::model::{Card, Deck, DeckId, Modal};

/// Whether a transition touched the state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[must_use]
pub enum Transition {
    Changed,
    Unchanged,
}

impl Transition {
    #[must_use]
    pub fn is_changed(self) -> bool {
        self == Self::Changed
    }
}

impl From<bool> for Transition {
    fn from(changed: bool) -> Self {
        if changed { Self::Changed } else { Self::Unchanged }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AppIntent {
    OpenDeck(DeckId),
    CloseDeck,
    BeginAddDeck,
    BeginEditDeck(DeckId),
    CancelModal,
    SubmitAddDeck { title: String, description: String },
    SubmitEditDeck { title: String, description: String },
    DeleteDeck(DeckId),
    UpdateCards { deck_id: DeckId, cards: Vec<Card> },
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AppState {
    decks: Vec<Deck>,
    current_deck_id: Option<DeckId>,
    modal: Modal,
}

impl AppState {
    #[must_use]
    pub fn new(decks: Vec<Deck>) -> Self {
        Self {
            decks,
            current_deck_id: None,
            modal: Modal::Closed,
        }
    }

    #[must_use]
    pub fn decks(&self) -> &[Deck] {
        &self.decks
    }

    #[must_use]
    pub fn deck(&self, id: DeckId) -> Option<&Deck> {
        self.decks.iter().find(|deck| deck.id() == id)
    }

    #[must_use]
    pub fn current_deck_id(&self) -> Option<DeckId> {
        self.current_deck_id
    }

    /// The open deck, if any.
    #[must_use]
    pub fn current_deck(&self) -> Option<&Deck> {
        self.current_deck_id.and_then(|id| self.deck(id))
    }

    #[must_use]
    pub fn modal(&self) -> Modal {
        self.modal
    }

    /// The deck targeted by an open edit modal.
    #[must_use]
    pub fn editing_deck(&self) -> Option<&Deck> {
        self.modal.editing_deck().and_then(|id| self.deck(id))
    }

    pub fn apply(&mut self, intent: AppIntent) -> Transition {
        trace!(?intent, "app intent");
        match intent {
            AppIntent::OpenDeck(id) => self.open_deck(id),
            AppIntent::CloseDeck => Transition::from(self.current_deck_id.take().is_some()),
            AppIntent::BeginAddDeck => self.set_modal(Modal::CreatingDeck),
            AppIntent::BeginEditDeck(id) => {
                if self.deck(id).is_none() {
                    return Transition::Unchanged;
                }
                self.set_modal(Modal::EditingDeck(id))
            }
            AppIntent::CancelModal => self.set_modal(Modal::Closed),
            AppIntent::SubmitAddDeck { title, description } => self.add_deck(title, description),
            AppIntent::SubmitEditDeck { title, description } => {
                self.edit_deck(title, description)
            }
            AppIntent::DeleteDeck(id) => self.delete_deck(id),
            AppIntent::UpdateCards { deck_id, cards } => self.update_cards(deck_id, cards),
        }
    }

    fn set_modal(&mut self, modal: Modal) -> Transition {
        if self.modal == modal {
            return Transition::Unchanged;
        }
        self.modal = modal;
        Transition::Changed
    }

    fn open_deck(&mut self, id: DeckId) -> Transition {
        if self.deck(id).is_none() || self.current_deck_id == Some(id) {
            return Transition::Unchanged;
        }
        debug!(deck_id = %id, "deck opened");
        self.current_deck_id = Some(id);
        Transition::Changed
    }

    fn add_deck(&mut self, title: String, description: String) -> Transition {
        let id = DeckId::next_after(self.decks.iter().map(Deck::id));
        let deck = match Deck::new(id, title, description) {
            Ok(deck) => deck,
            Err(err) => {
                debug!(%err, "add deck ignored");
                return Transition::Unchanged;
            }
        };
        debug!(deck_id = %id, title = deck.title(), "deck created");
        self.decks.push(deck);
        if self.modal == Modal::CreatingDeck {
            self.modal = Modal::Closed;
        }
        Transition::Changed
    }

    fn edit_deck(&mut self, title: String, description: String) -> Transition {
        let Some(id) = self.modal.editing_deck() else {
            return Transition::Unchanged;
        };
        let Some(deck) = self.decks.iter_mut().find(|deck| deck.id() == id) else {
            return Transition::Unchanged;
        };
        if let Err(err) = deck.retitle(title, description) {
            debug!(deck_id = %id, %err, "edit deck ignored");
            return Transition::Unchanged;
        }
        debug!(deck_id = %id, "deck updated");
        self.modal = Modal::Closed;
        Transition::Changed
    }

    fn delete_deck(&mut self, id: DeckId) -> Transition {
        let before = self.decks.len();
        self.decks.retain(|deck| deck.id() != id);
        if self.decks.len() == before {
            return Transition::Unchanged;
        }
        if self.current_deck_id == Some(id) {
            self.current_deck_id = None;
        }
        if self.modal == Modal::EditingDeck(id) {
            self.modal = Modal::Closed;
        }
        debug!(deck_id = %id, "deck deleted");
        Transition::Changed
    }

    fn update_cards(&mut self, id: DeckId, cards: Vec<Card>) -> Transition {
        let Some(deck) = self.decks.iter_mut().find(|deck| deck.id() == id) else {
            return Transition::Unchanged;
        };
        let changed = deck.replace_cards(cards);
        if changed {
            debug!(deck_id = %id, card_count = deck.card_count(), "deck cards updated");
        }
        Transition::from(changed)
    }
}
