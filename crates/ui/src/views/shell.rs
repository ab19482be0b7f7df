use dioxus::prelude::*;
use quizdeck_core::model::Card;
use quizdeck_core::{AppIntent, AppState, FormKind, FormSubmission};

use crate::vm::map_deck_summaries;

use super::{DeckListView, DeckSessionView, EntityFormView, ModalOverlay};

/// Apply one intent to the shared state, writing only when something changed.
pub(crate) fn dispatch_app_intent(mut state: Signal<AppState>, intent: AppIntent) {
    let mut next = state.peek().clone();
    if next.apply(intent).is_changed() {
        state.set(next);
    }
}

/// Brand header over either the deck browser or the open deck.
#[component]
pub fn Shell(title: String) -> Element {
    let state = use_context::<Signal<AppState>>();
    let dispatch = use_callback(move |intent: AppIntent| dispatch_app_intent(state, intent));

    let snapshot = state.read();
    let open_deck = snapshot.current_deck().map(|deck| (deck.id(), deck.clone()));
    let decks = map_deck_summaries(snapshot.decks());
    let modal_open = snapshot.modal().is_open();
    let editing = snapshot
        .editing_deck()
        .map(|deck| FormSubmission::new(deck.title(), deck.description()));
    drop(snapshot);

    rsx! {
        header { class: "brand-header",
            h1 { class: "brand-name", "{title}" }
        }
        main { class: "main-content",
            if let Some((deck_id, deck)) = open_deck {
                div { class: "deck-view",
                    button {
                        class: "btn back-btn",
                        r#type: "button",
                        onclick: move |_| dispatch.call(AppIntent::CloseDeck),
                        "← Back to Decks"
                    }
                    DeckSessionView {
                        key: "{deck_id}",
                        deck,
                        on_cards_changed: move |cards: Vec<Card>| {
                            dispatch.call(AppIntent::UpdateCards { deck_id, cards });
                        },
                    }
                }
            } else {
                DeckListView {
                    decks,
                    on_open: move |id| dispatch.call(AppIntent::OpenDeck(id)),
                    on_add: move |()| dispatch.call(AppIntent::BeginAddDeck),
                    on_edit: move |id| dispatch.call(AppIntent::BeginEditDeck(id)),
                    on_delete: move |id| dispatch.call(AppIntent::DeleteDeck(id)),
                }
            }
            if modal_open {
                ModalOverlay {
                    on_close: move |()| dispatch.call(AppIntent::CancelModal),
                    EntityFormView {
                        kind: FormKind::Deck,
                        initial: editing,
                        on_submit: move |values: FormSubmission| {
                            let intent = if state.peek().editing_deck().is_some() {
                                AppIntent::SubmitEditDeck {
                                    title: values.primary,
                                    description: values.secondary,
                                }
                            } else {
                                AppIntent::SubmitAddDeck {
                                    title: values.primary,
                                    description: values.secondary,
                                }
                            };
                            dispatch.call(intent);
                        },
                        on_cancel: move |()| dispatch.call(AppIntent::CancelModal),
                    }
                }
            }
        }
    }
}
