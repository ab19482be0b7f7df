use dioxus::prelude::*;
use quizdeck_core::model::DeckId;

use crate::vm::DeckSummaryVm;

#[component]
pub fn DeckListView(
    decks: Vec<DeckSummaryVm>,
    on_open: Callback<DeckId>,
    on_add: Callback<()>,
    on_edit: Callback<DeckId>,
    on_delete: Callback<DeckId>,
) -> Element {
    rsx! {
        div { class: "deck-list",
            button {
                class: "btn btn-primary deck-add",
                r#type: "button",
                onclick: move |_| on_add.call(()),
                "✨ Create New Deck"
            }
            div { class: "deck-grid",
                for deck in decks {
                    DeckTile {
                        key: "{deck.id}",
                        deck,
                        on_open,
                        on_edit,
                        on_delete,
                    }
                }
            }
        }
    }
}

#[component]
fn DeckTile(
    deck: DeckSummaryVm,
    on_open: Callback<DeckId>,
    on_edit: Callback<DeckId>,
    on_delete: Callback<DeckId>,
) -> Element {
    let id = deck.id;
    rsx! {
        div { class: "deck-tile",
            // Controls sit beside the clickable body, never inside it.
            div {
                class: "deck-tile-body",
                onclick: move |_| on_open.call(id),
                h2 { class: "deck-tile-title", "{deck.title}" }
                p { class: "deck-tile-description", "{deck.description}" }
                div { class: "deck-tile-stats", "{deck.card_count_label}" }
            }
            div { class: "tile-controls",
                button {
                    class: "control-btn",
                    r#type: "button",
                    title: "Edit Deck",
                    onclick: move |evt| {
                        evt.stop_propagation();
                        on_edit.call(id);
                    },
                    "✏️"
                }
                button {
                    class: "control-btn",
                    r#type: "button",
                    title: "Delete Deck",
                    onclick: move |evt| {
                        evt.stop_propagation();
                        on_delete.call(id);
                    },
                    "🗑️"
                }
            }
        }
    }
}
