use std::time::Instant;

use dioxus::prelude::*;
use quizdeck_core::model::{Card, Deck};
use quizdeck_core::{
    DeckSession, DragRelease, DragTracker, FormKind, FormSubmission, SessionIntent,
};

use crate::vm::{CardFlip, map_study_card};

use super::{EntityFormView, FlashCard, ModalOverlay};

#[cfg(test)]
use std::cell::RefCell;
#[cfg(test)]
use std::rc::Rc;

struct ActiveDrag {
    tracker: DragTracker,
    started: Instant,
}

impl ActiveDrag {
    fn start(x: f64) -> Self {
        Self {
            tracker: DragTracker::start(x, 0.0),
            started: Instant::now(),
        }
    }

    fn elapsed_ms(&self) -> f64 {
        self.started.elapsed().as_secs_f64() * 1000.0
    }
}

/// Study view over one deck's cards.
///
/// Owns its working copy of the cards; the parent keys this component by
/// deck id so opening another deck starts a fresh session. Every card
/// mutation is reported through `on_cards_changed`, and once on mount.
#[component]
pub fn DeckSessionView(deck: Deck, on_cards_changed: Callback<Vec<Card>>) -> Element {
    let deck_id = deck.id();
    let mut session = use_signal(|| DeckSession::open(&deck));
    let mut drag = use_signal(|| None::<ActiveDrag>);
    let mut drag_offset = use_signal(|| 0.0_f64);
    let mut flip = use_signal(CardFlip::default);

    use_effect(move || {
        on_cards_changed.call(session.peek().cards().to_vec());
    });

    let dispatch = use_callback(move |intent: SessionIntent| {
        let mut next = session.peek().clone();
        let change = next.apply(intent);
        if !change.is_changed() {
            return;
        }
        let shown = |s: &DeckSession| (s.current_index(), s.current_card().map(Card::id));
        if shown(&session.peek()) != shown(&next) {
            flip.write().card_changed();
        }
        let cards = change.cards_changed().then(|| next.cards().to_vec());
        session.set(next);
        if let Some(cards) = cards {
            tracing::debug!(%deck_id, cards = cards.len(), "session cards changed");
            on_cards_changed.call(cards);
        }
    });

    // A press that barely moved is a click: it may flip, it never swipes.
    let release_drag = use_callback(move |release: DragRelease| {
        if release.is_tap() {
            return;
        }
        flip.write().drag_finished();
        dispatch.call(SessionIntent::Swipe(release));
    });

    let flip_card = use_callback(move |()| flip.write().click());

    #[cfg(test)]
    {
        let mut registered = use_signal(|| false);
        if !registered() {
            registered.set(true);
            if let Some(handles) = try_consume_context::<SessionTestHandles>() {
                handles.register(SessionCallbacks {
                    dispatch,
                    release_drag,
                    flip_card,
                    session,
                });
            }
        }
    }

    let mut finish_drag = move |x: f64| {
        let Some(active) = drag.write().take() else {
            return;
        };
        let at_ms = active.elapsed_ms();
        drag_offset.set(0.0);
        release_drag.call(active.tracker.release(x, at_ms));
    };

    let on_key = move |evt: KeyboardEvent| {
        if session.peek().modal().is_open() {
            return;
        }
        match evt.key() {
            Key::ArrowLeft => dispatch.call(SessionIntent::Previous),
            Key::ArrowRight => dispatch.call(SessionIntent::Next),
            _ => {}
        }
    };

    let snapshot = session.read();
    let card = map_study_card(&snapshot);
    let modal_open = snapshot.modal().is_open();
    let editing = snapshot
        .editing_card()
        .map(|card| FormSubmission::new(card.front(), card.back()));
    drop(snapshot);
    let offset = drag_offset();
    let flipped = flip.read().is_flipped();

    rsx! {
        div {
            class: "deck-session",
            tabindex: "0",
            onkeydown: on_key,
            onmounted: move |evt| async move {
                if let Err(err) = evt.set_focus(true).await {
                    tracing::debug!(?err, "session focus failed; arrow keys need a click first");
                }
            },
            if let Some(card) = card {
                div { class: "session-header",
                    div { class: "progress", "{card.progress_label}" }
                }
                div {
                    class: "card-wrapper",
                    style: "transform: translateX({offset}px);",
                    onpointerdown: move |evt| {
                        let x = evt.client_coordinates().x;
                        flip.write().press();
                        drag_offset.set(0.0);
                        drag.set(Some(ActiveDrag::start(x)));
                    },
                    onpointermove: move |evt| {
                        let x = evt.client_coordinates().x;
                        let offset = drag.write().as_mut().map(|active| {
                            let at_ms = active.elapsed_ms();
                            active.tracker.move_to(x, at_ms);
                            active.tracker.offset()
                        });
                        if let Some(offset) = offset {
                            drag_offset.set(offset);
                        }
                    },
                    onpointerup: move |evt| finish_drag(evt.client_coordinates().x),
                    onpointercancel: move |evt| finish_drag(evt.client_coordinates().x),
                    onpointerleave: move |evt| finish_drag(evt.client_coordinates().x),
                    FlashCard {
                        key: "{card.index}-{card.id}",
                        front: card.front.clone(),
                        back: card.back.clone(),
                        flipped,
                        on_flip: flip_card,
                        on_edit: move |()| dispatch.call(SessionIntent::BeginEditCard(card.id)),
                        on_delete: move |()| dispatch.call(SessionIntent::DeleteCurrent),
                    }
                }
                div { class: "session-controls",
                    button {
                        class: "btn",
                        r#type: "button",
                        disabled: !card.can_previous,
                        onclick: move |_| dispatch.call(SessionIntent::Previous),
                        "Previous"
                    }
                    button {
                        class: "btn btn-primary",
                        r#type: "button",
                        onclick: move |_| dispatch.call(SessionIntent::BeginAddCard),
                        "Add Card"
                    }
                    button {
                        class: "btn",
                        r#type: "button",
                        disabled: !card.can_next,
                        onclick: move |_| dispatch.call(SessionIntent::Next),
                        "Next"
                    }
                }
            } else {
                div { class: "session-controls",
                    button {
                        class: "btn btn-primary",
                        r#type: "button",
                        onclick: move |_| dispatch.call(SessionIntent::BeginAddCard),
                        "Add Your First Card"
                    }
                }
            }
            if modal_open {
                ModalOverlay {
                    on_close: move |()| dispatch.call(SessionIntent::CancelModal),
                    EntityFormView {
                        kind: FormKind::Card,
                        initial: editing,
                        on_submit: move |values: FormSubmission| {
                            let intent = if session.peek().editing_card().is_some() {
                                SessionIntent::SubmitEditCard {
                                    front: values.primary,
                                    back: values.secondary,
                                }
                            } else {
                                SessionIntent::SubmitAddCard {
                                    front: values.primary,
                                    back: values.secondary,
                                }
                            };
                            dispatch.call(intent);
                        },
                        on_cancel: move |()| dispatch.call(SessionIntent::CancelModal),
                    }
                }
            }
        }
    }
}

#[cfg(test)]
#[derive(Clone, Copy)]
pub(crate) struct SessionCallbacks {
    pub dispatch: Callback<SessionIntent>,
    pub release_drag: Callback<DragRelease>,
    pub flip_card: Callback<()>,
    pub session: Signal<DeckSession>,
}

#[cfg(test)]
#[derive(Clone, Default)]
pub(crate) struct SessionTestHandles(Rc<RefCell<Option<SessionCallbacks>>>);

#[cfg(test)]
impl SessionTestHandles {
    pub(crate) fn register(&self, callbacks: SessionCallbacks) {
        *self.0.borrow_mut() = Some(callbacks);
    }

    pub(crate) fn get(&self) -> SessionCallbacks {
        (*self.0.borrow()).expect("session callbacks registered")
    }
}
