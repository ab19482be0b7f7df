use quizdeck_core::model::{CardId, Deck, DeckId};
use quizdeck_core::{AppIntent, DragRelease, DragTracker, SessionIntent};

use super::test_harness::{ShellHarness, div_markup};

const FLIPPED: &str = "card-inner--flipped";

#[tokio::test(flavor = "current_thread")]
async fn browser_lists_seeded_decks_with_counts() {
    let harness = ShellHarness::seeded();
    let html = harness.render();
    assert!(html.contains("QuizDeck"), "missing brand in {html}");
    assert!(html.contains("Create New Deck"), "missing add button in {html}");
    assert!(html.contains("Physics: Classical Mechanics"), "missing deck in {html}");
    assert!(html.contains("10 cards"), "missing chemistry count in {html}");
    assert!(html.contains("4 cards"), "missing physics count in {html}");
    assert!(!html.contains("Back to Decks"), "unexpected back button in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn opening_deck_shows_first_card_and_progress() {
    let mut harness = ShellHarness::seeded();
    harness.dispatch(AppIntent::OpenDeck(DeckId::new(3)));
    let html = harness.render();
    assert!(html.contains("Back to Decks"), "missing back button in {html}");
    assert!(html.contains("Card 1 of 4"), "missing progress in {html}");
    assert!(html.contains("What is a derivative?"), "missing front in {html}");
    assert!(!html.contains("Create New Deck"), "browser still visible in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn deleting_last_card_moves_back_and_updates_browser_count() {
    let mut harness = ShellHarness::seeded();
    harness.dispatch(AppIntent::OpenDeck(DeckId::new(2)));
    for _ in 0..3 {
        harness.dispatch_session(SessionIntent::Next);
    }
    assert!(harness.render().contains("Card 4 of 4"));

    harness.dispatch_session(SessionIntent::DeleteCurrent);
    let html = harness.render();
    assert!(html.contains("Card 3 of 3"), "missing clamped progress in {html}");
    assert!(html.contains("Define kinetic and potential energy"), "wrong card in {html}");
    let state = harness.state();
    assert_eq!(state.deck(DeckId::new(2)).map(Deck::card_count), Some(3));

    harness.dispatch(AppIntent::CloseDeck);
    let html = harness.render();
    assert!(html.contains("3 cards"), "stale count in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn swipe_and_reopen_resets_position() {
    let mut harness = ShellHarness::seeded();
    harness.dispatch(AppIntent::OpenDeck(DeckId::new(1)));
    harness.dispatch_session(SessionIntent::Swipe(DragRelease::new(-140.0, -0.1)));
    harness.dispatch_session(SessionIntent::Swipe(DragRelease::new(-20.0, -0.6)));
    assert_eq!(harness.current_index(), 2);
    assert!(harness.render().contains("Card 3 of 10"));

    harness.dispatch_session(SessionIntent::Swipe(DragRelease::new(40.0, 0.1)));
    assert_eq!(harness.current_index(), 2);

    harness.dispatch(AppIntent::CloseDeck);
    harness.dispatch(AppIntent::OpenDeck(DeckId::new(1)));
    assert_eq!(harness.current_index(), 0);
    assert!(harness.render().contains("Card 1 of 10"));
}

#[tokio::test(flavor = "current_thread")]
async fn new_deck_starts_empty_and_offers_first_card() {
    let mut harness = ShellHarness::seeded();
    harness.dispatch(AppIntent::BeginAddDeck);
    let html = harness.render();
    assert!(html.contains("Deck Title"), "missing form in {html}");
    assert!(html.contains("Create Deck"), "missing submit label in {html}");

    harness.dispatch(AppIntent::SubmitAddDeck {
        title: "Biology".into(),
        description: "Cells".into(),
    });
    let html = harness.render();
    assert!(!html.contains("Deck Title"), "modal still open in {html}");
    assert!(html.contains("Biology"), "missing new deck in {html}");
    assert_eq!(
        harness.state().deck(DeckId::new(4)).map(Deck::card_count),
        Some(0)
    );

    harness.dispatch(AppIntent::OpenDeck(DeckId::new(4)));
    let html = harness.render();
    assert!(html.contains("Add Your First Card"), "missing empty state in {html}");
    assert!(!html.contains("Card 1 of"), "unexpected progress in {html}");

    harness.dispatch_session(SessionIntent::BeginAddCard);
    harness.dispatch_session(SessionIntent::SubmitAddCard {
        front: "What is a cell?".into(),
        back: "The basic unit of life.".into(),
    });
    let html = harness.render();
    assert!(html.contains("Card 1 of 1"), "missing progress in {html}");
    assert_eq!(
        harness.state().deck(DeckId::new(4)).map(Deck::card_count),
        Some(1)
    );
}

#[tokio::test(flavor = "current_thread")]
async fn edit_deck_modal_prefills_and_saves() {
    let mut harness = ShellHarness::seeded();
    harness.dispatch(AppIntent::BeginEditDeck(DeckId::new(2)));
    let html = harness.render();
    assert!(html.contains("Save Changes"), "missing edit label in {html}");
    assert!(
        html.contains("Core principles of motion, forces, and energy"),
        "missing prefilled description in {html}"
    );

    harness.dispatch(AppIntent::SubmitEditDeck {
        title: "Physics I".into(),
        description: String::new(),
    });
    let html = harness.render();
    assert!(!html.contains("Save Changes"), "modal still open in {html}");
    assert!(html.contains("Physics I"), "missing new title in {html}");
    assert_eq!(
        harness.state().deck(DeckId::new(2)).map(Deck::card_count),
        Some(4)
    );
}

#[tokio::test(flavor = "current_thread")]
async fn card_modal_opens_for_edit_and_cancels() {
    let mut harness = ShellHarness::seeded();
    harness.dispatch(AppIntent::OpenDeck(DeckId::new(3)));
    harness.dispatch_session(SessionIntent::BeginEditCard(CardId::new(1)));
    let html = harness.render();
    assert!(html.contains("Update Card"), "missing edit label in {html}");
    assert!(html.contains("Front of card (question)"), "missing placeholder in {html}");

    harness.dispatch_session(SessionIntent::CancelModal);
    let html = harness.render();
    assert!(!html.contains("Update Card"), "modal still open in {html}");
    assert!(html.contains("Card 1 of 4"));
}

#[tokio::test(flavor = "current_thread")]
async fn deleting_open_deck_returns_to_browser() {
    let mut harness = ShellHarness::seeded();
    harness.dispatch(AppIntent::OpenDeck(DeckId::new(1)));
    harness.dispatch(AppIntent::DeleteDeck(DeckId::new(1)));
    let html = harness.render();
    assert!(html.contains("Create New Deck"), "browser not shown in {html}");
    assert!(!html.contains("10 cards"), "deleted deck still listed in {html}");
    assert_eq!(harness.state().decks().len(), 2);
}

#[tokio::test(flavor = "current_thread")]
async fn clicking_card_flips_and_new_card_shows_front() {
    let mut harness = ShellHarness::seeded();
    harness.dispatch(AppIntent::OpenDeck(DeckId::new(3)));
    assert!(!harness.render().contains(FLIPPED));

    harness.click_card();
    assert!(harness.render().contains(FLIPPED), "card did not flip");

    harness.dispatch_session(SessionIntent::Next);
    let html = harness.render();
    assert!(html.contains("Card 2 of 4"));
    assert!(!html.contains(FLIPPED), "flip carried over to next card in {html}");

    harness.click_card();
    harness.dispatch_session(SessionIntent::Previous);
    assert!(!harness.render().contains(FLIPPED), "returning card kept its back up");
}

#[tokio::test(flavor = "current_thread")]
async fn jittery_tap_flips_without_navigating() {
    let mut harness = ShellHarness::seeded();
    harness.dispatch(AppIntent::OpenDeck(DeckId::new(2)));
    harness.dispatch_session(SessionIntent::Next);

    // 1px of travel in 2ms is fast enough to pass the velocity threshold.
    harness.release_drag(DragTracker::start(100.0, 0.0).release(101.0, 2.0));
    assert_eq!(harness.current_index(), 1);

    harness.click_card();
    let html = harness.render();
    assert!(html.contains("Card 2 of 4"), "tap navigated in {html}");
    assert!(html.contains(FLIPPED), "tap did not flip in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn click_trailing_a_drag_does_not_flip() {
    let mut harness = ShellHarness::seeded();
    harness.dispatch(AppIntent::OpenDeck(DeckId::new(2)));

    harness.release_drag(DragRelease::new(-150.0, -0.1));
    assert_eq!(harness.current_index(), 1);
    harness.click_card();
    assert!(!harness.render().contains(FLIPPED), "drag's click flipped the card");

    harness.click_card();
    assert!(harness.render().contains(FLIPPED));
}

#[tokio::test(flavor = "current_thread")]
async fn controls_sit_outside_open_and_flip_targets() {
    let mut harness = ShellHarness::seeded();
    let html = harness.render();
    let tile_body = div_markup(&html, "deck-tile-body");
    assert!(tile_body.contains("Chemistry"), "unexpected tile body {tile_body}");
    assert!(!tile_body.contains("Edit Deck"), "edit inside open target: {tile_body}");
    assert!(!tile_body.contains("Delete Deck"), "delete inside open target: {tile_body}");

    harness.dispatch(AppIntent::OpenDeck(DeckId::new(3)));
    let html = harness.render();
    let card_body = div_markup(&html, "card-inner");
    assert!(card_body.contains("What is a derivative?"));
    assert!(!card_body.contains("title=\"Edit\""), "edit inside flip target: {card_body}");
    assert!(!card_body.contains("title=\"Delete\""), "delete inside flip target: {card_body}");
}

#[tokio::test(flavor = "current_thread")]
async fn open_deck_form_follows_new_edit_target() {
    let mut harness = ShellHarness::seeded();
    harness.dispatch(AppIntent::BeginEditDeck(DeckId::new(2)));
    harness.settle().await;
    let form = div_markup(&harness.render(), "entity-form").to_owned();
    assert!(form.contains("Physics: Classical Mechanics"), "missing prefill in {form}");

    harness.dispatch(AppIntent::BeginEditDeck(DeckId::new(3)));
    harness.settle().await;
    let form = div_markup(&harness.render(), "entity-form").to_owned();
    assert!(form.contains("Mathematics: Calculus Basics"), "form not refilled: {form}");
    assert!(!form.contains("Physics"), "stale values in {form}");
    assert_eq!(harness.state().modal(), quizdeck_core::model::Modal::EditingDeck(DeckId::new(3)));
}
