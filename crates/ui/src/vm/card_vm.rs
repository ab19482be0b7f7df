use quizdeck_core::DeckSession;
use quizdeck_core::model::CardId;

/// The card currently on screen plus the navigation state around it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StudyCardVm {
    pub id: CardId,
    pub index: usize,
    pub front: String,
    pub back: String,
    pub progress_label: String,
    pub can_previous: bool,
    pub can_next: bool,
}

/// `None` for an empty deck.
#[must_use]
pub fn map_study_card(session: &DeckSession) -> Option<StudyCardVm> {
    let card = session.current_card()?;
    let index = session.current_index();
    Some(StudyCardVm {
        id: card.id(),
        index,
        front: card.front().to_owned(),
        back: card.back().to_owned(),
        progress_label: format_progress(index, session.cards().len()),
        can_previous: session.can_go_previous(),
        can_next: session.can_go_next(),
    })
}

/// One-based position label, e.g. "Card 2 of 4".
#[must_use]
pub fn format_progress(index: usize, total: usize) -> String {
    format!("Card {} of {total}", index + 1)
}
