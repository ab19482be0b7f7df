mod card_vm;
mod deck_vm;
mod flip_vm;
mod form_vm;

pub use card_vm::{StudyCardVm, format_progress, map_study_card};
pub use deck_vm::{DeckSummaryVm, map_deck_summaries};
pub use flip_vm::CardFlip;
pub use form_vm::{FormCopyVm, form_copy};
