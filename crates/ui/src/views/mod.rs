mod deck_list;
mod deck_session;
mod entity_form;
mod flash_card;
mod modal;
mod shell;

pub use deck_list::DeckListView;
pub use deck_session::DeckSessionView;
pub use entity_form::EntityFormView;
pub use flash_card::FlashCard;
pub use modal::ModalOverlay;
pub use shell::Shell;

#[cfg(test)]
mod test_harness;
#[cfg(test)]
mod view_smoke;
