mod card;
mod deck;
mod ids;
mod modal;
pub mod text;

pub use ids::{CardId, DeckId};
pub use text::{BackText, FrontText, TextError, TitleText};

pub use card::{Card, CardError};
pub use deck::{Deck, DeckError};
pub use modal::Modal;
