use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::model::{
    ids::CardId,
    text::{BackText, FrontText, TextError},
};

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CardError {
    #[error("invalid card front: {0}")]
    Front(#[source] TextError),

    #[error("invalid card back: {0}")]
    Back(#[source] TextError),
}

//
// ─── CARD ──────────────────────────────────────────────────────────────────────
//

/// A single question/answer pair, owned by exactly one deck.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    id: CardId,
    front: FrontText,
    back: BackText,
}

impl Card {
    /// # Errors
    ///
    /// Returns `CardError::Front` / `CardError::Back` when either side is blank.
    pub fn new(
        id: CardId,
        front: impl Into<String>,
        back: impl Into<String>,
    ) -> Result<Self, CardError> {
        let front = FrontText::parse(front).map_err(CardError::Front)?;
        let back = BackText::parse(back).map_err(CardError::Back)?;
        Ok(Self { id, front, back })
    }

    /// Replace both sides, keeping the id. Leaves the card untouched on error.
    ///
    /// # Errors
    ///
    /// Same as [`Card::new`].
    pub fn rewrite(
        &mut self,
        front: impl Into<String>,
        back: impl Into<String>,
    ) -> Result<(), CardError> {
        let next = Self::new(self.id, front, back)?;
        *self = next;
        Ok(())
    }

    #[must_use]
    pub fn id(&self) -> CardId {
        self.id
    }

    #[must_use]
    pub fn front(&self) -> &str {
        self.front.as_str()
    }

    #[must_use]
    pub fn back(&self) -> &str {
        self.back.as_str()
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
