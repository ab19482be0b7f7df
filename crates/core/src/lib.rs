#![forbid(unsafe_code)]

pub mod form;
pub mod gesture;
pub mod model;
pub mod seed;
pub mod session;
pub mod state;

pub use form::{EntityForm, FormKind, FormMode, FormSubmission};
pub use gesture::{
    DragRelease, DragTracker, SwipeCommit, SwipeThresholds, TAP_SLOP_PX, resolve_swipe,
};
pub use seed::{SeedError, parse_seed, seed_decks};
pub use session::{DeckSession, SessionChange, SessionIntent};
pub use state::{AppIntent, AppState, Transition};
