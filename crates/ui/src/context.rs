use std::sync::Arc;

use quizdeck_core::model::Deck;

/// What the composition root hands to the UI.
pub trait UiApp: Send + Sync {
    fn title(&self) -> String;
    fn initial_decks(&self) -> Vec<Deck>;
}

#[derive(Clone)]
pub struct AppContext {
    title: Arc<str>,
    initial_decks: Arc<[Deck]>,
}

impl AppContext {
    #[must_use]
    pub fn new(app: &Arc<dyn UiApp>) -> Self {
        Self {
            title: Arc::from(app.title()),
            initial_decks: Arc::from(app.initial_decks()),
        }
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Decks the state owner starts from; read once when the app mounts.
    #[must_use]
    pub fn initial_decks(&self) -> Vec<Deck> {
        self.initial_decks.to_vec()
    }
}

/// Build an `AppContext` from a UI-facing app implementation.
#[must_use]
pub fn build_app_context(app: &Arc<dyn UiApp>) -> AppContext {
    AppContext::new(app)
}
