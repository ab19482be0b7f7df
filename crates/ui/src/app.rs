use dioxus::prelude::*;
use quizdeck_core::AppState;

use crate::context::AppContext;
use crate::views::Shell;

#[component]
pub fn App() -> Element {
    let ctx = use_context::<AppContext>();
    let title = ctx.title().to_owned();
    use_context_provider(|| Signal::new(AppState::new(ctx.initial_decks())));

    rsx! {
        document::Stylesheet { href: asset!("/assets/style.css") }
        document::Title { "{title}" }

        div { class: "app-root",
            ErrorBoundary {
                handle_error: |errors: ErrorContext| rsx! {
                    div { class: "fatal",
                        h1 { "Something went wrong" }
                        pre { "{errors:?}" }
                    }
                },
                Shell { title: title.clone() }
            }
        }
    }
}
