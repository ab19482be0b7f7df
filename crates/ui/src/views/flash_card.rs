use dioxus::prelude::*;

/// One study card. The face shown is decided by the owning session; a click
/// on the card body asks to flip, the corner controls never do.
#[component]
pub fn FlashCard(
    front: String,
    back: String,
    flipped: bool,
    on_flip: Callback<()>,
    on_edit: Callback<()>,
    on_delete: Callback<()>,
) -> Element {
    let inner_class = if flipped {
        "card-inner card-inner--flipped"
    } else {
        "card-inner"
    };

    rsx! {
        div { class: "flash-card",
            div {
                class: "tile-controls",
                // Presses on the controls must not start a drag on the wrapper.
                onpointerdown: move |evt| evt.stop_propagation(),
                button {
                    class: "control-btn",
                    r#type: "button",
                    title: "Edit",
                    onclick: move |_| on_edit.call(()),
                    "✏️"
                }
                button {
                    class: "control-btn",
                    r#type: "button",
                    title: "Delete",
                    onclick: move |_| on_delete.call(()),
                    "🗑️"
                }
            }
            div {
                class: inner_class,
                onclick: move |_| on_flip.call(()),
                div { class: "card-face card-face--front",
                    div { class: "card-content", "{front}" }
                }
                div { class: "card-face card-face--back",
                    div { class: "card-content", "{back}" }
                }
            }
        }
    }
}
