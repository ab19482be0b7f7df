use dioxus::prelude::*;

/// Full-screen backdrop; a click outside the inner box cancels.
#[component]
pub fn ModalOverlay(on_close: Callback<()>, children: Element) -> Element {
    rsx! {
        div {
            class: "modal-overlay",
            onclick: move |_| on_close.call(()),
            div {
                class: "modal",
                onclick: move |evt| evt.stop_propagation(),
                {children}
            }
        }
    }
}
