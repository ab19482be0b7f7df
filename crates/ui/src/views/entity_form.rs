use dioxus::prelude::*;
use quizdeck_core::{EntityForm, FormKind, FormSubmission};

use crate::vm::form_copy;

/// Create-or-edit form shared by decks and cards.
///
/// `initial` switches the form into edit mode and is re-applied whenever the
/// owner points it at a different entity, without remounting.
#[component]
pub fn EntityFormView(
    kind: FormKind,
    initial: Option<FormSubmission>,
    on_submit: Callback<FormSubmission>,
    on_cancel: Callback<()>,
) -> Element {
    let mut form = use_signal(|| EntityForm::new(kind, initial.clone()));

    use_effect(use_reactive((&initial,), move |(initial,)| {
        if form.peek().initial() == initial.as_ref() {
            return;
        }
        form.write().sync_initial(initial);
    }));

    let snapshot = form.read().clone();
    let copy = form_copy(snapshot.kind(), snapshot.mode());
    let primary = snapshot.primary().to_owned();
    let secondary = snapshot.secondary().to_owned();

    let submit = move |_: MouseEvent| {
        let submission = form.write().submit();
        match submission {
            Some(values) => on_submit.call(values),
            None => tracing::debug!(kind = ?kind, "form submit ignored: required field blank"),
        }
    };

    rsx! {
        div { class: "entity-form",
            if copy.multiline_primary {
                textarea {
                    class: "form-field form-field--area",
                    placeholder: copy.primary_placeholder,
                    value: "{primary}",
                    oninput: move |evt| form.write().set_primary(evt.value()),
                }
            } else {
                input {
                    class: "form-field",
                    r#type: "text",
                    placeholder: copy.primary_placeholder,
                    value: "{primary}",
                    oninput: move |evt| form.write().set_primary(evt.value()),
                }
            }
            textarea {
                class: "form-field form-field--area",
                placeholder: copy.secondary_placeholder,
                value: "{secondary}",
                oninput: move |evt| form.write().set_secondary(evt.value()),
            }
            div { class: "form-actions",
                button {
                    class: "btn",
                    r#type: "button",
                    onclick: move |_| on_cancel.call(()),
                    "Cancel"
                }
                button {
                    class: "btn btn-primary",
                    r#type: "button",
                    onclick: submit,
                    "{copy.submit_label}"
                }
            }
        }
    }
}
