use quizdeck_core::{FormKind, FormMode};

/// Placeholder and button copy for the shared entity form.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FormCopyVm {
    pub primary_placeholder: &'static str,
    pub secondary_placeholder: &'static str,
    pub submit_label: &'static str,
    /// Deck titles are single-line; card faces are free text.
    pub multiline_primary: bool,
}

#[must_use]
pub fn form_copy(kind: FormKind, mode: FormMode) -> FormCopyVm {
    match kind {
        FormKind::Deck => FormCopyVm {
            primary_placeholder: "Deck Title",
            secondary_placeholder: "Deck Description (optional)",
            submit_label: match mode {
                FormMode::Create => "Create Deck",
                FormMode::Edit => "Save Changes",
            },
            multiline_primary: false,
        },
        FormKind::Card => FormCopyVm {
            primary_placeholder: "Front of card (question)",
            secondary_placeholder: "Back of card (answer)",
            submit_label: match mode {
                FormMode::Create => "Add Card",
                FormMode::Edit => "Update Card",
            },
            multiline_primary: true,
        },
    }
}
