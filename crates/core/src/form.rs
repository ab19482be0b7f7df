//! Two-field create-or-edit form used for both decks and cards.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FormKind {
    /// Title (required) and description (optional).
    Deck,
    /// Front and back, both required.
    Card,
}

impl FormKind {
    #[must_use]
    pub fn requires_secondary(self) -> bool {
        matches!(self, Self::Card)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FormMode {
    Create,
    Edit,
}

/// Trimmed field values handed to the owner on a valid submit.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FormSubmission {
    pub primary: String,
    pub secondary: String,
}

impl FormSubmission {
    #[must_use]
    pub fn new(primary: impl Into<String>, secondary: impl Into<String>) -> Self {
        Self {
            primary: primary.into(),
            secondary: secondary.into(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EntityForm {
    kind: FormKind,
    initial: Option<FormSubmission>,
    primary: String,
    secondary: String,
}

impl EntityForm {
    /// A form in edit mode when `initial` is present, create mode otherwise.
    #[must_use]
    pub fn new(kind: FormKind, initial: Option<FormSubmission>) -> Self {
        let (primary, secondary) = initial
            .as_ref()
            .map(|values| (values.primary.clone(), values.secondary.clone()))
            .unwrap_or_default();
        Self {
            kind,
            initial,
            primary,
            secondary,
        }
    }

    /// Follow a new target entity without rebuilding the form.
    ///
    /// Fields are overwritten only when new initial values arrive; dropping
    /// back to create mode keeps whatever was typed.
    pub fn sync_initial(&mut self, initial: Option<FormSubmission>) {
        if self.initial == initial {
            return;
        }
        if let Some(values) = &initial {
            self.primary.clone_from(&values.primary);
            self.secondary.clone_from(&values.secondary);
        }
        self.initial = initial;
    }

    #[must_use]
    pub fn kind(&self) -> FormKind {
        self.kind
    }

    #[must_use]
    pub fn initial(&self) -> Option<&FormSubmission> {
        self.initial.as_ref()
    }

    #[must_use]
    pub fn mode(&self) -> FormMode {
        if self.initial.is_some() {
            FormMode::Edit
        } else {
            FormMode::Create
        }
    }

    #[must_use]
    pub fn primary(&self) -> &str {
        &self.primary
    }

    #[must_use]
    pub fn secondary(&self) -> &str {
        &self.secondary
    }

    pub fn set_primary(&mut self, value: impl Into<String>) {
        self.primary = value.into();
    }

    pub fn set_secondary(&mut self, value: impl Into<String>) {
        self.secondary = value.into();
    }

    #[must_use]
    pub fn can_submit(&self) -> bool {
        !self.primary.trim().is_empty()
            && (!self.kind.requires_secondary() || !self.secondary.trim().is_empty())
    }

    /// Trimmed values when the required fields are filled, `None` otherwise.
    ///
    /// Invalid submits are swallowed without feedback. Create-mode forms are
    /// cleared for the next entry.
    pub fn submit(&mut self) -> Option<FormSubmission> {
        if !self.can_submit() {
            return None;
        }
        let submission = FormSubmission::new(self.primary.trim(), self.secondary.trim());
        if self.mode() == FormMode::Create {
            self.primary.clear();
            self.secondary.clear();
        }
        Some(submission)
    }
}
