//! One open editor: the product being edited, its form and its phase.

use std::fmt;

use dash_model::{
    AuthorizationContext, Category, FieldError, FormErrors, FormField, Product, ProductForm,
    RecordId,
};

/// Identifies one opening of the drawer. Results tagged with an older id
/// are stale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SessionId(pub(crate) u64);

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Where the session is in its edit/delete workflow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    /// Form is editable.
    #[default]
    Editing,
    /// Update request in flight.
    Submitting,
    /// Waiting for the user to confirm deletion.
    ConfirmingDelete,
    /// Delete request in flight.
    Deleting,
}

impl Phase {
    /// Whether a network request is outstanding.
    pub fn is_busy(self) -> bool {
        matches!(self, Self::Submitting | Self::Deleting)
    }
}

/// Why the current user may not perform an action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Denial {
    /// The user did not create the product.
    NotCreator,
    /// The user lacks the edit permission.
    MissingPermission,
}

impl Denial {
    /// Explanation shown next to disabled controls.
    pub fn message(self) -> &'static str {
        match self {
            Self::NotCreator => "Only the creator of this product can change it.",
            Self::MissingPermission => "You do not have permission to edit products.",
        }
    }
}

impl fmt::Display for Denial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

/// Options for the category selector.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum CategoryOptions {
    /// Fetch in flight; the selector is disabled.
    #[default]
    Loading,
    Ready(Vec<Category>),
    /// Fetch failed; the selector is empty but the form stays usable.
    Unavailable,
}

impl CategoryOptions {
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    /// Selectable categories; empty unless loaded.
    pub fn as_slice(&self) -> &[Category] {
        match self {
            Self::Ready(categories) => categories,
            Self::Loading | Self::Unavailable => &[],
        }
    }
}

/// State of the drawer while a product is open.
///
/// Authorization is computed once on open and never re-evaluated for the
/// lifetime of the session.
#[derive(Debug, Clone)]
pub struct EditorSession {
    id: SessionId,
    product: Product,
    form: ProductForm,
    errors: FormErrors,
    user_id: String,
    is_creator: bool,
    has_edit_permission: bool,
    phase: Phase,
    categories: CategoryOptions,
}

impl EditorSession {
    pub(crate) fn new(id: SessionId, product: Product, auth: &AuthorizationContext) -> Self {
        Self {
            id,
            form: ProductForm::from_product(&product),
            errors: FormErrors::new(),
            user_id: auth.user_id.clone(),
            is_creator: auth.is_creator(&product.creator_id),
            has_edit_permission: auth.has_edit_permission(),
            phase: Phase::Editing,
            categories: CategoryOptions::Loading,
            product,
        }
    }

    pub fn id(&self) -> SessionId {
        self.id
    }

    /// The product as it was when the drawer opened.
    pub fn product(&self) -> &Product {
        &self.product
    }

    pub fn product_id(&self) -> &RecordId {
        &self.product.id
    }

    pub fn form(&self) -> &ProductForm {
        &self.form
    }

    pub fn errors(&self) -> &FormErrors {
        &self.errors
    }

    pub fn field_error(&self, field: FormField) -> Option<&FieldError> {
        self.errors.get(&field)
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn categories(&self) -> &CategoryOptions {
        &self.categories
    }

    pub fn is_creator(&self) -> bool {
        self.is_creator
    }

    pub fn has_edit_permission(&self) -> bool {
        self.has_edit_permission
    }

    /// Why submitting is not allowed, if it is not.
    pub fn submit_denial(&self) -> Option<Denial> {
        if !self.is_creator {
            Some(Denial::NotCreator)
        } else if !self.has_edit_permission {
            Some(Denial::MissingPermission)
        } else {
            None
        }
    }

    /// Why deleting is not allowed, if it is not.
    pub fn delete_denial(&self) -> Option<Denial> {
        (!self.is_creator).then_some(Denial::NotCreator)
    }

    /// Whether the submit control is enabled.
    pub fn can_submit(&self) -> bool {
        self.submit_denial().is_none() && self.phase == Phase::Editing
    }

    /// Whether the delete control is enabled.
    pub fn can_delete(&self) -> bool {
        self.delete_denial().is_none() && self.phase == Phase::Editing
    }

    /// Whether inputs accept edits.
    pub fn is_editable(&self) -> bool {
        self.phase == Phase::Editing
    }

    /// Replace a field's text. The field's previous error is cleared.
    pub fn set_field(&mut self, field: FormField, value: String) {
        if !self.is_editable() {
            return;
        }
        self.form.set(field, value);
        self.errors.remove(&field);
    }

    pub fn select_category(&mut self, category: &Category) {
        self.set_field(FormField::Category, category.id.to_string());
    }

    /// Category currently selected in the form, if it is among the options.
    pub fn selected_category(&self) -> Option<&Category> {
        let selected = self.form.category.as_ref()?;
        self.categories
            .as_slice()
            .iter()
            .find(|c| &c.id == selected)
    }

    pub(crate) fn user_id(&self) -> &str {
        &self.user_id
    }

    pub(crate) fn set_errors(&mut self, errors: FormErrors) {
        self.errors = errors;
    }

    pub(crate) fn set_phase(&mut self, phase: Phase) {
        self.phase = phase;
    }

    pub(crate) fn set_categories(&mut self, categories: CategoryOptions) {
        self.categories = categories;
    }
}
