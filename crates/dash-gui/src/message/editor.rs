//! Product editor drawer messages.

use dash_editor::CommandResult;
use dash_model::{Category, FormField, RecordId};

/// Messages for the product editor drawer.
#[derive(Debug, Clone)]
pub enum EditorMessage {
    /// Open the drawer on a product from the current list
    Open(RecordId),

    Close,

    FieldChanged(FormField, String),

    CategorySelected(Category),

    Submit,

    /// Ask for delete confirmation
    DeleteRequested,

    DeleteCancelled,

    DeleteConfirmed,

    /// A drawer command finished
    CommandDone(CommandResult),
}
