//! Message module for the dashboard console.
//!
//! This module defines the message hierarchy for the Elm-style architecture.
//! All user interactions and events flow through these message types.

pub mod editor;
pub mod table;

use dash_model::{Contribution, Product};

use crate::state::View;

pub use editor::EditorMessage;
pub use table::TableMessage;

/// Root message enum for the application.
#[derive(Debug, Clone)]
pub enum Message {
    // =========================================================================
    // Navigation
    // =========================================================================
    /// Navigate to a different screen
    Navigate(View),

    /// Switch between light and dark mode (persisted)
    ToggleTheme,

    // =========================================================================
    // Screen-specific messages
    // =========================================================================
    Contributions(TableMessage<Contribution>),

    Products(TableMessage<Product>),

    Editor(EditorMessage),

    // =========================================================================
    // Global events
    // =========================================================================
    Toast(ToastMessage),

    /// No operation - used for placeholder actions
    Noop,
}

/// Toast message for handling toast events.
#[derive(Debug, Clone)]
pub enum ToastMessage {
    /// Dismiss button.
    Dismiss,
    /// Timeout of the toast with this generation.
    Expired(u64),
}

impl Message {
    pub fn contributions(msg: TableMessage<Contribution>) -> Self {
        Self::Contributions(msg)
    }

    pub fn products(msg: TableMessage<Product>) -> Self {
        Self::Products(msg)
    }

    pub fn editor(msg: EditorMessage) -> Self {
        Self::Editor(msg)
    }
}
