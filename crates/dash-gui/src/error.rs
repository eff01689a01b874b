//! GUI error types.

use thiserror::Error;

/// Errors surfaced by the GUI shell.
///
/// Fetch and write failures are reported by the API client and carried as
/// display strings in messages; this type covers what the shell itself can
/// get wrong.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum GuiError {
    /// Settings file could not be read or parsed.
    #[error("Failed to load settings: {reason}")]
    SettingsLoad { reason: String },

    /// Settings file could not be written.
    #[error("Failed to save settings: {reason}")]
    SettingsSave { reason: String },

    /// The API client could not be created from the configured settings.
    #[error("API unavailable: {reason}")]
    ApiUnavailable { reason: String },
}

impl GuiError {
    /// Create an API-unavailable error.
    pub fn api_unavailable(err: impl std::fmt::Display) -> Self {
        Self::ApiUnavailable {
            reason: err.to_string(),
        }
    }

    /// Get a user-facing suggestion for resolving this error.
    pub fn suggestion(&self) -> Option<&'static str> {
        match self {
            Self::SettingsLoad { .. } => Some("Defaults are in use. Check settings.toml for syntax errors."),
            Self::SettingsSave { .. } => Some("Check that the config directory is writable."),
            Self::ApiUnavailable { .. } => Some("Check [api] base_url in settings.toml."),
        }
    }
}
