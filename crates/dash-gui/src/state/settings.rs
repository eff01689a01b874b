//! Application settings - persisted user preferences.
//!
//! Settings are loaded from disk at startup and saved when changed.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use dash_api::ApiConfig;
use dash_model::AuthorizationContext;
use dash_table::TableConfig;

use crate::error::GuiError;
use crate::theme::ThemeMode;

/// Environment variable that overrides `[auth] access_token`.
pub const ACCESS_TOKEN_ENV: &str = "DASHBOARD_ACCESS_TOKEN";

// =============================================================================
// ROOT SETTINGS
// =============================================================================

/// Application settings.
///
/// Serialized to TOML and stored in the user's config directory.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// API connection.
    pub api: ApiConfig,

    /// Identity handed over by the authorization collaborator.
    pub auth: AuthSettings,

    /// Table behaviour.
    pub table: TableConfig,

    /// Display settings.
    pub display: DisplaySettings,
}

impl Settings {
    /// Load settings from a specific path, falling back to defaults.
    pub fn load_from(path: &Path) -> Self {
        Self::try_load_from(path).unwrap_or_default()
    }

    /// Load settings from a specific path.
    ///
    /// A missing file is not an error.
    pub fn try_load_from(path: &Path) -> Result<Self, GuiError> {
        let content = match std::fs::read_to_string(path) {
            Ok(content) => content,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => return Ok(Self::default()),
            Err(err) => {
                return Err(GuiError::SettingsLoad {
                    reason: err.to_string(),
                });
            }
        };
        toml::from_str(&content).map_err(|e| GuiError::SettingsLoad {
            reason: e.to_string(),
        })
    }

    /// Save settings to the default path.
    pub fn save(&self) -> Result<(), GuiError> {
        self.save_to(&Self::config_path())
    }

    /// Save settings to a specific path.
    pub fn save_to(&self, path: &Path) -> Result<(), GuiError> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| GuiError::SettingsSave {
                reason: format!("Failed to create config directory: {e}"),
            })?;
        }

        let content = toml::to_string_pretty(self).map_err(|e| GuiError::SettingsSave {
            reason: format!("Failed to serialize settings: {e}"),
        })?;

        std::fs::write(path, content).map_err(|e| GuiError::SettingsSave {
            reason: format!("Failed to write settings: {e}"),
        })
    }

    /// Get the default config file path.
    pub fn config_path() -> PathBuf {
        directories::ProjectDirs::from("com", "DashboardConsole", "Dashboard")
            .map(|dirs| dirs.config_dir().join("settings.toml"))
            .unwrap_or_else(|| PathBuf::from("settings.toml"))
    }

    /// Authorization context for this session, honouring the token override
    /// from the environment.
    pub fn authorization(&self) -> AuthorizationContext {
        self.auth
            .context(std::env::var(ACCESS_TOKEN_ENV).ok().filter(|t| !t.is_empty()))
    }
}

// =============================================================================
// AUTH SETTINGS
// =============================================================================

/// Output of the external authorization step.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AuthSettings {
    /// Id of the signed-in user.
    pub user_id: String,

    /// Bearer credential sent with every request.
    pub access_token: String,

    /// Granted permissions, e.g. `products.edit`.
    pub permissions: Vec<String>,
}

impl AuthSettings {
    /// Build the context, preferring `token_override` over the stored token.
    pub fn context(&self, token_override: Option<String>) -> AuthorizationContext {
        AuthorizationContext::new(
            self.user_id.clone(),
            token_override.unwrap_or_else(|| self.access_token.clone()),
            self.permissions.iter().cloned(),
        )
    }
}

// =============================================================================
// DISPLAY SETTINGS
// =============================================================================

/// Display settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplaySettings {
    /// Default log filter, overridden by `RUST_LOG`.
    pub log_level: String,

    /// Theme mode (light/dark).
    pub theme_mode: ThemeMode,
}

impl Default for DisplaySettings {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            theme_mode: ThemeMode::Light,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dash_model::{EDIT_PRODUCTS, PageSize};

    #[test]
    fn test_missing_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let settings = Settings::try_load_from(&dir.path().join("settings.toml")).unwrap();
        assert_eq!(settings, Settings::default());
        assert_eq!(settings.table.debounce_ms, 200);
    }

    #[test]
    fn test_partial_file_keeps_other_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.toml");
        std::fs::write(
            &path,
            r#"
[api]
base_url = "https://shop.example.com/api"

[auth]
user_id = "u1"
permissions = ["products.edit"]

[table]
default_page_size = 20
"#,
        )
        .unwrap();

        let settings = Settings::load_from(&path);
        assert_eq!(settings.api.base_url, "https://shop.example.com/api");
        assert_eq!(settings.api.products_path, "products");
        assert_eq!(settings.table.default_page_size, PageSize::Twenty);
        assert_eq!(settings.display.log_level, "info");

        let auth = settings.auth.context(None);
        assert_eq!(auth.user_id, "u1");
        assert!(auth.has_permission(EDIT_PRODUCTS));
    }

    #[test]
    fn test_unparseable_file_is_an_error_but_load_falls_back() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.toml");
        std::fs::write(&path, "[api\nbase_url = ").unwrap();

        assert!(matches!(
            Settings::try_load_from(&path),
            Err(GuiError::SettingsLoad { .. })
        ));
        assert_eq!(Settings::load_from(&path), Settings::default());
    }

    #[test]
    fn test_save_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("settings.toml");

        let mut settings = Settings::default();
        settings.display.theme_mode = ThemeMode::Dark;
        settings.auth.user_id = "u7".to_string();
        settings.save_to(&path).unwrap();

        assert_eq!(Settings::load_from(&path), settings);
    }

    #[test]
    fn test_token_override() {
        let auth = AuthSettings {
            user_id: "u1".to_string(),
            access_token: "stored".to_string(),
            permissions: Vec::new(),
        };
        assert_eq!(auth.context(None).access_token, "stored");
        assert_eq!(
            auth.context(Some("from-env".to_string())).access_token,
            "from-env"
        );
    }
}
