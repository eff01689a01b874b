//! Application-level state.
//!
//! This module contains `AppState` which is the root of all state.

use std::sync::Arc;

use dash_api::{ApiClient, DataSource, ProductApi};
use dash_editor::EditorDrawer;
use dash_model::{AuthorizationContext, Contribution, Product, RecordId};
use dash_table::TableController;

use super::navigation::View;
use super::settings::Settings;
use crate::component::ToastSlot;
use crate::error::GuiError;

/// Top-level application state.
///
/// This is the root of all state in the application.
pub struct AppState {
    /// Application settings (persisted)
    pub settings: Settings,

    /// Who is signed in and what they may do
    pub auth: AuthorizationContext,

    /// Shared API client, or why it could not be built
    pub api: Result<Arc<ApiClient>, GuiError>,

    /// Current view/screen
    pub view: View,

    /// Contributions table
    pub contributions: TableController<Contribution>,

    /// Product catalogue
    pub products: TableController<Product>,

    /// Product editor drawer
    pub drawer: EditorDrawer,

    /// Active toast notification
    pub toast: ToastSlot,
}

impl AppState {
    /// Build the initial state from loaded settings.
    pub fn with_settings(settings: Settings) -> Self {
        let auth = settings.authorization();
        let api = ApiClient::new(settings.api.clone(), auth.access_token.clone())
            .map(Arc::new)
            .map_err(GuiError::api_unavailable);
        if let Err(err) = &api {
            tracing::error!(%err, "API client unavailable");
        }

        Self {
            contributions: TableController::new(&settings.table),
            products: TableController::new(&settings.table),
            drawer: EditorDrawer::new(),
            toast: ToastSlot::default(),
            view: View::default(),
            auth,
            api,
            settings,
        }
    }

    /// Data source for the table fetches.
    pub fn data_source(&self) -> Result<Arc<dyn DataSource>, GuiError> {
        match &self.api {
            Ok(client) => Ok(client.clone() as Arc<dyn DataSource>),
            Err(err) => Err(err.clone()),
        }
    }

    /// Product API for the editor drawer.
    pub fn product_api(&self) -> Result<Arc<dyn ProductApi>, GuiError> {
        match &self.api {
            Ok(client) => Ok(client.clone() as Arc<dyn ProductApi>),
            Err(err) => Err(err.clone()),
        }
    }

    /// Look up a product in the current catalogue.
    pub fn find_product(&self, id: &RecordId) -> Option<&Product> {
        self.products.records().iter().find(|p| &p.id == id)
    }

    /// Whether the editor drawer is open.
    pub fn is_drawer_open(&self) -> bool {
        self.drawer.is_open()
    }
}

#[cfg(test)]
mod tests {
    use dash_api::ApiConfig;

    use super::*;

    #[test]
    fn test_invalid_base_url_leaves_api_unavailable() {
        let settings = Settings {
            api: ApiConfig::with_base_url("ftp://example.com"),
            ..Settings::default()
        };
        let state = AppState::with_settings(settings);

        assert!(matches!(state.api, Err(GuiError::ApiUnavailable { .. })));
        assert!(state.data_source().is_err());
        assert!(state.product_api().is_err());
    }

    #[test]
    fn test_initial_state() {
        let state = AppState::with_settings(Settings::default());

        assert!(state.api.is_ok());
        assert_eq!(state.view, View::Contributions);
        assert!(!state.is_drawer_open());
        assert!(state.toast.current().is_none());
        assert!(state.contributions.records().is_empty());
    }
}
