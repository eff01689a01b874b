//! Services for background tasks.
//!
//! These services provide async functions for use with Iced's `Task::perform`
//! pattern. Inputs are owned so the futures are `'static`; errors come back
//! as the message to show the user.

use std::sync::Arc;

use dash_api::{DataSource, ProductApi};
use dash_editor::{Command, CommandResult};
use dash_model::{Contribution, Product};

/// Fetch the contributions list.
pub async fn fetch_contributions(source: Arc<dyn DataSource>) -> Result<Vec<Contribution>, String> {
    source
        .fetch_contributions()
        .await
        .map_err(|e| e.user_message().to_string())
}

/// Fetch the product catalogue.
pub async fn fetch_products(source: Arc<dyn DataSource>) -> Result<Vec<Product>, String> {
    source
        .fetch_products()
        .await
        .map_err(|e| e.user_message().to_string())
}

/// Run an editor drawer command.
pub async fn run_command(api: Arc<dyn ProductApi>, command: Command) -> CommandResult {
    command.execute(api.as_ref()).await
}

#[cfg(test)]
mod tests {
    use async_trait::async_trait;

    use dash_api::{ApiError, Result};
    use dash_model::{Category, ProductUpdate, RecordId};

    use super::*;

    struct FailingSource;

    #[async_trait]
    impl DataSource for FailingSource {
        async fn fetch_contributions(&self) -> Result<Vec<Contribution>> {
            Err(ApiError::Status {
                status: 500,
                message: Some("Database offline".to_string()),
            })
        }

        async fn fetch_products(&self) -> Result<Vec<Product>> {
            Ok(vec![Product {
                id: RecordId::from(1),
                title: "Lamp".to_string(),
                ..Product::default()
            }])
        }
    }

    struct CategoryApi;

    #[async_trait]
    impl ProductApi for CategoryApi {
        async fn categories(&self) -> Result<Vec<Category>> {
            Ok(vec![Category {
                id: RecordId::from(3),
                title: "Lighting".to_string(),
            }])
        }

        async fn update_product(&self, _id: &RecordId, _update: &ProductUpdate) -> Result<()> {
            Ok(())
        }

        async fn delete_product(&self, _id: &RecordId) -> Result<()> {
            Ok(())
        }
    }

    #[tokio::test]
    async fn test_fetch_error_becomes_user_message() {
        let source: Arc<dyn DataSource> = Arc::new(FailingSource);

        let err = fetch_contributions(source.clone()).await.unwrap_err();
        assert_eq!(err, "Database offline");

        let products = fetch_products(source).await.unwrap();
        assert_eq!(products.len(), 1);
    }

    #[tokio::test]
    async fn test_run_command_loads_categories() {
        let mut drawer = dash_editor::EditorDrawer::new();
        let auth = dash_model::AuthorizationContext::new("u1", "t", ["products.edit"]);
        let command = drawer
            .open(Some(Product::default()), &auth)
            .expect("opening yields a category fetch");

        match run_command(Arc::new(CategoryApi), command).await {
            CommandResult::Categories { result, .. } => {
                assert_eq!(result.unwrap()[0].title, "Lighting");
            }
            other => panic!("unexpected result: {other:?}"),
        }
    }
}
