//! HTTP client for the dashboard API.

use async_trait::async_trait;
use reqwest::header::{ACCEPT, HeaderMap, HeaderValue, USER_AGENT};
use serde::de::DeserializeOwned;

use dash_model::{Category, Contribution, Product, ProductUpdate, RecordId};

use crate::config::ApiConfig;
use crate::error::{ApiError, Result};
use crate::source::{DataSource, ProductApi};
use crate::types::{CategoriesResponse, ErrorBody, ListEnvelope};

/// User agent string for API requests.
const USER_AGENT_VALUE: &str = concat!("dashboard-console/", env!("CARGO_PKG_VERSION"));

/// API client. Every request carries the configured bearer token.
#[derive(Clone)]
pub struct ApiClient {
    client: reqwest::Client,
    config: ApiConfig,
    access_token: String,
}

impl std::fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiClient")
            .field("base_url", &self.config.base_url)
            .finish_non_exhaustive()
    }
}

impl ApiClient {
    /// Creates a new client.
    ///
    /// # Arguments
    /// * `config` - Base URL, paths and timeout
    /// * `access_token` - Bearer credential from the authorization context
    pub fn new(config: ApiConfig, access_token: impl Into<String>) -> Result<Self> {
        if !config.base_url.starts_with("http://") && !config.base_url.starts_with("https://") {
            return Err(ApiError::Config(format!(
                "base URL must start with http:// or https://, got '{}'",
                config.base_url
            )));
        }

        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        headers.insert(USER_AGENT, HeaderValue::from_static(USER_AGENT_VALUE));

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(config.timeout())
            .build()
            .map_err(|e| ApiError::Config(format!("failed to create HTTP client: {e}")))?;

        Ok(Self {
            client,
            config,
            access_token: access_token.into(),
        })
    }

    fn request(&self, method: reqwest::Method, url: &str) -> reqwest::RequestBuilder {
        tracing::debug!(%method, url, "API request");
        self.client
            .request(method, url)
            .bearer_auth(&self.access_token)
    }

    async fn get_list<T: DeserializeOwned>(&self, path: &str) -> Result<Vec<T>> {
        let url = self.config.url(&[path]);
        let response = self.request(reqwest::Method::GET, &url).send().await?;
        let envelope: ListEnvelope<T> = Self::handle_response(response).await?.json().await?;
        Ok(envelope.into_vec())
    }

    /// Checks the HTTP status, turning failures into [`ApiError::Status`]
    /// with the server's message when the body carries one.
    async fn handle_response(response: reqwest::Response) -> Result<reqwest::Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        let message = ErrorBody::message_from(&body);
        tracing::debug!(status = status.as_u16(), ?message, "API request failed");

        Err(ApiError::Status {
            status: status.as_u16(),
            message,
        })
    }
}

#[async_trait]
impl DataSource for ApiClient {
    async fn fetch_contributions(&self) -> Result<Vec<Contribution>> {
        self.get_list(&self.config.contributions_path).await
    }

    async fn fetch_products(&self) -> Result<Vec<Product>> {
        self.get_list(&self.config.products_path).await
    }
}

#[async_trait]
impl ProductApi for ApiClient {
    async fn categories(&self) -> Result<Vec<Category>> {
        let url = self.config.url(&[self.config.categories_path.as_str()]);
        let response = self.request(reqwest::Method::GET, &url).send().await?;
        let body: CategoriesResponse = Self::handle_response(response).await?.json().await?;

        if !body.succeeded {
            return Err(ApiError::Rejected(body.message.unwrap_or_default()));
        }
        Ok(body.data)
    }

    async fn update_product(&self, id: &RecordId, update: &ProductUpdate) -> Result<()> {
        let url = self.config.url(&[self.config.products_path.as_str(), id.as_str()]);
        let response = self
            .request(reqwest::Method::PUT, &url)
            .json(update)
            .send()
            .await?;
        Self::handle_response(response).await?;
        tracing::info!(product = %id, "Product updated");
        Ok(())
    }

    async fn delete_product(&self, id: &RecordId) -> Result<()> {
        let url = self.config.url(&[self.config.products_path.as_str(), id.as_str()]);
        let response = self.request(reqwest::Method::DELETE, &url).send().await?;
        Self::handle_response(response).await?;
        tracing::info!(product = %id, "Product deleted");
        Ok(())
    }
}
