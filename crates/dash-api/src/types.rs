//! Response envelopes used by the API.

use serde::Deserialize;

use dash_model::Category;

/// A list endpoint's body: either a bare array or `{ "data": [...] }`.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub(crate) enum ListEnvelope<T> {
    Bare(Vec<T>),
    Wrapped { data: Vec<T> },
}

impl<T> ListEnvelope<T> {
    pub(crate) fn into_vec(self) -> Vec<T> {
        match self {
            Self::Bare(items) | Self::Wrapped { data: items } => items,
        }
    }
}

/// Body of the categories endpoint.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub(crate) struct CategoriesResponse {
    pub succeeded: bool,
    pub data: Vec<Category>,
    pub message: Option<String>,
}

/// Error body of failed writes.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub(crate) struct ErrorBody {
    pub error: Option<String>,
    pub message: Option<String>,
}

impl ErrorBody {
    /// Parse an error body, ignoring anything that is not JSON.
    pub(crate) fn message_from(body: &str) -> Option<String> {
        let parsed: Self = serde_json::from_str(body).ok()?;
        parsed
            .error
            .or(parsed.message)
            .filter(|m| !m.trim().is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_envelope_shapes() {
        let bare: ListEnvelope<u32> = serde_json::from_str("[1, 2]").unwrap();
        assert_eq!(bare.into_vec(), vec![1, 2]);

        let wrapped: ListEnvelope<u32> = serde_json::from_str(r#"{"data": [3]}"#).unwrap();
        assert_eq!(wrapped.into_vec(), vec![3]);
    }

    #[test]
    fn test_error_body() {
        assert_eq!(
            ErrorBody::message_from(r#"{"error": "Not yours"}"#).as_deref(),
            Some("Not yours")
        );
        assert_eq!(ErrorBody::message_from(r#"{"error": ""}"#), None);
        assert_eq!(ErrorBody::message_from("<html>"), None);
    }

    #[test]
    fn test_categories_defaults() {
        let response: CategoriesResponse = serde_json::from_str("{}").unwrap();
        assert!(!response.succeeded);
        assert!(response.data.is_empty());
    }
}
