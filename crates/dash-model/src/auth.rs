//! Authorization context supplied by the auth collaborator.

use std::collections::BTreeSet;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Permission required to submit product edits.
pub const EDIT_PRODUCTS: &str = "products.edit";

/// Who the current user is and what they may do.
///
/// Read-only for the rest of the application. The access token is forwarded
/// as a bearer credential on every API call and is redacted from `Debug`.
#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AuthorizationContext {
    pub user_id: String,
    pub access_token: String,
    pub permissions: BTreeSet<String>,
}

impl AuthorizationContext {
    pub fn new(
        user_id: impl Into<String>,
        access_token: impl Into<String>,
        permissions: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        Self {
            user_id: user_id.into(),
            access_token: access_token.into(),
            permissions: permissions.into_iter().map(Into::into).collect(),
        }
    }

    /// Whether the current user created a record owned by `owner_id`.
    ///
    /// An anonymous context (empty user id) is never the creator.
    pub fn is_creator(&self, owner_id: &str) -> bool {
        !self.user_id.is_empty() && self.user_id == owner_id
    }

    pub fn has_permission(&self, permission: &str) -> bool {
        self.permissions.contains(permission)
    }

    pub fn has_edit_permission(&self) -> bool {
        self.has_permission(EDIT_PRODUCTS)
    }
}

impl fmt::Debug for AuthorizationContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AuthorizationContext")
            .field("user_id", &self.user_id)
            .field("access_token", &"<redacted>")
            .field("permissions", &self.permissions)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_creator() {
        let auth = AuthorizationContext::new("u1", "tok", [EDIT_PRODUCTS]);
        assert!(auth.is_creator("u1"));
        assert!(!auth.is_creator("u2"));
        assert!(auth.has_edit_permission());
    }

    #[test]
    fn test_anonymous_is_never_creator() {
        let auth = AuthorizationContext::default();
        assert!(!auth.is_creator(""));
    }

    #[test]
    fn test_debug_redacts_token() {
        let auth = AuthorizationContext::new("u1", "secret-token", Vec::<String>::new());
        let debug = format!("{auth:?}");
        assert!(!debug.contains("secret-token"));
        assert!(debug.contains("u1"));
    }
}
