//! Requests the drawer asks its host to run, and their results.

use dash_api::ProductApi;
use dash_model::{Category, ProductUpdate, RecordId};

use crate::session::SessionId;

/// A network request issued by the drawer.
///
/// Each accepted submit or confirmed delete yields exactly one command; the
/// host runs it with [`Command::execute`] and feeds the result back through
/// [`EditorDrawer::complete`](crate::EditorDrawer::complete).
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    LoadCategories {
        session: SessionId,
    },
    Update {
        session: SessionId,
        id: RecordId,
        update: ProductUpdate,
    },
    Delete {
        session: SessionId,
        id: RecordId,
    },
}

/// Outcome of a [`Command`]. Errors carry the message to show the user.
#[derive(Debug, Clone, PartialEq)]
pub enum CommandResult {
    Categories {
        session: SessionId,
        result: Result<Vec<Category>, String>,
    },
    Updated {
        session: SessionId,
        id: RecordId,
        result: Result<(), String>,
    },
    Deleted {
        session: SessionId,
        id: RecordId,
        result: Result<(), String>,
    },
}

impl Command {
    pub fn session(&self) -> SessionId {
        match self {
            Self::LoadCategories { session }
            | Self::Update { session, .. }
            | Self::Delete { session, .. } => *session,
        }
    }

    /// Result for a command that could not be sent at all.
    pub fn failed(self, message: impl Into<String>) -> CommandResult {
        let message = message.into();
        match self {
            Self::LoadCategories { session } => CommandResult::Categories {
                session,
                result: Err(message),
            },
            Self::Update { session, id, .. } => CommandResult::Updated {
                session,
                id,
                result: Err(message),
            },
            Self::Delete { session, id } => CommandResult::Deleted {
                session,
                id,
                result: Err(message),
            },
        }
    }

    /// Run the request against `api`.
    pub async fn execute(self, api: &dyn ProductApi) -> CommandResult {
        match self {
            Self::LoadCategories { session } => CommandResult::Categories {
                session,
                result: api.categories().await.map_err(|e| e.to_string()),
            },
            Self::Update {
                session,
                id,
                update,
            } => {
                let result = api
                    .update_product(&id, &update)
                    .await
                    .map_err(|e| e.user_message().to_string());
                CommandResult::Updated {
                    session,
                    id,
                    result,
                }
            }
            Self::Delete { session, id } => {
                let result = api
                    .delete_product(&id)
                    .await
                    .map_err(|e| e.user_message().to_string());
                CommandResult::Deleted {
                    session,
                    id,
                    result,
                }
            }
        }
    }
}
