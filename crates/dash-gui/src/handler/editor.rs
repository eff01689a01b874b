//! Product editor drawer message handler.
//!
//! Handles:
//! - Opening and closing the drawer
//! - Form input and category selection
//! - Submit and the two-step delete
//! - Command results (toasts and catalogue refresh)

use iced::Task;

use dash_editor::{Blocked, Command, CommandResult};

use super::MessageHandler;
use super::table::load_products;
use crate::component::ToastSink;
use crate::message::{EditorMessage, Message};
use crate::service;
use crate::state::AppState;

/// Handler for editor drawer messages.
pub struct EditorHandler;

impl MessageHandler<EditorMessage> for EditorHandler {
    fn handle(&self, state: &mut AppState, msg: EditorMessage) -> Task<Message> {
        match msg {
            EditorMessage::Open(id) => {
                let product = state.find_product(&id).cloned();
                if product.is_none() {
                    tracing::warn!(product = %id, "Product not in catalogue");
                }
                match state.drawer.open(product, &state.auth) {
                    Some(command) => run(state, command),
                    None => Task::none(),
                }
            }

            EditorMessage::Close => {
                state.drawer.close();
                Task::none()
            }

            EditorMessage::FieldChanged(field, value) => {
                if let Some(session) = state.drawer.session_mut() {
                    session.set_field(field, value);
                }
                Task::none()
            }

            EditorMessage::CategorySelected(category) => {
                if let Some(session) = state.drawer.session_mut() {
                    session.select_category(&category);
                }
                Task::none()
            }

            EditorMessage::Submit => match state.drawer.request_submit() {
                Ok(command) => run(state, command),
                Err(blocked) => {
                    log_blocked("submit", blocked);
                    Task::none()
                }
            },

            EditorMessage::DeleteRequested => {
                if let Err(blocked) = state.drawer.request_delete() {
                    log_blocked("delete", blocked);
                }
                Task::none()
            }

            EditorMessage::DeleteCancelled => {
                state.drawer.cancel_delete();
                Task::none()
            }

            EditorMessage::DeleteConfirmed => match state.drawer.confirm_delete() {
                Ok(command) => run(state, command),
                Err(blocked) => {
                    log_blocked("delete", blocked);
                    Task::none()
                }
            },

            EditorMessage::CommandDone(result) => complete(state, result),
        }
    }
}

/// Run a drawer command against the API.
///
/// Without an API client the command fails on the spot.
fn run(state: &mut AppState, command: Command) -> Task<Message> {
    match state.product_api() {
        Ok(api) => Task::perform(service::run_command(api, command), |result| {
            Message::editor(EditorMessage::CommandDone(result))
        }),
        Err(err) => complete(state, command.failed(err.to_string())),
    }
}

fn complete(state: &mut AppState, result: CommandResult) -> Task<Message> {
    let mut refresh = false;
    state
        .drawer
        .complete(result, &mut ToastSink(&mut state.toast), || refresh = true);

    if refresh {
        load_products(state)
    } else {
        Task::none()
    }
}

fn log_blocked(action: &str, blocked: Blocked) {
    match blocked {
        // Field errors are already on screen.
        Blocked::Invalid => {}
        Blocked::NotAuthorized(denial) => {
            tracing::debug!(action, %denial, "Request denied");
        }
        Blocked::Busy | Blocked::Closed => {
            tracing::debug!(action, ?blocked, "Request ignored");
        }
    }
}

#[cfg(test)]
mod tests {
    use dash_api::ApiConfig;
    use dash_editor::{CategoryOptions, Phase};
    use dash_model::{Category, EDIT_PRODUCTS, FormField, Product, RecordId};
    use dash_table::TableStatus;

    use super::*;
    use crate::component::ToastType;
    use crate::handler::ProductsHandler;
    use crate::message::TableMessage;
    use crate::state::{AuthSettings, Settings};

    fn product(id: u64, creator: &str) -> Product {
        Product {
            id: RecordId::from(id),
            title: "Desk lamp".to_string(),
            description: "Warm white".to_string(),
            price: 24.5,
            quantity: 8,
            category: Some(Category {
                id: RecordId::from(3),
                title: "Lighting".to_string(),
            }),
            creator_id: creator.to_string(),
        }
    }

    fn offline_state(user: &str) -> AppState {
        let mut state = AppState::with_settings(Settings {
            api: ApiConfig::with_base_url("not-a-url"),
            auth: AuthSettings {
                user_id: user.to_string(),
                access_token: "token".to_string(),
                permissions: vec![EDIT_PRODUCTS.to_string()],
            },
            ..Settings::default()
        });
        let products = vec![product(1, "u1"), product(2, "someone-else")];
        let _ = ProductsHandler.handle(&mut state, TableMessage::Loaded(Ok(products)));
        state
    }

    fn send(state: &mut AppState, msg: EditorMessage) {
        let _ = EditorHandler.handle(state, msg);
    }

    #[test]
    fn test_open_without_api_marks_categories_unavailable() {
        let mut state = offline_state("u1");
        send(&mut state, EditorMessage::Open(RecordId::from(1)));

        let session = state.drawer.session().unwrap();
        assert!(matches!(session.categories(), CategoryOptions::Unavailable));
        assert_eq!(session.phase(), Phase::Editing);
        // Category failures stay off the toast
        assert!(state.toast.current().is_none());
    }

    #[test]
    fn test_open_unknown_product_closes_drawer() {
        let mut state = offline_state("u1");
        send(&mut state, EditorMessage::Open(RecordId::from(1)));
        send(&mut state, EditorMessage::Open(RecordId::from(99)));

        assert!(!state.drawer.is_open());
    }

    #[test]
    fn test_failed_update_keeps_input_and_notifies() {
        let mut state = offline_state("u1");
        send(&mut state, EditorMessage::Open(RecordId::from(1)));
        send(
            &mut state,
            EditorMessage::FieldChanged(FormField::Title, "Floor lamp".to_string()),
        );
        send(&mut state, EditorMessage::Submit);

        let toast = state.toast.current().unwrap();
        assert_eq!(toast.toast_type, ToastType::Error);
        assert_eq!(toast.title, "Update failed");

        let session = state.drawer.session().unwrap();
        assert_eq!(session.phase(), Phase::Editing);
        assert_eq!(session.form().value(FormField::Title), "Floor lamp");
    }

    #[test]
    fn test_invalid_submit_shows_field_error_only() {
        let mut state = offline_state("u1");
        send(&mut state, EditorMessage::Open(RecordId::from(1)));
        send(
            &mut state,
            EditorMessage::FieldChanged(FormField::Title, "   ".to_string()),
        );
        send(&mut state, EditorMessage::Submit);

        let session = state.drawer.session().unwrap();
        assert!(session.field_error(FormField::Title).is_some());
        assert!(state.toast.current().is_none());
    }

    #[test]
    fn test_denied_submit_never_sends() {
        let mut state = offline_state("u1");
        send(&mut state, EditorMessage::Open(RecordId::from(2)));
        send(&mut state, EditorMessage::Submit);
        send(&mut state, EditorMessage::DeleteRequested);

        let session = state.drawer.session().unwrap();
        assert_eq!(session.phase(), Phase::Editing);
        assert!(state.toast.current().is_none());
    }

    #[test]
    fn test_delete_confirmation_can_be_cancelled() {
        let mut state = offline_state("u1");
        send(&mut state, EditorMessage::Open(RecordId::from(1)));

        send(&mut state, EditorMessage::DeleteRequested);
        assert_eq!(
            state.drawer.session().unwrap().phase(),
            Phase::ConfirmingDelete
        );

        send(&mut state, EditorMessage::DeleteCancelled);
        assert_eq!(state.drawer.session().unwrap().phase(), Phase::Editing);
    }

    #[test]
    fn test_successful_update_closes_and_refreshes() {
        let mut state = offline_state("u1");
        send(&mut state, EditorMessage::Open(RecordId::from(1)));
        let session = state.drawer.session().unwrap().id();

        send(
            &mut state,
            EditorMessage::CommandDone(CommandResult::Updated {
                session,
                id: RecordId::from(1),
                result: Ok(()),
            }),
        );

        assert!(!state.drawer.is_open());
        assert_eq!(state.toast.current().unwrap().toast_type, ToastType::Success);
        // The refresh ran (and failed, since there is no API client)
        assert!(matches!(state.products.status(), TableStatus::Error(_)));
    }
}
