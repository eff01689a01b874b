//! The product editor drawer.

use dash_model::{AuthorizationContext, Notification, NotificationSink, Product};

use crate::command::{Command, CommandResult};
use crate::session::{CategoryOptions, Denial, EditorSession, Phase, SessionId};

/// Why a submit or delete request was refused without touching the network.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Blocked {
    /// The drawer is closed.
    Closed,
    NotAuthorized(Denial),
    /// The form has validation errors; they are now shown inline.
    Invalid,
    /// A request is already outstanding, or the session is in the wrong phase.
    Busy,
}

/// Drawer state: closed, or open on one product.
#[derive(Debug, Clone, Default)]
pub struct EditorDrawer {
    session: Option<EditorSession>,
    next_session: u64,
}

impl EditorDrawer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Open the drawer on `product`, or close it with `None`.
    ///
    /// Opening starts a new session and returns the category fetch to run
    /// for it. Reopening replaces the previous session, so results still in
    /// flight for it are ignored.
    pub fn open(&mut self, product: Option<Product>, auth: &AuthorizationContext) -> Option<Command> {
        let Some(product) = product else {
            self.close();
            return None;
        };

        self.next_session += 1;
        let id = SessionId(self.next_session);
        tracing::debug!(session = %id, product = %product.id, "Editor opened");

        let session = EditorSession::new(id, product, auth);
        if let Some(denial) = session.submit_denial() {
            tracing::debug!(session = %id, ?denial, "Editing not allowed");
        }
        self.session = Some(session);

        Some(Command::LoadCategories { session: id })
    }

    pub fn close(&mut self) {
        if let Some(session) = self.session.take() {
            tracing::debug!(session = %session.id(), "Editor closed");
        }
    }

    pub fn is_open(&self) -> bool {
        self.session.is_some()
    }

    pub fn session(&self) -> Option<&EditorSession> {
        self.session.as_ref()
    }

    pub fn session_mut(&mut self) -> Option<&mut EditorSession> {
        self.session.as_mut()
    }

    // =========================================================================
    // SUBMIT
    // =========================================================================

    /// Validate and issue the update request.
    ///
    /// Refused while unauthorized, invalid or busy. An accepted request moves
    /// the session to [`Phase::Submitting`] until [`complete`](Self::complete).
    pub fn request_submit(&mut self) -> Result<Command, Blocked> {
        let session = self.session.as_mut().ok_or(Blocked::Closed)?;

        if let Some(denial) = session.submit_denial() {
            return Err(Blocked::NotAuthorized(denial));
        }
        if session.phase() != Phase::Editing {
            return Err(Blocked::Busy);
        }

        let update = match session.form().validate(session.user_id()) {
            Ok(update) => update,
            Err(errors) => {
                tracing::debug!(session = %session.id(), fields = errors.len(), "Form invalid");
                session.set_errors(errors);
                return Err(Blocked::Invalid);
            }
        };

        session.set_errors(Default::default());
        session.set_phase(Phase::Submitting);
        Ok(Command::Update {
            session: session.id(),
            id: session.product_id().clone(),
            update,
        })
    }

    // =========================================================================
    // DELETE
    // =========================================================================

    /// Ask for delete confirmation.
    pub fn request_delete(&mut self) -> Result<(), Blocked> {
        let session = self.session.as_mut().ok_or(Blocked::Closed)?;
        if let Some(denial) = session.delete_denial() {
            return Err(Blocked::NotAuthorized(denial));
        }
        if session.phase() != Phase::Editing {
            return Err(Blocked::Busy);
        }
        session.set_phase(Phase::ConfirmingDelete);
        Ok(())
    }

    /// Back out of the delete confirmation.
    pub fn cancel_delete(&mut self) {
        if let Some(session) = self.session.as_mut()
            && session.phase() == Phase::ConfirmingDelete
        {
            session.set_phase(Phase::Editing);
        }
    }

    /// Confirm deletion and issue the delete request.
    pub fn confirm_delete(&mut self) -> Result<Command, Blocked> {
        let session = self.session.as_mut().ok_or(Blocked::Closed)?;
        if let Some(denial) = session.delete_denial() {
            return Err(Blocked::NotAuthorized(denial));
        }
        if session.phase() != Phase::ConfirmingDelete {
            return Err(Blocked::Busy);
        }
        session.set_phase(Phase::Deleting);
        Ok(Command::Delete {
            session: session.id(),
            id: session.product_id().clone(),
        })
    }

    // =========================================================================
    // COMPLETION
    // =========================================================================

    /// Apply the result of a command.
    ///
    /// A successful write notifies, closes the drawer and calls `on_refresh`
    /// exactly once. A failed write notifies and returns the session to
    /// editing with the user's input intact. Category failures are logged
    /// only; the selector shows that categories are unavailable.
    pub fn complete(
        &mut self,
        result: CommandResult,
        sink: &mut impl NotificationSink,
        on_refresh: impl FnOnce(),
    ) {
        match result {
            CommandResult::Categories { session, result } => {
                let Some(current) = self.current_mut(session) else {
                    tracing::debug!(%session, "Ignoring stale category result");
                    return;
                };
                let options = match result {
                    Ok(categories) => CategoryOptions::Ready(categories),
                    Err(error) => {
                        tracing::warn!(%session, %error, "Failed to load categories");
                        CategoryOptions::Unavailable
                    }
                };
                current.set_categories(options);
            }

            CommandResult::Updated {
                session,
                id,
                result,
            } => match result {
                Ok(()) => {
                    tracing::info!(%session, product = %id, "Update completed");
                    sink.notify(Notification::success(
                        "Product updated",
                        "Your changes have been saved.",
                    ));
                    self.close_if_current(session);
                    on_refresh();
                }
                Err(message) => {
                    tracing::warn!(%session, product = %id, %message, "Update failed");
                    sink.notify(Notification::error("Update failed", message));
                    self.resume_editing(session);
                }
            },

            CommandResult::Deleted {
                session,
                id,
                result,
            } => match result {
                Ok(()) => {
                    tracing::info!(%session, product = %id, "Delete completed");
                    sink.notify(Notification::success(
                        "Product deleted",
                        "The product has been removed.",
                    ));
                    self.close_if_current(session);
                    on_refresh();
                }
                Err(message) => {
                    tracing::warn!(%session, product = %id, %message, "Delete failed");
                    sink.notify(Notification::error("Delete failed", message));
                    self.resume_editing(session);
                }
            },
        }
    }

    fn current_mut(&mut self, session: SessionId) -> Option<&mut EditorSession> {
        self.session.as_mut().filter(|s| s.id() == session)
    }

    fn close_if_current(&mut self, session: SessionId) {
        if self.current_mut(session).is_some() {
            self.close();
        }
    }

    fn resume_editing(&mut self, session: SessionId) {
        if let Some(current) = self.current_mut(session) {
            current.set_phase(Phase::Editing);
        }
    }
}
