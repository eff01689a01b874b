//! Guarded edit/delete workflow for products.
//!
//! The drawer is headless: it decides which requests may be issued and
//! applies their results, while the host runs the returned [`Command`]s
//! and supplies a notification sink and a refresh callback.

mod command;
mod drawer;
mod session;

pub use command::{Command, CommandResult};
pub use drawer::{Blocked, EditorDrawer};
pub use session::{CategoryOptions, Denial, EditorSession, Phase, SessionId};
