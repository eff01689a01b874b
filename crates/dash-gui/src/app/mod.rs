//! Main application module for the dashboard console.
//!
//! This module implements the Iced 0.14.0 application using the builder pattern.
//! The architecture follows the Elm pattern: State → Message → Update → View.
//!
//! # Key Design Principles
//!
//! - **All state changes happen in `update()`** - Views are pure functions
//! - **No channels/polling threads** - Use `Task::perform` for async operations
//! - **Timers are subscriptions** - They exist only while state needs them

mod subscription;

use iced::widget::{Space, column, container, row, stack};
use iced::{Element, Length, Subscription, Task, Theme};

use crate::component::view_toast;
use crate::handler::{
    ContributionsHandler, EditorHandler, MessageHandler, ProductsHandler, load_contributions,
    navigate, toggle_theme,
};
use crate::message::{Message, ToastMessage};
use crate::state::{AppState, Settings, View};
use crate::theme::console_theme;
use crate::view::{view_contributions, view_nav, view_products};

pub use subscription::create_subscription;

// =============================================================================
// APPLICATION
// =============================================================================

/// Main application struct.
///
/// This is the root of the Iced application. It holds the application state
/// and implements the Elm architecture methods.
pub struct App {
    /// All application state.
    pub state: AppState,
}

impl App {
    /// Create a new application instance.
    ///
    /// Called once at startup. Returns the initial state and the first fetch.
    pub fn new(settings: Settings) -> (Self, Task<Message>) {
        let mut app = Self {
            state: AppState::with_settings(settings),
        };
        let startup = load_contributions(&mut app.state);
        (app, startup)
    }

    /// Update application state in response to a message.
    ///
    /// This is the core of the Elm architecture - all state changes happen here.
    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            // =================================================================
            // Navigation
            // =================================================================
            Message::Navigate(view) => navigate(&mut self.state, view),

            Message::ToggleTheme => toggle_theme(&mut self.state),

            // =================================================================
            // Screens
            // =================================================================
            Message::Contributions(msg) => ContributionsHandler.handle(&mut self.state, msg),

            Message::Products(msg) => ProductsHandler.handle(&mut self.state, msg),

            Message::Editor(msg) => EditorHandler.handle(&mut self.state, msg),

            // =================================================================
            // Global
            // =================================================================
            Message::Toast(msg) => self.handle_toast_message(msg),

            Message::Noop => Task::none(),
        }
    }

    /// Handle toast notification messages.
    fn handle_toast_message(&mut self, msg: ToastMessage) -> Task<Message> {
        match msg {
            ToastMessage::Dismiss => {
                self.state.toast.dismiss();
                Task::none()
            }
            ToastMessage::Expired(generation) => {
                self.state.toast.expire(generation);
                Task::none()
            }
        }
    }

    /// Render the main window.
    ///
    /// This is a pure function that produces UI based on current state.
    pub fn view(&self) -> Element<'_, Message> {
        let screen: Element<'_, Message> = match self.state.view {
            View::Contributions => view_contributions(&self.state),
            View::Products => view_products(&self.state),
        };

        let content: Element<'_, Message> = column![view_nav(&self.state), screen].into();

        // If there's a toast, stack it at the bottom-right of the content
        if let Some(toast) = self.state.toast.current() {
            let toast_row = row![
                Space::new().width(Length::Fill),
                container(view_toast(toast)).padding([0.0, 24.0]),
            ];
            let toast_container = column![Space::new().height(Length::Fill), toast_row];

            return stack![
                container(content).width(Length::Fill).height(Length::Fill),
                toast_container,
            ]
            .into();
        }

        container(content)
            .width(Length::Fill)
            .height(Length::Fill)
            .into()
    }

    /// Window title, naming the current screen.
    pub fn title(&self) -> String {
        format!("{} - Dashboard Console", self.state.view.label())
    }

    /// Get the current theme.
    pub fn theme(&self) -> Theme {
        console_theme(self.state.settings.display.theme_mode)
    }

    /// Subscribe to runtime events.
    pub fn subscription(&self) -> Subscription<Message> {
        create_subscription(&self.state)
    }
}
