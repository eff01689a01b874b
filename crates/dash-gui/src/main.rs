//! Dashboard Console - Desktop GUI Application
//!
//! Browses contributions and products served by a JSON API and lets product
//! creators edit or delete their products.
//!
//! Built with Iced 0.14.0 using the Elm architecture (State, Message, Update, View).

use iced::Size;
use iced::window;
use tracing_subscriber::EnvFilter;

use dash_gui::app::App;
use dash_gui::component::LUCIDE_FONT_BYTES;
use dash_gui::state::Settings;

/// Application entry point.
///
/// Loads settings, initializes logging (`RUST_LOG` overrides the configured
/// level) and runs the Iced application.
pub fn main() -> iced::Result {
    let path = Settings::config_path();
    let loaded = Settings::try_load_from(&path);
    let settings = loaded.clone().unwrap_or_default();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&settings.display.log_level)),
        )
        .init();

    if let Err(err) = loaded {
        tracing::warn!(path = %path.display(), %err, "Using default settings");
    }
    tracing::info!(api = %settings.api.base_url, "Starting Dashboard Console");

    iced::application(move || App::new(settings.clone()), App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .subscription(App::subscription)
        .font(LUCIDE_FONT_BYTES)
        .window(window::Settings {
            size: Size::new(1280.0, 800.0),
            min_size: Some(Size::new(1024.0, 600.0)),
            ..Default::default()
        })
        .run()
}
