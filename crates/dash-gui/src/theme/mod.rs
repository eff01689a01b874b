//! Theme module for the dashboard console.
//!
//! - Color palettes for light and dark mode (`palette`)
//! - Extension colors on top of Iced's extended palette (`colors`)
//! - Spacing constants (`spacing`)
//! - Widget style functions (`style`)

pub mod colors;
pub mod palette;
pub mod spacing;
pub mod style;

pub use colors::{ConsoleColorSet, ConsoleColors};
pub use palette::ThemeMode;
pub use spacing::{
    BORDER_RADIUS_FULL, BORDER_RADIUS_LG, BORDER_RADIUS_MD, BORDER_RADIUS_SM, CARD_WIDTH,
    DRAWER_WIDTH, JOB_PROGRESS_WIDTH, MODAL_WIDTH_MD, NAV_HEIGHT, SPACING_LG, SPACING_MD,
    SPACING_SM, SPACING_XL, SPACING_XS, TABLE_CELL_PADDING_X, TABLE_CELL_PADDING_Y,
};
pub use style::{
    button_danger, button_ghost, button_nav, button_primary, button_secondary, console_theme,
    container_card, container_drawer, container_modal, container_nav, container_surface,
    progress_bar_primary, progress_bar_success, text_input_default, text_input_error,
};
