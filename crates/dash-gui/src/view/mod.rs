//! View module for the dashboard console.
//!
//! Views are pure functions that render UI based on application state.
//!
//! ## Module Structure
//!
//! - `nav.rs` - Top navigation bar (screens, signed-in user, theme toggle)
//! - `contributions.rs` - Contributions table
//! - `products.rs` - Product cards
//! - `editor.rs` - Product editor drawer and delete confirmation
//! - `common.rs` - Screen header, filter bar, pagination and fetch states

mod common;
pub mod contributions;
pub mod editor;
pub mod nav;
pub mod products;

pub use contributions::view_contributions;
pub use nav::view_nav;
pub use products::view_products;
