//! Spacing, sizing and radius constants.
//!
//! Based on a 4px grid.

// =============================================================================
// SPACING
// =============================================================================

/// Extra small spacing (4px) - tight gaps inside controls
pub const SPACING_XS: f32 = 4.0;

/// Small spacing (8px) - between related items
pub const SPACING_SM: f32 = 8.0;

/// Medium spacing (16px) - default section padding
pub const SPACING_MD: f32 = 16.0;

/// Large spacing (24px) - between sections
pub const SPACING_LG: f32 = 24.0;

/// Extra large spacing (32px) - page margins
pub const SPACING_XL: f32 = 32.0;

// =============================================================================
// BORDERS
// =============================================================================

pub const BORDER_RADIUS_SM: f32 = 4.0;

pub const BORDER_RADIUS_MD: f32 = 6.0;

pub const BORDER_RADIUS_LG: f32 = 8.0;

/// Pill shape
pub const BORDER_RADIUS_FULL: f32 = 9999.0;

pub const BORDER_WIDTH_THIN: f32 = 1.0;

pub const BORDER_WIDTH_MEDIUM: f32 = 2.0;

// =============================================================================
// LAYOUT
// =============================================================================

/// Width of the product editor drawer.
pub const DRAWER_WIDTH: f32 = 420.0;

/// Width of a product card in the grid.
pub const CARD_WIDTH: f32 = 280.0;

/// Medium modal (confirmations)
pub const MODAL_WIDTH_MD: f32 = 480.0;

/// Height of the top navigation bar.
pub const NAV_HEIGHT: f32 = 52.0;

// =============================================================================
// TABLES
// =============================================================================

pub const TABLE_CELL_PADDING_X: f32 = 12.0;

pub const TABLE_CELL_PADDING_Y: f32 = 8.0;

/// Width of the inline job progress bar.
pub const JOB_PROGRESS_WIDTH: f32 = 96.0;
