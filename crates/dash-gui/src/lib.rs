//! Dashboard Console - GUI Library
//!
//! This module provides the core application types and modules for the
//! dashboard console desktop application: a contributions table with
//! debounced search and per-row jobs, and a product catalogue with a guarded
//! edit/delete drawer.
//!
//! Built with Iced 0.14.0 using the Elm architecture.

pub mod app;
pub mod component;
pub mod error;
pub mod handler;
pub mod message;
pub mod service;
pub mod state;
pub mod theme;
pub mod view;
