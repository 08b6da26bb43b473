//! BrowseLighter: a minimal browser shell.
//!
//! One window, one embedded webview, and a bottom bar with a URL/search input
//! and a "Go" button. Rendering and networking belong to the webview; this crate
//! only decides where to navigate.

pub mod app;
pub mod platform;
pub mod services;
pub mod surface;
pub mod types;

#[cfg(feature = "gui")]
pub mod ui;
