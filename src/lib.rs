//! InovaView - a terminal client for browsing InovaWeek student groups
//!
//! This library provides the screens, Supabase clients, and navigation
//! shell for the InovaWeek group browser.

// Core modules
pub mod app;
pub mod auth;
pub mod cli;
pub mod components;
pub mod config;
pub mod groups;
pub mod tui;
pub mod ui;
pub mod utils;
pub mod widgets;

// Re-exports for convenience
pub use auth::{AuthClient, AuthError, Session};
pub use config::Config;
pub use groups::{DataError, Evaluation, Group, GroupsClient, Student};
pub use ui::Screen;
