//! HostelMate
//!
//! A terminal client for the hostel management backend. This library
//! provides the typed API client, session context, list reconciliation and
//! the administrator and student dashboards built on top of them.

#![allow(non_snake_case)]

pub mod config;
pub mod dashboards;
pub mod handlers;
pub mod models;
pub mod services;
pub mod state;
pub mod utils;

// Re-export commonly used types
pub use config::Settings;
pub use utils::errors::{HostelMateError, Result};

// Re-export main components for easy access
pub use services::{HostelApi, NotificationService, ServiceFactory};
pub use state::{AppContext, Dashboard, Outcome, SessionContext, SessionStore};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");

/// Get library information
pub fn info() -> String {
    format!("{} v{}", NAME, VERSION)
}
