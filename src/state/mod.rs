//! State management module
//!
//! This module handles the session context, client storage, list
//! reconciliation and the per-view lifecycle

pub mod context;
pub mod reconcile;
pub mod storage;
pub mod view;

// Re-export commonly used state components
pub use context::{AppContext, SessionContext};
pub use reconcile::{move_between, partition_roster, Keyed, KeyedList};
pub use storage::SessionStore;
pub use view::{Dashboard, OperationMessages, Outcome, ViewPhase};
