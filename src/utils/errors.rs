//! Error handling for HostelMate
//!
//! This module defines the main error types used throughout the application
//! and the rules for turning them into user-facing notification text.

use thiserror::Error;

/// Message shown when an operation needs a session identity that is not stored
pub const MISSING_SESSION_MESSAGE: &str = "No active session context";

/// Main error type for HostelMate
#[derive(Error, Debug)]
pub enum HostelMateError {
    #[error("No active session context: missing {key}")]
    MissingSession { key: String },

    #[error("HTTP request error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Transport failure: {0}")]
    Transport(String),

    #[error("API error: {}", message.as_deref().unwrap_or("no message"))]
    Api { message: Option<String> },

    #[error("Malformed response: {0}")]
    MalformedResponse(String),

    #[error("Operation cancelled")]
    Cancelled,

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid state transition: {from} -> {to}")]
    InvalidStateTransition { from: String, to: String },

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("URL parsing error: {0}")]
    UrlParse(#[from] url::ParseError),

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

/// Result type alias for HostelMate operations
pub type Result<T> = std::result::Result<T, HostelMateError>;

impl HostelMateError {
    /// Build a missing-session error for the given storage key
    pub fn missing_session(key: impl Into<String>) -> Self {
        HostelMateError::MissingSession { key: key.into() }
    }

    /// Check if the error is recoverable by re-triggering the action
    pub fn is_recoverable(&self) -> bool {
        match self {
            HostelMateError::MissingSession { .. } => false,
            HostelMateError::Http(_) => true,
            HostelMateError::Transport(_) => true,
            HostelMateError::Api { .. } => true,
            HostelMateError::MalformedResponse(_) => true,
            HostelMateError::Cancelled => false,
            HostelMateError::Config(_) => false,
            HostelMateError::InvalidStateTransition { .. } => true,
            HostelMateError::Serialization(_) => false,
            HostelMateError::Io(_) => true,
            HostelMateError::UrlParse(_) => false,
            HostelMateError::InvalidInput(_) => false,
        }
    }

    /// Get error severity level
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            HostelMateError::Config(_) => ErrorSeverity::Critical,
            HostelMateError::MissingSession { .. } => ErrorSeverity::Warning,
            HostelMateError::Api { .. } => ErrorSeverity::Warning,
            HostelMateError::InvalidInput(_) => ErrorSeverity::Info,
            HostelMateError::Cancelled => ErrorSeverity::Info,
            _ => ErrorSeverity::Error,
        }
    }

    /// True when the failure happened below the envelope: network, status or shape
    pub fn is_transport(&self) -> bool {
        matches!(
            self,
            HostelMateError::Http(_)
                | HostelMateError::Transport(_)
                | HostelMateError::MalformedResponse(_)
        )
    }

    /// Text to show the user for this error.
    ///
    /// Server-reported messages are shown verbatim; everything else collapses
    /// to the operation's generic fallback.
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            HostelMateError::Api { message: Some(message) } => message.clone(),
            HostelMateError::MissingSession { .. } => MISSING_SESSION_MESSAGE.to_string(),
            _ => fallback.to_string(),
        }
    }
}

/// Error severity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    Info,
    Warning,
    Error,
    Critical,
}

impl std::fmt::Display for ErrorSeverity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorSeverity::Info => write!(f, "INFO"),
            ErrorSeverity::Warning => write!(f, "WARN"),
            ErrorSeverity::Error => write!(f, "ERROR"),
            ErrorSeverity::Critical => write!(f, "CRITICAL"),
        }
    }
}
