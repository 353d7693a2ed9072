//! Logging configuration and setup
//!
//! This module provides logging initialization and structured logging utilities
//! for the HostelMate application.

use std::path::Path;
use tracing::{info, warn, error, debug};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, Layer};
use crate::config::LoggingConfig;
use crate::utils::errors::{ErrorSeverity, HostelMateError, Result};

/// Initialize logging based on configuration.
///
/// Terminal output goes to stderr so command output on stdout stays clean.
/// The returned guard must be held for the life of the process when a log
/// file is configured, otherwise buffered lines are lost.
pub fn init_logging(config: &LoggingConfig) -> Result<Option<WorkerGuard>> {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&config.level));

    let stderr_layer = if config.json {
        tracing_subscriber::fmt::layer()
            .json()
            .with_writer(std::io::stderr)
            .boxed()
    } else {
        tracing_subscriber::fmt::layer()
            .with_writer(std::io::stderr)
            .boxed()
    };

    let (file_layer, guard) = match &config.file_path {
        Some(file_path) => {
            let dir = Path::new(file_path);
            let file_appender = tracing_appender::rolling::daily(dir, "hostelmate.log");
            let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);
            let layer = tracing_subscriber::fmt::layer()
                .with_ansi(false)
                .with_writer(non_blocking)
                .boxed();
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(stderr_layer)
        .with(file_layer)
        .try_init()
        .map_err(|e| HostelMateError::Config(format!("Failed to initialize logging: {}", e)))?;

    info!("Logging initialized with level: {}", config.level);
    Ok(guard)
}

/// Log a completed API call
pub fn log_api_call(endpoint: &str, duration_ms: u64, success: bool) {
    if success {
        debug!(
            endpoint = endpoint,
            duration_ms = duration_ms,
            "API call completed"
        );
    } else {
        warn!(
            endpoint = endpoint,
            duration_ms = duration_ms,
            "API call failed"
        );
    }
}

/// Log a server-acknowledged mutation
pub fn log_mutation(view: &str, operation: &str, target: Option<&str>) {
    info!(
        view = view,
        operation = operation,
        target = target,
        "Mutation acknowledged"
    );
}

/// Log a local reconciliation step
pub fn log_reconcile(view: &str, action: &str, id: &str, applied: bool) {
    debug!(
        view = view,
        action = action,
        id = id,
        applied = applied,
        "List reconciled"
    );
}

/// Log a view-level failure at the level its severity calls for
pub fn log_view_error(view: &str, error: &HostelMateError, context: Option<&str>) {
    let recoverable = error.is_recoverable();
    match error.severity() {
        ErrorSeverity::Info => info!(
            view = view,
            error = %error,
            context = context,
            recoverable = recoverable,
            "View operation failed"
        ),
        ErrorSeverity::Warning => warn!(
            view = view,
            error = %error,
            context = context,
            recoverable = recoverable,
            "View operation failed"
        ),
        ErrorSeverity::Error | ErrorSeverity::Critical => error!(
            view = view,
            error = %error,
            context = context,
            recoverable = recoverable,
            "View operation failed"
        ),
    }
}

/// Log an operation whose result arrived after the view was torn down
pub fn log_discarded(view: &str, operation: &str) {
    debug!(
        view = view,
        operation = operation,
        "Discarding result for torn-down view"
    );
}
