//! Configuration validation module
//!
//! This module provides validation functions for application configuration
//! to ensure all required settings are properly configured.

use crate::utils::errors::{HostelMateError, Result};
use super::Settings;

/// Validate all configuration settings
pub fn validate_settings(settings: &Settings) -> Result<()> {
    validate_api_config(&settings.api)?;
    validate_session_config(&settings.session)?;
    validate_notification_config(&settings.notifications)?;
    validate_export_config(&settings.export)?;
    validate_logging_config(&settings.logging)?;

    Ok(())
}

/// Validate API configuration
fn validate_api_config(config: &super::ApiConfig) -> Result<()> {
    if config.base_url.is_empty() {
        return Err(HostelMateError::Config(
            "API base URL is required".to_string()
        ));
    }

    let url = url::Url::parse(&config.base_url)
        .map_err(|e| HostelMateError::Config(format!("Invalid API base URL: {}", e)))?;
    if url.scheme() != "http" && url.scheme() != "https" {
        return Err(HostelMateError::Config(
            format!("Unsupported API URL scheme: {}", url.scheme())
        ));
    }

    if config.timeout_seconds == 0 {
        return Err(HostelMateError::Config(
            "API timeout must be greater than 0".to_string()
        ));
    }

    if !config.student_list_path.starts_with('/') {
        return Err(HostelMateError::Config(
            "Student list path must start with '/'".to_string()
        ));
    }

    Ok(())
}

/// Validate session storage configuration
fn validate_session_config(config: &super::SessionConfig) -> Result<()> {
    if config.storage_path.is_empty() {
        return Err(HostelMateError::Config(
            "Session storage path is required".to_string()
        ));
    }

    Ok(())
}

/// Validate notification configuration
fn validate_notification_config(config: &super::NotificationConfig) -> Result<()> {
    if config.display_ms == 0 {
        return Err(HostelMateError::Config(
            "Notification display duration must be greater than 0".to_string()
        ));
    }

    if config.max_visible == 0 {
        return Err(HostelMateError::Config(
            "At least one notification must be visible".to_string()
        ));
    }

    Ok(())
}

fn validate_export_config(config: &super::ExportConfig) -> Result<()> {
    if config.output_dir.is_empty() {
        return Err(HostelMateError::Config(
            "Export output directory is required".to_string()
        ));
    }

    Ok(())
}

/// Validate logging configuration
fn validate_logging_config(config: &super::LoggingConfig) -> Result<()> {
    if config.level.is_empty() {
        return Err(HostelMateError::Config(
            "Log level is required".to_string()
        ));
    }

    let valid_levels = ["trace", "debug", "info", "warn", "error"];
    if !valid_levels.contains(&config.level.as_str()) {
        return Err(HostelMateError::Config(
            format!("Invalid log level: {}. Valid levels: {:?}", config.level, valid_levels)
        ));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    #[test]
    fn test_rejects_bad_base_url() {
        let mut settings = Settings::default();
        settings.api.base_url = "not a url".to_string();
        assert_matches!(validate_settings(&settings), Err(HostelMateError::Config(_)));

        settings.api.base_url = "ftp://hostel.test".to_string();
        assert_matches!(validate_settings(&settings), Err(HostelMateError::Config(_)));
    }

    #[test]
    fn test_rejects_zero_durations() {
        let mut settings = Settings::default();
        settings.api.timeout_seconds = 0;
        assert!(validate_settings(&settings).is_err());

        let mut settings = Settings::default();
        settings.notifications.display_ms = 0;
        assert!(validate_settings(&settings).is_err());
    }

    #[test]
    fn test_rejects_unknown_log_level() {
        let mut settings = Settings::default();
        settings.logging.level = "verbose".to_string();
        assert_matches!(validate_settings(&settings), Err(HostelMateError::Config(msg)) if msg.contains("verbose"));
    }
}
