//! Configuration validation module
//!
//! This module provides validation functions for engine configuration
//! to ensure settings are usable before any catalog is loaded.

use super::Settings;
use crate::utils::errors::{LingoError, Result};

const VALID_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// Validate all configuration settings
pub fn validate_settings(settings: &Settings) -> Result<()> {
    validate_catalog_config(&settings.catalog)?;
    validate_logging_config(&settings.logging)?;

    Ok(())
}

/// Validate catalog configuration
fn validate_catalog_config(config: &super::CatalogConfig) -> Result<()> {
    if let Some(path) = &config.path {
        if path.trim().is_empty() {
            return Err(LingoError::Config(
                "Catalog path must not be empty when set".to_string(),
            ));
        }
    }

    Ok(())
}

/// Validate logging configuration
fn validate_logging_config(config: &super::LoggingConfig) -> Result<()> {
    if config.level.is_empty() {
        return Err(LingoError::Config("Log level is required".to_string()));
    }

    // Accept plain levels only; directive strings belong in RUST_LOG.
    if !VALID_LEVELS.contains(&config.level.to_ascii_lowercase().as_str()) {
        return Err(LingoError::Config(format!(
            "Invalid log level: {}. Valid levels: {:?}",
            config.level, VALID_LEVELS
        )));
    }

    if let Some(directory) = &config.directory {
        if directory.trim().is_empty() {
            return Err(LingoError::Config(
                "Log directory must not be empty when set".to_string(),
            ));
        }
    }

    Ok(())
}
