//! Engine settings management
//!
//! This module defines the configuration structure and provides methods
//! for loading settings from TOML files and environment variables.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::catalog::{CatalogFormat, DuplicatePolicy};
use crate::resolver::{MissingArgument, ResolutionPolicy};

/// Environment variable prefix, e.g. `LINGO_RESOLVER__ALLOW_DRAFT=true`
pub const ENV_PREFIX: &str = "LINGO";

/// Main engine configuration structure
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Settings {
    #[serde(default)]
    pub catalog: CatalogConfig,
    #[serde(default)]
    pub resolver: ResolverConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Catalog loading configuration
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct CatalogConfig {
    /// Catalog file read by the host binary
    #[serde(default)]
    pub path: Option<String>,
    /// Document format; guessed from the file extension when unset
    #[serde(default)]
    pub format: Option<CatalogFormat>,
    #[serde(default)]
    pub duplicate_policy: DuplicatePolicy,
}

impl CatalogConfig {
    pub fn effective_format(&self) -> CatalogFormat {
        match (self.format, &self.path) {
            (Some(format), _) => format,
            (None, Some(path)) => CatalogFormat::from_path(Path::new(path)),
            (None, None) => CatalogFormat::default(),
        }
    }
}

/// Default resolution policy
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct ResolverConfig {
    #[serde(default)]
    pub allow_draft: bool,
    #[serde(default)]
    pub missing_argument: MissingArgument,
}

impl From<&ResolverConfig> for ResolutionPolicy {
    fn from(config: &ResolverConfig) -> Self {
        ResolutionPolicy {
            allow_draft: config.allow_draft,
            missing_argument: config.missing_argument,
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Directory for daily rolling log files; stdout only when unset
    #[serde(default)]
    pub directory: Option<String>,
    #[serde(default)]
    pub json: bool,
}

fn env_source() -> config::Environment {
    config::Environment::with_prefix(ENV_PREFIX)
        .prefix_separator("_")
        .separator("__")
        .try_parsing(true)
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            directory: None,
            json: false,
        }
    }
}

impl Settings {
    /// Load settings from an optional `lingo` config file and environment variables
    pub fn new() -> Result<Self, config::ConfigError> {
        let settings = config::Config::builder()
            .add_source(config::File::with_name("lingo").required(false))
            .add_source(env_source())
            .build()?;

        settings.try_deserialize()
    }

    /// Load settings from a specific file, still honouring environment overrides
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, config::ConfigError> {
        let settings = config::Config::builder()
            .add_source(config::File::from(path.as_ref()))
            .add_source(env_source())
            .build()?;

        settings.try_deserialize()
    }

    /// Validate configuration settings
    pub fn validate(&self) -> Result<(), crate::utils::errors::LingoError> {
        super::validation::validate_settings(self)
    }

    pub fn resolution_policy(&self) -> ResolutionPolicy {
        ResolutionPolicy::from(&self.resolver)
    }
}
