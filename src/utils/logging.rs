//! Logging configuration and setup
//!
//! This module provides logging initialization and structured logging
//! helpers for catalog lifecycle events.

use tracing::{debug, info, warn};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

use crate::catalog::MergeReport;
use crate::config::LoggingConfig;
use crate::models::CatalogStats;
use crate::resolver::DiagnosticsSnapshot;
use crate::utils::errors::{LingoError, Result};

/// Initialize logging based on configuration
///
/// `RUST_LOG` takes precedence over the configured level. The returned guard
/// flushes the file writer on drop and must be kept alive by the host.
pub fn init_logging(config: &LoggingConfig) -> Result<Option<WorkerGuard>> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.level));

    let stdout_layer = if config.json {
        fmt::layer().json().with_writer(std::io::stdout).boxed()
    } else {
        fmt::layer().with_writer(std::io::stdout).boxed()
    };

    let (file_layer, guard) = match &config.directory {
        Some(directory) => {
            let file_appender = tracing_appender::rolling::daily(directory, "lingo-engine.log");
            let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);
            let layer = fmt::layer().with_ansi(false).with_writer(non_blocking).boxed();
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(stdout_layer)
        .with(file_layer)
        .try_init()
        .map_err(|e| LingoError::Config(format!("Failed to initialize logging: {}", e)))?;

    info!("Logging initialized with level: {}", config.level);
    Ok(guard)
}

/// Log a freshly loaded catalog
pub fn log_catalog_loaded(stats: &CatalogStats, duration_ms: u64) {
    info!(
        locale = %stats.locale,
        contexts = stats.contexts.len(),
        finished = stats.total.finished,
        unfinished = stats.total.unfinished,
        obsolete = stats.total.obsolete,
        completion_percent = stats.total.completion_percent(),
        duration_ms = duration_ms,
        "Catalog loaded"
    );
}

/// Log a catalog activation
pub fn log_catalog_activated(locale: &str, previous: Option<&str>) {
    info!(locale = locale, previous = previous, "Catalog activated");
}

/// Log the outcome of a merge
pub fn log_merge_report(locale: &str, report: &MergeReport) {
    info!(
        locale = locale,
        new = report.new.len(),
        retained = report.retained.len(),
        obsolete = report.obsolete.len(),
        "Catalog merged with extracted sources"
    );
    for key in &report.obsolete {
        debug!(key = %key, "Message became obsolete");
    }
}

/// Log resolution diagnostics, warning when anything fell back
pub fn log_diagnostics(snapshot: &DiagnosticsSnapshot) {
    if snapshot.miss_count > 0 || snapshot.substitution_error_count > 0 {
        warn!(
            misses = snapshot.miss_count,
            drafts_served = snapshot.draft_served_count,
            substitution_errors = snapshot.substitution_error_count,
            plural_fallbacks = snapshot.plural_fallback_count,
            "Resolution diagnostics"
        );
    } else {
        debug!(
            drafts_served = snapshot.draft_served_count,
            plural_fallbacks = snapshot.plural_fallback_count,
            "Resolution diagnostics"
        );
    }
}
