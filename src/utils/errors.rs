//! Error handling for the translation engine
//!
//! This module defines the error taxonomy used throughout the crate.
//! Loading and index-building failures are surfaced to the caller, while
//! substitution problems are recoverable and only reported as diagnostics.

use std::fmt;

use thiserror::Error;

use crate::models::MessageKey;

/// Main error type for catalog loading and host-side operations
#[derive(Error, Debug)]
pub enum LingoError {
    #[error("Catalog parse error: {0}")]
    Parse(#[from] ParseError),

    #[error("Catalog index error: {0}")]
    Index(#[from] IndexError),

    #[error("Substitution error: {0}")]
    Substitution(#[from] SubstitutionError),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Configuration source error: {0}")]
    ConfigSource(#[from] config::ConfigError),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("TOML serialization error: {0}")]
    TomlSerialization(#[from] toml::ser::Error),

    #[error("XML serialization error: {0}")]
    XmlSerialization(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Category of a catalog parse failure
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseErrorKind {
    Malformed,
    UnsupportedVersion,
    EncodingError,
}

impl fmt::Display for ParseErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseErrorKind::Malformed => write!(f, "malformed catalog"),
            ParseErrorKind::UnsupportedVersion => write!(f, "unsupported catalog version"),
            ParseErrorKind::EncodingError => write!(f, "invalid encoding"),
        }
    }
}

/// Location of a parse failure inside the raw document
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Position {
    /// 1-based line number
    pub line: usize,
    /// 1-based column, when known
    pub column: Option<usize>,
    /// 0-based byte offset, when known
    pub byte: Option<usize>,
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line {}", self.line)?;
        if let Some(column) = self.column {
            write!(f, ", column {}", column)?;
        }
        if let Some(byte) = self.byte {
            write!(f, " (byte {})", byte)?;
        }
        Ok(())
    }
}

/// A catalog document could not be turned into a `Catalog`
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{kind}: {message}{}", .position.map(|p| format!(" at {}", p)).unwrap_or_default())]
pub struct ParseError {
    pub kind: ParseErrorKind,
    pub message: String,
    pub position: Option<Position>,
}

impl ParseError {
    pub fn malformed(message: impl Into<String>) -> Self {
        Self {
            kind: ParseErrorKind::Malformed,
            message: message.into(),
            position: None,
        }
    }

    pub fn unsupported_version(version: &str) -> Self {
        Self {
            kind: ParseErrorKind::UnsupportedVersion,
            message: format!("catalog version '{}' is not supported", version),
            position: None,
        }
    }

    pub fn encoding(message: impl Into<String>, position: Position) -> Self {
        Self {
            kind: ParseErrorKind::EncodingError,
            message: message.into(),
            position: Some(position),
        }
    }

    pub fn at(mut self, position: Position) -> Self {
        self.position = Some(position);
        self
    }
}

/// The index could not be built from a parsed catalog
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum IndexError {
    #[error("Duplicate message {key} rejected by strict duplicate policy")]
    Duplicate { key: MessageKey },

    #[error("Duplicate message {key} carries a conflicting translation or status")]
    ConflictingDuplicate { key: MessageKey },

    #[error("Invalid message {key}: {reason}")]
    InvalidMessage { key: MessageKey, reason: String },
}

/// A placeholder could not be filled from the supplied arguments
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SubstitutionError {
    #[error("Placeholder %{index} has no argument ({supplied} supplied)")]
    MissingArgument { index: usize, supplied: usize },
}

/// Result type alias for engine operations
pub type Result<T> = std::result::Result<T, LingoError>;

impl LingoError {
    /// Check if the error leaves an already active catalog usable
    pub fn is_recoverable(&self) -> bool {
        match self {
            LingoError::Parse(_) => true,
            LingoError::Index(_) => true,
            LingoError::Substitution(_) => true,
            LingoError::Io(_) => true,
            LingoError::Config(_) => false,
            LingoError::ConfigSource(_) => false,
            LingoError::Serialization(_) => false,
            LingoError::TomlSerialization(_) => false,
            LingoError::XmlSerialization(_) => false,
        }
    }

    /// Get error severity level
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            LingoError::Config(_) => ErrorSeverity::Critical,
            LingoError::ConfigSource(_) => ErrorSeverity::Critical,
            LingoError::Substitution(_) => ErrorSeverity::Info,
            LingoError::Parse(_) | LingoError::Index(_) => ErrorSeverity::Warning,
            _ => ErrorSeverity::Error,
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

impl fmt::Display for ErrorSeverity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorSeverity::Info => write!(f, "INFO"),
            ErrorSeverity::Warning => write!(f, "WARN"),
            ErrorSeverity::Error => write!(f, "ERROR"),
            ErrorSeverity::Critical => write!(f, "CRITICAL"),
        }
    }
}
