//! Error types for the sheetmake registry

use sheetmake::SheetmakeError;
use thiserror::Error;

/// Registry-specific errors
#[derive(Error, Debug)]
pub enum RegistryError {
    /// Malformed input to a configuration or resolution call.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// The template suffix has no registered builder. The message
    /// enumerates every currently registered suffix so the caller can
    /// self-correct.
    #[error("unsupported template type {suffix:?}, registered suffixes: {}", .registered.join(","))]
    UnsupportedTemplateType {
        suffix: String,
        registered: Vec<String>,
    },

    /// The matched factory failed to produce a builder instance.
    #[error("failed to instantiate builder for suffix {suffix:?}")]
    BuilderInstantiation {
        suffix: String,
        #[source]
        source: SheetmakeError,
    },

    /// A builder rejected its template binding.
    #[error("builder error: {0}")]
    Builder(#[from] SheetmakeError),

    /// Malformed registry configuration.
    #[error("invalid configuration: {0}")]
    Config(String),
}

/// Result type for registry operations
pub type Result<T> = std::result::Result<T, RegistryError>;
