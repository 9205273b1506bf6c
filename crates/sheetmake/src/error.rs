//! Error types for the sheetmake core crate

use thiserror::Error;

/// Errors raised by builder implementations and factories
#[derive(Error, Debug)]
pub enum SheetmakeError {
    #[error("template path must not be empty")]
    EmptyTemplatePath,

    #[error("builder construction failed: {0}")]
    Construction(String),

    #[error("unknown template engine: {0}")]
    UnknownEngine(String),
}

/// Result type for sheetmake operations
pub type Result<T> = std::result::Result<T, SheetmakeError>;
