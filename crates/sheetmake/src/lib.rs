//! Sheetmake provides spreadsheet document builders that are bound to
//! template files and configured through the suffix registry in
//! `sheetmake-registry`.

pub mod builder;
pub mod engines;
pub mod error;

// Re-export core types
pub use builder::DocumentBuilder;
pub use engines::{BeetlBuilder, EngineKind, FreemarkerBuilder, GroovyBuilder, ThymeleafBuilder};
pub use error::{Result, SheetmakeError};

/// Get the library version
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
