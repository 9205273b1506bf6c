//! # Sheetmake Registry
//!
//! Resolves template file paths to configured spreadsheet document
//! builders. The registry owns a mutable suffix-to-factory mapping plus an
//! optional template root directory, and is the sole integration point
//! between "I have a template file" and "I have a builder that can render
//! it":
//!
//! - Suffixes are matched exactly, including the leading dot, from the last
//!   `.` in the path to its end.
//! - `.ftl`, `.ttl`, `.btl` and `.tpl` are registered out of the box.
//! - Resolved builders are configured with the template root (when set) and
//!   bound to the exact path the caller supplied.
//!
//! ## Example
//!
//! ```rust
//! use sheetmake_registry::{BuilderRegistry, DocumentBuilder};
//!
//! let registry = BuilderRegistry::new();
//! let builder = registry.resolve("sales/q1.ftl")?;
//! assert_eq!(builder.kind(), "freemarker");
//! assert_eq!(builder.template_path(), Some("sales/q1.ftl"));
//! # Ok::<(), sheetmake_registry::RegistryError>(())
//! ```

pub mod config;
pub mod error;
pub mod registry;

pub use config::RegistryConfig;
pub use error::{RegistryError, Result};
pub use registry::{BuilderFactory, BuilderRegistry, builder_factory, engine_factory};

// Re-export the capability contract so callers can use resolved builders
// without depending on the core crate directly.
pub use sheetmake::DocumentBuilder;
