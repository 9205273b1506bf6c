//! Capability contract for document builders

use std::fmt::Debug;
use std::path::Path;

use crate::error::Result;

/// A builder that renders one bound template into a spreadsheet document.
///
/// Instances are produced by zero-argument factories registered in the
/// suffix registry and handed to callers fully configured: directory first
/// (when one is set), then template path. Rendering the bound template is
/// the implementation's concern, not part of this contract.
pub trait DocumentBuilder: Send + Debug {
    /// Stable name of the backing template engine, e.g. `"freemarker"`.
    fn kind(&self) -> &str;

    /// Advisory root directory for resolving relative template paths.
    ///
    /// The default implementation ignores the call, so kinds without
    /// directory scoping inherit the no-op explicitly. Always safe to call.
    fn configure_directory(&mut self, _dir: &Path) {}

    /// Bind this builder to the template it will render.
    ///
    /// The path is stored exactly as given; existence and readability are
    /// the renderer's concern, checked at render time rather than here.
    fn bind_template(&mut self, path: &str) -> Result<()>;

    /// The bound template path, once `bind_template` has succeeded.
    fn template_path(&self) -> Option<&str>;

    /// The configured root directory, for kinds that honor one.
    fn template_directory(&self) -> Option<&Path> {
        None
    }
}
