//! Suffix-based builder resolution
//!
//! Maps template file suffixes to builder factories and turns a template
//! path into a configured, ready-to-render [`DocumentBuilder`].

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use sheetmake::{
    BeetlBuilder, DocumentBuilder, EngineKind, FreemarkerBuilder, GroovyBuilder, ThymeleafBuilder,
};
use tracing::{debug, info};

use crate::error::{RegistryError, Result};

/// Zero-argument factory producing a fresh builder instance.
pub type BuilderFactory =
    Arc<dyn Fn() -> sheetmake::Result<Box<dyn DocumentBuilder>> + Send + Sync>;

/// Factory for any builder type with a zero-argument constructor.
pub fn builder_factory<B>() -> BuilderFactory
where
    B: DocumentBuilder + Default + 'static,
{
    Arc::new(|| Ok(Box::new(B::default()) as Box<dyn DocumentBuilder>))
}

/// Factory for a built-in engine kind.
pub fn engine_factory(kind: EngineKind) -> BuilderFactory {
    match kind {
        EngineKind::Freemarker => builder_factory::<FreemarkerBuilder>(),
        EngineKind::Thymeleaf => builder_factory::<ThymeleafBuilder>(),
        EngineKind::Beetl => builder_factory::<BeetlBuilder>(),
        EngineKind::Groovy => builder_factory::<GroovyBuilder>(),
    }
}

struct RegistryState {
    mapping: HashMap<String, BuilderFactory>,
    template_root: Option<PathBuf>,
}

/// Suffix-to-factory registry and resolver.
///
/// Owned by whichever component assembles the application and shared by
/// reference (or `Arc`); all methods take `&self`. Mutations take the write
/// lock and are mutually exclusive; [`BuilderRegistry::resolve`] holds the
/// read lock only long enough to snapshot the matched factory and the
/// template root.
pub struct BuilderRegistry {
    state: RwLock<RegistryState>,
}

impl Default for BuilderRegistry {
    fn default() -> Self {
        let mut mapping = HashMap::new();
        mapping.insert(".ftl".to_string(), engine_factory(EngineKind::Freemarker));
        mapping.insert(".ttl".to_string(), engine_factory(EngineKind::Thymeleaf));
        mapping.insert(".btl".to_string(), engine_factory(EngineKind::Beetl));
        mapping.insert(".tpl".to_string(), engine_factory(EngineKind::Groovy));
        BuilderRegistry {
            state: RwLock::new(RegistryState {
                mapping,
                template_root: None,
            }),
        }
    }
}

impl BuilderRegistry {
    /// Create a registry with the default suffix mapping
    /// (`.ftl`, `.ttl`, `.btl`, `.tpl`).
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the whole suffix mapping.
    ///
    /// An empty mapping is rejected and the current one is left untouched.
    pub fn set_mapping(&self, mapping: HashMap<String, BuilderFactory>) -> Result<()> {
        if mapping.is_empty() {
            return Err(RegistryError::InvalidArgument(
                "builder mapping must not be empty".to_string(),
            ));
        }
        info!(count = mapping.len(), "builder mapping replaced");
        self.write_state().mapping = mapping;
        Ok(())
    }

    /// Insert or overwrite a single suffix entry.
    pub fn add_mapping(&self, suffix: impl Into<String>, factory: BuilderFactory) {
        let suffix = suffix.into();
        info!(suffix = %suffix, "builder mapping added");
        self.write_state().mapping.insert(suffix, factory);
    }

    /// Set (or clear) the root directory applied to subsequently resolved
    /// builders. Builders resolved before the call are unaffected.
    pub fn set_template_directory(&self, dir: Option<impl Into<PathBuf>>) {
        let dir = dir.map(Into::into);
        info!(dir = ?dir, "template directory updated");
        self.write_state().template_root = dir;
    }

    /// Currently registered suffixes, sorted.
    pub fn suffixes(&self) -> Vec<String> {
        let mut suffixes: Vec<String> = self.read_state().mapping.keys().cloned().collect();
        suffixes.sort();
        suffixes
    }

    /// Resolve a template path to a configured builder.
    ///
    /// The suffix is the substring from the last `.` to the end of the
    /// path, compared exactly against the registered keys. Paths without a
    /// dot, and paths whose last dot sits inside a directory component
    /// (`a.b/report`), are rejected as invalid rather than matched against
    /// the mapping.
    ///
    /// The returned builder has the template root applied (when one is set)
    /// and is bound to `template_path` exactly as given; the registry keeps
    /// no reference to it.
    pub fn resolve(&self, template_path: &str) -> Result<Box<dyn DocumentBuilder>> {
        let suffix = extract_suffix(template_path)?;
        let (factory, template_root) = {
            let state = self.read_state();
            let factory = match state.mapping.get(suffix) {
                Some(factory) => Arc::clone(factory),
                None => {
                    let mut registered: Vec<String> = state.mapping.keys().cloned().collect();
                    registered.sort();
                    return Err(RegistryError::UnsupportedTemplateType {
                        suffix: suffix.to_string(),
                        registered,
                    });
                }
            };
            (factory, state.template_root.clone())
        };

        let mut builder = factory().map_err(|source| RegistryError::BuilderInstantiation {
            suffix: suffix.to_string(),
            source,
        })?;
        if let Some(root) = template_root.filter(|root| !root.as_os_str().is_empty()) {
            builder.configure_directory(&root);
        }
        builder.bind_template(template_path)?;
        debug!(suffix = %suffix, kind = %builder.kind(), "resolved template builder");
        Ok(builder)
    }

    // Mutations never leave the state half-written, so a poisoned lock is
    // safe to enter.
    fn read_state(&self) -> RwLockReadGuard<'_, RegistryState> {
        self.state.read().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn write_state(&self) -> RwLockWriteGuard<'_, RegistryState> {
        self.state.write().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

fn extract_suffix(path: &str) -> Result<&str> {
    let index = path.rfind('.').ok_or_else(|| {
        RegistryError::InvalidArgument(format!("template path {path:?} has no suffix"))
    })?;
    let suffix = &path[index..];
    if suffix.chars().any(std::path::is_separator) {
        return Err(RegistryError::InvalidArgument(format!(
            "template path {path:?} has a dot only inside a directory component"
        )));
    }
    Ok(suffix)
}
