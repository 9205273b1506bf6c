//! Registry configuration loaded from JSON or the environment

use std::collections::BTreeMap;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use sheetmake::EngineKind;

use crate::error::{RegistryError, Result};
use crate::registry::{BuilderRegistry, engine_factory};

/// Declarative registry setup: a template root plus extra suffix mappings
/// layered over the defaults.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RegistryConfig {
    /// Root directory for relative template paths.
    #[serde(default)]
    pub template_directory: Option<PathBuf>,

    /// Additional suffix-to-engine entries, e.g. `".fm"` to `freemarker`.
    #[serde(default)]
    pub mappings: BTreeMap<String, EngineKind>,
}

impl RegistryConfig {
    /// Parse a configuration from a JSON document.
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| RegistryError::Config(e.to_string()))
    }

    /// Load configuration from environment variables.
    ///
    /// `SHEETMAKE_TEMPLATE_DIR` holds the template root;
    /// `SHEETMAKE_MAPPINGS` holds comma-separated `suffix=kind` pairs.
    pub fn from_env() -> Result<Self> {
        let template_directory = std::env::var("SHEETMAKE_TEMPLATE_DIR")
            .ok()
            .map(PathBuf::from);
        let mut mappings = BTreeMap::new();
        if let Ok(raw) = std::env::var("SHEETMAKE_MAPPINGS") {
            for pair in raw.split(',').map(str::trim).filter(|p| !p.is_empty()) {
                let (suffix, kind) = pair.split_once('=').ok_or_else(|| {
                    RegistryError::Config(format!("expected suffix=kind, got {pair:?}"))
                })?;
                let kind = kind
                    .trim()
                    .parse::<EngineKind>()
                    .map_err(|e| RegistryError::Config(e.to_string()))?;
                mappings.insert(suffix.trim().to_string(), kind);
            }
        }
        Ok(RegistryConfig {
            template_directory,
            mappings,
        })
    }

    /// Install this configuration into a registry.
    ///
    /// Mappings are layered over whatever is already registered; a missing
    /// template directory leaves the registry's current one in place.
    pub fn apply(&self, registry: &BuilderRegistry) {
        if let Some(dir) = &self.template_directory {
            registry.set_template_directory(Some(dir.clone()));
        }
        for (suffix, kind) in &self.mappings {
            registry.add_mapping(suffix.clone(), engine_factory(*kind));
        }
    }
}
