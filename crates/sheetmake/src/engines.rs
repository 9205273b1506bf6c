//! Template-engine-backed builder kinds
//!
//! Four template languages ship out of the box. Only the freemarker kind
//! honors a configured root directory; the other three load templates by
//! path alone and inherit the no-op directory configuration.

use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::builder::DocumentBuilder;
use crate::error::{Result, SheetmakeError};

/// The template languages with built-in builder kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EngineKind {
    Freemarker,
    Thymeleaf,
    Beetl,
    Groovy,
}

impl EngineKind {
    /// Lowercase engine name, matching [`DocumentBuilder::kind`].
    pub fn name(&self) -> &'static str {
        match self {
            EngineKind::Freemarker => "freemarker",
            EngineKind::Thymeleaf => "thymeleaf",
            EngineKind::Beetl => "beetl",
            EngineKind::Groovy => "groovy",
        }
    }
}

impl fmt::Display for EngineKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for EngineKind {
    type Err = SheetmakeError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "freemarker" => Ok(EngineKind::Freemarker),
            "thymeleaf" => Ok(EngineKind::Thymeleaf),
            "beetl" => Ok(EngineKind::Beetl),
            "groovy" => Ok(EngineKind::Groovy),
            other => Err(SheetmakeError::UnknownEngine(other.to_string())),
        }
    }
}

fn non_empty(path: &str) -> Result<&str> {
    if path.is_empty() {
        return Err(SheetmakeError::EmptyTemplatePath);
    }
    Ok(path)
}

/// Builder backed by the Freemarker template language (`.ftl`).
///
/// The only kind with directory scoping: a relative template path is
/// resolved against the configured root, see [`FreemarkerBuilder::template_file`].
#[derive(Debug, Default)]
pub struct FreemarkerBuilder {
    directory: Option<PathBuf>,
    template: Option<String>,
}

impl FreemarkerBuilder {
    /// Full path of the bound template: joined against the configured
    /// directory when the bound path is relative, the bound path otherwise.
    pub fn template_file(&self) -> Option<PathBuf> {
        let template = Path::new(self.template.as_deref()?);
        match &self.directory {
            Some(dir) if template.is_relative() => Some(dir.join(template)),
            _ => Some(template.to_path_buf()),
        }
    }
}

impl DocumentBuilder for FreemarkerBuilder {
    fn kind(&self) -> &str {
        EngineKind::Freemarker.name()
    }

    fn configure_directory(&mut self, dir: &Path) {
        self.directory = Some(dir.to_path_buf());
    }

    fn bind_template(&mut self, path: &str) -> Result<()> {
        self.template = Some(non_empty(path)?.to_string());
        Ok(())
    }

    fn template_path(&self) -> Option<&str> {
        self.template.as_deref()
    }

    fn template_directory(&self) -> Option<&Path> {
        self.directory.as_deref()
    }
}

/// Builder backed by the Thymeleaf template language (`.ttl`).
#[derive(Debug, Default)]
pub struct ThymeleafBuilder {
    template: Option<String>,
}

impl DocumentBuilder for ThymeleafBuilder {
    fn kind(&self) -> &str {
        EngineKind::Thymeleaf.name()
    }

    fn bind_template(&mut self, path: &str) -> Result<()> {
        self.template = Some(non_empty(path)?.to_string());
        Ok(())
    }

    fn template_path(&self) -> Option<&str> {
        self.template.as_deref()
    }
}

/// Builder backed by the Beetl template language (`.btl`).
#[derive(Debug, Default)]
pub struct BeetlBuilder {
    template: Option<String>,
}

impl DocumentBuilder for BeetlBuilder {
    fn kind(&self) -> &str {
        EngineKind::Beetl.name()
    }

    fn bind_template(&mut self, path: &str) -> Result<()> {
        self.template = Some(non_empty(path)?.to_string());
        Ok(())
    }

    fn template_path(&self) -> Option<&str> {
        self.template.as_deref()
    }
}

/// Builder backed by the Groovy template language (`.tpl`).
#[derive(Debug, Default)]
pub struct GroovyBuilder {
    template: Option<String>,
}

impl DocumentBuilder for GroovyBuilder {
    fn kind(&self) -> &str {
        EngineKind::Groovy.name()
    }

    fn bind_template(&mut self, path: &str) -> Result<()> {
        self.template = Some(non_empty(path)?.to_string());
        Ok(())
    }

    fn template_path(&self) -> Option<&str> {
        self.template.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bind_stores_the_exact_path() {
        let mut builder = GroovyBuilder::default();
        builder.bind_template("reports/./q1.tpl").unwrap();
        assert_eq!(builder.template_path(), Some("reports/./q1.tpl"));
    }

    #[test]
    fn empty_path_is_rejected() {
        let mut builder = BeetlBuilder::default();
        let err = builder.bind_template("").unwrap_err();
        assert!(matches!(err, SheetmakeError::EmptyTemplatePath));
        assert_eq!(builder.template_path(), None);
    }

    #[test]
    fn freemarker_retains_the_configured_directory() {
        let mut builder = FreemarkerBuilder::default();
        builder.configure_directory(Path::new("/tmpl"));
        builder.bind_template("sales/q1.ftl").unwrap();
        assert_eq!(builder.template_directory(), Some(Path::new("/tmpl")));
        assert_eq!(
            builder.template_file(),
            Some(PathBuf::from("/tmpl/sales/q1.ftl"))
        );
    }

    #[test]
    fn freemarker_leaves_absolute_paths_alone() {
        let mut builder = FreemarkerBuilder::default();
        builder.configure_directory(Path::new("/tmpl"));
        builder.bind_template("/opt/templates/q1.ftl").unwrap();
        assert_eq!(
            builder.template_file(),
            Some(PathBuf::from("/opt/templates/q1.ftl"))
        );
    }

    #[test]
    fn other_kinds_ignore_directory_configuration() {
        let mut builder = ThymeleafBuilder::default();
        builder.configure_directory(Path::new("/tmpl"));
        builder.bind_template("report.ttl").unwrap();
        assert_eq!(builder.template_directory(), None);
    }

    #[test]
    fn engine_kind_names_round_trip() {
        for kind in [
            EngineKind::Freemarker,
            EngineKind::Thymeleaf,
            EngineKind::Beetl,
            EngineKind::Groovy,
        ] {
            assert_eq!(kind.name().parse::<EngineKind>().unwrap(), kind);
        }
        assert!(matches!(
            "velocity".parse::<EngineKind>(),
            Err(SheetmakeError::UnknownEngine(_))
        ));
    }

    #[test]
    fn engine_kind_serializes_lowercase() {
        assert_eq!(
            serde_json::to_string(&EngineKind::Freemarker).unwrap(),
            "\"freemarker\""
        );
        let kind: EngineKind = serde_json::from_str("\"beetl\"").unwrap();
        assert_eq!(kind, EngineKind::Beetl);
    }
}
