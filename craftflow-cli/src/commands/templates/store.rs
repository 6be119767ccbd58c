//! Template lookup.
//!
//! Templates are addressed by their path relative to the template root, e.g.
//! `base-controller.ts` or `config/database.ts`. The crate's `templates/`
//! folder is compiled into the binary; a directory on disk can replace it.

use std::path::{Path, PathBuf};

use rust_embed::RustEmbed;

use crate::error::CraftError;

/// Read-only access to template text by name.
pub trait TemplateStore {
    fn load(&self, name: &str) -> Result<String, CraftError>;
}

/// Templates read from a directory on every call.
#[derive(Debug, Clone)]
pub struct DirTemplates {
    root: PathBuf,
}

impl DirTemplates {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

impl TemplateStore for DirTemplates {
    fn load(&self, name: &str) -> Result<String, CraftError> {
        let path = self.root.join(name);
        tracing::debug!(template = name, path = %path.display(), "loading template from disk");
        std::fs::read_to_string(&path).map_err(|source| {
            if source.kind() == std::io::ErrorKind::NotFound {
                CraftError::TemplateNotFound(name.to_string())
            } else {
                CraftError::Io { path, source }
            }
        })
    }
}

#[derive(RustEmbed)]
#[folder = "templates/"]
struct BundledTemplates;

/// Templates compiled into the binary.
#[derive(Debug, Clone, Copy, Default)]
pub struct EmbeddedTemplates;

impl EmbeddedTemplates {
    /// Names of every bundled template.
    pub fn names() -> Vec<String> {
        BundledTemplates::iter().map(|name| name.into_owned()).collect()
    }
}

impl TemplateStore for EmbeddedTemplates {
    fn load(&self, name: &str) -> Result<String, CraftError> {
        tracing::debug!(template = name, "loading bundled template");
        let file = BundledTemplates::get(name)
            .ok_or_else(|| CraftError::TemplateNotFound(name.to_string()))?;
        Ok(String::from_utf8_lossy(&file.data).into_owned())
    }
}

/// Where templates come from for one invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TemplateSource {
    Dir(PathBuf),
    Embedded,
}

impl TemplateSource {
    /// Pick the template source.
    ///
    /// An explicit directory always wins. Otherwise a `templates/` folder next
    /// to the executable, or one level above it (`bin/../templates`), is used
    /// when it exists. The bundled copy is the fallback.
    pub fn resolve(explicit: Option<PathBuf>) -> Self {
        if let Some(dir) = explicit {
            return TemplateSource::Dir(dir);
        }

        let installed = std::env::current_exe()
            .ok()
            .and_then(|exe| installed_templates_dir(&exe));

        match installed {
            Some(dir) => TemplateSource::Dir(dir),
            None => TemplateSource::Embedded,
        }
    }

    pub fn open(&self) -> Box<dyn TemplateStore> {
        match self {
            TemplateSource::Dir(dir) => Box::new(DirTemplates::new(dir.clone())),
            TemplateSource::Embedded => Box::new(EmbeddedTemplates),
        }
    }
}

/// The `templates/` folder installed alongside the executable at `exe`.
///
/// Looks next to the binary, then one level up. A folder only counts when it
/// holds `base-controller.ts`.
pub fn installed_templates_dir(exe: &Path) -> Option<PathBuf> {
    let bin_dir = exe.parent()?;
    [Some(bin_dir.join("templates")), bin_dir.parent().map(|p| p.join("templates"))]
        .into_iter()
        .flatten()
        .find(|candidate| candidate.join("base-controller.ts").is_file())
}
