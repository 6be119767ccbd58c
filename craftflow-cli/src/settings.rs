use std::path::PathBuf;

use crate::commands::templates::store::TemplateSource;
use crate::error::CraftError;
use crate::installer::CommandInstaller;

/// Environment variable overriding the installer command line.
pub const INSTALL_CMD_ENV: &str = "CRAFTFLOW_INSTALL_CMD";

/// Runtime settings for one invocation.
#[derive(Debug, Clone)]
pub struct Settings {
    /// Project root; every generated path is relative to it.
    pub root: PathBuf,
    pub templates: TemplateSource,
    pub skip_install: bool,
    pub installer: CommandInstaller,
}

impl Settings {
    /// Defaults for `root`: bundled templates, `npm install`.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            templates: TemplateSource::Embedded,
            skip_install: false,
            installer: CommandInstaller::npm(),
        }
    }

    /// Settings for the current working directory.
    ///
    /// `templates_dir` comes from `--templates-dir` / `CRAFTFLOW_TEMPLATES_DIR`;
    /// the installer can be replaced through `CRAFTFLOW_INSTALL_CMD`.
    pub fn load(templates_dir: Option<PathBuf>) -> Result<Self, CraftError> {
        let root = std::env::current_dir().map_err(CraftError::io("."))?;

        let installer = std::env::var(INSTALL_CMD_ENV)
            .ok()
            .and_then(|line| CommandInstaller::parse(&line))
            .unwrap_or_default();

        let settings = Self {
            templates: TemplateSource::resolve(templates_dir),
            installer,
            ..Self::new(root)
        };
        tracing::debug!(?settings, "settings loaded");
        Ok(settings)
    }

    pub fn with_skip_install(mut self, skip_install: bool) -> Self {
        self.skip_install = skip_install;
        self
    }

    pub fn with_installer(mut self, installer: CommandInstaller) -> Self {
        self.installer = installer;
        self
    }
}
