use std::path::Path;
use std::process::Command;

use crate::error::CraftError;

/// Installs the project's dependencies once `package.json` is in place.
pub trait Installer {
    fn install(&self, root: &Path) -> Result<(), CraftError>;
}

/// Runs an external command in the project root, blocking until it exits.
///
/// Standard streams are inherited so the package manager's own output and
/// prompts reach the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandInstaller {
    program: String,
    args: Vec<String>,
}

impl CommandInstaller {
    pub fn new(program: impl Into<String>, args: Vec<String>) -> Self {
        Self {
            program: program.into(),
            args,
        }
    }

    /// `npm install`.
    pub fn npm() -> Self {
        Self::new("npm", vec!["install".into()])
    }

    /// Parse a whitespace-separated command line such as `pnpm install`.
    ///
    /// Returns `None` for a blank line.
    pub fn parse(command_line: &str) -> Option<Self> {
        let mut parts = command_line.split_whitespace().map(str::to_string);
        let program = parts.next()?;
        Some(Self::new(program, parts.collect()))
    }

    /// The command line as shown to the user.
    pub fn display(&self) -> String {
        std::iter::once(self.program.as_str())
            .chain(self.args.iter().map(String::as_str))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl Default for CommandInstaller {
    fn default() -> Self {
        Self::npm()
    }
}

impl Installer for CommandInstaller {
    fn install(&self, root: &Path) -> Result<(), CraftError> {
        tracing::info!(command = %self.display(), "running dependency installer");

        let status = Command::new(&self.program)
            .args(&self.args)
            .current_dir(root)
            .status()
            .map_err(CraftError::io(&self.program))?;

        if !status.success() {
            return Err(CraftError::InstallFailed {
                command: self.display(),
                code: status.code(),
            });
        }

        Ok(())
    }
}
