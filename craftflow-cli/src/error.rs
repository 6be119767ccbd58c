use std::path::{Path, PathBuf};

/// Errors produced by the `craftflow` commands.
///
/// Every variant is fatal: the binary prints it and exits with status 1.
/// Nothing is retried and nothing already written is rolled back.
#[derive(Debug)]
pub enum CraftError {
    /// The module folder already exists under `src/packages/`.
    ModuleExists { name: String, path: PathBuf },
    /// The module name would place the module outside `src/packages/`.
    InvalidModuleName(String),
    /// The project `src/` folder already exists.
    AlreadyInitialized { path: PathBuf },
    /// A required positional argument was not given (e.g. `"module name"`).
    MissingArgument(&'static str),
    /// The first positional argument is not a known command.
    UnknownCommand(String),
    /// No template with this name exists in the active template store.
    TemplateNotFound(String),
    /// A filesystem operation on `path` failed.
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    /// `package.json` could not be parsed or is not a JSON object.
    Manifest { path: PathBuf, message: String },
    /// The dependency installer ran but exited unsuccessfully.
    InstallFailed { command: String, code: Option<i32> },
}

impl CraftError {
    /// Adapter for `map_err` that attaches `path` to an I/O error.
    pub fn io(path: impl AsRef<Path>) -> impl FnOnce(std::io::Error) -> CraftError {
        let path = path.as_ref().to_path_buf();
        move |source| CraftError::Io { path, source }
    }
}

impl std::fmt::Display for CraftError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CraftError::ModuleExists { name, path } => {
                write!(f, "Module \"{name}\" already exists at {}.", path.display())
            }
            CraftError::InvalidModuleName(name) => write!(
                f,
                "Invalid module name \"{name}\": must be a relative path without `.` or `..`"
            ),
            CraftError::AlreadyInitialized { path } => write!(
                f,
                "Project already initialized. \"{}\" folder already exists.",
                path.display()
            ),
            CraftError::MissingArgument(what) => write!(f, "No {what} provided."),
            CraftError::UnknownCommand(command) => write!(f, "Unknown command: {command}"),
            CraftError::TemplateNotFound(name) => write!(f, "Template not found: {name}"),
            CraftError::Io { path, source } => write!(f, "{}: {source}", path.display()),
            CraftError::Manifest { path, message } => {
                write!(f, "Invalid manifest {}: {message}", path.display())
            }
            CraftError::InstallFailed { command, code } => match code {
                Some(code) => write!(f, "`{command}` exited with status {code}"),
                None => write!(f, "`{command}` was terminated by a signal"),
            },
        }
    }
}

impl std::error::Error for CraftError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CraftError::Io { source, .. } => Some(source),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_argument_message() {
        let err = CraftError::MissingArgument("module name");
        assert_eq!(err.to_string(), "No module name provided.");
    }

    #[test]
    fn io_adapter_keeps_path_and_source() {
        let err = CraftError::io("src/app.ts")(std::io::Error::new(
            std::io::ErrorKind::PermissionDenied,
            "denied",
        ));
        assert!(err.to_string().starts_with("src/app.ts"));
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn install_failed_with_and_without_code() {
        let exited = CraftError::InstallFailed {
            command: "npm install".into(),
            code: Some(1),
        };
        assert_eq!(exited.to_string(), "`npm install` exited with status 1");

        let killed = CraftError::InstallFailed {
            command: "npm install".into(),
            code: None,
        };
        assert!(killed.to_string().contains("signal"));
    }
}
