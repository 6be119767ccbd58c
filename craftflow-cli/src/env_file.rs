use std::path::{Path, PathBuf};

use crate::error::CraftError;

/// Render `KEY=VALUE` lines joined by `\n`, without a trailing newline.
pub fn render(entries: &[(&str, &str)]) -> String {
    entries
        .iter()
        .map(|(key, value)| format!("{key}={value}"))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Write the same rendered content to every file in `file_names` under `root`.
pub fn write_env_files(
    root: &Path,
    file_names: &[&str],
    entries: &[(&str, &str)],
) -> Result<Vec<PathBuf>, CraftError> {
    let content = render(entries);
    file_names
        .iter()
        .map(|name| -> Result<PathBuf, CraftError> {
            let path = root.join(name);
            std::fs::write(&path, &content).map_err(CraftError::io(&path))?;
            Ok(path)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn render_joins_lines() {
        let out = render(&[("PORT", "3000"), ("NODE_ENV", "development")]);
        assert_eq!(out, "PORT=3000\nNODE_ENV=development");
    }

    #[test]
    fn render_empty() {
        assert_eq!(render(&[]), "");
    }
}
