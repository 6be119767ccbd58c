use std::path::Path;

use serde_json::{Map, Value};

use crate::error::CraftError;
use crate::layout::ManifestAdditions;

/// Shallow-merge `additions` into the `scripts`, `dependencies` and
/// `devDependencies` mappings of `manifest`.
///
/// Added keys overwrite existing keys of the same name. Keys outside the
/// three sections are left untouched, and existing keys keep their position.
/// A section that is missing or not an object is replaced by a fresh object.
pub fn merge_additions(
    manifest: &mut Map<String, Value>,
    additions: &ManifestAdditions,
) {
    for (section, entries) in additions.sections() {
        let slot = manifest
            .entry(section)
            .or_insert_with(|| Value::Object(Map::new()));
        if !slot.is_object() {
            *slot = Value::Object(Map::new());
        }
        if let Value::Object(merged) = slot {
            for (key, value) in entries {
                merged.insert((*key).to_string(), Value::String((*value).to_string()));
            }
        }
    }
}

/// Load the manifest at `path`, merge `additions` and rewrite it with
/// two-space indentation.
pub fn update_manifest(path: &Path, additions: &ManifestAdditions) -> Result<(), CraftError> {
    let content = std::fs::read_to_string(path).map_err(CraftError::io(path))?;
    let mut manifest = parse_object(path, &content)?;

    merge_additions(&mut manifest, additions);

    let rendered = serde_json::to_string_pretty(&Value::Object(manifest)).map_err(|e| {
        CraftError::Manifest {
            path: path.to_path_buf(),
            message: e.to_string(),
        }
    })?;
    std::fs::write(path, rendered).map_err(CraftError::io(path))?;

    tracing::debug!(path = %path.display(), "manifest rewritten");
    Ok(())
}

fn parse_object(path: &Path, content: &str) -> Result<Map<String, Value>, CraftError> {
    let manifest_error = |message: String| CraftError::Manifest {
        path: path.to_path_buf(),
        message,
    };

    match serde_json::from_str::<Value>(content).map_err(|e| manifest_error(e.to_string()))? {
        Value::Object(map) => Ok(map),
        _ => Err(manifest_error("root is not a JSON object".into())),
    }
}
