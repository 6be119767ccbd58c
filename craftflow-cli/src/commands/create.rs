use colored::Colorize;
use std::fs;
use std::path::{Component, Path, PathBuf};

use super::templates::store::TemplateStore;
use super::templates::{substitute, ModuleNames};
use crate::error::CraftError;
use crate::layout::{ProjectLayout, STANDARD};
use crate::settings::Settings;

/// Files written for one module, in creation order.
#[derive(Debug, Clone)]
pub struct GeneratedModule {
    pub name: String,
    pub dir: PathBuf,
    pub files: Vec<PathBuf>,
}

/// Create a new module — `craftflow create <module-name>`.
///
/// Generates the module under `src/packages/<module-name>` of the settings
/// root using the standard layout.
pub fn run(module_name: &str, settings: &Settings) -> Result<(), CraftError> {
    let store = settings.templates.open();
    generate_module(&settings.root, module_name, store.as_ref(), &STANDARD)?;

    println!(
        "{} Module \"{}\" created successfully in {}",
        "✓".green(),
        module_name.green(),
        STANDARD.module_display_path(module_name).cyan()
    );
    Ok(())
}

/// Generate the folder set of `module_name` under `root`.
///
/// Fails before writing anything with [`CraftError::InvalidModuleName`] if the
/// name is empty, absolute or climbs out with `..`, and with
/// [`CraftError::ModuleExists`] if the module folder is already there. Each
/// folder gets one file rendered from its template with `Base`/`base`
/// replaced by the module's class and variable names. A failure partway
/// leaves earlier folders on disk.
pub fn generate_module(
    root: &Path,
    module_name: &str,
    store: &dyn TemplateStore,
    layout: &ProjectLayout,
) -> Result<GeneratedModule, CraftError> {
    check_module_name(module_name)?;

    let module_dir = layout.module_dir(root, module_name);
    if module_dir.exists() {
        return Err(CraftError::ModuleExists {
            name: module_name.to_string(),
            path: module_dir,
        });
    }

    let names = ModuleNames::from_module_name(module_name);
    tracing::debug!(
        module = module_name,
        class_name = %names.class_name,
        var_name = %names.var_name,
        "generating module"
    );

    let mut files = Vec::with_capacity(layout.module_folders.len());
    for entry in layout.module_folders {
        let folder_path = module_dir.join(entry.folder);
        fs::create_dir_all(&folder_path).map_err(CraftError::io(&folder_path))?;
        println!(
            "{} Created folder: {}",
            "->".blue(),
            folder_path.display().to_string().cyan()
        );

        let content = substitute(&store.load(entry.template)?, &names);

        let file_path = folder_path.join(layout.module_file);
        fs::write(&file_path, content).map_err(CraftError::io(&file_path))?;
        println!(
            "{} Created file: {}",
            "✓".green(),
            file_path.display().to_string().cyan()
        );
        files.push(file_path);
    }

    Ok(GeneratedModule {
        name: module_name.to_string(),
        dir: module_dir,
        files,
    })
}

/// Only plain path segments keep the module under the module root.
fn check_module_name(module_name: &str) -> Result<(), CraftError> {
    let plain = Path::new(module_name)
        .components()
        .all(|c| matches!(c, Component::Normal(_)));
    if module_name.is_empty() || !plain {
        return Err(CraftError::InvalidModuleName(module_name.to_string()));
    }
    Ok(())
}
