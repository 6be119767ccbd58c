use colored::Colorize;
use std::fs;
use std::path::{Path, PathBuf};

use super::templates::store::TemplateStore;
use crate::env_file;
use crate::error::CraftError;
use crate::installer::Installer;
use crate::layout::{ProjectLayout, STANDARD};
use crate::manifest;
use crate::settings::Settings;

/// What `init` wrote, in order.
#[derive(Debug, Clone, Default)]
pub struct InitReport {
    pub folders: Vec<PathBuf>,
    pub files: Vec<PathBuf>,
    pub env_files: Vec<PathBuf>,
    pub manifest: PathBuf,
    pub installed: bool,
}

/// Initialize a project — `craftflow init`.
///
/// Runs [`init_project`] in the settings root with the standard layout and
/// the configured installer. `--skip-install` leaves `npm install` to the
/// user.
pub fn run(settings: &Settings) -> Result<(), CraftError> {
    let store = settings.templates.open();
    let installer: Option<&dyn Installer> = if settings.skip_install {
        None
    } else {
        Some(&settings.installer)
    };

    let report = init_project(&settings.root, store.as_ref(), &STANDARD, installer)?;

    println!();
    println!(
        "{} Project initialized: {} folders, {} files",
        "✓".green(),
        report.folders.len(),
        report.files.len() + report.env_files.len()
    );
    if !report.installed {
        println!("  Run `{}` to fetch dependencies.", settings.installer.display());
    }
    println!("  npm run dev");

    Ok(())
}

/// Scaffold a project in `root`.
///
/// Steps, each aborting the remaining ones on failure:
/// 1. refuse if `src/` already exists (no writes),
/// 2. create the top-level folders,
/// 3. copy the initial and auth templates verbatim under `src/`,
/// 4. write `.env` and `.env.prod`,
/// 5. merge scripts and dependencies into `package.json`,
/// 6. run the installer, when one is given.
pub fn init_project(
    root: &Path,
    store: &dyn TemplateStore,
    layout: &ProjectLayout,
    installer: Option<&dyn Installer>,
) -> Result<InitReport, CraftError> {
    let source_dir = layout.source_dir(root);
    if source_dir.exists() {
        return Err(CraftError::AlreadyInitialized {
            path: PathBuf::from(layout.source_root),
        });
    }

    let mut report = InitReport::default();

    for folder in layout.project_folders {
        let path = source_dir.join(folder);
        fs::create_dir_all(&path).map_err(CraftError::io(&path))?;
        println!(
            "{} Created folder: {}",
            "->".blue(),
            path.display().to_string().cyan()
        );
        report.folders.push(path);
    }

    for template in layout.initial_templates() {
        let content = store.load(template)?;
        let dest = source_dir.join(template);
        if let Some(parent) = dest.parent() {
            fs::create_dir_all(parent).map_err(CraftError::io(parent))?;
        }
        fs::write(&dest, content).map_err(CraftError::io(&dest))?;
        println!(
            "{} Created file: {}",
            "✓".green(),
            dest.display().to_string().cyan()
        );
        report.files.push(dest);
    }

    report.env_files = env_file::write_env_files(root, layout.env_files, layout.env)?;
    for path in &report.env_files {
        println!(
            "{} Created file: {}",
            "✓".green(),
            path.display().to_string().cyan()
        );
    }

    report.manifest = root.join(layout.manifest_file);
    manifest::update_manifest(&report.manifest, &layout.manifest)?;
    println!(
        "{} Updated {} with required scripts and dependencies",
        "✓".green(),
        layout.manifest_file.cyan()
    );

    if let Some(installer) = installer {
        installer.install(root)?;
        report.installed = true;
        println!("{} Installed dependencies", "✓".green());
    } else {
        tracing::info!("dependency installation skipped");
    }

    Ok(report)
}
