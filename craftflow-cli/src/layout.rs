//! Fixed scaffolding tables.
//!
//! Everything `init` and `create` lay down is described here as immutable
//! data and handed to the generators as a [`ProjectLayout`] reference.

use std::path::{Path, PathBuf};

/// One folder of a generated module and the template that fills it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ModuleFolder {
    pub folder: &'static str,
    pub template: &'static str,
}

/// Fixed additions merged into `package.json` by `init`.
#[derive(Debug, Clone, Copy)]
pub struct ManifestAdditions {
    pub scripts: &'static [(&'static str, &'static str)],
    pub dependencies: &'static [(&'static str, &'static str)],
    pub dev_dependencies: &'static [(&'static str, &'static str)],
}

impl ManifestAdditions {
    /// The three manifest sections paired with their JSON key.
    pub fn sections(&self) -> [(&'static str, &'static [(&'static str, &'static str)]); 3] {
        [
            ("scripts", self.scripts),
            ("devDependencies", self.dev_dependencies),
            ("dependencies", self.dependencies),
        ]
    }
}

/// The complete scaffolding description for a project.
#[derive(Debug, Clone, Copy)]
pub struct ProjectLayout {
    /// Top-level source folder, relative to the project root.
    pub source_root: &'static str,
    /// Folder under `source_root` holding generated modules.
    pub module_root: &'static str,
    /// File written into each module folder.
    pub module_file: &'static str,
    pub module_folders: &'static [ModuleFolder],
    /// Folders created under `source_root` by `init`.
    pub project_folders: &'static [&'static str],
    /// Templates copied verbatim under `source_root` by `init`.
    pub initial_files: &'static [&'static str],
    pub initial_auth_files: &'static [&'static str],
    /// Environment file names, all written with the same content.
    pub env_files: &'static [&'static str],
    pub env: &'static [(&'static str, &'static str)],
    pub manifest_file: &'static str,
    pub manifest: ManifestAdditions,
}

impl ProjectLayout {
    pub fn source_dir(&self, root: &Path) -> PathBuf {
        root.join(self.source_root)
    }

    pub fn module_dir(&self, root: &Path, module_name: &str) -> PathBuf {
        self.source_dir(root).join(self.module_root).join(module_name)
    }

    /// Display form of a module destination, e.g. `src/packages/task`.
    pub fn module_display_path(&self, module_name: &str) -> String {
        format!("{}/{}/{module_name}", self.source_root, self.module_root)
    }

    /// General templates followed by the auth templates.
    pub fn initial_templates(&self) -> impl Iterator<Item = &'static str> {
        let (general, auth) = (self.initial_files, self.initial_auth_files);
        general.iter().chain(auth.iter()).copied()
    }
}

/// Layout of an Express + TypeScript + Mongoose backend.
pub const STANDARD: ProjectLayout = ProjectLayout {
    source_root: "src",
    module_root: "packages",
    module_file: "index.ts",
    module_folders: &[
        ModuleFolder { folder: "controllers", template: "base-controller.ts" },
        ModuleFolder { folder: "dtos", template: "base-dto.ts" },
        ModuleFolder { folder: "models", template: "base-model.ts" },
        ModuleFolder { folder: "routes", template: "base-route.ts" },
        ModuleFolder { folder: "services", template: "base-service.ts" },
        ModuleFolder { folder: "validations", template: "base-validation.ts" },
    ],
    project_folders: &["config", "middlewares", "packages", "types", "utils"],
    initial_files: &[
        "app.ts",
        "server.ts",
        "routes.ts",
        "config/index.ts",
        "config/database.ts",
        "middlewares/error-handler.ts",
        "middlewares/not-found.ts",
        "middlewares/validate.ts",
        "types/express.d.ts",
        "utils/api-error.ts",
        "utils/async-handler.ts",
        "utils/logger.ts",
    ],
    initial_auth_files: &[
        "middlewares/authenticate.ts",
        "packages/auth/controllers/index.ts",
        "packages/auth/dtos/index.ts",
        "packages/auth/models/index.ts",
        "packages/auth/routes/index.ts",
        "packages/auth/services/index.ts",
        "packages/auth/validations/index.ts",
    ],
    env_files: &[".env", ".env.prod"],
    env: &[
        ("PORT", "3000"),
        ("NODE_ENV", "development"),
        ("MONGO_URI", "mongodb://localhost:27017/app"),
        ("JWT_SECRET", "change-me"),
        ("JWT_EXPIRES_IN", "1d"),
        ("LOG_LEVEL", "info"),
    ],
    manifest_file: "package.json",
    manifest: ManifestAdditions {
        scripts: &[
            ("dev", "ts-node-dev --respawn --transpile-only src/server.ts"),
            ("build", "tsc"),
            ("start", "node dist/server.js"),
        ],
        dependencies: &[
            ("bcryptjs", "^2.4.3"),
            ("cors", "^2.8.5"),
            ("dotenv", "^16.4.5"),
            ("express", "^4.19.2"),
            ("helmet", "^7.1.0"),
            ("joi", "^17.13.3"),
            ("jsonwebtoken", "^9.0.2"),
            ("mongoose", "^8.5.1"),
        ],
        dev_dependencies: &[
            ("@types/bcryptjs", "^2.4.6"),
            ("@types/cors", "^2.8.17"),
            ("@types/express", "^4.17.21"),
            ("@types/jsonwebtoken", "^9.0.6"),
            ("@types/node", "^20.14.12"),
            ("ts-node-dev", "^2.0.0"),
            ("typescript", "^5.5.4"),
        ],
    },
};
