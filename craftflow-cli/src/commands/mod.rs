//! Command implementations for the `craftflow` CLI.
//!
//! Each submodule corresponds to a top-level CLI command.

/// Module generation — `craftflow create <module-name>`.
///
/// Creates `src/packages/<module-name>/{controllers,dtos,models,routes,services,validations}`
/// with one `index.ts` each, rendered from the `base-*.ts` templates.
pub mod create;

/// Usage text — `craftflow help`.
pub mod help;

/// Project scaffolding — `craftflow init`.
///
/// Creates the `src/` layout, copies the starter and auth files, writes
/// `.env`/`.env.prod`, merges `package.json` and runs the installer.
pub mod init;

/// Template store and placeholder substitution.
pub mod templates;
