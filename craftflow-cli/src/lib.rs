//! # craftflow-cli
//!
//! Command-line tool for scaffolding Express/TypeScript backends.
//!
//! This crate provides the `craftflow` binary with the following commands:
//!
//! | Command | Description |
//! |---------|-------------|
//! | `craftflow init` | Create the `src/` layout, env files, and merge `package.json` |
//! | `craftflow create <name>` | Generate a feature module under `src/packages/<name>` |
//! | `craftflow help` | Print usage |
//!
//! ## Architecture
//!
//! - [`commands::init`] — project scaffolding
//! - [`commands::create`] — module generation
//! - [`commands::templates`] — template store and `Base`/`base` substitution
//! - [`layout`] — the fixed folder, file, env and manifest tables
//! - [`manifest`], [`env_file`], [`installer`] — the `init` side effects
//! - [`settings`] — per-invocation settings from flags and environment

pub mod commands;
pub mod env_file;
pub mod error;
pub mod installer;
pub mod layout;
pub mod logging;
pub mod manifest;
pub mod settings;

pub use error::CraftError;
