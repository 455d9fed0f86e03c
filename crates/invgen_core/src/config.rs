//! Process configuration, resolved once at startup.
//!
//! Env vars (all optional):
//!   WORKSPACE                — workspace root (default: /workspace)
//!   RELATIVE_ROLES_DIR       — roles dir relative to the root (default: roles)
//!   RELATIVE_CATEGORIES_FILE — categories document relative to the root
//!                              (default: roles/categories.yml)

use std::path::PathBuf;

pub const DEFAULT_WORKSPACE: &str = "/workspace";
pub const DEFAULT_ROLES_DIR: &str = "roles";
pub const DEFAULT_CATEGORIES_FILE: &str = "roles/categories.yml";

#[derive(Debug, Clone)]
pub struct Config {
    pub workspace: PathBuf,
    pub roles_dir: PathBuf,
    pub categories_file: PathBuf,
}

impl Config {
    /// Build a config from a workspace root and the two relative paths.
    pub fn new(
        workspace: impl Into<PathBuf>,
        relative_roles_dir: &str,
        relative_categories_file: &str,
    ) -> Self {
        let workspace = workspace.into();
        Self {
            roles_dir: workspace.join(relative_roles_dir),
            categories_file: workspace.join(relative_categories_file),
            workspace,
        }
    }

    /// Read config from environment variables, falling back to defaults.
    pub fn from_env() -> Self {
        let workspace =
            std::env::var("WORKSPACE").unwrap_or_else(|_| DEFAULT_WORKSPACE.to_string());
        let roles_dir =
            std::env::var("RELATIVE_ROLES_DIR").unwrap_or_else(|_| DEFAULT_ROLES_DIR.to_string());
        let categories_file = std::env::var("RELATIVE_CATEGORIES_FILE")
            .unwrap_or_else(|_| DEFAULT_CATEGORIES_FILE.to_string());
        Self::new(workspace, &roles_dir, &categories_file)
    }
}
