//! Role catalog provider.
//!
//! The catalog comes from one of two sources: a curated `list.json` manifest
//! inside the roles directory, or a directory scan when no manifest exists.
//! The manifest wins unconditionally when present; the scan is a degraded
//! fallback, not an equivalent.

use std::path::{Path, PathBuf};

use crate::config::Config;
use crate::error::InvgenError;

pub const MANIFEST_FILE: &str = "list.json";

/// Where the role list comes from, decided before any read so tests can
/// force either branch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RoleSource {
    /// `<roles_dir>/list.json`, loaded verbatim.
    Manifest(PathBuf),
    /// Immediate subdirectories of the roles dir, `_`-prefixed names
    /// excluded, sorted lexicographically.
    Scan(PathBuf),
}

impl RoleSource {
    pub fn select(roles_dir: &Path) -> Self {
        let manifest = roles_dir.join(MANIFEST_FILE);
        if manifest.is_file() {
            Self::Manifest(manifest)
        } else {
            Self::Scan(roles_dir.to_path_buf())
        }
    }

    pub fn list_roles(&self) -> Result<Vec<String>, InvgenError> {
        match self {
            Self::Manifest(path) => {
                let text = std::fs::read_to_string(path).map_err(|source| InvgenError::Io {
                    path: path.clone(),
                    source,
                })?;
                serde_json::from_str(&text).map_err(|e| InvgenError::Malformed {
                    path: path.clone(),
                    message: e.to_string(),
                })
            }
            Self::Scan(dir) => scan_roles_dir(dir),
        }
    }
}

/// List role identifiers for the configured roles directory.
pub fn list_roles(config: &Config) -> Result<Vec<String>, InvgenError> {
    let source = RoleSource::select(&config.roles_dir);
    tracing::debug!(?source, "listing roles");
    source.list_roles()
}

fn scan_roles_dir(dir: &Path) -> Result<Vec<String>, InvgenError> {
    let io_err = |source| InvgenError::Io {
        path: dir.to_path_buf(),
        source,
    };
    let mut roles = Vec::new();
    for entry in std::fs::read_dir(dir).map_err(io_err)? {
        let entry = entry.map_err(io_err)?;
        // Symlinks to directories count as roles; Path::is_dir follows them.
        if !entry.path().is_dir() {
            continue;
        }
        let name = entry.file_name().to_string_lossy().into_owned();
        if !name.starts_with('_') {
            roles.push(name);
        }
    }
    roles.sort();
    Ok(roles)
}
