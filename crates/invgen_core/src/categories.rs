//! Category tree model and loader.
//!
//! The categories document is a YAML tree: `{roles: {name: {invokable: bool,
//! roles: {...nested...}}, ...}}` at arbitrary depth. The raw document is
//! kept as a `serde_yaml::Value` so it can be served back verbatim —
//! explicit `invokable: false` flags, empty mappings, and fields the tree
//! model does not interpret all survive. [`CategoryNode`] is the typed view
//! the resolver works on.

use std::path::Path;

use indexmap::IndexMap;
use serde::Deserialize;
use serde_yaml::Value;

use crate::error::InvgenError;

/// One node of the category tree. The root node has no name of its own; its
/// `invokable` flag carries no meaning and contributes no path. Fields beyond
/// these two (titles, descriptions, ...) are ignored here; they remain
/// visible in the raw document.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct CategoryNode {
    #[serde(default)]
    pub invokable: bool,

    /// Child categories, keyed by name. Document order is preserved.
    #[serde(default)]
    pub roles: IndexMap<String, CategoryNode>,
}

/// Load the categories document verbatim from `path`.
///
/// A missing or empty document is an empty mapping, never an error. A
/// document that exists but does not parse propagates as
/// [`InvgenError::Malformed`].
pub fn load_categories_document(path: &Path) -> Result<Value, InvgenError> {
    let text = match std::fs::read_to_string(path) {
        Ok(text) => text,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            tracing::debug!("no categories document at {}", path.display());
            return Ok(empty_document());
        }
        Err(source) => {
            return Err(InvgenError::Io {
                path: path.to_path_buf(),
                source,
            })
        }
    };

    // An empty or comment-only document parses as null; treat it as `{}`.
    let value: Value = serde_yaml::from_str(&text).map_err(|e| InvgenError::Malformed {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;
    if value.is_null() {
        return Ok(empty_document());
    }
    Ok(value)
}

/// Load the category tree from `path` as the typed view for resolution.
pub fn load_categories(path: &Path) -> Result<CategoryNode, InvgenError> {
    let value = load_categories_document(path)?;
    serde_yaml::from_value(value).map_err(|e| InvgenError::Malformed {
        path: path.to_path_buf(),
        message: e.to_string(),
    })
}

fn empty_document() -> Value {
    Value::Mapping(serde_yaml::Mapping::new())
}
