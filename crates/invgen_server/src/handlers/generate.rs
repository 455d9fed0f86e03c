//! POST /generate/inventory — build an inventory document for one host.

use std::collections::HashSet;

use axum::extract::State;
use axum::Json;
use invgen_core::inventory::{self, InventoryStyle, INVENTORY_FILENAME};
use invgen_core::{catalog, categories, resolver};
use serde::{Deserialize, Serialize};

use crate::error::AppError;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct InventoryRequest {
    pub host: String,
    #[serde(default = "default_style")]
    pub style: String,
    #[serde(default)]
    pub ignore: Vec<String>,
}

fn default_style() -> String {
    "group".to_string()
}

#[derive(Debug, Serialize)]
pub struct InventoryResponse {
    pub filename: &'static str,
    pub content: String,
}

pub async fn generate_inventory(
    State(state): State<AppState>,
    Json(req): Json<InventoryRequest>,
) -> Result<Json<InventoryResponse>, AppError> {
    let style: InventoryStyle = req.style.parse()?;

    let tree = categories::load_categories(&state.config.categories_file)?;
    let mut roles = resolver::filter_invokable(catalog::list_roles(&state.config)?, &tree);
    if !req.ignore.is_empty() {
        let ignore: HashSet<&str> = req.ignore.iter().map(String::as_str).collect();
        roles.retain(|role| !ignore.contains(role.as_str()));
    }

    let doc = match style {
        InventoryStyle::Group => inventory::build_group(&roles, &req.host),
        InventoryStyle::Hostvars => inventory::build_hostvars(&roles, &req.host),
    };
    let content = inventory::render(&doc)?;

    tracing::info!(host = %req.host, ?style, roles = roles.len(), "generated inventory");
    Ok(Json(InventoryResponse {
        filename: INVENTORY_FILENAME,
        content,
    }))
}
