//! GET /roles — the role catalog, filtered to invokable roles by default.

use axum::extract::{Query, State};
use axum::Json;
use invgen_core::{catalog, categories, resolver};
use serde::{Deserialize, Serialize};

use crate::error::AppError;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct RolesQuery {
    #[serde(default = "default_true")]
    pub invokable_only: bool,
}

fn default_true() -> bool {
    true
}

#[derive(Debug, Serialize)]
pub struct RolesResponse {
    pub count: usize,
    pub items: Vec<String>,
}

pub async fn roles(
    State(state): State<AppState>,
    Query(query): Query<RolesQuery>,
) -> Result<Json<RolesResponse>, AppError> {
    let mut items = catalog::list_roles(&state.config)?;
    if query.invokable_only {
        let tree = categories::load_categories(&state.config.categories_file)?;
        items = resolver::filter_invokable(items, &tree);
    }
    Ok(Json(RolesResponse {
        count: items.len(),
        items,
    }))
}
