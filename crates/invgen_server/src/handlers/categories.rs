//! GET /categories — the category tree, served back verbatim.

use axum::{extract::State, Json};
use invgen_core::categories::load_categories_document;

use crate::error::AppError;
use crate::state::AppState;

pub async fn categories(
    State(state): State<AppState>,
) -> Result<Json<serde_yaml::Value>, AppError> {
    let doc = load_categories_document(&state.config.categories_file)?;
    Ok(Json(doc))
}
