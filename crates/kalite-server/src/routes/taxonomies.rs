use std::sync::Arc;

use axum::Json;
use axum::extract::{Path, State};
use serde::{Deserialize, Serialize};

use kalite_core::models::form::TaxonomyKind;
use kalite_taxonomy::Taxonomy;
use kalite_taxonomy::node::OptionItem;

use crate::error::ApiError;
use crate::state::AppState;

#[derive(Serialize)]
pub struct TaxonomySummary {
    id: String,
    name: String,
    depth: usize,
}

#[derive(Serialize)]
pub struct TaxonomyDetail {
    id: String,
    name: String,
    depth: usize,
    categories: Vec<OptionItem>,
}

#[derive(Deserialize)]
pub struct PathCheck {
    category: String,
    #[serde(default)]
    sub_category: Option<String>,
    #[serde(default)]
    description: Option<String>,
}

#[derive(Serialize)]
pub struct PathVerdict {
    valid: bool,
}

fn lookup(state: &AppState, id: &str) -> Result<Arc<dyn Taxonomy>, ApiError> {
    let kind: TaxonomyKind = id
        .parse()
        .map_err(|_| ApiError::NotFound(format!("taxonomy not found: {id}")))?;
    Ok(state.taxonomies.get(kind))
}

pub async fn list_taxonomies(State(state): State<AppState>) -> Json<Vec<TaxonomySummary>> {
    let taxonomies = state
        .taxonomies
        .iter()
        .map(|(_, t)| TaxonomySummary {
            id: t.id().to_string(),
            name: t.name().to_string(),
            depth: t.depth(),
        })
        .collect();
    Json(taxonomies)
}

pub async fn get_taxonomy(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<TaxonomyDetail>, ApiError> {
    let taxonomy = lookup(&state, &id)?;
    Ok(Json(TaxonomyDetail {
        id: taxonomy.id().to_string(),
        name: taxonomy.name().to_string(),
        depth: taxonomy.depth(),
        categories: taxonomy.categories(),
    }))
}

pub async fn children_of(
    State(state): State<AppState>,
    Path((id, code)): Path<(String, String)>,
) -> Result<Json<Vec<OptionItem>>, ApiError> {
    Ok(Json(lookup(&state, &id)?.children_of(&code)))
}

pub async fn children_at(
    State(state): State<AppState>,
    Path((id, category, sub)): Path<(String, String, String)>,
) -> Result<Json<Vec<OptionItem>>, ApiError> {
    Ok(Json(lookup(&state, &id)?.children_at(&category, &sub)))
}

pub async fn validate_path(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(check): Json<PathCheck>,
) -> Result<Json<PathVerdict>, ApiError> {
    let taxonomy = lookup(&state, &id)?;
    let valid = taxonomy.is_valid_path(
        &check.category,
        check.sub_category.as_deref(),
        check.description.as_deref(),
    );
    Ok(Json(PathVerdict { valid }))
}
