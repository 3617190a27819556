//! Provider endpoints

use std::sync::Arc;

use axum::{extract::State, routing::get, Json, Router};
use serde::Deserialize;

use crate::http::error::ApiError;
use crate::http::extractors::FilterQuery;
use crate::http::server::AppState;
use crate::models::{FilterValue, Provider};

/// Query parameters for `/providers/filter`
#[derive(Debug, Deserialize)]
pub struct ProviderFilterParams {
    pub specialty: Option<String>,
}

/// GET /providers - list all providers
async fn list_providers(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<Provider>>, ApiError> {
    let providers = state
        .providers
        .list()
        .await
        .map_err(|e| ApiError::database("providers", e))?;

    Ok(Json(providers))
}

/// GET /providers/filter?specialty=
async fn filter_providers(
    State(state): State<Arc<AppState>>,
    FilterQuery(params): FilterQuery<ProviderFilterParams>,
) -> Result<Json<Vec<Provider>>, ApiError> {
    let specialty = FilterValue::require(params.specialty, "specialty")?;

    let providers = state
        .providers
        .by_specialty(specialty.as_str())
        .await
        .map_err(|e| ApiError::database("providers", e))?;

    if providers.is_empty() {
        return Err(ApiError::NotFound {
            resource: "providers",
            criterion: "specialty",
        });
    }

    Ok(Json(providers))
}

/// Provider routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/providers", get(list_providers))
        .route("/providers/filter", get(filter_providers))
}
