//! Patient endpoints

use std::sync::Arc;

use axum::{extract::State, routing::get, Json, Router};
use serde::Deserialize;

use crate::http::error::ApiError;
use crate::http::extractors::FilterQuery;
use crate::http::server::AppState;
use crate::models::{FilterValue, Patient};

/// Query parameters for `/patients/filter`
#[derive(Debug, Deserialize)]
pub struct PatientFilterParams {
    pub first_name: Option<String>,
}

/// GET /patients - list all patients
async fn list_patients(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<Patient>>, ApiError> {
    let patients = state
        .patients
        .list()
        .await
        .map_err(|e| ApiError::database("patients", e))?;

    Ok(Json(patients))
}

/// GET /patients/filter?first_name= - patients with an exact first name
async fn filter_patients(
    State(state): State<Arc<AppState>>,
    FilterQuery(params): FilterQuery<PatientFilterParams>,
) -> Result<Json<Vec<Patient>>, ApiError> {
    let first_name = FilterValue::require(params.first_name, "first name")?;

    let patients = state
        .patients
        .by_first_name(first_name.as_str())
        .await
        .map_err(|e| ApiError::database("patients", e))?;

    if patients.is_empty() {
        return Err(ApiError::NotFound {
            resource: "patients",
            criterion: "first name",
        });
    }

    Ok(Json(patients))
}

/// Patient routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/patients", get(list_patients))
        .route("/patients/filter", get(filter_patients))
}
