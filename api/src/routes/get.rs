//! The single-record fetch route.

use axum::{
    Json,
    extract::{Path, State},
};
use store::models::Patient;
use tracing::instrument;

use crate::{AppState, error::Result};

/// Fetch one patient by ID
#[utoipa::path(
    get,
    path = "/patient/{id}",
    params(
        ("id", description = "ID of the patient in the DB"),
    ),
    responses(
        (status = 200, description = "The requested patient", body = Patient),
        (status = 404, description = "No patient with this ID"),
    )
)]
#[instrument(skip(store))]
#[axum::debug_handler]
pub async fn get_patient(
    State(AppState { store, .. }): State<AppState>,
    Path(id): Path<u32>,
) -> Result<Json<Patient>> {
    let patient = store.get(id).await?;
    Ok(Json(patient))
}
