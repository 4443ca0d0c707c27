//! The partial update route.

use axum::{
    Json,
    extract::{Path, State},
};
use store::models::PatientUpdate;
use tracing::instrument;

use crate::{AppState, error::Result, routes::MessageResponse};

/// Partially update a patient record
///
/// Fields absent from the body are left as they are. The merged record is
/// re-validated against the full schema before anything is persisted.
#[utoipa::path(
    put,
    path = "/edit/{id}",
    params(
        ("id", description = "ID of the patient to update"),
    ),
    request_body = PatientUpdate,
    responses(
        (status = 200, description = "Record updated and persisted", body = MessageResponse),
        (status = 404, description = "No patient with this ID"),
        (status = 422, description = "The merged record violates a schema constraint"),
    )
)]
#[instrument(skip(store, patch))]
#[axum::debug_handler]
pub async fn update_patient(
    State(AppState { store, .. }): State<AppState>,
    Path(id): Path<u32>,
    Json(patch): Json<PatientUpdate>,
) -> Result<Json<MessageResponse>> {
    store.update(id, patch).await?;

    Ok(Json(MessageResponse {
        message: format!("Patient {id} updated successfully"),
    }))
}
