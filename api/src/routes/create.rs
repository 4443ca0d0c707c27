//! The create patient route.

use axum::{Json, extract::State};
use store::models::Patient;
use tracing::instrument;

use crate::{AppState, error::Result, routes::MessageResponse};

/// Create a new patient record
///
/// The identifier is chosen by the caller and must not already be present in
/// the collection.
#[utoipa::path(
    post,
    path = "/create",
    request_body = Patient,
    responses(
        (status = 200, description = "Record created and persisted", body = MessageResponse),
        (status = 400, description = "A patient with this ID already exists"),
        (status = 422, description = "The record violates a schema constraint"),
    )
)]
#[instrument(skip(store, patient), fields(id = patient.id))]
#[axum::debug_handler]
pub async fn create_patient(
    State(AppState { store, .. }): State<AppState>,
    Json(patient): Json<Patient>,
) -> Result<Json<MessageResponse>> {
    store.create(patient).await?;

    Ok(Json(MessageResponse {
        message: "Patient created successfully".to_string(),
    }))
}
