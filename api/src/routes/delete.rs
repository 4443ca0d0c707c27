//! The delete patient route.

use axum::{
    Json,
    extract::{Path, State},
};
use tracing::instrument;

use crate::{AppState, error::Result, routes::MessageResponse};

/// Delete a patient record
///
/// The remaining records keep their relative order in the collection.
#[utoipa::path(
    delete,
    path = "/delete/{id}",
    params(
        ("id", description = "ID of the patient to delete"),
    ),
    responses(
        (status = 200, description = "Record removed and the rest persisted", body = MessageResponse),
        (status = 404, description = "No patient with this ID"),
    )
)]
#[instrument(skip(store))]
#[axum::debug_handler]
pub async fn delete_patient(
    State(AppState { store, .. }): State<AppState>,
    Path(id): Path<u32>,
) -> Result<Json<MessageResponse>> {
    store.delete(id).await?;

    Ok(Json(MessageResponse {
        message: format!("Patient {id} deleted successfully"),
    }))
}
