//! The full collection view route.

use axum::{Json, extract::State};
use store::models::Patient;
use tracing::instrument;

use crate::{AppState, error::Result};

/// List every patient record
///
/// Returns the collection exactly as stored, in file order.
#[utoipa::path(
    get,
    path = "/view",
    responses(
        (status = 200, description = "The full patient collection", body = Vec<Patient>)
    )
)]
#[instrument(skip(store))]
#[axum::debug_handler]
pub async fn list_patients(
    State(AppState { store, .. }): State<AppState>,
) -> Result<Json<Vec<Patient>>> {
    let records = store.load().await?;
    Ok(Json(records))
}
