//! Liveness and description endpoints.

use axum::Json;

use crate::routes::MessageResponse;

/// Service liveness message
#[utoipa::path(
    get,
    path = "/",
    responses(
        (status = 200, description = "Service is up", body = MessageResponse)
    )
)]
pub async fn home() -> Json<MessageResponse> {
    Json(MessageResponse {
        message: "Patient Management System API".to_string(),
    })
}

/// Service description message
#[utoipa::path(
    get,
    path = "/about",
    responses(
        (status = 200, description = "What this service does", body = MessageResponse)
    )
)]
pub async fn about() -> Json<MessageResponse> {
    Json(MessageResponse {
        message: "A fully functional API to manage Patients data".to_string(),
    })
}
