use axum::Router;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_scalar::{Scalar, Servable as _};

use crate::AppState;

mod create;
mod delete;
mod get;
mod list;
mod meta;
mod sort;
mod update;

/// Plain acknowledgement body returned by the meta and mutation endpoints.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct MessageResponse {
    pub message: String,
}

pub fn build_router() -> Router<AppState> {
    let (router, openapi) = OpenApiRouter::<AppState>::new()
        .routes(routes!(meta::home))
        .routes(routes!(meta::about))
        .routes(routes!(list::list_patients))
        .routes(routes!(get::get_patient))
        .routes(routes!(sort::sort_patients))
        .routes(routes!(create::create_patient))
        .routes(routes!(update::update_patient))
        .routes(routes!(delete::delete_patient))
        .split_for_parts();

    router.merge(Scalar::with_url("/docs", openapi))
}
