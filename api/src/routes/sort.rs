//! The sorted collection view route.

use axum::{
    Json,
    extract::{Query, State},
};
use serde::Deserialize;
use store::models::{Patient, SortField, SortOrder};
use tracing::instrument;
use utoipa::IntoParams;

use crate::{
    AppState,
    error::{AppError, Result},
};

/// Query parameters for the sorted view.
#[derive(Debug, Deserialize, IntoParams)]
pub struct SortQueryParams {
    /// Field to sort on, `age` or `name`.
    sort_by: String,

    /// `asc` or `desc`, defaults to `asc`.
    order: Option<String>,
}

/// Sorted view of the collection
///
/// Both parameters are checked before the dataset is read, so an invalid
/// field or order never touches storage.
#[utoipa::path(
    get,
    path = "/sort",
    params(SortQueryParams),
    responses(
        (status = 200, description = "The collection ordered by the requested field", body = Vec<Patient>),
        (status = 400, description = "Unrecognized sort field or order"),
    )
)]
#[instrument(skip(store))]
#[axum::debug_handler]
pub async fn sort_patients(
    State(AppState { store, .. }): State<AppState>,
    Query(params): Query<SortQueryParams>,
) -> Result<Json<Vec<Patient>>> {
    let field = SortField::parse(&params.sort_by).ok_or_else(|| {
        AppError::BadRequest(Some(format!(
            "invalid sort field `{}`, select one of: age, name",
            params.sort_by
        )))
    })?;

    let order = match params.order.as_deref() {
        None => SortOrder::default(),
        Some(raw) => SortOrder::parse(raw).ok_or_else(|| {
            AppError::BadRequest(Some(format!(
                "invalid order `{raw}`, select between asc and desc"
            )))
        })?,
    };

    let records = store.sorted(field, order).await?;
    Ok(Json(records))
}
