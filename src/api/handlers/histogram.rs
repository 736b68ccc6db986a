use axum::{
    extract::{rejection::QueryRejection, State, Query},
    response::Json,
};
use crate::{AppState, Error, HistogramQuery, HistogramResponse, api::handlers::common::ApiError};
use tracing::info;
use std::sync::Arc;

pub async fn get_datapoints_histogram(
    State(state): State<Arc<AppState>>,
    params: Result<Query<HistogramQuery>, QueryRejection>,
) -> Result<Json<HistogramResponse>, ApiError> {
    let Query(params) = params.map_err(|rejection| Error::InvalidQuery(rejection.body_text()))?;

    info!(
        "Fetching datapoints histogram - Scope: {:?}, Interval: {:?}, After: {:?}, Before: {:?}",
        params.scope, params.interval, params.after, params.before
    );

    let response = crate::query::run(
        params,
        state.config.clone(),
        &state.chain,
        state.backend.as_ref(),
    )
    .await?;

    Ok(Json(response))
}
