use chrono::{DateTime, Utc};
use std::time::Instant;
use tracing::{error, info};
use crate::{
    build_request, resolve_window, shape_response, Error, HistogramQuery, HistogramResponse,
    IntervalClassifier, OracleConfig, QueryParameters, SearchBackend, DEFAULT_SCOPE, DEFAULT_SIZE,
};

/// Merges the request with the startup configuration.
pub fn resolve_parameters(
    query: &HistogramQuery,
    config: OracleConfig,
    now: DateTime<Utc>,
) -> Result<QueryParameters, Error> {
    let scope = query
        .scope
        .as_deref()
        .filter(|s| !s.is_empty())
        .unwrap_or(DEFAULT_SCOPE)
        .to_string();

    let size = match query.size.as_deref().map(str::trim).filter(|s| !s.is_empty()) {
        Some(raw) => raw
            .parse::<u64>()
            .map_err(|_| Error::InvalidQuery(format!("size must be a non-negative integer, got '{}'", raw)))?,
        None => DEFAULT_SIZE,
    };

    let window = resolve_window(query.after.as_deref(), query.before.as_deref(), now)?;
    let interval = IntervalClassifier::classify(query.interval.as_deref());

    Ok(QueryParameters {
        scope,
        contract: config.contract,
        table: config.table,
        interval,
        window,
        size,
    })
}

pub async fn run(
    query: HistogramQuery,
    config: OracleConfig,
    chain: &str,
    backend: &dyn SearchBackend,
) -> Result<HistogramResponse, Error> {
    let started = Instant::now();

    let params = resolve_parameters(&query, config, Utc::now())?;
    info!(
        "Histogram query - Scope: {}, Contract: {}, Table: {}, Interval: {}, Range: {} to {}",
        params.scope,
        params.contract,
        params.table,
        params.interval,
        params.window.from_text(),
        params.window.to_text()
    );

    let request = build_request(chain, &params);
    let raw = backend.search(&request.index, &request.body).await.map_err(|e| {
        error!("Search against {} failed: {}", request.index, e);
        e
    })?;

    let query_time_ms = started.elapsed().as_millis() as u64;
    let response = shape_response(&params, raw, query_time_ms);

    info!(
        "Retrieved {} buckets covering {} documents in {}ms",
        response.histogram.len(),
        response.total_documents,
        query_time_ms
    );

    Ok(response)
}
