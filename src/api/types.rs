use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
    pub timestamp: String,
}

#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct HistogramQuery {
    pub scope: Option<String>,
    pub interval: Option<String>,
    /// Lower bound of the window, defaults to 24h before now
    pub after: Option<String>,
    /// Upper bound of the window, defaults to now
    pub before: Option<String>,
    /// Raw hits echoed alongside the aggregation. Kept as text so an empty
    /// value counts as absent.
    pub size: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TimeRange {
    pub from: String,
    pub to: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HistogramBucket {
    pub timestamp: Value,
    pub doc_count: u64,
    pub average_price: Option<f64>,
    pub min_price: Option<f64>,
    pub max_price: Option<f64>,
    pub median_price: Option<f64>,
}

#[derive(Debug, Clone, Serialize)]
pub struct HistogramResponse {
    pub query_time_ms: u64,
    pub scope: String,
    pub contract: String,
    pub table: String,
    pub interval: String,
    pub time_range: TimeRange,
    pub total_documents: u64,
    pub histogram: Vec<HistogramBucket>,
}
