use serde::Deserialize;
use serde_json::Value;
use chrono::{DateTime, SecondsFormat, Utc};
use std::fmt;

#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq)]
pub enum IntervalKind {
    /// Month/quarter/year aware bucketing
    Calendar,
    /// Integer multiples of a constant-length unit
    Fixed,
}

impl IntervalKind {
    /// Name of the date_histogram field that carries the interval token.
    pub fn request_field(&self) -> &'static str {
        match self {
            IntervalKind::Calendar => "calendar_interval",
            IntervalKind::Fixed => "fixed_interval",
        }
    }
}

impl fmt::Display for IntervalKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IntervalKind::Calendar => write!(f, "calendar"),
            IntervalKind::Fixed => write!(f, "fixed"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IntervalSpec {
    pub token: String,
    pub kind: IntervalKind,
}

impl fmt::Display for IntervalSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.token, self.kind)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeWindow {
    pub from: DateTime<Utc>,
    pub to: DateTime<Utc>,
}

impl TimeWindow {
    pub fn from_text(&self) -> String {
        canonical_timestamp(&self.from)
    }

    pub fn to_text(&self) -> String {
        canonical_timestamp(&self.to)
    }
}

/// `2024-01-01T00:00:00.000Z`
pub fn canonical_timestamp(ts: &DateTime<Utc>) -> String {
    ts.to_rfc3339_opts(SecondsFormat::Millis, true)
}

#[derive(Debug, Clone)]
pub struct QueryParameters {
    pub scope: String,
    pub contract: String,
    pub table: String,
    pub interval: IntervalSpec,
    pub window: TimeWindow,
    pub size: u64,
}

#[derive(Debug, Clone)]
pub struct AggregationRequest {
    pub index: String,
    pub body: Value,
}

// Raw search response as returned by the document store. Everything is
// optional since empty indices and partial aggregations drop sections.

#[derive(Debug, Clone, Default, Deserialize)]
pub struct StoreResponse {
    #[serde(default)]
    pub hits: Option<StoreHits>,
    #[serde(default)]
    pub aggregations: Option<StoreAggregations>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct StoreHits {
    #[serde(default)]
    pub total: Option<StoreTotal>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum StoreTotal {
    Count(u64),
    Tracked { value: u64 },
}

impl StoreTotal {
    pub fn value(&self) -> u64 {
        match self {
            StoreTotal::Count(n) => *n,
            StoreTotal::Tracked { value } => *value,
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct StoreAggregations {
    #[serde(default)]
    pub histogram: Option<StoreHistogram>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct StoreHistogram {
    #[serde(default)]
    pub buckets: Vec<StoreBucket>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct StoreBucket {
    #[serde(default)]
    pub key: Option<Value>,
    #[serde(default)]
    pub key_as_string: Option<String>,
    #[serde(default)]
    pub doc_count: u64,
    #[serde(default)]
    pub average_price: Option<MetricValue>,
    #[serde(default)]
    pub min_price: Option<MetricValue>,
    #[serde(default)]
    pub max_price: Option<MetricValue>,
    #[serde(default)]
    pub median_price: Option<MetricValue>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct MetricValue {
    #[serde(default)]
    pub value: Option<f64>,
}
