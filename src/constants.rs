// Request defaults
pub const DEFAULT_SCOPE: &str = "tlosusd";
pub const DEFAULT_CONTRACT: &str = "delphioracle";
pub const DEFAULT_TABLE: &str = "datapoints";
pub const DEFAULT_INTERVAL: &str = "1h";
pub const DEFAULT_SIZE: u64 = 0;
pub const DEFAULT_WINDOW_HOURS: i64 = 24;

// Delta index layout
pub const DELTA_INDEX_SUFFIX: &str = "-delta-*";
pub const TIMESTAMP_FIELD: &str = "@timestamp";
pub const CODE_FIELD: &str = "code";
pub const TABLE_FIELD: &str = "table";
pub const SCOPE_FIELD: &str = "scope";
pub const RAW_DATA_FIELD: &str = "data";

// Aggregation names
pub const HISTOGRAM_AGG: &str = "histogram";
pub const AVERAGE_PRICE_AGG: &str = "average_price";
pub const MIN_PRICE_AGG: &str = "min_price";
pub const MAX_PRICE_AGG: &str = "max_price";
pub const MEDIAN_PRICE_AGG: &str = "median_price";

// Static responses
pub const READINESS_MESSAGE: &str = "Delphioracle API is running!";
pub const INTERNAL_ERROR: &str = "Internal server error";
pub const BAD_REQUEST_ERROR: &str = "Bad request";

pub fn delta_index(chain: &str) -> String {
    format!("{}{}", chain, DELTA_INDEX_SUFFIX)
}

/// Field holding the derived datapoint object for a table, e.g. `@datapoints`.
pub fn derived_field(table: &str) -> String {
    format!("@{}", table)
}
