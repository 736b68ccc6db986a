use serde_json::{json, Value};
use crate::{
    AggregationRequest, QueryParameters, delta_index, derived_field,
    TIMESTAMP_FIELD, CODE_FIELD, TABLE_FIELD, SCOPE_FIELD, HISTOGRAM_AGG,
    AVERAGE_PRICE_AGG, MIN_PRICE_AGG, MAX_PRICE_AGG, MEDIAN_PRICE_AGG,
};

pub fn build_request(chain: &str, params: &QueryParameters) -> AggregationRequest {
    AggregationRequest {
        index: delta_index(chain),
        body: build_body(params),
    }
}

fn build_body(params: &QueryParameters) -> Value {
    let value_field = format!("{}.value", derived_field(&params.table));
    let median_field = format!("{}.median", derived_field(&params.table));

    let mut date_histogram = serde_json::Map::new();
    date_histogram.insert("field".to_string(), json!(TIMESTAMP_FIELD));
    date_histogram.insert(
        params.interval.kind.request_field().to_string(),
        json!(params.interval.token),
    );

    json!({
        "size": params.size,
        "track_total_hits": true,
        "query": {
            "bool": {
                "must": [
                    { "range": { TIMESTAMP_FIELD: {
                        "gte": params.window.from_text(),
                        "lte": params.window.to_text(),
                    } } },
                    { "term": { CODE_FIELD: params.contract } },
                    { "term": { TABLE_FIELD: params.table } },
                    { "term": { SCOPE_FIELD: params.scope } },
                ]
            }
        },
        "aggs": {
            HISTOGRAM_AGG: {
                "date_histogram": date_histogram,
                "aggs": {
                    AVERAGE_PRICE_AGG: { "avg": { "field": value_field } },
                    MIN_PRICE_AGG: { "min": { "field": value_field } },
                    MAX_PRICE_AGG: { "max": { "field": value_field } },
                    MEDIAN_PRICE_AGG: { "avg": { "field": median_field } },
                }
            }
        }
    })
}
