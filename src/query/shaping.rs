use serde_json::Value;
use crate::{
    HistogramBucket, HistogramResponse, MetricValue, QueryParameters, StoreBucket,
    StoreResponse, TimeRange,
};

pub fn shape_response(
    params: &QueryParameters,
    raw: StoreResponse,
    query_time_ms: u64,
) -> HistogramResponse {
    let total_documents = raw
        .hits
        .as_ref()
        .and_then(|hits| hits.total.as_ref())
        .map(|total| total.value())
        .unwrap_or(0);

    let histogram: Vec<HistogramBucket> = raw
        .aggregations
        .and_then(|aggs| aggs.histogram)
        .map(|histogram| histogram.buckets.into_iter().map(shape_bucket).collect())
        .unwrap_or_default();

    HistogramResponse {
        query_time_ms,
        scope: params.scope.clone(),
        contract: params.contract.clone(),
        table: params.table.clone(),
        interval: params.interval.token.clone(),
        time_range: TimeRange {
            from: params.window.from_text(),
            to: params.window.to_text(),
        },
        total_documents,
        histogram,
    }
}

fn shape_bucket(bucket: StoreBucket) -> HistogramBucket {
    let timestamp = match (bucket.key_as_string, bucket.key) {
        (Some(text), _) => Value::String(text),
        (None, Some(key)) => key,
        (None, None) => Value::Null,
    };

    HistogramBucket {
        timestamp,
        doc_count: bucket.doc_count,
        average_price: metric(bucket.average_price),
        min_price: metric(bucket.min_price),
        max_price: metric(bucket.max_price),
        median_price: metric(bucket.median_price),
    }
}

// Empty buckets report `{"value": null}` or drop the sub-aggregation.
fn metric(value: Option<MetricValue>) -> Option<f64> {
    value.and_then(|m| m.value)
}
