use serde_json::{json, Map, Value};
use tracing::debug;
use crate::{derived_field, RAW_DATA_FIELD};

/// Rewrites a raw oracle delta in place. The `data` payload is replaced by
/// `@<table>: { value, median, owner }` when all three fields are present.
/// Returns whether the record was rewritten.
pub fn transform_datapoint(table: &str, delta: &mut Value) -> bool {
    let Some(record) = delta.as_object_mut() else {
        return false;
    };

    let Some(datapoint) = record
        .get(RAW_DATA_FIELD)
        .and_then(Value::as_object)
        .and_then(extract_datapoint)
    else {
        debug!("Skipping incomplete {} delta", table);
        return false;
    };

    record.insert(derived_field(table), datapoint);
    record.remove(RAW_DATA_FIELD);
    true
}

fn extract_datapoint(data: &Map<String, Value>) -> Option<Value> {
    let value = integer_field(data.get("value")?)?;
    let median = integer_field(data.get("median")?)?;
    let owner = match data.get("owner")? {
        Value::String(owner) if !owner.is_empty() => owner.clone(),
        _ => return None,
    };

    Some(json!({
        "value": value,
        "median": median,
        "owner": owner,
    }))
}

// Chain state serialises 64-bit integers either as numbers or as strings.
fn integer_field(field: &Value) -> Option<i64> {
    match field {
        Value::Number(n) => n.as_i64(),
        Value::String(s) if !s.is_empty() => s.parse().ok(),
        _ => None,
    }
}

/// Index mapping for the derived datapoint object.
pub fn datapoint_mapping() -> Value {
    json!({
        "properties": {
            "value": { "type": "long" },
            "median": { "type": "long" },
            "owner": { "type": "keyword" },
        }
    })
}
