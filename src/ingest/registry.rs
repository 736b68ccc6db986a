use serde_json::Value;
use std::collections::HashMap;
use std::sync::Arc;
use tracing::info;
use crate::{
    datapoint_mapping, derived_field, transform_datapoint, OracleConfig, CODE_FIELD, TABLE_FIELD,
};

pub type DeltaHandler = Arc<dyn Fn(&mut Value) -> bool + Send + Sync>;

/// Capabilities the ingestion side exposes to plugins.
pub trait IngestionRegistry {
    fn register_delta_handler(&mut self, contract: &str, table: &str, handler: DeltaHandler);
    fn declare_mapping(&mut self, field: &str, mapping: Value);
}

#[derive(Default, Clone)]
pub struct DeltaRegistry {
    handlers: HashMap<(String, String), DeltaHandler>,
    mappings: HashMap<String, Value>,
}

impl DeltaRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Runs the handler registered for the delta's contract/table, if any.
    pub fn apply(&self, delta: &mut Value) -> bool {
        let key = match (delta[CODE_FIELD].as_str(), delta[TABLE_FIELD].as_str()) {
            (Some(code), Some(table)) => (code.to_string(), table.to_string()),
            _ => return false,
        };

        match self.handlers.get(&key) {
            Some(handler) => handler(delta),
            None => false,
        }
    }

    pub fn has_handler(&self, contract: &str, table: &str) -> bool {
        self.handlers.contains_key(&(contract.to_string(), table.to_string()))
    }

    pub fn mappings(&self) -> &HashMap<String, Value> {
        &self.mappings
    }
}

impl IngestionRegistry for DeltaRegistry {
    fn register_delta_handler(&mut self, contract: &str, table: &str, handler: DeltaHandler) {
        self.handlers.insert((contract.to_string(), table.to_string()), handler);
    }

    fn declare_mapping(&mut self, field: &str, mapping: Value) {
        self.mappings.insert(field.to_string(), mapping);
    }
}

/// Wires the datapoint transform and its mapping into `registry`.
pub fn register(config: &OracleConfig, registry: &mut dyn IngestionRegistry) {
    let table = config.table.clone();
    let handler: DeltaHandler = Arc::new(move |delta: &mut Value| transform_datapoint(&table, delta));

    registry.register_delta_handler(&config.contract, &config.table, handler);
    registry.declare_mapping(&derived_field(&config.table), datapoint_mapping());

    info!("Registered delta handler for {}::{}", config.contract, config.table);
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_register_and_apply() {
        let config = OracleConfig::default();
        let mut registry = DeltaRegistry::new();
        register(&config, &mut registry);

        assert!(registry.has_handler("delphioracle", "datapoints"));
        assert!(registry.mappings().contains_key("@datapoints"));

        let mut delta = json!({
            "code": "delphioracle",
            "table": "datapoints",
            "scope": "tlosusd",
            "data": { "owner": "alice", "value": 100, "median": 99 },
        });
        assert!(registry.apply(&mut delta));
        assert_eq!(delta["@datapoints"]["value"], 100);
    }

    #[test]
    fn test_other_tables_ignored() {
        let mut registry = DeltaRegistry::new();
        register(&OracleConfig::default(), &mut registry);

        let mut delta = json!({
            "code": "eosio.token",
            "table": "accounts",
            "data": { "owner": "alice", "value": 100, "median": 99 },
        });
        let before = delta.clone();
        assert!(!registry.apply(&mut delta));
        assert_eq!(delta, before);

        let mut malformed = json!({ "data": {} });
        assert!(!registry.apply(&mut malformed));
    }

    #[test]
    fn test_custom_table_field() {
        let config = OracleConfig {
            contract: "oracle.tl".to_string(),
            table: "prices".to_string(),
        };
        let mut registry = DeltaRegistry::new();
        register(&config, &mut registry);

        let mut delta = json!({
            "code": "oracle.tl",
            "table": "prices",
            "data": { "owner": "bob", "value": "5", "median": "4" },
        });
        assert!(registry.apply(&mut delta));
        assert_eq!(delta["@prices"], json!({ "value": 5, "median": 4, "owner": "bob" }));
        assert!(registry.mappings().contains_key("@prices"));
    }
}
