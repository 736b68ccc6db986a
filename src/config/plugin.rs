use serde::Deserialize;
use std::env;
use crate::{DEFAULT_CONTRACT, DEFAULT_TABLE};

/// Plugin settings as supplied by the operator. Either field may be missing.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PluginConfig {
    pub contract: Option<String>,
    pub table: Option<String>,
}

impl PluginConfig {
    pub fn from_env() -> Self {
        Self {
            contract: env::var("DELPHI_CONTRACT").ok(),
            table: env::var("DELPHI_TABLE").ok(),
        }
    }

    /// Applies the literal defaults. Called once at startup.
    pub fn resolve(self) -> OracleConfig {
        OracleConfig {
            contract: self
                .contract
                .filter(|c| !c.is_empty())
                .unwrap_or_else(|| DEFAULT_CONTRACT.to_string()),
            table: self
                .table
                .filter(|t| !t.is_empty())
                .unwrap_or_else(|| DEFAULT_TABLE.to_string()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OracleConfig {
    pub contract: String,
    pub table: String,
}

impl Default for OracleConfig {
    fn default() -> Self {
        PluginConfig::default().resolve()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_defaults() {
        let config = PluginConfig::default().resolve();
        assert_eq!(config.contract, "delphioracle");
        assert_eq!(config.table, "datapoints");
    }

    #[test]
    fn test_resolve_overrides() {
        let config = PluginConfig {
            contract: Some("oracle.tl".to_string()),
            table: None,
        }
        .resolve();
        assert_eq!(config.contract, "oracle.tl");
        assert_eq!(config.table, "datapoints");
    }

    #[test]
    fn test_resolve_empty_values_fall_back() {
        let config = PluginConfig {
            contract: Some(String::new()),
            table: Some(String::new()),
        }
        .resolve();
        assert_eq!(config, OracleConfig::default());
    }
}
