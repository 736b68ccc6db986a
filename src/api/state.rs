use std::sync::Arc;
use crate::{OracleConfig, SearchBackend};

#[derive(Clone)]
pub struct AppState {
    pub backend: Arc<dyn SearchBackend>,
    pub config: OracleConfig,
    pub chain: String,
}

impl AppState {
    pub fn new(backend: Arc<dyn SearchBackend>, config: OracleConfig, chain: String) -> Self {
        Self { backend, config, chain }
    }
}
