pub mod elastic;

pub use elastic::*;

use async_trait::async_trait;
use serde_json::Value;
use crate::{Error, StoreResponse};

#[async_trait]
pub trait SearchBackend: Send + Sync {
    async fn search(&self, index: &str, body: &Value) -> Result<StoreResponse, Error>;
}
