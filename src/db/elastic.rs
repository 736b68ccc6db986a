use crate::config::ElasticConfig;
use crate::{Error, SearchBackend, StoreResponse};
use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;
use tracing::{debug, error};

pub struct ElasticConnection {
    client: Client,
    config: ElasticConfig,
}

impl ElasticConnection {
    pub fn new(config: ElasticConfig) -> Result<Self, Error> {
        let client = Client::builder()
            .timeout(config.timeout())
            .build()
            .map_err(|e| Error::Config(format!("Failed to build search client: {}", e)))?;

        Ok(Self { client, config })
    }

    fn search_url(&self, index: &str) -> String {
        format!("{}/{}/_search", self.config.url, index)
    }
}

/// Pulls the most useful message out of an error body. Structured bodies
/// carry `error.reason` (or a plain `error` string); anything else is
/// returned as-is.
pub fn error_reason(body: &str) -> String {
    serde_json::from_str::<Value>(body)
        .ok()
        .and_then(|value| match &value["error"] {
            Value::String(reason) => Some(reason.clone()),
            error => error["reason"].as_str().map(str::to_string),
        })
        .unwrap_or_else(|| body.trim().to_string())
}

#[async_trait]
impl SearchBackend for ElasticConnection {
    async fn search(&self, index: &str, body: &Value) -> Result<StoreResponse, Error> {
        let url = self.search_url(index);
        debug!("POST {} {}", url, body);

        let mut request = self.client.post(&url).json(body);
        if let (Some(user), Some(password)) = (&self.config.user, &self.config.password) {
            request = request.basic_auth(user, Some(password));
        }

        let response = request.send().await?;
        let status = response.status();
        let text = response.text().await?;

        if !status.is_success() {
            let reason = error_reason(&text);
            error!("Search on {} returned {}: {}", index, status, reason);
            return Err(Error::Store(format!("{} {}", status.as_u16(), reason)));
        }

        Ok(serde_json::from_str(&text)?)
    }
}
