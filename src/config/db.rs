use serde::Deserialize;
use anyhow::Result;
use std::env;
use std::time::Duration;
use crate::Error;

#[derive(Debug, Clone, Deserialize)]
pub struct ElasticConfig {
    pub url: String,
    pub user: Option<String>,
    pub password: Option<String>,
    pub timeout: u64,
}

impl ElasticConfig {
    pub fn from_env() -> Result<Self> {
        let url = env::var("ES_URL").map_err(|_| Error::Config("ES_URL not set".to_string()))?;
        let user = env::var("ES_USER").ok();
        let password = env::var("ES_PASSWORD").ok();

        if user.is_some() != password.is_some() {
            return Err(Error::Config("ES_USER and ES_PASSWORD must be set together".to_string()).into());
        }

        Ok(Self {
            url: url.trim_end_matches('/').to_string(),
            user,
            password,
            timeout: env::var("ES_TIMEOUT")
                .unwrap_or_else(|_| "30".to_string())
                .parse()
                .map_err(|_| Error::Config("Invalid ES_TIMEOUT format".to_string()))?,
        })
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout)
    }
}

#[derive(Debug, Clone)]
pub struct ServiceConfig {
    pub chain: String,
    pub elastic: ElasticConfig,
}

impl ServiceConfig {
    pub fn new() -> Result<Self> {
        Ok(Self {
            chain: env::var("CHAIN").map_err(|_| Error::Config("CHAIN not set".to_string()))?,
            elastic: ElasticConfig::from_env()?,
        })
    }
}
