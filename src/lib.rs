pub mod api;
pub mod config;
pub mod constants;
pub mod db;
pub mod error;
pub mod ingest;
pub mod models;
pub mod query;


pub use api::*;
pub use config::*;
pub use constants::*;
pub use db::*;
pub use error::Error;
pub use ingest::*;
pub use models::*;
pub use query::*;

use tracing_subscriber::EnvFilter;

pub fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    // try_init so tests and embedders that already installed a subscriber keep it
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init();
}
