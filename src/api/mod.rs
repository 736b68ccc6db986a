mod handlers;
mod types;
mod state;
pub use handlers::*;
pub use types::*;
pub use state::*;

use tokio::net::TcpListener;
use axum::{
    Router,
    routing::get
};
use tower_http::cors::{Any, CorsLayer};
use std::sync::Arc;
use std::net::SocketAddr;
use tracing::info;
use anyhow::Result;
use std::time::Duration;

pub fn router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([
            axum::http::Method::GET,
            axum::http::Method::OPTIONS,
        ])
        .allow_headers(Any)
        .max_age(Duration::from_secs(3600));

    Router::new()
        .route("/health", get(health_check))
        .route("/v2/oracle/get_datapoints_histogram", get(get_datapoints_histogram))
        .route("/v2/history/get_oracle_datapoints", get(get_oracle_datapoints))
        .layer(cors)
        .with_state(Arc::new(state))
}

pub async fn serve(host: String, port: u16, state: AppState) -> Result<()> {
    let app = router(state);

    let addr = format!("{}:{}", host, port)
        .parse::<SocketAddr>()?;

    let listener = TcpListener::bind(&addr).await?;

    info!("API server listening on {}", addr);

    axum::serve(listener, app)
        .await
        .map_err(|e| anyhow::anyhow!("Server error: {}", e))?;

    Ok(())
}
