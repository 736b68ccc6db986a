// Submodules
pub mod common;  // Error mapping shared by handlers
pub mod health;  // Health and readiness endpoints
pub mod histogram;

// Re-exports
pub use common::ApiError;
pub use health::{health_check, get_oracle_datapoints};
pub use histogram::get_datapoints_histogram;
