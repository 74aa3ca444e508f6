//! Environment-based configuration accessors.

use std::env;

/// Deployment environment name, defaulting to "sandbox".
pub fn get_environment() -> String {
    env::var("ENVIRONMENT").unwrap_or_else(|_| "sandbox".to_string())
}

/// Postgres connection string for the strategy/feedback store.
pub fn get_database_url() -> String {
    env::var("DATABASE_URL")
        .unwrap_or_else(|_| "host=localhost port=5432 user=admin dbname=signalcraft".to_string())
}

/// Base URL of the external identity provider.
pub fn get_identity_base_url() -> String {
    env::var("IDENTITY_BASE_URL").unwrap_or_else(|_| "http://localhost:9999".to_string())
}

/// HTTP port for the API server.
pub fn get_port() -> u16 {
    env::var("PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(8080)
}
