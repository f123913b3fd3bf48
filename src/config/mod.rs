//! Configuration module for the archiver backend.
//!
//! All configuration is loaded from environment variables with sensible defaults.

use std::env;
use std::net::SocketAddr;

/// Application configuration loaded from environment variables.
///
/// The MongoDB settings are intentionally not validated here; a wrong URI or
/// database name surfaces as a storage error on first use.
#[derive(Debug, Clone)]
pub struct Config {
    /// MongoDB connection string
    pub mongo_uri: String,
    /// MongoDB database name
    pub mongo_db: String,
    /// Collection the archived-card documents are written to
    pub mongo_collection: String,
    /// Address to bind the server to
    pub bind_addr: SocketAddr,
    /// Log level (trace, debug, info, warn, error)
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let mongo_uri =
            env::var("MONGO_URI").unwrap_or_else(|_| "mongodb://localhost:27017".to_string());

        let mongo_db = env::var("MONGO_DB").unwrap_or_else(|_| "trello".to_string());

        let mongo_collection =
            env::var("MONGO_COLLECTION").unwrap_or_else(|_| "archived_cards".to_string());

        let bind_addr = env::var("ARCHIVER_BIND_ADDR")
            .unwrap_or_else(|_| "127.0.0.1:8080".to_string())
            .parse()
            .expect("Invalid ARCHIVER_BIND_ADDR format");

        let log_level = env::var("ARCHIVER_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        Self {
            mongo_uri,
            mongo_db,
            mongo_collection,
            bind_addr,
            log_level,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        // Clear any existing env vars
        env::remove_var("MONGO_URI");
        env::remove_var("MONGO_DB");
        env::remove_var("MONGO_COLLECTION");
        env::remove_var("ARCHIVER_BIND_ADDR");
        env::remove_var("ARCHIVER_LOG_LEVEL");

        let config = Config::from_env();

        assert_eq!(config.mongo_uri, "mongodb://localhost:27017");
        assert_eq!(config.mongo_db, "trello");
        assert_eq!(config.mongo_collection, "archived_cards");
        assert_eq!(config.bind_addr.to_string(), "127.0.0.1:8080");
        assert_eq!(config.log_level, "info");
    }
}
