use std::env::var;

use dotenvy::dotenv;
use thiserror::Error;

const DEFAULT_PORT: u16 = 3000;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("An error occured while parsing PORT env param: {0}")]
    InvalidPort(String),
    #[error("Unknown STORAGE env param: {0} (expected `mongodb` or `memory`)")]
    UnknownStorage(String),
    #[error("MONGODB_URI env param is required when STORAGE is `mongodb`")]
    MissingMongoUri,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StorageConfig {
    Mongo {
        uri: String,
        database: String,
        collection: String,
    },
    Memory,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub port: u16,
    pub scheme: String,
    pub host: String,
    pub storage: StorageConfig,
}

impl Config {
    pub fn try_parse() -> Result<Config, ConfigError> {
        let _ = dotenv();
        Self::from_lookup(|key| var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Config, ConfigError> {
        let or_default = |key: &str, default: &str| lookup(key).unwrap_or_else(|| default.to_string());

        let port = match lookup("PORT") {
            Some(raw) => raw.parse::<u16>().map_err(|_| ConfigError::InvalidPort(raw))?,
            None => DEFAULT_PORT,
        };

        let storage = match or_default("STORAGE", "mongodb").as_str() {
            "mongodb" => StorageConfig::Mongo {
                uri: lookup("MONGODB_URI").ok_or(ConfigError::MissingMongoUri)?,
                database: or_default("MONGODB_DATABASE", "restapi"),
                collection: or_default("MONGODB_COLLECTION", "users"),
            },
            "memory" => StorageConfig::Memory,
            other => return Err(ConfigError::UnknownStorage(other.to_string())),
        };

        Ok(Config {
            port,
            scheme: or_default("SCHEME", "http"),
            host: or_default("HOST", "localhost"),
            storage,
        })
    }

    pub fn server_url(&self) -> String {
        format!("{}://{}:{}", self.scheme, self.host, self.port)
    }
}
