use std::{net::SocketAddr, path::PathBuf};

use crate::server::error::{config::ConfigError, AppError};

const DEFAULT_MEDIA_ROOT: &str = "media";
const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8000";
const DEFAULT_LOG_LEVEL: &str = "info";

pub struct Config {
    pub database_url: String,

    /// Directory uploaded answer files are written beneath.
    pub media_root: PathBuf,
    pub bind_addr: SocketAddr,

    /// Allowed browser origin. Any origin is allowed when unset.
    pub cors_origin: Option<String>,

    /// Fallback filter used when `RUST_LOG` is not set.
    pub log_level: String,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        let bind_addr =
            std::env::var("BIND_ADDR").unwrap_or_else(|_| DEFAULT_BIND_ADDR.to_string());
        let bind_addr = bind_addr
            .parse::<SocketAddr>()
            .map_err(|e| ConfigError::InvalidEnvVar {
                name: "BIND_ADDR".to_string(),
                reason: e.to_string(),
            })?;

        Ok(Self {
            database_url: std::env::var("DATABASE_URL")
                .map_err(|_| ConfigError::MissingEnvVar("DATABASE_URL".to_string()))?,
            media_root: std::env::var("MEDIA_ROOT")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from(DEFAULT_MEDIA_ROOT)),
            bind_addr,
            cors_origin: std::env::var("CORS_ORIGIN")
                .ok()
                .filter(|origin| !origin.is_empty()),
            log_level: std::env::var("LOG_LEVEL")
                .unwrap_or_else(|_| DEFAULT_LOG_LEVEL.to_string()),
        })
    }
}
