// src/config.rs

use std::{env, net::SocketAddr};

use crate::error::AppError;

#[derive(Debug, Clone)]
pub struct Config {
    /// Postgres connection string. Without it the service keeps data in memory.
    pub database_url: Option<String>,
    pub jwt_secret: String,
    pub rust_log: String,
    pub bind_addr: SocketAddr,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        let database_url = env::var("DATABASE_URL").ok().filter(|url| !url.is_empty());

        let jwt_secret = env::var("JWT_SECRET")
            .map_err(|_| AppError::InternalServerError("JWT_SECRET must be set".to_string()))?;

        let rust_log = env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());

        let bind_addr = env::var("BIND_ADDR")
            .unwrap_or_else(|_| "0.0.0.0:3000".to_string())
            .parse::<SocketAddr>()
            .map_err(|e| AppError::InternalServerError(format!("Invalid BIND_ADDR: {}", e)))?;

        Ok(Self {
            database_url,
            jwt_secret,
            rust_log,
            bind_addr,
        })
    }
}
