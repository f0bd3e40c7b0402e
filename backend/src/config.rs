//! Runtime configuration read from the environment.

use anyhow::{anyhow, Context, Result};
use axum::http::HeaderValue;
use std::net::{Ipv4Addr, SocketAddr, SocketAddrV4};
use std::str::FromStr;

use crate::storage::sqlite::connection::DATABASE_URL;

pub const DATABASE_URL_VAR: &str = "AIRPORT_TRACKER_DATABASE_URL";
pub const BIND_ADDR_VAR: &str = "AIRPORT_TRACKER_BIND_ADDR";
pub const STORAGE_VAR: &str = "AIRPORT_TRACKER_STORAGE";
pub const CORS_ORIGIN_VAR: &str = "AIRPORT_TRACKER_CORS_ORIGIN";

pub const DEFAULT_BIND_ADDR: SocketAddr = SocketAddr::V4(SocketAddrV4::new(Ipv4Addr::LOCALHOST, 3000));
const DEFAULT_CORS_ORIGIN: &str = "http://localhost:8080";

/// Which storage backend the server runs on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageKind {
    Sqlite,
    Memory,
}

impl FromStr for StorageKind {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "sqlite" => Ok(StorageKind::Sqlite),
            "memory" => Ok(StorageKind::Memory),
            other => Err(anyhow!("Unknown storage kind '{}', expected 'sqlite' or 'memory'", other)),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub database_url: String,
    pub bind_addr: SocketAddr,
    pub storage: StorageKind,
    pub cors_origin: HeaderValue,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            database_url: DATABASE_URL.to_string(),
            bind_addr: DEFAULT_BIND_ADDR,
            storage: StorageKind::Sqlite,
            cors_origin: HeaderValue::from_static(DEFAULT_CORS_ORIGIN),
        }
    }
}

impl AppConfig {
    /// Load configuration from process environment variables
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through `lookup`, falling back to defaults for unset keys
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let database_url = lookup(DATABASE_URL_VAR).unwrap_or_else(|| DATABASE_URL.to_string());

        let bind_addr = match lookup(BIND_ADDR_VAR) {
            Some(value) => value
                .parse::<SocketAddr>()
                .with_context(|| format!("{} is not a valid socket address: {}", BIND_ADDR_VAR, value))?,
            None => DEFAULT_BIND_ADDR,
        };

        let storage = match lookup(STORAGE_VAR) {
            Some(value) => value.parse::<StorageKind>().with_context(|| format!("Invalid {}", STORAGE_VAR))?,
            None => StorageKind::Sqlite,
        };

        let cors_origin = lookup(CORS_ORIGIN_VAR).unwrap_or_else(|| DEFAULT_CORS_ORIGIN.to_string());
        let cors_origin = cors_origin
            .parse::<HeaderValue>()
            .with_context(|| format!("{} is not a valid header value: {}", CORS_ORIGIN_VAR, cors_origin))?;

        Ok(Self {
            database_url,
            bind_addr,
            storage,
            cors_origin,
        })
    }
}
