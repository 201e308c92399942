//! Server configuration
//!
//! Read from the process environment, with `.env` loaded first when present.

use anyhow::{Context, Result};
use std::net::SocketAddr;

const BIND_ADDR_VAR: &str = "KEYGUARD_BIND_ADDR";
const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8000";

/// Server Configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub bind_addr: SocketAddr,
}

impl ServerConfig {
    /// Load config from `.env` and the environment
    pub fn from_env() -> Result<Self> {
        if let Err(e) = dotenvy::dotenv() {
            tracing::debug!("No .env loaded: {}", e);
        }

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build config from an arbitrary variable source
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let raw = lookup(BIND_ADDR_VAR).unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());
        let bind_addr = raw
            .parse()
            .with_context(|| format!("Invalid {}: {:?}", BIND_ADDR_VAR, raw))?;

        Ok(Self { bind_addr })
    }
}
