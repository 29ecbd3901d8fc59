use std::env;
use anyhow::{Context, Result};

const DEFAULT_SERVICE_PORT: &str = "8000";
const DEFAULT_SERVICE_HOST: &str = "0.0.0.0";
const DEFAULT_CORS_ALLOWED_ORIGIN: &str = "http://localhost:3000";

#[derive(Debug, Clone)]
pub struct Config {
    pub service_port: u16,
    pub service_host: String,
    /// The single frontend origin allowed to make credentialed cross-origin calls
    pub cors_allowed_origin: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build a config from an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let service_port = lookup("SERVICE_PORT")
            .unwrap_or_else(|| DEFAULT_SERVICE_PORT.to_string())
            .parse::<u16>()
            .context("SERVICE_PORT must be a valid port number (0-65535)")?;

        let service_host = lookup("SERVICE_HOST")
            .unwrap_or_else(|| DEFAULT_SERVICE_HOST.to_string());

        let cors_allowed_origin = lookup("CORS_ALLOWED_ORIGIN")
            .unwrap_or_else(|| DEFAULT_CORS_ALLOWED_ORIGIN.to_string());

        if cors_allowed_origin.trim().is_empty() {
            anyhow::bail!("CORS_ALLOWED_ORIGIN must not be empty");
        }

        Ok(Config {
            service_port,
            service_host,
            cors_allowed_origin,
        })
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.service_host, self.service_port)
    }

    pub fn log_startup(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  CORS allowed origin: {}", self.cors_allowed_origin);
        tracing::info!("  Service listening on: {}", self.bind_addr());
    }
}
