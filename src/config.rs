use anyhow::{Context, Result};
use std::env;

#[derive(Clone)]
pub struct Config {
    /// Base URL of the backing service's REST API.
    pub service_url: String,
    /// Access key for the backing service. Can be a low-privilege or an
    /// elevated key; scope is not enforced here.
    pub service_key: String,
    /// Public base URL objects are served from, used to build `file_url`.
    pub storage_url: String,
    pub bind_addr: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();
        let service_url = env::var("SERVICE_URL").context("SERVICE_URL is not set")?;
        let service_key = env::var("SERVICE_KEY").context("SERVICE_KEY is not set")?;
        let storage_url = env::var("STORAGE_URL").context("STORAGE_URL is not set")?;
        let bind_addr = env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:3000".to_string());

        Ok(Self {
            service_url,
            service_key,
            storage_url,
            bind_addr,
        })
    }
}
