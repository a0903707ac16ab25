mod config;
mod error;
mod handlers;
mod models;
mod store;
mod supabase;

use std::sync::Arc;

use anyhow::Context;
use tracing_subscriber::EnvFilter;

use crate::config::Config;
use crate::handlers::AppState;
use crate::supabase::SupabaseStore;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| "filerelay=info".into()),
        )
        .init();

    let config = Config::from_env()?;
    let store = Arc::new(SupabaseStore::new(&config));

    let state = AppState {
        objects: store.clone(),
        metadata: store,
        storage_url: config.storage_url.clone(),
    };

    let app = handlers::router(state);

    let listener = tokio::net::TcpListener::bind(&config.bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", config.bind_addr))?;
    tracing::info!("listening on http://{}", config.bind_addr);
    axum::serve(listener, app).await?;

    Ok(())
}
