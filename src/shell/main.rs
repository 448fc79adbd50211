use std::sync::Arc;
use tracing_subscriber::{EnvFilter, fmt};

use activity_registry::modules::activities::adapters::outbound::activity_store_in_memory::InMemoryActivityStore;
use activity_registry::modules::activities::core::seed::seed_activities;
use activity_registry::shell::config::AppConfig;
use activity_registry::shell::http::app;
use activity_registry::shell::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = AppConfig::from_env()?;

    fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // In-memory store for now; restarting resets to the seed table
    let store = Arc::new(InMemoryActivityStore::seeded(seed_activities()));
    let state = AppState::new(store);

    let addr = config.addr();
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Activities API: http://{}/activities", addr);
    tracing::info!("GraphQL endpoint: http://{}/gql", addr);
    axum::serve(listener, app(state, &config)).await?;
    Ok(())
}
