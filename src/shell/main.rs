use std::sync::Arc;
use tracing_subscriber::{EnvFilter, fmt};

use activity_roster::modules::activities::adapters::outbound::activity_roster_in_memory::InMemoryActivityRoster;
use activity_roster::shell::config::AppConfig;
use activity_roster::shell::graphql::GRAPHQL_PATH;
use activity_roster::shell::http::router;
use activity_roster::shell::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    fmt().with_env_filter(EnvFilter::from_default_env()).init();

    let config = AppConfig::from_env()?;

    // In-memory roster for now
    let roster = Arc::new(InMemoryActivityRoster::seeded()?);
    let state = AppState::new(roster);
    let app = router(state, &config.static_dir);

    let listener = tokio::net::TcpListener::bind((config.host.as_str(), config.port)).await?;
    let addr = listener.local_addr()?;
    tracing::info!("Activities API: http://{}/activities", addr);
    tracing::info!("GraphQL endpoint: http://{}{}", addr, GRAPHQL_PATH);
    axum::serve(listener, app).await?;
    Ok(())
}
