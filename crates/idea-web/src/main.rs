//! Supply-chain innovation hub web server.

use std::sync::Arc;

use database::Database;
use idea_client::{IdeaClientConfig, RemoteIdeaClient};
use idea_web::{app, AppState, Config};
use scm_assistant::SupplyChainAssistant;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load .env file if present
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // Load configuration
    let config = Config::from_env()?;
    info!(addr = %config.addr, "Starting innovation hub server");

    // Connect to database
    let db = Database::connect(&config.database_url).await?;
    db.migrate().await?;

    // Brainstorming sessions call the idea-generation endpoint
    let mut client_config = IdeaClientConfig::builder().endpoint_url(&config.idea_endpoint_url);
    if let Some(ref key) = config.idea_endpoint_key {
        client_config = client_config.api_key(key);
    }
    let generator = RemoteIdeaClient::new(client_config.build())?;

    // The endpoint itself needs an API key; without one it answers 500 and
    // sessions fall back to local templates.
    let assistant = match SupplyChainAssistant::from_env() {
        Ok(assistant) => Some(assistant),
        Err(e) => {
            warn!(error = %e, "Supply-chain assistant disabled");
            None
        }
    };

    let state = AppState::new(db, Arc::new(generator), config.max_sessions, assistant);

    // Start server
    let listener = tokio::net::TcpListener::bind(config.addr).await?;
    info!(addr = %config.addr, "Innovation hub server listening");
    axum::serve(listener, app(state)).await?;

    Ok(())
}
