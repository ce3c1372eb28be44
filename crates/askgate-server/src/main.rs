mod configuration;
mod error;
mod routes;
mod state;

use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Pick up OPENROUTER_API_KEY and friends from a local .env, if present
    dotenv::dotenv().ok();

    // Initialize tracing for logging
    tracing_subscriber::fmt::init();

    let settings = configuration::Settings::new()?;
    let addr = settings.server.socket_addr()?;

    let state = state::AppState::from_settings(&settings)?;
    info!(
        primary = state.primary.name(),
        secondary = state.secondary.name(),
        "providers ready"
    );

    let app = routes::app(state);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("listening on {}", listener.local_addr()?);

    axum::serve(listener, app).await?;
    Ok(())
}
