use anyhow::Context;
use flightdeck_api::{app, build_schema, AppState};
use flightdeck_core::FlightService;
use flightdeck_store::{app_config::Config, DbClient};
use std::net::SocketAddr;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                "flightdeck_api=debug,flightdeck_core=debug,flightdeck_store=debug,tower_http=debug"
                    .into()
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = match Config::load() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("Refusing to start: {}", e);
            std::process::exit(1);
        }
    };
    tracing::info!("Starting Flightdeck API on port {}", config.server.port);

    // One client for the process lifetime; the driver pools connections.
    let db = DbClient::new(&config.database.url, &config.database.name)
        .await
        .context("Invalid MongoDB connection string")?;
    db.ping().await.context("Failed to connect to MongoDB")?;

    let flight_repo = Arc::new(db.flight_repository(&config.database.collection));
    let schema = build_schema(FlightService::new(flight_repo));
    let app = app(AppState { schema });

    let addr = SocketAddr::from(([0, 0, 0, 0], config.server.port));
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    tracing::info!("Server ready at http://{}/", addr);

    axum::serve(listener, app).await?;
    Ok(())
}
