//! qwatch dashboard binary entry point.

use std::sync::Arc;
use std::time::Duration;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use qwatch_client::MockSource;
use qwatch_dashboard::{AppState, DashboardConfig, create_router};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "qwatch_dashboard=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Create configuration
    let mut config = DashboardConfig::default();
    if let Ok(bind) = std::env::var("QWATCH_BIND") {
        config.bind_address = bind
            .parse()
            .map_err(|e| anyhow::anyhow!("Invalid QWATCH_BIND address '{bind}': {e}"))?;
    }
    if let Ok(secs) = std::env::var("QWATCH_POLL_SECS") {
        let secs: u64 = secs
            .parse()
            .map_err(|e| anyhow::anyhow!("Invalid QWATCH_POLL_SECS value '{secs}': {e}"))?;
        config.poll_interval = Duration::from_secs(secs);
    }
    let bind_addr = config.bind_address;

    // Mock source standing in for an authenticated provider client; latency
    // makes the loading states visible in a demo.
    let source = Arc::new(MockSource::new().with_latency(Duration::from_millis(500)));
    tracing::info!("Using mock job source");

    // Create application state and start the poll loop
    let state = Arc::new(AppState::with_config(source, config.clone()));
    let _poll = state.poller.spawn(config.poll_interval);

    // Create the router
    let app = create_router(state);

    // Start the server
    tracing::info!("Starting qwatch dashboard at http://{}", bind_addr);
    let listener = tokio::net::TcpListener::bind(bind_addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
