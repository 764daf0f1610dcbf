use tickerlens::config::Config;
use tickerlens::{app, AppState};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "tickerlens=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = Config::from_env();
    info!("Starting Tickerlens server on {}:{}", config.host, config.port);
    if config.position_rules_enabled {
        info!(
            "Position rules enabled (profit booking above {}%)",
            config.profit_booking_threshold_pct
        );
    }

    let addr = format!("{}:{}", config.host, config.port);
    let state = AppState::new(config);

    // Start the server
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("Tickerlens server listening on {}", addr);

    axum::serve(listener, app(state)).await?;

    Ok(())
}
