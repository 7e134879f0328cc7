//! Exile Leveling - leveling route guide web app
//!
//! The server build serves the Dioxus app plus its JSON endpoints; the web
//! build is the hydrating client.

#[cfg(feature = "server")]
use std::net::SocketAddr;

#[cfg(feature = "server")]
use anyhow::Result;
#[cfg(feature = "server")]
use axum::{routing::get, Router};
#[cfg(feature = "server")]
use tokio::signal;
#[cfg(feature = "server")]
use tower_http::{compression::CompressionLayer, trace::TraceLayer};
#[cfg(feature = "server")]
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use exile_leveling::app::App;
#[cfg(feature = "server")]
use exile_leveling::{api, config, route};

#[cfg(not(feature = "server"))]
fn main() {
    dioxus::launch(App);
}

#[cfg(feature = "server")]
#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "exile_leveling=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!(
        "Starting Exile Leveling v{} ({})",
        env!("EXILE_VERSION"),
        env!("EXILE_GIT_SHA")
    );

    // Load configuration
    let config = config::load_config()?;
    tracing::info!(
        "Configuration loaded, port: {}, acts: {}",
        config.port,
        config.nav.act_count
    );

    let route = route::load_route_file(&config.route_path())?;
    let state = api::AppState::new(route, config.nav.clone());

    let api_routes = Router::new()
        // Health check
        .route("/status", get(api::status_handler))
        // Data for the web client
        .route("/api/route", get(api::route_handler))
        .route("/api/nav", get(api::nav_settings_handler))
        .with_state(state);

    // Everything else is the Dioxus app (SSR + hydration assets)
    let app = dioxus::server::router(App)
        .merge(api_routes)
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http());

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    tracing::info!("Listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Shutdown complete");
    Ok(())
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM)
#[cfg(feature = "server")]
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => tracing::info!("Received Ctrl+C, shutting down..."),
        _ = terminate => tracing::info!("Received SIGTERM, shutting down..."),
    }
}
