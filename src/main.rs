//! Launch Deck - SpaceX launch catalogue
//!
//! Serves the Dioxus fullstack UI (collection and detail pages) alongside
//! the same-origin launches proxy endpoint.

fn main() {
    #[cfg(feature = "server")]
    {
        if let Err(err) = server_main() {
            eprintln!("launchdeck failed to start: {err:#}");
            std::process::exit(1);
        }
    }

    #[cfg(not(feature = "server"))]
    dioxus::launch(launchdeck::app::App);
}

#[cfg(feature = "server")]
#[tokio::main]
async fn server_main() -> anyhow::Result<()> {
    use std::net::SocketAddr;
    use std::sync::Arc;

    use axum::{routing::get, Router};
    use dioxus::server::{DioxusRouterExt, ServeConfig};
    use tower_http::{compression::CompressionLayer, cors::CorsLayer, trace::TraceLayer};
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    use launchdeck::api::{self, AppState};
    use launchdeck::app::App;
    use launchdeck::upstream::LaunchesClient;

    // Initialize logging
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            "launchdeck=debug,tower_http=debug,axum::rejection=trace".into()
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Launch Deck");

    // Load configuration
    let config = launchdeck::config::load_config()?;
    tracing::info!(?config, "Configuration loaded");

    // Upstream client, shared between the proxy handler and server functions
    let upstream = Arc::new(LaunchesClient::new(&config.upstream.base_url));
    launchdeck::upstream::install(upstream.clone());

    // Build API routes and serve the Dioxus application from the same router
    let app = Router::new()
        .route("/status", get(api::status_handler))
        .route("/api/launches", get(api::launches_handler))
        .layer(CorsLayer::permissive())
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .with_state(AppState::new(upstream))
        .serve_dioxus_application(ServeConfig::builder(), App);

    // Start server
    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
